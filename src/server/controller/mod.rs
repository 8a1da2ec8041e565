//! HTTP request handlers.
//!
//! Controllers convert DTOs to domain parameters, call into the service layer and wrap
//! results in the API envelope.

pub mod carousel;
