//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let product = fixture::product::entity();
//!
//! // Create with custom fields
//! let featured = fixture::product::entity_builder()
//!     .featured(true)
//!     .carousel_order(Some(2))
//!     .build();
//! ```

pub mod product;

pub use product::{entity as product_entity, entity_builder as product_entity_builder};
