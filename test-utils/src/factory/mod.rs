//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories insert into the database and return the
//! stored entity model.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let product = factory::product::create_product(&db).await?;
//!
//!     // Fill carousel positions 1, 2 and 5
//!     let featured = factory::helpers::create_carousel(&db, &[1, 2, 5]).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let product = factory::product::ProductFactory::new(&db)
//!     .name("Ramo de Rosas")
//!     .carousel_order(Some(3))
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `product` - Create product entities
//! - `product_image` - Create product image entities
//! - `helpers` - Convenience methods for building carousel layouts

pub mod helpers;
pub mod product;
pub mod product_image;

pub use helpers::create_carousel;
pub use product::{create_featured_product, create_product};
pub use product_image::create_product_image;
