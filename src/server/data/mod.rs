//! Database repository layer for the product catalog.
//!
//! Repositories use SeaORM entity models internally and handle all queries, inserts and
//! updates. They are generic over `ConnectionTrait` so the same code runs against the
//! connection pool or inside a `DatabaseTransaction`.

pub mod product;
pub mod product_image;
