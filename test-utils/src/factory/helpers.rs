//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for laying out a carousel.

use chrono::{Duration, Utc};
use sea_orm::{DatabaseConnection, DbErr};

use crate::factory::product::ProductFactory;

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates one featured, active product per requested carousel position.
///
/// Products are created in the order given. Each gets a distinct `created_at`
/// one minute after the previous one, so recency ordering is deterministic.
///
/// # Arguments
/// - `db` - Database connection
/// - `positions` - Carousel positions to occupy
///
/// # Returns
/// - `Ok(Vec<Model>)` - Created products, in the same order as `positions`
/// - `Err(DbErr)` - Database error during creation
pub async fn create_carousel(
    db: &DatabaseConnection,
    positions: &[i32],
) -> Result<Vec<entity::product::Model>, DbErr> {
    let base = Utc::now() - Duration::hours(1);
    let mut products = Vec::with_capacity(positions.len());

    for (offset, position) in positions.iter().enumerate() {
        let product = ProductFactory::new(db)
            .name(format!("Carousel {}", position))
            .featured(true)
            .carousel_order(Some(*position))
            .created_at(base + Duration::minutes(offset as i64))
            .build()
            .await?;
        products.push(product);
    }

    Ok(products)
}
