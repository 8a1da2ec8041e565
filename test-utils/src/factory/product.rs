//! Product factory for creating test product entities.
//!
//! This module provides factory methods for creating product entities with
//! sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test products with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db)
///     .name("Girasoles")
///     .featured(true)
///     .carousel_order(Some(2))
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    summary: Option<String>,
    stock: i32,
    featured: bool,
    active: bool,
    carousel_order: Option<i32>,
    created_at: DateTime<Utc>,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new ProductFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Product {id}"` where id is auto-incremented
    /// - summary: `None`
    /// - stock: `10`
    /// - featured: `false`
    /// - active: `true`
    /// - carousel_order: `None`
    /// - created_at: now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ProductFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Product {}", id),
            summary: None,
            stock: 10,
            featured: false,
            active: true,
            carousel_order: None,
            created_at: Utc::now(),
        }
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the product summary.
    pub fn summary(mut self, summary: Option<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Sets the stock count.
    pub fn stock(mut self, stock: i32) -> Self {
        self.stock = stock;
        self
    }

    /// Sets whether the product is featured in the carousel.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    /// Sets the soft-delete flag.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Sets the carousel position.
    ///
    /// Does not toggle `featured`; combine with `featured(true)` for a carousel entry.
    pub fn carousel_order(mut self, carousel_order: Option<i32>) -> Self {
        self.carousel_order = carousel_order;
        self
    }

    /// Sets the creation timestamp, which drives carousel listing order.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the product entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        entity::product::ActiveModel {
            name: ActiveValue::Set(self.name),
            summary: ActiveValue::Set(self.summary),
            stock: ActiveValue::Set(self.stock),
            featured: ActiveValue::Set(self.featured),
            active: ActiveValue::Set(self.active),
            carousel_order: ActiveValue::Set(self.carousel_order),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active, non-featured product with default values.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

/// Creates an active product occupying the given carousel position.
///
/// # Arguments
/// - `db` - Database connection
/// - `position` - Carousel position to occupy
///
/// # Returns
/// - `Ok(entity::product::Model)` - Created product entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_featured_product(
    db: &DatabaseConnection,
    position: i32,
) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db)
        .featured(true)
        .carousel_order(Some(position))
        .build()
        .await
}
