//! Product fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating product entity models without database insertion.

use chrono::{DateTime, TimeZone, Utc};
use entity::product;

/// Default test product name.
pub const DEFAULT_NAME: &str = "Test Bouquet";

/// Default stock for fixture products.
pub const DEFAULT_STOCK: i32 = 10;

/// Fixed timestamp used for `created_at` and `updated_at`.
pub fn default_timestamp() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 10, 1, 12, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// Creates a product entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - name: `"Test Bouquet"`
/// - summary: `None`
/// - stock: `10`
/// - featured: `false`
/// - active: `true`
/// - carousel_order: `None`
///
/// # Returns
/// - `product::Model` - In-memory product entity
pub fn entity() -> product::Model {
    entity_builder().build()
}

/// Creates a product entity builder for customization.
///
/// # Returns
/// - `ProductEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> ProductEntityBuilder {
    ProductEntityBuilder::default()
}

/// Builder for creating customized product entity models.
pub struct ProductEntityBuilder {
    id: i32,
    name: String,
    summary: Option<String>,
    stock: i32,
    featured: bool,
    active: bool,
    carousel_order: Option<i32>,
    created_at: DateTime<Utc>,
}

impl Default for ProductEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            name: DEFAULT_NAME.to_string(),
            summary: None,
            stock: DEFAULT_STOCK,
            featured: false,
            active: true,
            carousel_order: None,
            created_at: default_timestamp(),
        }
    }
}

impl ProductEntityBuilder {
    /// Sets the product ID.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the product name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets whether the product is featured.
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
    pub fn carousel_order(mut self, carousel_order: Option<i32>) -> Self {
        self.carousel_order = carousel_order;
        self
    }

    /// Builds and returns the product entity model.
    pub fn build(self) -> product::Model {
        product::Model {
            id: self.id,
            name: self.name,
            summary: self.summary,
            stock: self.stock,
            featured: self.featured,
            active: self.active,
            carousel_order: self.carousel_order,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
    }
}
