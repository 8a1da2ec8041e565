//! Product image factory for creating test image entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test product images with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product_image::ProductImageFactory;
///
/// let image = ProductImageFactory::new(&db, product.id)
///     .size("large")
///     .image_index(2)
///     .build()
///     .await?;
/// ```
pub struct ProductImageFactory<'a> {
    db: &'a DatabaseConnection,
    product_id: i32,
    url: String,
    size: String,
    image_index: i32,
}

impl<'a> ProductImageFactory<'a> {
    /// Creates a new ProductImageFactory with default values.
    ///
    /// Defaults:
    /// - url: `"https://cdn.example.com/products/{product_id}/{id}.webp"`
    /// - size: `"small"`
    /// - image_index: `1`
    pub fn new(db: &'a DatabaseConnection, product_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            product_id,
            url: format!("https://cdn.example.com/products/{}/{}.webp", product_id, id),
            size: "small".to_string(),
            image_index: 1,
        }
    }

    /// Sets the image URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the image size tag (`thumb`, `small`, `medium`, `large`).
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the display index among the product's images.
    pub fn image_index(mut self, image_index: i32) -> Self {
        self.image_index = image_index;
        self
    }

    /// Builds and inserts the image entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product_image::Model)` - Created image entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product_image::Model, DbErr> {
        entity::product_image::ActiveModel {
            product_id: ActiveValue::Set(self.product_id),
            url: ActiveValue::Set(self.url),
            size: ActiveValue::Set(self.size),
            image_index: ActiveValue::Set(self.image_index),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a small image at index 1 for the given product.
pub async fn create_product_image(
    db: &DatabaseConnection,
    product_id: i32,
) -> Result<entity::product_image::Model, DbErr> {
    ProductImageFactory::new(db, product_id).build().await
}
