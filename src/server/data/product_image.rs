use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

use entity::product_image;

pub struct ProductImageRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductImageRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets the URL of a product's first image of the given size
    ///
    /// # Arguments
    /// - `product_id`: Product owning the image
    /// - `size`: Size tag to match (`small`, `medium`, ...)
    ///
    /// # Returns
    /// - `Ok(Some(url))`: URL of the image with the lowest `image_index`
    /// - `Ok(None)`: Product has no image of that size
    /// - `Err(DbErr)`: Database error
    pub async fn get_first_url_by_size(
        &self,
        product_id: i32,
        size: &str,
    ) -> Result<Option<String>, DbErr> {
        let image = entity::prelude::ProductImage::find()
            .filter(product_image::Column::ProductId.eq(product_id))
            .filter(product_image::Column::Size.eq(size))
            .order_by_asc(product_image::Column::ImageIndex)
            .one(self.db)
            .await?;

        Ok(image.map(|image| image.url))
    }
}
