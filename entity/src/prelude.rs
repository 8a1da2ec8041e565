pub use super::product::Entity as Product;
pub use super::product_image::Entity as ProductImage;
