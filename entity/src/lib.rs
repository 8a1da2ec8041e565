pub mod prelude;

pub mod product;
pub mod product_image;
