pub use sea_orm_migration::prelude::*;

mod m20251020_000001_create_product_table;
mod m20251020_000002_create_product_image_table;
mod m20251020_000003_create_carousel_order_index;

pub use m20251020_000003_create_carousel_order_index::CAROUSEL_ORDER_UNIQUE_INDEX;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251020_000001_create_product_table::Migration),
            Box::new(m20251020_000002_create_product_image_table::Migration),
            Box::new(m20251020_000003_create_carousel_order_index::Migration),
        ]
    }
}
