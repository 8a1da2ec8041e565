use sea_orm_migration::prelude::*;

use super::m20251020_000001_create_product_table::Product;

/// Partial unique index keeping carousel positions unique among featured, active products.
///
/// Written as raw SQL since the partial `WHERE` clause is shared verbatim by
/// Postgres and SQLite.
pub const CAROUSEL_ORDER_UNIQUE_INDEX: &str = "CREATE UNIQUE INDEX IF NOT EXISTS \
     idx_products_carousel_order_unique ON products (carousel_order) \
     WHERE featured AND active";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_products_carousel_lookup")
                    .table(Product::Table)
                    .col(Product::Featured)
                    .col(Product::Active)
                    .col(Product::CarouselOrder)
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(CAROUSEL_ORDER_UNIQUE_INDEX)
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_products_carousel_order_unique")
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("idx_products_carousel_lookup")
                    .table(Product::Table)
                    .to_owned(),
            )
            .await
    }
}
