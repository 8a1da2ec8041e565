use std::collections::{BTreeSet, HashSet};

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    error::{carousel::CarouselError, AppError},
    model::carousel::{ReorderParams, CAROUSEL_MAX_SIZE},
    service::carousel::CarouselService,
};

mod available_positions;
mod is_full;
mod place;
mod reorder;

/// Reads the carousel as `(position, product id)` pairs, lowest position first.
async fn layout(db: &DatabaseConnection) -> Result<Vec<(i32, i32)>, DbErr> {
    let products = entity::prelude::Product::find()
        .filter(entity::product::Column::Featured.eq(true))
        .filter(entity::product::Column::Active.eq(true))
        .filter(entity::product::Column::CarouselOrder.is_not_null())
        .order_by_asc(entity::product::Column::CarouselOrder)
        .all(db)
        .await?;

    Ok(products
        .into_iter()
        .filter_map(|product| product.carousel_order.map(|order| (order, product.id)))
        .collect())
}

/// Asserts positions are unique, in bounds, and no more than the carousel size are held.
async fn assert_carousel_consistent(db: &DatabaseConnection) -> Result<(), DbErr> {
    let layout = layout(db).await?;
    let positions: HashSet<i32> = layout.iter().map(|(order, _)| *order).collect();

    assert_eq!(positions.len(), layout.len(), "duplicate positions: {:?}", layout);
    assert!(layout.len() <= CAROUSEL_MAX_SIZE as usize);
    assert!(positions
        .iter()
        .all(|order| (1..=CAROUSEL_MAX_SIZE).contains(order)));

    Ok(())
}

async fn carousel_test() -> test_utils::context::TestContext {
    TestBuilder::new()
        .with_carousel_tables()
        .with_carousel_index()
        .build()
        .await
        .unwrap()
}
