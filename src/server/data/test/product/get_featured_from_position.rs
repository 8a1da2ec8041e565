use super::*;

/// Tests fetching conflicting products highest position first.
///
/// Expected: Ok with products at positions >= 3, ordered 7, 5, 3
#[tokio::test]
async fn returns_products_from_position_descending() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_carousel(db, &[3, 1, 7, 5]).await?;

    let repo = ProductRepository::new(db);
    let result = repo.get_featured_from_position(3, None).await?;

    let orders: Vec<Option<i32>> = result.iter().map(|p| p.carousel_order).collect();
    assert_eq!(orders, vec![Some(7), Some(5), Some(3)]);

    Ok(())
}

/// Tests that the excluded product is left out of the conflict set.
///
/// Expected: Ok without the excluded product
#[tokio::test]
async fn skips_excluded_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[2, 3, 4]).await?;

    let repo = ProductRepository::new(db);
    let result = repo
        .get_featured_from_position(1, Some(products[1].id))
        .await?;

    let ids: Vec<i32> = result.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![products[2].id, products[0].id]);

    Ok(())
}

/// Tests that inactive products never conflict.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn ignores_inactive_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::product::ProductFactory::new(db)
        .featured(true)
        .active(false)
        .carousel_order(Some(2))
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let result = repo.get_featured_from_position(1, None).await?;

    assert!(result.is_empty());

    Ok(())
}
