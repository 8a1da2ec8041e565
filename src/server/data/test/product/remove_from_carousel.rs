use super::*;

/// Tests removing a featured product.
///
/// Expected: Ok(1) with featured cleared and position nulled
#[tokio::test]
async fn clears_featured_and_position() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::create_featured_product(db, 3).await?;

    let repo = ProductRepository::new(db);
    let rows = repo.remove_from_carousel(product.id).await?;

    assert_eq!(rows, 1);
    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.featured);
    assert!(stored.carousel_order.is_none());
    assert!(stored.active);

    Ok(())
}

/// Tests removing an unknown product.
///
/// Expected: Ok(0)
#[tokio::test]
async fn matches_nothing_for_unknown_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ProductRepository::new(db);

    assert_eq!(repo.remove_from_carousel(9999).await?, 0);

    Ok(())
}

/// Tests the featured-only variant against an inactive product.
///
/// Expected: Ok(0) and the inactive product keeps its flags
#[tokio::test]
async fn conditional_remove_skips_inactive_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let product = factory::product::ProductFactory::new(db)
        .featured(true)
        .active(false)
        .carousel_order(Some(2))
        .build()
        .await?;

    let repo = ProductRepository::new(db);
    let rows = repo.remove_featured_from_carousel(product.id).await?;

    assert_eq!(rows, 0);
    let stored = entity::prelude::Product::find_by_id(product.id)
        .one(db)
        .await?
        .unwrap();
    assert!(stored.featured);
    assert_eq!(stored.carousel_order, Some(2));

    Ok(())
}
