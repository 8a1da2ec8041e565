use super::*;

/// Expected: Ok(true) once every position is taken
#[tokio::test]
async fn full_with_seven_featured_products() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_carousel(db, &[1, 2, 3, 4, 5, 6, 7]).await?;

    let service = CarouselService::new(db);

    assert!(service.is_full(None).await?);

    Ok(())
}

/// Tests that the product being edited does not count against the limit.
///
/// Expected: Ok(false) when excluding one of seven featured products
#[tokio::test]
async fn not_full_when_excluding_a_member() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3, 4, 5, 6, 7]).await?;

    let service = CarouselService::new(db);

    assert!(!service.is_full(Some(products[3].id)).await?);

    Ok(())
}

/// Expected: Ok(false) with free positions, ignoring inactive products
#[tokio::test]
async fn not_full_with_free_positions() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_carousel(db, &[1, 2, 3, 4, 5, 6]).await?;
    factory::product::ProductFactory::new(db)
        .featured(true)
        .active(false)
        .carousel_order(Some(7))
        .build()
        .await?;

    let service = CarouselService::new(db);

    assert!(!service.is_full(None).await?);

    let status = service.status(None).await?;
    assert_eq!(status.count, 6);
    assert_eq!(status.max_size, CAROUSEL_MAX_SIZE);
    assert!(!status.is_full);

    Ok(())
}
