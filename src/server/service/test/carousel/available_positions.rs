use super::*;

/// Expected: Ok with every position not held by a featured product
#[tokio::test]
async fn lists_free_positions() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_carousel(db, &[1, 3]).await?;

    let service = CarouselService::new(db);
    let available = service.available_positions(None).await?;

    assert_eq!(available, BTreeSet::from([2, 4, 5, 6, 7]));

    Ok(())
}

/// Tests that the excluded product's own slot is reported free.
///
/// Expected: Ok with position 1 available again
#[tokio::test]
async fn excluded_product_slot_is_available() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 3]).await?;

    let service = CarouselService::new(db);
    let available = service.available_positions(Some(products[0].id)).await?;

    assert_eq!(available, BTreeSet::from([1, 2, 4, 5, 6, 7]));

    Ok(())
}

/// Expected: Ok with empty set for a full carousel, all positions for an empty one
#[tokio::test]
async fn full_and_empty_carousel() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let service = CarouselService::new(db);
    assert_eq!(
        service.available_positions(None).await?,
        BTreeSet::from([1, 2, 3, 4, 5, 6, 7])
    );

    factory::helpers::create_carousel(db, &[1, 2, 3, 4, 5, 6, 7]).await?;
    assert!(service.available_positions(None).await?.is_empty());

    Ok(())
}
