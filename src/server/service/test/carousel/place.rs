use super::*;

/// Tests featuring a new product at the head of a full carousel.
///
/// Expected: Ok with the product at 1, 6 shifted and one evicted
#[tokio::test]
async fn places_new_product_into_full_carousel() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3, 4, 5, 6, 7]).await?;
    let product = factory::product::create_product(db).await?;

    let service = CarouselService::new(db);
    let outcome = service.place(product.id, Some(1)).await?;

    assert_eq!(outcome.product_id, product.id);
    assert_eq!(outcome.carousel_order, Some(1));
    assert_eq!(outcome.resolution.shifted_count, 6);
    assert_eq!(outcome.resolution.removed_entries[0].id, products[6].id);

    let layout = layout(db).await?;
    assert_eq!(layout.len(), 7);
    assert_eq!(layout[0], (1, product.id));
    assert_carousel_consistent(db).await?;

    Ok(())
}

/// Tests moving a featured product towards the head.
///
/// Expected: Ok with the product at 2 and the entries in between shifted
#[tokio::test]
async fn moves_featured_product_up() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3, 4, 5]).await?;

    let service = CarouselService::new(db);
    let outcome = service.place(products[4].id, Some(2)).await?;

    assert_eq!(outcome.carousel_order, Some(2));
    assert!(outcome.resolution.removed_entries.is_empty());
    assert_eq!(
        layout(db).await?,
        vec![
            (1, products[0].id),
            (2, products[4].id),
            (3, products[1].id),
            (4, products[2].id),
            (5, products[3].id),
        ]
    );

    Ok(())
}

/// Expected: Ok with no shifts when the product already holds the target
#[tokio::test]
async fn same_position_is_noop() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3]).await?;
    let before = layout(db).await?;

    let service = CarouselService::new(db);
    let outcome = service.place(products[1].id, Some(2)).await?;

    assert_eq!(outcome.carousel_order, Some(2));
    assert_eq!(outcome.resolution.shifted_count, 0);
    assert_eq!(layout(db).await?, before);

    Ok(())
}

/// Expected: Ok with the product taken out of the carousel
#[tokio::test]
async fn missing_target_removes_product() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2]).await?;

    let service = CarouselService::new(db);
    let outcome = service.place(products[0].id, None).await?;

    assert!(outcome.carousel_order.is_none());
    assert_eq!(layout(db).await?, vec![(2, products[1].id)]);

    Ok(())
}

/// Expected: Err(NotFound) for unknown and soft-deleted products
#[tokio::test]
async fn rejects_unknown_or_inactive_product() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let inactive = factory::product::ProductFactory::new(db)
        .active(false)
        .build()
        .await?;

    let service = CarouselService::new(db);

    assert!(matches!(
        service.place(9999, Some(1)).await,
        Err(AppError::NotFound(_))
    ));
    assert!(matches!(
        service.place(inactive.id, Some(1)).await,
        Err(AppError::NotFound(_))
    ));

    Ok(())
}

/// Expected: Err(InvalidPosition) and the product stays where it was
#[tokio::test]
async fn rejects_out_of_bounds_target() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1]).await?;

    let service = CarouselService::new(db);
    let result = service.place(products[0].id, Some(8)).await;

    assert!(matches!(
        result,
        Err(AppError::CarouselErr(CarouselError::InvalidPosition(_)))
    ));
    assert_eq!(layout(db).await?, vec![(1, products[0].id)]);

    Ok(())
}
