use super::*;

fn assignment(product_id: i32, new_order: serde_json::Value) -> ReorderParams {
    ReorderParams {
        product_id,
        new_order,
    }
}

/// Tests swapping two positions in one batch.
///
/// Releasing slots first lets a permutation pass the unique index.
///
/// Expected: Ok(2) with the positions swapped
#[tokio::test]
async fn swaps_positions() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3]).await?;

    let service = CarouselService::new(db);
    let updated = service
        .reorder(vec![
            assignment(products[0].id, json!(2)),
            assignment(products[1].id, json!(1)),
        ])
        .await?;

    assert_eq!(updated, 2);
    assert_eq!(
        layout(db).await?,
        vec![
            (1, products[1].id),
            (2, products[0].id),
            (3, products[2].id)
        ]
    );

    Ok(())
}

/// Tests that entries no longer in the carousel are not counted.
///
/// Expected: Ok(1) when one of two products is not featured
#[tokio::test]
async fn counts_only_matched_rows() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1]).await?;
    let plain = factory::product::create_product(db).await?;

    let service = CarouselService::new(db);
    let updated = service
        .reorder(vec![
            assignment(products[0].id, json!(4)),
            assignment(plain.id, json!(5)),
        ])
        .await?;

    assert_eq!(updated, 1);
    assert_eq!(layout(db).await?, vec![(4, products[0].id)]);

    let stored = entity::prelude::Product::find_by_id(plain.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!stored.featured);

    Ok(())
}

/// Expected: Ok(1) with the null entry taken out of the carousel
#[tokio::test]
async fn null_position_removes_entry() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2]).await?;

    let service = CarouselService::new(db);
    let updated = service
        .reorder(vec![assignment(products[0].id, json!(null))])
        .await?;

    assert_eq!(updated, 1);
    assert_eq!(layout(db).await?, vec![(2, products[1].id)]);

    Ok(())
}

/// Expected: Err(EmptyReorder)
#[tokio::test]
async fn rejects_empty_batch() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let service = CarouselService::new(db);

    assert!(matches!(
        service.reorder(Vec::new()).await,
        Err(AppError::CarouselErr(CarouselError::EmptyReorder))
    ));

    Ok(())
}

/// Tests that validation runs over the whole batch before any write.
///
/// Expected: Err(InvalidPosition) and the valid first assignment is not applied
#[tokio::test]
async fn rejects_invalid_position_before_writing() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2]).await?;
    let before = layout(db).await?;

    let service = CarouselService::new(db);
    let result = service
        .reorder(vec![
            assignment(products[0].id, json!(5)),
            assignment(products[1].id, json!(9)),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::CarouselErr(CarouselError::InvalidPosition(_)))
    ));
    assert_eq!(layout(db).await?, before);

    Ok(())
}

/// Expected: Err(DuplicatePosition(3)) and nothing written
#[tokio::test]
async fn rejects_duplicate_positions() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2]).await?;
    let before = layout(db).await?;

    let service = CarouselService::new(db);
    let result = service
        .reorder(vec![
            assignment(products[0].id, json!(3)),
            assignment(products[1].id, json!(3)),
        ])
        .await;

    assert!(matches!(
        result,
        Err(AppError::CarouselErr(CarouselError::DuplicatePosition(3)))
    ));
    assert_eq!(layout(db).await?, before);

    Ok(())
}

/// Tests that a clash with an entry outside the batch rolls everything back.
///
/// Expected: Err(DbErr) and the original layout restored
#[tokio::test]
async fn clash_with_unlisted_entry_rolls_back() -> Result<(), AppError> {
    let test = carousel_test().await;
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3]).await?;
    let before = layout(db).await?;

    let service = CarouselService::new(db);
    let result = service
        .reorder(vec![
            assignment(products[0].id, json!(4)),
            assignment(products[1].id, json!(3)),
        ])
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));
    assert_eq!(layout(db).await?, before);

    Ok(())
}
