use super::*;

/// Tests counting featured, active products.
///
/// Expected: Ok(3), ignoring inactive and non-featured products
#[tokio::test]
async fn counts_only_featured_active_products() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::helpers::create_carousel(db, &[1, 2, 3]).await?;
    factory::product::create_product(db).await?;
    factory::product::ProductFactory::new(db)
        .featured(true)
        .active(false)
        .carousel_order(Some(4))
        .build()
        .await?;

    let repo = ProductRepository::new(db);

    assert_eq!(repo.count_featured(None).await?, 3);

    Ok(())
}

/// Tests counting with an excluded product.
///
/// Expected: Ok(count - 1) when the excluded product is featured
#[tokio::test]
async fn excludes_given_product() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_carousel_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let products = factory::helpers::create_carousel(db, &[1, 2, 3]).await?;

    let repo = ProductRepository::new(db);

    assert_eq!(repo.count_featured(Some(products[0].id)).await?, 2);

    Ok(())
}
