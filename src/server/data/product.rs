use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use entity::product;

pub struct ProductRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ProductRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets a product by ID regardless of its flags
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: Product found
    /// - `Ok(None)`: No product with this ID
    /// - `Err(DbErr)`: Database error
    pub async fn get_by_id(&self, id: i32) -> Result<Option<product::Model>, DbErr> {
        entity::prelude::Product::find_by_id(id).one(self.db).await
    }

    /// Gets featured, active products, newest first
    ///
    /// # Arguments
    /// - `limit`: Maximum number of products to return
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Featured products ordered by `created_at` descending
    /// - `Err(DbErr)`: Database error
    pub async fn get_featured(&self, limit: u64) -> Result<Vec<product::Model>, DbErr> {
        entity::prelude::Product::find()
            .filter(in_carousel())
            .order_by_desc(product::Column::CreatedAt)
            .limit(limit)
            .all(self.db)
            .await
    }

    /// Counts featured, active products
    ///
    /// # Arguments
    /// - `exclude_id`: Product left out of the count, if any
    ///
    /// # Returns
    /// - `Ok(count)`: Number of featured products
    /// - `Err(DbErr)`: Database error
    pub async fn count_featured(&self, exclude_id: Option<i32>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Product::find().filter(in_carousel());

        if let Some(exclude_id) = exclude_id {
            query = query.filter(product::Column::Id.ne(exclude_id));
        }

        query.count(self.db).await
    }

    /// Gets featured, active products at or after a position, highest position first
    ///
    /// # Arguments
    /// - `from_order`: Lowest carousel position to include
    /// - `exclude_id`: Product left out of the result, if any
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: Products ordered by `carousel_order` descending
    /// - `Err(DbErr)`: Database error
    pub async fn get_featured_from_position(
        &self,
        from_order: i32,
        exclude_id: Option<i32>,
    ) -> Result<Vec<product::Model>, DbErr> {
        let mut query = entity::prelude::Product::find()
            .filter(in_carousel())
            .filter(product::Column::CarouselOrder.gte(from_order));

        if let Some(exclude_id) = exclude_id {
            query = query.filter(product::Column::Id.ne(exclude_id));
        }

        query
            .order_by_desc(product::Column::CarouselOrder)
            .all(self.db)
            .await
    }

    /// Moves a product to a carousel position without checking its flags
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated (0 if the ID does not exist)
    /// - `Err(DbErr)`: Database error
    pub async fn set_carousel_order(&self, id: i32, carousel_order: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(product::Column::CarouselOrder, Expr::value(carousel_order))
            .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Sets the carousel position of a product only while it is featured and active
    ///
    /// `None` releases the slot but leaves the product featured.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated (0 if the product left the carousel)
    /// - `Err(DbErr)`: Database error
    pub async fn set_featured_carousel_order(
        &self,
        id: i32,
        carousel_order: Option<i32>,
    ) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(product::Column::CarouselOrder, Expr::value(carousel_order))
            .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(product::Column::Id.eq(id))
            .filter(in_carousel())
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Features a product at a carousel position
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated
    /// - `Err(DbErr)`: Database error
    pub async fn feature_at(&self, id: i32, carousel_order: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(product::Column::Featured, Expr::value(true))
            .col_expr(product::Column::CarouselOrder, Expr::value(carousel_order))
            .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(product::Column::Id.eq(id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Takes a product out of the carousel
    ///
    /// Clears both `featured` and `carousel_order`. Matches nothing for unknown IDs.
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated
    /// - `Err(DbErr)`: Database error
    pub async fn remove_from_carousel(&self, id: i32) -> Result<u64, DbErr> {
        self.clear_carousel(Condition::all().add(product::Column::Id.eq(id)))
            .await
    }

    /// Takes a product out of the carousel only while it is featured and active
    ///
    /// # Returns
    /// - `Ok(rows)`: Number of rows updated
    /// - `Err(DbErr)`: Database error
    pub async fn remove_featured_from_carousel(&self, id: i32) -> Result<u64, DbErr> {
        self.clear_carousel(
            Condition::all()
                .add(product::Column::Id.eq(id))
                .add(in_carousel()),
        )
        .await
    }

    async fn clear_carousel(&self, condition: Condition) -> Result<u64, DbErr> {
        let result = entity::prelude::Product::update_many()
            .col_expr(product::Column::Featured, Expr::value(false))
            .col_expr(product::Column::CarouselOrder, Expr::value(Option::<i32>::None))
            .col_expr(product::Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(condition)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Products taking part in the carousel: featured and not soft-deleted.
fn in_carousel() -> Condition {
    Condition::all()
        .add(product::Column::Featured.eq(true))
        .add(product::Column::Active.eq(true))
}
