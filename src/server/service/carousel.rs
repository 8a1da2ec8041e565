use std::{
    collections::{BTreeSet, HashSet},
    panic::AssertUnwindSafe,
};

use futures::{future, FutureExt};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbErr, TransactionTrait};
use serde_json::Value;

use crate::server::{
    data::{product::ProductRepository, product_image::ProductImageRepository},
    error::{carousel::CarouselError, AppError},
    model::carousel::{
        CarouselEntry, CarouselPosition, CarouselStatus, ConflictResolution, PlacementOutcome,
        RemovedEntry, ReorderParams, CAROUSEL_IMAGE_SIZE, CAROUSEL_MAX_SIZE,
    },
    util::parse::parse_carousel_order,
};

/// Validates a raw carousel position.
///
/// # Returns
/// - `Ok(None)` - `value` is `null`, meaning "not featured"
/// - `Ok(Some(CarouselPosition))` - `value` is an integer inside the carousel bounds
/// - `Err(CarouselError::InvalidPosition)` - Anything else
pub fn validate_position(value: &Value) -> Result<Option<CarouselPosition>, CarouselError> {
    parse_carousel_order(value)?
        .map(CarouselPosition::new)
        .transpose()
}

/// Interprets the target of a conflict resolution; `None` and `0` mean no placement.
fn conflict_target(new_order: Option<i64>) -> Result<Option<CarouselPosition>, CarouselError> {
    match new_order {
        None | Some(0) => Ok(None),
        Some(value) => CarouselPosition::new(value).map(Some),
    }
}

pub struct CarouselService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CarouselService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets featured, active products newest first, each with its first small image
    ///
    /// Image lookups run concurrently. A failed lookup only blanks that entry's image.
    pub async fn list(&self) -> Result<Vec<CarouselEntry>, AppError> {
        let products = ProductRepository::new(self.db)
            .get_featured(CAROUSEL_MAX_SIZE as u64)
            .await?;

        if products.is_empty() {
            return Ok(Vec::new());
        }

        let image_urls = self.small_image_urls(&products).await;

        Ok(products
            .into_iter()
            .zip(image_urls)
            .map(|(product, image_url)| CarouselEntry::from_entity(product, image_url))
            .collect())
    }

    /// Fetches the first small image URL of every product, in the same order
    ///
    /// Entries have no ordering dependency on each other, so all lookups are started
    /// together. If the batch as a whole fails, every entry degrades to `None`.
    async fn small_image_urls(&self, products: &[entity::product::Model]) -> Vec<Option<String>> {
        let repo = ProductImageRepository::new(self.db);
        let repo = &repo;

        let lookups = products.iter().map(move |product| async move {
            match repo
                .get_first_url_by_size(product.id, CAROUSEL_IMAGE_SIZE)
                .await
            {
                Ok(url) => url,
                Err(err) => {
                    tracing::warn!(
                        product_id = product.id,
                        "Failed to fetch carousel image from product_images: {}",
                        err
                    );
                    None
                }
            }
        });

        match AssertUnwindSafe(future::join_all(lookups))
            .catch_unwind()
            .await
        {
            Ok(urls) => urls,
            Err(_) => {
                tracing::error!(
                    "Carousel image enrichment failed, returning {} entries without images",
                    products.len()
                );
                vec![None; products.len()]
            }
        }
    }

    /// Returns whether every carousel position is taken
    ///
    /// # Arguments
    /// - `exclude_id`: Product whose own slot should not count, e.g. the one being edited
    pub async fn is_full(&self, exclude_id: Option<i32>) -> Result<bool, AppError> {
        Ok(self.status(exclude_id).await?.is_full)
    }

    /// Gets the number of featured products and whether the carousel is full
    pub async fn status(&self, exclude_id: Option<i32>) -> Result<CarouselStatus, AppError> {
        let count = ProductRepository::new(self.db)
            .count_featured(exclude_id)
            .await?;

        Ok(CarouselStatus {
            count,
            max_size: CAROUSEL_MAX_SIZE,
            is_full: count >= CAROUSEL_MAX_SIZE as u64,
        })
    }

    /// Makes room at `new_order` by shifting every entry at or after it down one slot
    ///
    /// Entries shifted past the last position are evicted. `None` and `0` are no-ops.
    /// All writes run in one transaction and roll back together on failure.
    ///
    /// # Arguments
    /// - `new_order`: Position about to be assigned
    /// - `exclude_id`: Product about to be assigned to `new_order`; never shifted. If it
    ///   holds a slot at or after `new_order`, it is taken out of the carousel and the
    ///   caller features it again at `new_order`
    ///
    /// # Returns
    /// - `Ok(ConflictResolution)`: Shift count and evicted entries
    /// - `Err(AppError::CarouselErr)`: `new_order` is out of bounds
    /// - `Err(AppError::DbErr)`: Database error; no write was committed
    pub async fn resolve_conflict(
        &self,
        new_order: Option<i64>,
        exclude_id: Option<i32>,
    ) -> Result<ConflictResolution, AppError> {
        let Some(position) = conflict_target(new_order)? else {
            return Ok(ConflictResolution::default());
        };

        let txn = self.db.begin().await?;
        let resolution =
            shift_conflicting(&txn, position, exclude_id, ExcludedSlot::Vacate).await?;
        txn.commit().await?;

        Ok(resolution)
    }

    /// Assigns a product its carousel position, resolving conflicts first
    ///
    /// `None` and `0` take the product out of the carousel instead. Conflict resolution
    /// and the assignment share one transaction.
    ///
    /// # Returns
    /// - `Ok(PlacementOutcome)`: Final position of the product and the conflict outcome
    /// - `Err(AppError::NotFound)`: Product does not exist or is soft-deleted
    /// - `Err(AppError::CarouselErr)`: `new_order` is out of bounds
    /// - `Err(AppError::DbErr)`: Database error; no write was committed
    pub async fn place(
        &self,
        product_id: i32,
        new_order: Option<i64>,
    ) -> Result<PlacementOutcome, AppError> {
        let target = conflict_target(new_order)?;

        let txn = self.db.begin().await?;
        let repo = ProductRepository::new(&txn);

        let product = repo
            .get_by_id(product_id)
            .await?
            .filter(|product| product.active)
            .ok_or_else(|| AppError::NotFound(format!("Product {} not found", product_id)))?;

        let outcome = match target {
            None => {
                repo.remove_from_carousel(product.id).await?;
                PlacementOutcome {
                    product_id: product.id,
                    carousel_order: None,
                    resolution: ConflictResolution::default(),
                }
            }
            Some(position)
                if product.featured && product.carousel_order == Some(position.get()) =>
            {
                PlacementOutcome {
                    product_id: product.id,
                    carousel_order: Some(position.get()),
                    resolution: ConflictResolution::default(),
                }
            }
            Some(position) => {
                let resolution =
                    shift_conflicting(&txn, position, Some(product.id), ExcludedSlot::Release)
                        .await?;
                repo.feature_at(product.id, position.get()).await?;
                PlacementOutcome {
                    product_id: product.id,
                    carousel_order: Some(position.get()),
                    resolution,
                }
            }
        };

        txn.commit().await?;

        tracing::info!(
            product_id = outcome.product_id,
            carousel_order = ?outcome.carousel_order,
            shifted = outcome.resolution.shifted_count,
            evicted = outcome.resolution.removed_entries.len(),
            "Placed product in carousel"
        );

        Ok(outcome)
    }

    /// Applies a batch of position assignments, e.g. after a drag-and-drop reorder
    ///
    /// Every assignment is validated before any write. Entries that left the carousel
    /// in the meantime are not matched. A `null` position removes that entry. Slots are
    /// released first so that any permutation of existing positions can be applied.
    ///
    /// # Returns
    /// - `Ok(count)`: Number of rows the store confirmed were updated
    /// - `Err(AppError::CarouselErr)`: Empty batch, invalid or duplicate position
    /// - `Err(AppError::DbErr)`: Database error; no write was committed
    pub async fn reorder(&self, assignments: Vec<ReorderParams>) -> Result<u64, AppError> {
        if assignments.is_empty() {
            return Err(CarouselError::EmptyReorder.into());
        }

        let mut targets = Vec::with_capacity(assignments.len());
        let mut claimed = HashSet::new();
        for assignment in assignments {
            let position = validate_position(&assignment.new_order)?;
            if let Some(position) = position {
                if !claimed.insert(position) {
                    return Err(CarouselError::DuplicatePosition(position.get()).into());
                }
            }
            targets.push((assignment.product_id, position));
        }

        let txn = self.db.begin().await?;
        let repo = ProductRepository::new(&txn);

        for (product_id, _) in &targets {
            repo.set_featured_carousel_order(*product_id, None).await?;
        }

        let mut updated_count = 0;
        for (product_id, position) in &targets {
            updated_count += match position {
                Some(position) => {
                    repo.set_featured_carousel_order(*product_id, Some(position.get()))
                        .await?
                }
                None => repo.remove_featured_from_carousel(*product_id).await?,
            };
        }

        txn.commit().await?;

        tracing::info!(
            requested = targets.len(),
            updated = updated_count,
            "Reordered carousel"
        );

        Ok(updated_count)
    }

    /// Takes a product out of the carousel
    ///
    /// No existence check; unknown or non-featured IDs are a no-op.
    pub async fn remove(&self, product_id: i32) -> Result<(), AppError> {
        let rows = ProductRepository::new(self.db)
            .remove_from_carousel(product_id)
            .await?;

        tracing::info!(product_id, rows, "Removed product from carousel");

        Ok(())
    }

    /// Gets the positions not held by any featured product
    ///
    /// # Arguments
    /// - `exclude_id`: Product whose own slot is reported as available
    pub async fn available_positions(
        &self,
        exclude_id: Option<i32>,
    ) -> Result<BTreeSet<i32>, AppError> {
        let occupied: HashSet<i32> = self
            .list()
            .await?
            .into_iter()
            .filter(|entry| Some(entry.id) != exclude_id)
            .filter_map(|entry| entry.carousel_order)
            .collect();

        Ok(CarouselPosition::all()
            .map(CarouselPosition::get)
            .filter(|position| !occupied.contains(position))
            .collect())
    }
}

/// Handling of the excluded product's slot when it lies inside the shifted range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExcludedSlot {
    /// Null the position, keep `featured`. Only valid when the same transaction
    /// reassigns the product a position.
    Release,
    /// Take the product out of the carousel.
    Vacate,
}

/// Shifts entries at or after `position` one slot down, evicting overflow
///
/// Writes are issued one at a time, highest position first, so every target slot is
/// already vacated when written. Must not be parallelized. If `exclude_id` holds a slot
/// in the shifted range, that slot is freed first as `excluded_slot` says.
async fn shift_conflicting<C: ConnectionTrait>(
    db: &C,
    position: CarouselPosition,
    exclude_id: Option<i32>,
    excluded_slot: ExcludedSlot,
) -> Result<ConflictResolution, DbErr> {
    let repo = ProductRepository::new(db);

    let conflicts = repo
        .get_featured_from_position(position.get(), exclude_id)
        .await?;

    if conflicts.is_empty() {
        return Ok(ConflictResolution::default());
    }

    if let Some(exclude_id) = exclude_id {
        let holds_shifted_slot = repo.get_by_id(exclude_id).await?.is_some_and(|excluded| {
            excluded.featured
                && excluded.active
                && excluded
                    .carousel_order
                    .is_some_and(|order| order >= position.get())
        });

        if holds_shifted_slot {
            match excluded_slot {
                ExcludedSlot::Release => {
                    repo.set_featured_carousel_order(exclude_id, None).await?;
                }
                ExcludedSlot::Vacate => {
                    repo.remove_featured_from_carousel(exclude_id).await?;
                }
            }
        }
    }

    let mut resolution = ConflictResolution::default();

    for entry in conflicts {
        let Some(current) = entry.carousel_order else {
            continue;
        };
        if current >= CAROUSEL_MAX_SIZE {
            repo.remove_from_carousel(entry.id).await?;

            tracing::info!(
                product_id = entry.id,
                from = current,
                "Evicted product from carousel"
            );

            resolution.removed_entries.push(RemovedEntry {
                id: entry.id,
                name: entry.name,
            });
        } else {
            repo.set_carousel_order(entry.id, current + 1).await?;
            resolution.shifted_count += 1;
        }
    }

    tracing::info!(
        position = position.get(),
        shifted = resolution.shifted_count,
        evicted = resolution.removed_entries.len(),
        "Resolved carousel conflict in products"
    );

    Ok(resolution)
}
