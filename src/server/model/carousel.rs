//! Carousel domain models and parameters.
//!
//! The carousel is a dense, bounded list of featured products occupying positions
//! `1..=CAROUSEL_MAX_SIZE`. These types sit between the product entity and the
//! carousel DTOs.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::{
    model::carousel::{
        CarouselEntryDto, CarouselStatusDto, ConflictResolutionDto, PlacementDto,
        ReorderAssignmentDto, RemovedEntryDto,
    },
    server::error::carousel::CarouselError,
};

/// Maximum number of featured products, and the highest valid position.
pub const CAROUSEL_MAX_SIZE: i32 = 7;

/// Lowest valid carousel position.
pub const CAROUSEL_MIN_POSITION: i32 = 1;

/// Image size tag used to enrich carousel listings.
pub const CAROUSEL_IMAGE_SIZE: &str = "small";

/// A validated carousel position in `CAROUSEL_MIN_POSITION..=CAROUSEL_MAX_SIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CarouselPosition(i32);

impl CarouselPosition {
    /// Validates an integer position.
    ///
    /// # Returns
    /// - `Ok(CarouselPosition)` - `value` is inside the carousel bounds
    /// - `Err(CarouselError::InvalidPosition)` - `value` is out of bounds
    pub fn new(value: i64) -> Result<Self, CarouselError> {
        if (CAROUSEL_MIN_POSITION as i64..=CAROUSEL_MAX_SIZE as i64).contains(&value) {
            Ok(Self(value as i32))
        } else {
            Err(CarouselError::InvalidPosition(value.to_string()))
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }

    /// Every position in the carousel, lowest first.
    pub fn all() -> impl Iterator<Item = Self> {
        (CAROUSEL_MIN_POSITION..=CAROUSEL_MAX_SIZE).map(Self)
    }
}

/// A featured product as shown in the carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselEntry {
    pub id: i32,
    pub name: String,
    pub featured: bool,
    pub active: bool,
    pub carousel_order: Option<i32>,
    /// First `small` image of the product, if any could be fetched.
    pub image_url_small: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl CarouselEntry {
    /// Converts a product entity to a carousel entry at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The product entity from the database
    /// - `image_url_small` - Result of the image lookup for this product
    pub fn from_entity(entity: entity::product::Model, image_url_small: Option<String>) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            featured: entity.featured,
            active: entity.active,
            carousel_order: entity.carousel_order,
            image_url_small,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> CarouselEntryDto {
        CarouselEntryDto {
            id: self.id,
            name: self.name,
            featured: self.featured,
            active: self.active,
            carousel_order: self.carousel_order,
            image_url_small: self.image_url_small,
            created_at: self.created_at,
        }
    }
}

/// A product pushed out of the carousel because its shifted position overflowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemovedEntry {
    pub id: i32,
    pub name: String,
}

impl RemovedEntry {
    pub fn into_dto(self) -> RemovedEntryDto {
        RemovedEntryDto {
            id: self.id,
            name: self.name,
        }
    }
}

/// Outcome of making room for a product at a given position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConflictResolution {
    /// Number of entries moved one position down the list.
    pub shifted_count: u64,
    /// Entries evicted, highest former position first.
    pub removed_entries: Vec<RemovedEntry>,
}

impl ConflictResolution {
    pub fn into_dto(self) -> ConflictResolutionDto {
        ConflictResolutionDto {
            shifted_count: self.shifted_count,
            removed_entries: self
                .removed_entries
                .into_iter()
                .map(RemovedEntry::into_dto)
                .collect(),
        }
    }
}

/// Outcome of assigning a product its own carousel position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementOutcome {
    pub product_id: i32,
    /// Position the product now holds, `None` if it left the carousel.
    pub carousel_order: Option<i32>,
    pub resolution: ConflictResolution,
}

impl PlacementOutcome {
    pub fn into_dto(self) -> PlacementDto {
        let resolution = self.resolution.into_dto();
        PlacementDto {
            product_id: self.product_id,
            carousel_order: self.carousel_order,
            shifted_count: resolution.shifted_count,
            removed_entries: resolution.removed_entries,
        }
    }
}

/// One assignment in a batch reorder, before validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderParams {
    pub product_id: i32,
    /// Raw target position; validated by the service before any write.
    pub new_order: Value,
}

impl From<ReorderAssignmentDto> for ReorderParams {
    fn from(dto: ReorderAssignmentDto) -> Self {
        Self {
            product_id: dto.product_id,
            new_order: dto.carousel_order,
        }
    }
}

/// Carousel occupancy summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselStatus {
    pub count: u64,
    pub max_size: i32,
    pub is_full: bool,
}

impl CarouselStatus {
    pub fn into_dto(self) -> CarouselStatusDto {
        CarouselStatusDto {
            count: self.count,
            max_size: self.max_size,
            is_full: self.is_full,
        }
    }
}
