use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarouselEntryDto {
    pub id: i32,
    pub name: String,
    pub featured: bool,
    pub active: bool,
    pub carousel_order: Option<i32>,
    pub image_url_small: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RemovedEntryDto {
    pub id: i32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ConflictResolutionDto {
    pub shifted_count: u64,
    pub removed_entries: Vec<RemovedEntryDto>,
}

/// Payload for resolving a position conflict ahead of creating or updating a product.
///
/// `carousel_order` is kept as raw JSON so that strings, fractions and other
/// malformed values are reported as validation errors rather than body rejections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ResolveConflictDto {
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub carousel_order: Value,
    #[serde(default)]
    pub exclude_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlaceProductDto {
    /// Target position, or `null` to take the product out of the carousel.
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub carousel_order: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PlacementDto {
    pub product_id: i32,
    pub carousel_order: Option<i32>,
    pub shifted_count: u64,
    pub removed_entries: Vec<RemovedEntryDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReorderAssignmentDto {
    pub product_id: i32,
    #[serde(default)]
    #[schema(value_type = Option<i32>)]
    pub carousel_order: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReorderCarouselDto {
    pub assignments: Vec<ReorderAssignmentDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReorderResultDto {
    pub updated_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailablePositionsDto {
    pub positions: Vec<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarouselStatusDto {
    pub count: u64,
    pub max_size: i32,
    pub is_full: bool,
}
