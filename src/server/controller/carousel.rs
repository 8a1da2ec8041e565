use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::{ApiResponse, ErrorDto},
        carousel::{
            AvailablePositionsDto, CarouselEntryDto, CarouselStatusDto, ConflictResolutionDto,
            PlaceProductDto, PlacementDto, ReorderCarouselDto, ReorderResultDto,
            ResolveConflictDto,
        },
    },
    server::{
        error::AppError,
        model::carousel::{CarouselEntry, ReorderParams},
        service::carousel::CarouselService,
        state::AppState,
        util::parse::parse_carousel_order,
    },
};

/// Tag for grouping carousel endpoints in OpenAPI documentation
pub static CAROUSEL_TAG: &str = "carousel";

#[derive(Deserialize, IntoParams)]
pub struct ExcludeParams {
    /// Product whose own slot is ignored, typically the one being edited
    #[serde(default)]
    pub exclude_id: Option<i32>,
}

/// List carousel products.
///
/// Returns up to seven featured, active products, newest first, each with the URL
/// of its first small image. An empty carousel returns an empty list.
///
/// # Returns
/// - `200 OK` - Carousel entries
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/carousel",
    tag = CAROUSEL_TAG,
    responses(
        (status = 200, description = "Successfully retrieved carousel", body = ApiResponse<Vec<CarouselEntryDto>>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_carousel(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    let entries: Vec<CarouselEntryDto> = service
        .list()
        .await?
        .into_iter()
        .map(CarouselEntry::into_dto)
        .collect();
    let message = format!("Found {} carousel products", entries.len());

    Ok((StatusCode::OK, Json(ApiResponse::new(entries, message))))
}

/// Get carousel occupancy.
///
/// # Returns
/// - `200 OK` - Number of featured products and whether the carousel is full
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/carousel/status",
    tag = CAROUSEL_TAG,
    params(ExcludeParams),
    responses(
        (status = 200, description = "Successfully retrieved carousel status", body = ApiResponse<CarouselStatusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_carousel_status(
    State(state): State<AppState>,
    Query(params): Query<ExcludeParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    let status = service.status(params.exclude_id).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(status.into_dto(), "Carousel status retrieved")),
    ))
}

/// List free carousel positions.
///
/// # Returns
/// - `200 OK` - Positions not held by any featured product, ascending
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/carousel/available-positions",
    tag = CAROUSEL_TAG,
    params(ExcludeParams),
    responses(
        (status = 200, description = "Successfully retrieved available positions", body = ApiResponse<AvailablePositionsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_available_positions(
    State(state): State<AppState>,
    Query(params): Query<ExcludeParams>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    let positions: Vec<i32> = service
        .available_positions(params.exclude_id)
        .await?
        .into_iter()
        .collect();
    let message = format!("{} positions available", positions.len());

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(AvailablePositionsDto { positions }, message)),
    ))
}

/// Resolve a carousel position conflict.
///
/// Makes room at `carousel_order` ahead of creating or updating a product there. The
/// caller assigns the product its position afterwards. `null` or `0` is a no-op.
///
/// # Returns
/// - `200 OK` - Number of shifted products and the products evicted
/// - `400 Bad Request` - Invalid position
/// - `409 Conflict` - Concurrent write claimed the same position
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/carousel/conflicts",
    tag = CAROUSEL_TAG,
    request_body = ResolveConflictDto,
    responses(
        (status = 200, description = "Successfully resolved conflict", body = ApiResponse<ConflictResolutionDto>),
        (status = 400, description = "Invalid position", body = ErrorDto),
        (status = 409, description = "Position claimed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resolve_carousel_conflict(
    State(state): State<AppState>,
    Json(payload): Json<ResolveConflictDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    let new_order = parse_carousel_order(&payload.carousel_order)?;
    let resolution = service
        .resolve_conflict(new_order, payload.exclude_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            resolution.into_dto(),
            "Carousel conflict resolved",
        )),
    ))
}

/// Set a product's carousel position.
///
/// Resolves conflicts at the target position, then features the product there.
/// `null` or `0` takes the product out of the carousel.
///
/// # Returns
/// - `200 OK` - Final position and the conflict outcome
/// - `400 Bad Request` - Invalid position
/// - `404 Not Found` - Product does not exist or is inactive
/// - `409 Conflict` - Concurrent write claimed the same position
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/carousel/products/{product_id}",
    tag = CAROUSEL_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    request_body = PlaceProductDto,
    responses(
        (status = 200, description = "Successfully placed product", body = ApiResponse<PlacementDto>),
        (status = 400, description = "Invalid position", body = ErrorDto),
        (status = 404, description = "Product not found", body = ErrorDto),
        (status = 409, description = "Position claimed concurrently", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn place_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
    Json(payload): Json<PlaceProductDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    let new_order = parse_carousel_order(&payload.carousel_order)?;
    let outcome = service.place(product_id, new_order).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            outcome.into_dto(),
            "Carousel position updated",
        )),
    ))
}

/// Remove a product from the carousel.
///
/// Idempotent; unknown or non-featured products are not an error.
///
/// # Returns
/// - `204 No Content` - Product is not featured anymore
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/api/carousel/products/{product_id}",
    tag = CAROUSEL_TAG,
    params(
        ("product_id" = i32, Path, description = "Product ID")
    ),
    responses(
        (status = 204, description = "Successfully removed product from carousel"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_product(
    State(state): State<AppState>,
    Path(product_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    service.remove(product_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Reorder the carousel.
///
/// Applies a batch of `{product_id, carousel_order}` assignments in one transaction.
///
/// # Returns
/// - `200 OK` - Number of products updated
/// - `400 Bad Request` - Empty batch, invalid or duplicate position
/// - `409 Conflict` - A target position is held by a product outside the batch
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    patch,
    path = "/api/carousel/order",
    tag = CAROUSEL_TAG,
    request_body = ReorderCarouselDto,
    responses(
        (status = 200, description = "Successfully reordered carousel", body = ApiResponse<ReorderResultDto>),
        (status = 400, description = "Invalid reorder batch", body = ErrorDto),
        (status = 409, description = "Target position already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn reorder_carousel(
    State(state): State<AppState>,
    Json(payload): Json<ReorderCarouselDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = CarouselService::new(&state.db);

    let assignments = payload
        .assignments
        .into_iter()
        .map(ReorderParams::from)
        .collect();
    let updated_count = service.reorder(assignments).await?;

    Ok((
        StatusCode::OK,
        Json(ApiResponse::new(
            ReorderResultDto { updated_count },
            format!("Reordered {} carousel products", updated_count),
        )),
    ))
}
