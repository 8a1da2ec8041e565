use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::model::carousel::{CAROUSEL_MAX_SIZE, CAROUSEL_MIN_POSITION},
};

/// Validation failures for carousel positions and reorder batches.
///
/// Raised before any store call is issued and never retried.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    /// Position is not an integer inside the carousel bounds.
    ///
    /// Holds the rejected value rendered as JSON.
    #[error(
        "carousel_order must be an integer between {min}-{max}, got {0}",
        min = CAROUSEL_MIN_POSITION,
        max = CAROUSEL_MAX_SIZE
    )]
    InvalidPosition(String),

    /// Reorder was called without any assignments.
    #[error("Reorder requires a non-empty list of assignments")]
    EmptyReorder,

    /// The same target position appears more than once in one reorder batch.
    #[error("Position {0} is assigned more than once in the reorder batch")]
    DuplicatePosition(i32),
}

/// Converts carousel validation errors into 400 Bad Request responses.
///
/// The message is safe to return to the client as-is.
impl IntoResponse for CarouselError {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected carousel request: {}", self);

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(self.to_string()))).into_response()
    }
}
