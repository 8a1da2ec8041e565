use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller::carousel, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(title = "Storefront API"),
    tags((name = "carousel", description = "Featured product carousel"))
)]
struct ApiDoc;

pub fn router() -> Router<AppState> {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(carousel::get_carousel))
        .routes(routes!(carousel::get_carousel_status))
        .routes(routes!(carousel::get_available_positions))
        .routes(routes!(carousel::resolve_carousel_conflict))
        .routes(routes!(carousel::place_product, carousel::remove_product))
        .routes(routes!(carousel::reorder_carousel))
        .split_for_parts();

    router.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
