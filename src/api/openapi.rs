//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, rooms};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Roomdesk API",
        version = "0.1.0",
        description = "Hotel room administration REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api", description = "API")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Rooms
        rooms::create_room,
        rooms::update_room,
        rooms::get_all_rooms,
        rooms::get_room,
        rooms::delete_room,
        rooms::get_room_price,
    ),
    components(
        schemas(
            // Rooms
            crate::models::room::RoomDto,
            crate::models::room::PriceQuote,
            crate::models::enums::RoomType,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "rooms", description = "Room management and pricing")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
