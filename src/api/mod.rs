//! API handlers for Roomdesk REST endpoints

pub mod alerts;
pub mod health;
pub mod openapi;
pub mod pagination;
pub mod rooms;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        FromRequest, FromRequestParts,
    },
    middleware,
    routing::get,
    Router,
};

use crate::{error::AppError, telemetry, AppState};

/// JSON body extractor whose rejections use the application error body
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Query string extractor, same error body as [`AppJson`]
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Routes mounted under `/api`
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Rooms
        .route(
            "/rooms",
            get(rooms::get_all_rooms)
                .post(rooms::create_room)
                .put(rooms::update_room),
        )
        .route("/rooms/:id", get(rooms::get_room).delete(rooms::delete_room))
        .route("/rooms/:id/price", get(rooms::get_room_price))
        .route_layer(middleware::from_fn(telemetry::track_metrics))
        .with_state(state)
}
