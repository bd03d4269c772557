//! Room endpoints

use axum::{
    extract::State,
    http::{header::LOCATION, HeaderMap, HeaderValue, StatusCode},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::{PageRequest, PriceQuery, PriceQuote, RoomDto},
    services::rooms::ENTITY_NAME,
    AppState,
};

use super::{alerts, pagination, AppJson, AppPath, AppQuery};

/// Collection path, used for `Location` and pagination links
pub const ROOMS_PATH: &str = "/api/rooms";

type SavedRoom = (StatusCode, HeaderMap, Json<RoomDto>);

async fn create(state: &AppState, room: RoomDto) -> AppResult<SavedRoom> {
    let saved = state.services.rooms.create(&room).await?;
    let id = saved
        .id
        .ok_or_else(|| AppError::Internal("Stored room has no id".to_string()))?;

    let mut headers = alerts::entity_creation_alert(ENTITY_NAME, &id.to_string());
    let location = HeaderValue::from_str(&format!("{}/{}", ROOMS_PATH, id))
        .map_err(|e| AppError::Internal(e.to_string()))?;
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(saved)))
}

/// Create a new room
#[utoipa::path(
    post,
    path = "/rooms",
    tag = "rooms",
    request_body = RoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Room already has an ID or is invalid", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_room(
    State(state): State<AppState>,
    AppJson(room): AppJson<RoomDto>,
) -> AppResult<SavedRoom> {
    tracing::debug!("REST request to save Room : {:?}", room);
    create(&state, room).await
}

/// Update an existing room; a room without ID is created instead
#[utoipa::path(
    put,
    path = "/rooms",
    tag = "rooms",
    request_body = RoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 201, description = "Room had no ID and was created", body = RoomDto),
        (status = 400, description = "Invalid room", body = crate::error::ErrorResponse),
        (status = 404, description = "No room with this ID", body = crate::error::ErrorResponse)
    )
)]
pub async fn update_room(
    State(state): State<AppState>,
    AppJson(room): AppJson<RoomDto>,
) -> AppResult<SavedRoom> {
    tracing::debug!("REST request to update Room : {:?}", room);
    let Some(id) = room.id else {
        return create(&state, room).await;
    };

    let saved = state.services.rooms.update(id, room).await?;
    let headers = alerts::entity_update_alert(ENTITY_NAME, &id.to_string());
    Ok((StatusCode::OK, headers, Json(saved)))
}

/// Get a page of rooms
#[utoipa::path(
    get,
    path = "/rooms",
    tag = "rooms",
    params(PageRequest),
    responses(
        (status = 200, description = "Page of rooms, with X-Total-Count and Link headers", body = Vec<RoomDto>),
        (status = 400, description = "Unknown sort property or malformed paging parameter", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_all_rooms(
    State(state): State<AppState>,
    AppQuery(request): AppQuery<PageRequest>,
) -> AppResult<(HeaderMap, Json<Vec<RoomDto>>)> {
    tracing::debug!("REST request to get a page of Rooms");
    let page = state.services.rooms.find_all(&request).await?;
    let headers = pagination::pagination_headers(&page, ROOMS_PATH);
    Ok((headers, Json(page.content)))
}

/// Get a room by ID
#[utoipa::path(
    get,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room details", body = RoomDto),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_room(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<Json<RoomDto>> {
    tracing::debug!("REST request to get Room : {}", id);
    state
        .services
        .rooms
        .find_one(id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
}

/// Delete a room by ID
#[utoipa::path(
    delete,
    path = "/rooms/{id}",
    tag = "rooms",
    params(("id" = i64, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room deleted (or already absent)")
    )
)]
pub async fn delete_room(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> AppResult<(StatusCode, HeaderMap)> {
    tracing::debug!("REST request to delete Room : {}", id);
    state.services.rooms.delete(id).await?;
    Ok((StatusCode::OK, alerts::entity_deletion_alert(ENTITY_NAME, &id.to_string())))
}

/// Price a stay in a room
#[utoipa::path(
    get,
    path = "/rooms/{id}/price",
    tag = "rooms",
    params(
        ("id" = i64, Path, description = "Room ID"),
        PriceQuery
    ),
    responses(
        (status = 200, description = "Price of the stay", body = PriceQuote),
        (status = 400, description = "Missing or malformed days / people", body = crate::error::ErrorResponse),
        (status = 404, description = "Room not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_room_price(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppQuery(query): AppQuery<PriceQuery>,
) -> AppResult<Json<PriceQuote>> {
    tracing::debug!("REST request to price Room {} : {:?}", id, query);
    let quote = state.services.rooms.quote(id, query.days, query.people).await?;
    Ok(Json(quote))
}
