//! Room service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::{Page, PageRequest, PriceQuote, RoomDto},
    repository::RoomStore,
    telemetry,
};

pub const ENTITY_NAME: &str = "room";

#[derive(Clone)]
pub struct RoomsService {
    store: Arc<dyn RoomStore>,
}

impl RoomsService {
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self { store }
    }

    /// Persist a new room. A room that already carries an id is rejected
    /// before the store is touched.
    pub async fn create(&self, room: &RoomDto) -> AppResult<RoomDto> {
        if room.id.is_some() {
            return Err(AppError::bad_request_alert(
                "A new room cannot already have an ID",
                ENTITY_NAME,
                "idexists",
            ));
        }
        validate(room)?;

        let saved = self.store.save(room).await?;
        tracing::info!("Created room {:?} ({})", saved.id, saved.room_number);
        Ok(saved)
    }

    /// Replace the room stored under `id` with `room`
    pub async fn update(&self, id: i64, room: RoomDto) -> AppResult<RoomDto> {
        let room = RoomDto { id: Some(id), ..room };
        validate(&room)?;

        let saved = self.store.save(&room).await?;
        tracing::info!("Updated room {}", id);
        Ok(saved)
    }

    pub async fn find_all(&self, request: &PageRequest) -> AppResult<Page<RoomDto>> {
        self.store.find_all(request).await
    }

    pub async fn find_one(&self, id: i64) -> AppResult<Option<RoomDto>> {
        self.store.find_one(id).await
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.store.delete(id).await?;
        tracing::info!("Deleted room {}", id);
        Ok(())
    }

    /// Price a stay in the given room according to its type
    pub async fn quote(&self, id: i64, number_of_days: i64, number_of_people: i64) -> AppResult<PriceQuote> {
        let room = self
            .store
            .find_one(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;

        telemetry::record_price_quote(room.room_type);

        Ok(PriceQuote {
            room_id: id,
            room_type: room.room_type,
            number_of_days,
            number_of_people,
            price: room.room_type.price(number_of_days, number_of_people),
        })
    }

    pub async fn ping(&self) -> AppResult<()> {
        self.store.ping().await
    }
}

fn validate(room: &RoomDto) -> AppResult<()> {
    room.validate()
        .map_err(|e| AppError::Validation(e.to_string()))
}
