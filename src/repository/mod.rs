//! Repository layer for room persistence

pub mod memory;
pub mod rooms;

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Page, PageRequest, RoomDto},
};

pub use memory::InMemoryRoomStore;
pub use rooms::RoomsRepository;

/// Persistence of room records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomStore: Send + Sync {
    /// Insert the room when it has no id, replace the stored record otherwise.
    ///
    /// Returns the stored representation. Replacing an unknown id is a
    /// `NotFound` error.
    async fn save(&self, room: &RoomDto) -> AppResult<RoomDto>;

    /// One page of rooms, ordered as requested
    async fn find_all(&self, request: &PageRequest) -> AppResult<Page<RoomDto>>;

    async fn find_one(&self, id: i64) -> AppResult<Option<RoomDto>>;

    /// Delete by id; deleting an unknown id is not an error
    async fn delete(&self, id: i64) -> AppResult<()>;

    /// Check that the backing storage is reachable
    async fn ping(&self) -> AppResult<()>;
}
