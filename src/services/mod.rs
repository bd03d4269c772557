//! Business logic services

pub mod rooms;

use std::sync::Arc;

use crate::repository::RoomStore;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub rooms: rooms::RoomsService,
}

impl Services {
    /// Create all services on top of the given room store
    pub fn new(store: Arc<dyn RoomStore>) -> Self {
        Self {
            rooms: rooms::RoomsService::new(store),
        }
    }
}
