//! In-memory room store, used for development and tests

use std::{cmp::Ordering, collections::BTreeMap, sync::Arc};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::RoomStore;
use crate::{
    error::{AppError, AppResult},
    models::{
        page::{Direction, SortProperty},
        Page, PageRequest, RoomDto,
    },
};

#[derive(Debug, Default)]
struct Inner {
    rooms: BTreeMap<i64, RoomDto>,
    next_id: i64,
}

#[derive(Debug, Default, Clone)]
pub struct InMemoryRoomStore {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryRoomStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.rooms.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Ascending order. A missing floor sorts after every floor, so it comes
/// last ascending and first descending, as PostgreSQL orders NULLs.
fn compare(a: &RoomDto, b: &RoomDto, property: SortProperty) -> Ordering {
    match property {
        SortProperty::Id => a.id.cmp(&b.id),
        SortProperty::RoomNumber => a.room_number.cmp(&b.room_number),
        SortProperty::RoomType => a.room_type.as_str().cmp(b.room_type.as_str()),
        SortProperty::Floor => match (a.floor, b.floor) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

#[async_trait]
impl RoomStore for InMemoryRoomStore {
    async fn save(&self, room: &RoomDto) -> AppResult<RoomDto> {
        let mut inner = self.inner.write().await;
        let now = Utc::now();

        let stored = match room.id {
            None => {
                inner.next_id += 1;
                RoomDto {
                    id: Some(inner.next_id),
                    crea_date: Some(now),
                    modif_date: Some(now),
                    ..room.clone()
                }
            }
            Some(id) => {
                let existing = inner
                    .rooms
                    .get(&id)
                    .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))?;
                RoomDto {
                    crea_date: existing.crea_date,
                    modif_date: Some(now),
                    ..room.clone()
                }
            }
        };

        if let Some(id) = stored.id {
            inner.rooms.insert(id, stored.clone());
        }
        Ok(stored)
    }

    async fn find_all(&self, request: &PageRequest) -> AppResult<Page<RoomDto>> {
        let sort = request.sort()?;
        let inner = self.inner.read().await;

        let mut rooms: Vec<RoomDto> = inner.rooms.values().cloned().collect();
        rooms.sort_by(|a, b| {
            let ordering = compare(a, b, sort.property);
            let ordering = match sort.direction {
                Direction::Asc => ordering,
                Direction::Desc => ordering.reverse(),
            };
            ordering.then_with(|| a.id.cmp(&b.id))
        });

        let total = rooms.len() as i64;
        let content = rooms
            .into_iter()
            .skip(request.offset() as usize)
            .take(request.size() as usize)
            .collect();

        Ok(Page::new(content, request, total))
    }

    async fn find_one(&self, id: i64) -> AppResult<Option<RoomDto>> {
        Ok(self.inner.read().await.rooms.get(&id).cloned())
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        self.inner.write().await.rooms.remove(&id);
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}
