//! PostgreSQL rooms repository

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Pool, Postgres};

use super::RoomStore;
use crate::{
    error::{AppError, AppResult},
    models::{Page, PageRequest, RoomDto},
};

#[derive(Clone)]
pub struct RoomsRepository {
    pool: Pool<Postgres>,
}

impl RoomsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    async fn insert(&self, room: &RoomDto) -> AppResult<RoomDto> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, RoomDto>(
            r#"
            INSERT INTO rooms (room_number, room_type, floor, description, crea_date, modif_date)
            VALUES ($1, $2, $3, $4, $5, $5)
            RETURNING *
            "#,
        )
        .bind(&room.room_number)
        .bind(room.room_type)
        .bind(room.floor)
        .bind(&room.description)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn replace(&self, id: i64, room: &RoomDto) -> AppResult<RoomDto> {
        sqlx::query_as::<_, RoomDto>(
            r#"
            UPDATE rooms
            SET room_number = $2, room_type = $3, floor = $4, description = $5, modif_date = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&room.room_number)
        .bind(room.room_type)
        .bind(room.floor)
        .bind(&room.description)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Room {} not found", id)))
    }
}

#[async_trait]
impl RoomStore for RoomsRepository {
    async fn save(&self, room: &RoomDto) -> AppResult<RoomDto> {
        match room.id {
            None => self.insert(room).await,
            Some(id) => self.replace(id, room).await,
        }
    }

    async fn find_all(&self, request: &PageRequest) -> AppResult<Page<RoomDto>> {
        let sort = request.sort()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rooms")
            .fetch_one(&self.pool)
            .await?;

        // Column and direction come from closed enums, never from raw input
        let select_q = format!(
            "SELECT * FROM rooms ORDER BY {} {}, id ASC LIMIT $1 OFFSET $2",
            sort.property.column(),
            sort.direction.as_sql()
        );
        let rows = sqlx::query_as::<_, RoomDto>(&select_q)
            .bind(request.size())
            .bind(request.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok(Page::new(rows, request, total))
    }

    async fn find_one(&self, id: i64) -> AppResult<Option<RoomDto>> {
        let row = sqlx::query_as::<_, RoomDto>("SELECT * FROM rooms WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            tracing::debug!("Room {} was already absent", id);
        }
        Ok(())
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
