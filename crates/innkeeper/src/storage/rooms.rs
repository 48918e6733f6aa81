use async_trait::async_trait;
use chrono::{NaiveDateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use super::column_decode;
use crate::rooms::domain::{NewRoom, Room};
use crate::rooms::repository::{RoomStore, RoomStoreError};

/// Room catalog backed by the `rooms` table.
#[derive(Clone)]
pub struct SqliteRoomStore {
    pool: SqlitePool,
}

impl SqliteRoomStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn unavailable(err: sqlx::Error) -> RoomStoreError {
    RoomStoreError::Unavailable(err.to_string())
}

fn string_list(row: &SqliteRow, column: &str) -> Result<Vec<String>, sqlx::Error> {
    let raw: String = row.try_get(column)?;
    serde_json::from_str(&raw).map_err(|err| column_decode(column, err.to_string()))
}

fn room_from_row(row: &SqliteRow) -> Result<Room, sqlx::Error> {
    Ok(Room {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        slug: row.try_get("slug")?,
        room_type: row.try_get("room_type")?,
        description: row.try_get("description")?,
        capacity: row.try_get("capacity")?,
        price_per_night: row.try_get("price_per_night")?,
        breakfast_included: row.try_get("breakfast_included")?,
        amenities: string_list(row, "amenities")?,
        images: string_list(row, "images")?,
        is_featured: row.try_get("is_featured")?,
        is_active: row.try_get("is_active")?,
        created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
        updated_at: row.try_get::<NaiveDateTime, _>("updated_at")?,
    })
}

fn rooms_from_rows(rows: Vec<SqliteRow>) -> Result<Vec<Room>, RoomStoreError> {
    rows.iter()
        .map(|row| room_from_row(row).map_err(unavailable))
        .collect()
}

#[async_trait]
impl RoomStore for SqliteRoomStore {
    async fn active(&self) -> Result<Vec<Room>, RoomStoreError> {
        let rows = sqlx::query("SELECT * FROM rooms WHERE is_active = 1 ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;
        rooms_from_rows(rows)
    }

    async fn featured(&self) -> Result<Vec<Room>, RoomStoreError> {
        let rows =
            sqlx::query("SELECT * FROM rooms WHERE is_active = 1 AND is_featured = 1 ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(unavailable)?;
        rooms_from_rows(rows)
    }

    async fn by_slug(&self, slug: &str) -> Result<Option<Room>, RoomStoreError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE slug = ?1 AND is_active = 1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;
        row.as_ref()
            .map(room_from_row)
            .transpose()
            .map_err(unavailable)
    }

    async fn by_type(&self, room_type: &str) -> Result<Vec<Room>, RoomStoreError> {
        let rows = sqlx::query("SELECT * FROM rooms WHERE room_type = ?1 AND is_active = 1 ORDER BY id")
            .bind(room_type)
            .fetch_all(&self.pool)
            .await
            .map_err(unavailable)?;
        rooms_from_rows(rows)
    }

    async fn by_id(&self, id: i64) -> Result<Option<Room>, RoomStoreError> {
        let row = sqlx::query("SELECT * FROM rooms WHERE id = ?1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(unavailable)?;
        row.as_ref()
            .map(room_from_row)
            .transpose()
            .map_err(unavailable)
    }

    async fn insert(&self, room: NewRoom) -> Result<Room, RoomStoreError> {
        let now = Utc::now().naive_utc();
        let amenities = serde_json::to_string(&room.amenities)
            .map_err(|err| RoomStoreError::Unavailable(err.to_string()))?;
        let images = serde_json::to_string(&room.images)
            .map_err(|err| RoomStoreError::Unavailable(err.to_string()))?;

        let result = sqlx::query(
            "INSERT INTO rooms (name, slug, room_type, description, capacity, price_per_night, \
             breakfast_included, amenities, images, is_featured, is_active, created_at, updated_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        )
        .bind(&room.name)
        .bind(&room.slug)
        .bind(&room.room_type)
        .bind(&room.description)
        .bind(room.capacity)
        .bind(room.price_per_night)
        .bind(room.breakfast_included)
        .bind(&amenities)
        .bind(&images)
        .bind(room.is_featured)
        .bind(room.is_active)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(Room {
            id: result.last_insert_rowid(),
            name: room.name,
            slug: room.slug,
            room_type: room.room_type,
            description: room.description,
            capacity: room.capacity,
            price_per_night: room.price_per_night,
            breakfast_included: room.breakfast_included,
            amenities: room.amenities,
            images: room.images,
            is_featured: room.is_featured,
            is_active: room.is_active,
            created_at: now,
            updated_at: now,
        })
    }
}
