use async_trait::async_trait;

use super::domain::{NewRoom, Room};

/// Storage abstraction so routers and services can be exercised without a
/// database. Listing and slug lookups return only active rooms; `by_id`
/// returns soft-deleted rows too so callers can report them precisely.
#[async_trait]
pub trait RoomStore: Send + Sync {
    async fn active(&self) -> Result<Vec<Room>, RoomStoreError>;
    async fn featured(&self) -> Result<Vec<Room>, RoomStoreError>;
    async fn by_slug(&self, slug: &str) -> Result<Option<Room>, RoomStoreError>;
    async fn by_type(&self, room_type: &str) -> Result<Vec<Room>, RoomStoreError>;
    async fn by_id(&self, id: i64) -> Result<Option<Room>, RoomStoreError>;
    async fn insert(&self, room: NewRoom) -> Result<Room, RoomStoreError>;
}

/// Error enumeration for catalog store failures.
#[derive(Debug, thiserror::Error)]
pub enum RoomStoreError {
    #[error("room store unavailable: {0}")]
    Unavailable(String),
}
