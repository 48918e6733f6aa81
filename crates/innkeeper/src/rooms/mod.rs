//! Room catalog: seeded inventory exposed read-only through the API.

pub mod domain;
pub mod repository;
pub mod router;
pub mod seed;

pub use domain::{NewRoom, Room, RoomSummary, RoomView};
pub use repository::{RoomStore, RoomStoreError};
pub use router::rooms_router;
pub use seed::{seed_rooms, SeedOutcome};
