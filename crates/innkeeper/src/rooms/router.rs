use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde_json::json;

use super::domain::Room;
use super::repository::RoomStore;

/// Router builder exposing the read-only catalog endpoints.
pub fn rooms_router<R>(store: Arc<R>) -> Router
where
    R: RoomStore + 'static,
{
    Router::new()
        .route("/api/rooms", get(list_handler::<R>))
        .route("/api/rooms/featured", get(featured_handler::<R>))
        .route("/api/rooms/:slug", get(slug_handler::<R>))
        .route("/api/rooms/type/:room_type", get(type_handler::<R>))
        .with_state(store)
}

pub(crate) async fn list_handler<R>(State(store): State<Arc<R>>) -> Response
where
    R: RoomStore + 'static,
{
    match store.active().await {
        Ok(rooms) => room_listing(rooms, None),
        Err(err) => store_error(err),
    }
}

pub(crate) async fn featured_handler<R>(State(store): State<Arc<R>>) -> Response
where
    R: RoomStore + 'static,
{
    match store.featured().await {
        Ok(rooms) => room_listing(rooms, None),
        Err(err) => store_error(err),
    }
}

pub(crate) async fn slug_handler<R>(
    State(store): State<Arc<R>>,
    Path(slug): Path<String>,
) -> Response
where
    R: RoomStore + 'static,
{
    match store.by_slug(&slug).await {
        Ok(Some(room)) => {
            let payload = json!({
                "success": true,
                "room": room.view(),
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Ok(None) => {
            let payload = json!({
                "success": false,
                "error": "Room not found",
                "error_type": "not_found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(err) => store_error(err),
    }
}

pub(crate) async fn type_handler<R>(
    State(store): State<Arc<R>>,
    Path(room_type): Path<String>,
) -> Response
where
    R: RoomStore + 'static,
{
    match store.by_type(&room_type).await {
        Ok(rooms) => room_listing(rooms, Some(room_type)),
        Err(err) => store_error(err),
    }
}

fn room_listing(rooms: Vec<Room>, room_type: Option<String>) -> Response {
    let views: Vec<_> = rooms.iter().map(Room::view).collect();
    let payload = match room_type {
        Some(room_type) => json!({
            "success": true,
            "type": room_type,
            "count": views.len(),
            "rooms": views,
        }),
        None => json!({
            "success": true,
            "count": views.len(),
            "rooms": views,
        }),
    };
    (StatusCode::OK, axum::Json(payload)).into_response()
}

fn store_error(err: super::repository::RoomStoreError) -> Response {
    tracing::error!(error = %err, "room catalog lookup failed");
    let payload = json!({
        "success": false,
        "error": "Database operation failed. Please try again.",
        "error_type": "database_error",
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
}
