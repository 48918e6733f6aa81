use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::json;

use super::domain::{BookingInquiryRequest, ContactRequest, EventInquiryRequest};
use super::notify::Mailer;
use super::repository::InquiryStore;
use super::service::{InquiryService, InquiryServiceError};
use crate::rooms::repository::RoomStore;

/// Router builder exposing the inquiry submission endpoints.
pub fn inquiries_router<S, R, M>(service: Arc<InquiryService<S, R, M>>) -> Router
where
    S: InquiryStore + 'static,
    R: RoomStore + 'static,
    M: Mailer + 'static,
{
    Router::new()
        .route("/api/inquiries", post(booking_handler::<S, R, M>))
        .route("/api/inquiries/event", post(event_handler::<S, R, M>))
        .route("/api/contact", post(contact_handler::<S, R, M>))
        .with_state(service)
}

pub(crate) async fn booking_handler<S, R, M>(
    State(service): State<Arc<InquiryService<S, R, M>>>,
    axum::Json(request): axum::Json<BookingInquiryRequest>,
) -> Response
where
    S: InquiryStore + 'static,
    R: RoomStore + 'static,
    M: Mailer + 'static,
{
    match service.submit_booking(request).await {
        Ok(view) => {
            let payload = json!({
                "success": true,
                "message": "Inquiry submitted successfully",
                "inquiry": view,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn event_handler<S, R, M>(
    State(service): State<Arc<InquiryService<S, R, M>>>,
    axum::Json(request): axum::Json<EventInquiryRequest>,
) -> Response
where
    S: InquiryStore + 'static,
    R: RoomStore + 'static,
    M: Mailer + 'static,
{
    match service.submit_event(request).await {
        Ok(view) => {
            let payload = json!({
                "success": true,
                "message": "Event inquiry submitted successfully",
                "inquiry": view,
            });
            (StatusCode::CREATED, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn contact_handler<S, R, M>(
    State(service): State<Arc<InquiryService<S, R, M>>>,
    axum::Json(request): axum::Json<ContactRequest>,
) -> Response
where
    S: InquiryStore + 'static,
    R: RoomStore + 'static,
    M: Mailer + 'static,
{
    match service.submit_contact(request).await {
        Ok(_) => {
            let payload = json!({
                "success": true,
                "message": "Your message has been sent successfully. We will get back to you soon!",
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

fn error_response(err: InquiryServiceError) -> Response {
    match err {
        InquiryServiceError::Validation(err) => {
            let payload = json!({
                "success": false,
                "error": err.to_string(),
                "error_type": "validation_error",
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        other => {
            // Store failures stay generic on the wire; details go to the log.
            tracing::error!(error = %other, "inquiry submission failed");
            let payload = json!({
                "success": false,
                "error": "Database operation failed. Please try again.",
                "error_type": "database_error",
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
