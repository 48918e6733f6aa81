use std::sync::Arc;

use chrono::Local;
use tracing::{error, info};

use super::domain::{
    BookingInquiryRequest, ContactRequest, ContactSubmission, EventInquiryRequest,
    EventInquiryView, InquiryView,
};
use super::notify::{
    booking_confirmation, booking_notification, contact_confirmation, contact_notification,
    event_confirmation, event_notification, EmailMessage, Mailer,
};
use super::repository::{InquiryStore, InquiryStoreError};
use super::validate::{self, ValidationError};
use crate::config::BusinessProfile;
use crate::rooms::domain::Room;
use crate::rooms::repository::{RoomStore, RoomStoreError};

/// Service composing validation, persistence, and best-effort notification.
/// Each submission is validated, written as a single row, and then two
/// emails (owner + submitter) are attempted; mail failures are logged and
/// never fail the request.
pub struct InquiryService<S, R, M> {
    store: Arc<S>,
    rooms: Arc<R>,
    mailer: Arc<M>,
    business: BusinessProfile,
}

impl<S, R, M> InquiryService<S, R, M>
where
    S: InquiryStore + 'static,
    R: RoomStore + 'static,
    M: Mailer + 'static,
{
    pub fn new(store: Arc<S>, rooms: Arc<R>, mailer: Arc<M>, business: BusinessProfile) -> Self {
        Self {
            store,
            rooms,
            mailer,
            business,
        }
    }

    /// Submit a room booking inquiry.
    pub async fn submit_booking(
        &self,
        request: BookingInquiryRequest,
    ) -> Result<InquiryView, InquiryServiceError> {
        let submission = validate::booking(request, Local::now().date_naive())?;
        let room = self.referenced_room(submission.room_id).await?;

        let inquiry = self.store.insert(submission).await?;
        info!(inquiry_id = inquiry.id, email = %inquiry.email, "booking inquiry stored");

        self.dispatch(booking_notification(&inquiry, room.as_ref(), &self.business))
            .await;
        self.dispatch(booking_confirmation(&inquiry, room.as_ref(), &self.business))
            .await;

        Ok(inquiry.view(room.map(|room| room.summary())))
    }

    /// Submit an event-venue inquiry.
    pub async fn submit_event(
        &self,
        request: EventInquiryRequest,
    ) -> Result<EventInquiryView, InquiryServiceError> {
        let submission = validate::event(request, Local::now().date_naive())?;

        let inquiry = self.store.insert_event(submission).await?;
        info!(inquiry_id = inquiry.id, email = %inquiry.email, "event inquiry stored");

        self.dispatch(event_notification(&inquiry, &self.business))
            .await;
        self.dispatch(event_confirmation(&inquiry, &self.business))
            .await;

        Ok(inquiry.view())
    }

    /// Submit a contact-form message, stored as a `general` inquiry.
    pub async fn submit_contact(
        &self,
        request: ContactRequest,
    ) -> Result<InquiryView, InquiryServiceError> {
        let ContactSubmission { inquiry, subject } = validate::contact(request)?;

        let stored = self.store.insert(inquiry).await?;
        info!(inquiry_id = stored.id, email = %stored.email, "contact message stored");

        self.dispatch(contact_notification(&stored, &subject, &self.business))
            .await;
        self.dispatch(contact_confirmation(&stored, &self.business))
            .await;

        Ok(stored.view(None))
    }

    /// Resolve a referenced room, rejecting ids that do not point at an
    /// active room.
    async fn referenced_room(
        &self,
        room_id: Option<i64>,
    ) -> Result<Option<Room>, InquiryServiceError> {
        let Some(room_id) = room_id else {
            return Ok(None);
        };

        let room = self
            .rooms
            .by_id(room_id)
            .await?
            .filter(|room| room.is_active)
            .ok_or(ValidationError::UnknownRoom(room_id))?;

        Ok(Some(room))
    }

    async fn dispatch(&self, message: EmailMessage) {
        let subject = message.subject.clone();
        if let Err(err) = self.mailer.send(message).await {
            error!(error = %err, subject = %subject, "notification email failed");
        }
    }
}

/// Error raised by the inquiry service.
#[derive(Debug, thiserror::Error)]
pub enum InquiryServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] InquiryStoreError),
    #[error(transparent)]
    Catalog(#[from] RoomStoreError),
}
