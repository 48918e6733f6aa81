use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use chrono::Utc;
use serde_json::Value;

use crate::config::BusinessProfile;
use crate::inquiries::domain::{
    BookingInquiryRequest, ContactRequest, EventInquiry, EventInquiryRequest, Inquiry,
    InquiryStatus, NewEventInquiry, NewInquiry,
};
use crate::inquiries::notify::{EmailMessage, MailError, Mailer};
use crate::inquiries::repository::{InquiryStore, InquiryStoreError};
use crate::inquiries::service::InquiryService;
use crate::rooms::domain::{NewRoom, Room};
use crate::rooms::repository::{RoomStore, RoomStoreError};

pub(super) fn business() -> BusinessProfile {
    BusinessProfile {
        name: "Greenhill Gardens Guest House".to_string(),
        email: "stay@greenhillgardens.co.ke".to_string(),
        phone: "+254700000000".to_string(),
        whatsapp: "+254700000000".to_string(),
        location: "Kericho, Kenya".to_string(),
    }
}

pub(super) fn booking_request() -> BookingInquiryRequest {
    BookingInquiryRequest {
        name: Some("Test User".to_string()),
        email: Some("test@example.com".to_string()),
        phone: Some("+254700000000".to_string()),
        inquiry_type: Some("booking".to_string()),
        room_id: Some(1),
        check_in: Some("2099-03-15".to_string()),
        check_out: Some("2099-03-17".to_string()),
        guests: Some(2),
        message: Some("We would like to book this room for two nights.".to_string()),
    }
}

pub(super) fn event_request() -> EventInquiryRequest {
    EventInquiryRequest {
        name: Some("Jane Smith".to_string()),
        email: Some("jane@example.com".to_string()),
        phone: Some("+254711000000".to_string()),
        event_type: Some("wedding".to_string()),
        event_date: Some("2099-06-20".to_string()),
        guest_count: Some(150),
        venue_preference: Some("field_1".to_string()),
        message: Some("We would like to hold our wedding reception here.".to_string()),
    }
}

pub(super) fn contact_request() -> ContactRequest {
    ContactRequest {
        name: Some("John Doe".to_string()),
        email: Some("john@example.com".to_string()),
        phone: None,
        subject: None,
        message: Some("I have a question about airport transfers.".to_string()),
    }
}

/// In-memory inquiry store tracking both tables.
#[derive(Default)]
pub(super) struct MemoryInquiries {
    inquiries: Mutex<Vec<Inquiry>>,
    events: Mutex<Vec<EventInquiry>>,
}

impl MemoryInquiries {
    pub(super) fn inquiries(&self) -> Vec<Inquiry> {
        self.inquiries.lock().expect("inquiry mutex poisoned").clone()
    }

    pub(super) fn events(&self) -> Vec<EventInquiry> {
        self.events.lock().expect("event mutex poisoned").clone()
    }
}

#[async_trait]
impl InquiryStore for MemoryInquiries {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError> {
        let mut guard = self.inquiries.lock().expect("inquiry mutex poisoned");
        let stored = Inquiry {
            id: guard.len() as i64 + 1,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            kind: inquiry.kind,
            room_id: inquiry.room_id,
            check_in: inquiry.check_in,
            check_out: inquiry.check_out,
            guests: inquiry.guests,
            message: inquiry.message,
            status: InquiryStatus::New,
            created_at: Utc::now().naive_utc(),
        };
        guard.push(stored.clone());
        Ok(stored)
    }

    async fn insert_event(
        &self,
        inquiry: NewEventInquiry,
    ) -> Result<EventInquiry, InquiryStoreError> {
        let mut guard = self.events.lock().expect("event mutex poisoned");
        let stored = EventInquiry {
            id: guard.len() as i64 + 1,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            event_kind: inquiry.event_kind,
            event_date: inquiry.event_date,
            guest_count: inquiry.guest_count,
            venue_preference: inquiry.venue_preference,
            message: inquiry.message,
            status: InquiryStatus::New,
            created_at: Utc::now().naive_utc(),
        };
        guard.push(stored.clone());
        Ok(stored)
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let guard = self.inquiries.lock().expect("inquiry mutex poisoned");
        Ok(guard.iter().rev().take(limit as usize).cloned().collect())
    }

    async fn recent_events(&self, limit: u32) -> Result<Vec<EventInquiry>, InquiryStoreError> {
        let guard = self.events.lock().expect("event mutex poisoned");
        Ok(guard.iter().rev().take(limit as usize).cloned().collect())
    }
}

/// Inquiry store standing in for an unreachable database.
pub(super) struct UnavailableInquiries;

#[async_trait]
impl InquiryStore for UnavailableInquiries {
    async fn insert(&self, _inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError> {
        Err(InquiryStoreError::Unavailable("database offline".to_string()))
    }

    async fn insert_event(
        &self,
        _inquiry: NewEventInquiry,
    ) -> Result<EventInquiry, InquiryStoreError> {
        Err(InquiryStoreError::Unavailable("database offline".to_string()))
    }

    async fn recent(&self, _limit: u32) -> Result<Vec<Inquiry>, InquiryStoreError> {
        Err(InquiryStoreError::Unavailable("database offline".to_string()))
    }

    async fn recent_events(&self, _limit: u32) -> Result<Vec<EventInquiry>, InquiryStoreError> {
        Err(InquiryStoreError::Unavailable("database offline".to_string()))
    }
}

/// In-memory room catalog pre-populated with a single active room (id 1).
pub(super) struct MemoryRooms {
    rooms: Mutex<Vec<Room>>,
}

impl Default for MemoryRooms {
    fn default() -> Self {
        let now = Utc::now().naive_utc();
        Self {
            rooms: Mutex::new(vec![Room {
                id: 1,
                name: "Deluxe Room 1".to_string(),
                slug: "deluxe-room-1".to_string(),
                room_type: "deluxe".to_string(),
                description: "Cozy deluxe room.".to_string(),
                capacity: 2,
                price_per_night: 5000,
                breakfast_included: true,
                amenities: vec!["WiFi".to_string()],
                images: Vec::new(),
                is_featured: true,
                is_active: true,
                created_at: now,
                updated_at: now,
            }]),
        }
    }
}

impl MemoryRooms {
    pub(super) fn deactivated(id: i64) -> Self {
        let store = Self::default();
        {
            let mut guard = store.rooms.lock().expect("room mutex poisoned");
            for room in guard.iter_mut() {
                if room.id == id {
                    room.is_active = false;
                }
            }
        }
        store
    }
}

#[async_trait]
impl RoomStore for MemoryRooms {
    async fn active(&self) -> Result<Vec<Room>, RoomStoreError> {
        let guard = self.rooms.lock().expect("room mutex poisoned");
        Ok(guard.iter().filter(|room| room.is_active).cloned().collect())
    }

    async fn featured(&self) -> Result<Vec<Room>, RoomStoreError> {
        let guard = self.rooms.lock().expect("room mutex poisoned");
        Ok(guard
            .iter()
            .filter(|room| room.is_active && room.is_featured)
            .cloned()
            .collect())
    }

    async fn by_slug(&self, slug: &str) -> Result<Option<Room>, RoomStoreError> {
        let guard = self.rooms.lock().expect("room mutex poisoned");
        Ok(guard
            .iter()
            .find(|room| room.is_active && room.slug == slug)
            .cloned())
    }

    async fn by_type(&self, room_type: &str) -> Result<Vec<Room>, RoomStoreError> {
        let guard = self.rooms.lock().expect("room mutex poisoned");
        Ok(guard
            .iter()
            .filter(|room| room.is_active && room.room_type == room_type)
            .cloned()
            .collect())
    }

    async fn by_id(&self, id: i64) -> Result<Option<Room>, RoomStoreError> {
        let guard = self.rooms.lock().expect("room mutex poisoned");
        Ok(guard.iter().find(|room| room.id == id).cloned())
    }

    async fn insert(&self, room: NewRoom) -> Result<Room, RoomStoreError> {
        let mut guard = self.rooms.lock().expect("room mutex poisoned");
        let now = Utc::now().naive_utc();
        let stored = Room {
            id: guard.len() as i64 + 1,
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
        };
        guard.push(stored.clone());
        Ok(stored)
    }
}

/// Mailer that records every message it is asked to send.
#[derive(Default)]
pub(super) struct RecordingMailer {
    messages: Mutex<Vec<EmailMessage>>,
}

impl RecordingMailer {
    pub(super) fn messages(&self) -> Vec<EmailMessage> {
        self.messages.lock().expect("mailer mutex poisoned").clone()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, message: EmailMessage) -> Result<(), MailError> {
        self.messages
            .lock()
            .expect("mailer mutex poisoned")
            .push(message);
        Ok(())
    }
}

/// Mailer standing in for an unreachable transport.
pub(super) struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _message: EmailMessage) -> Result<(), MailError> {
        Err(MailError::Transport("smtp relay refused".to_string()))
    }
}

pub(super) type TestService = InquiryService<MemoryInquiries, MemoryRooms, RecordingMailer>;

pub(super) fn build_service() -> (
    Arc<TestService>,
    Arc<MemoryInquiries>,
    Arc<MemoryRooms>,
    Arc<RecordingMailer>,
) {
    let store = Arc::new(MemoryInquiries::default());
    let rooms = Arc::new(MemoryRooms::default());
    let mailer = Arc::new(RecordingMailer::default());
    let service = Arc::new(InquiryService::new(
        store.clone(),
        rooms.clone(),
        mailer.clone(),
        business(),
    ));
    (service, store, rooms, mailer)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
