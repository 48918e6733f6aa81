use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::rooms::domain::RoomSummary;

/// Calendar dates cross the wire as `DD-MM-YYYY` on inquiry payloads.
pub(crate) const WIRE_DATE_FORMAT: &str = "%d-%m-%Y";

/// Raw booking-inquiry payload as submitted. Every field is optional here;
/// the validation layer decides what is required for which kind.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingInquiryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub inquiry_type: Option<String>,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub check_in: Option<String>,
    #[serde(default)]
    pub check_out: Option<String>,
    #[serde(default)]
    pub guests: Option<u32>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw event-inquiry payload as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventInquiryRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_date: Option<String>,
    #[serde(default)]
    pub guest_count: Option<u32>,
    #[serde(default)]
    pub venue_preference: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Raw contact-form payload as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Kind of room inquiry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryKind {
    Booking,
    General,
}

impl InquiryKind {
    pub const fn label(self) -> &'static str {
        match self {
            InquiryKind::Booking => "booking",
            InquiryKind::General => "general",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "booking" => Some(Self::Booking),
            "general" => Some(Self::General),
            _ => None,
        }
    }
}

/// Triage status of a stored inquiry. This service only ever writes the
/// default; transitions belong to administrative tooling elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    New,
    Contacted,
    Closed,
}

impl InquiryStatus {
    pub const fn label(self) -> &'static str {
        match self {
            InquiryStatus::New => "new",
            InquiryStatus::Contacted => "contacted",
            InquiryStatus::Closed => "closed",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "new" => Some(Self::New),
            "contacted" => Some(Self::Contacted),
            "closed" => Some(Self::Closed),
            _ => None,
        }
    }
}

/// Kind of event the venue is being asked about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Wedding,
    Corporate,
    Birthday,
    Reunion,
    Graduation,
    Other,
}

impl EventKind {
    pub const fn label(self) -> &'static str {
        match self {
            EventKind::Wedding => "wedding",
            EventKind::Corporate => "corporate",
            EventKind::Birthday => "birthday",
            EventKind::Reunion => "reunion",
            EventKind::Graduation => "graduation",
            EventKind::Other => "other",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "wedding" => Some(Self::Wedding),
            "corporate" => Some(Self::Corporate),
            "birthday" => Some(Self::Birthday),
            "reunion" => Some(Self::Reunion),
            "graduation" => Some(Self::Graduation),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Sanitized room inquiry ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: InquiryKind,
    pub room_id: Option<i64>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub message: String,
}

/// Stored room inquiry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub kind: InquiryKind,
    pub room_id: Option<i64>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: NaiveDateTime,
}

/// Sanitized contact submission: the general inquiry to store plus the
/// subject line for the notification emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub inquiry: NewInquiry,
    pub subject: String,
}

/// Sanitized event inquiry ready to persist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEventInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_kind: EventKind,
    pub event_date: NaiveDate,
    pub guest_count: u32,
    pub venue_preference: Option<String>,
    pub message: String,
}

/// Stored event inquiry. Independent of room inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInquiry {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_kind: EventKind,
    pub event_date: NaiveDate,
    pub guest_count: u32,
    pub venue_preference: Option<String>,
    pub message: String,
    pub status: InquiryStatus,
    pub created_at: NaiveDateTime,
}

/// Wire representation of a stored room inquiry.
#[derive(Debug, Clone, Serialize)]
pub struct InquiryView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub inquiry_type: &'static str,
    pub room_id: Option<i64>,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<u32>,
    pub message: String,
    pub status: &'static str,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomSummary>,
}

impl Inquiry {
    pub fn view(&self, room: Option<RoomSummary>) -> InquiryView {
        InquiryView {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            inquiry_type: self.kind.label(),
            room_id: self.room_id,
            check_in: self.check_in.map(format_wire_date),
            check_out: self.check_out.map(format_wire_date),
            guests: self.guests,
            message: self.message.clone(),
            status: self.status.label(),
            created_at: format_wire_date(self.created_at.date()),
            room,
        }
    }
}

/// Wire representation of a stored event inquiry.
#[derive(Debug, Clone, Serialize)]
pub struct EventInquiryView {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub event_type: &'static str,
    pub event_date: String,
    pub guest_count: u32,
    pub venue_preference: Option<String>,
    pub message: String,
    pub status: &'static str,
    pub created_at: String,
}

impl EventInquiry {
    pub fn view(&self) -> EventInquiryView {
        EventInquiryView {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            event_type: self.event_kind.label(),
            event_date: format_wire_date(self.event_date),
            guest_count: self.guest_count,
            venue_preference: self.venue_preference.clone(),
            message: self.message.clone(),
            status: self.status.label(),
            created_at: format_wire_date(self.created_at.date()),
        }
    }
}

fn format_wire_date(date: NaiveDate) -> String {
    date.format(WIRE_DATE_FORMAT).to_string()
}
