use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;

use super::column_decode;
use crate::inquiries::domain::{
    EventInquiry, EventKind, Inquiry, InquiryKind, InquiryStatus, NewEventInquiry, NewInquiry,
};
use crate::inquiries::repository::{InquiryStore, InquiryStoreError};

/// Inquiry persistence backed by the `inquiries` and `event_inquiries`
/// tables. Every insert is a single statement.
#[derive(Clone)]
pub struct SqliteInquiryStore {
    pool: SqlitePool,
}

impl SqliteInquiryStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn unavailable(err: sqlx::Error) -> InquiryStoreError {
    InquiryStoreError::Unavailable(err.to_string())
}

fn status_from_row(row: &SqliteRow) -> Result<InquiryStatus, sqlx::Error> {
    let raw: String = row.try_get("status")?;
    InquiryStatus::parse(&raw)
        .ok_or_else(|| column_decode("status", format!("unknown inquiry status '{raw}'")))
}

fn inquiry_from_row(row: &SqliteRow) -> Result<Inquiry, sqlx::Error> {
    let kind_raw: String = row.try_get("kind")?;
    let kind = InquiryKind::parse(&kind_raw)
        .ok_or_else(|| column_decode("kind", format!("unknown inquiry kind '{kind_raw}'")))?;

    Ok(Inquiry {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        kind,
        room_id: row.try_get("room_id")?,
        check_in: row.try_get::<Option<NaiveDate>, _>("check_in")?,
        check_out: row.try_get::<Option<NaiveDate>, _>("check_out")?,
        guests: row.try_get("guests")?,
        message: row.try_get("message")?,
        status: status_from_row(row)?,
        created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
    })
}

fn event_from_row(row: &SqliteRow) -> Result<EventInquiry, sqlx::Error> {
    let kind_raw: String = row.try_get("event_type")?;
    let event_kind = EventKind::parse(&kind_raw)
        .ok_or_else(|| column_decode("event_type", format!("unknown event type '{kind_raw}'")))?;

    Ok(EventInquiry {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        event_kind,
        event_date: row.try_get::<NaiveDate, _>("event_date")?,
        guest_count: row.try_get("guest_count")?,
        venue_preference: row.try_get("venue_preference")?,
        message: row.try_get("message")?,
        status: status_from_row(row)?,
        created_at: row.try_get::<NaiveDateTime, _>("created_at")?,
    })
}

#[async_trait]
impl InquiryStore for SqliteInquiryStore {
    async fn insert(&self, inquiry: NewInquiry) -> Result<Inquiry, InquiryStoreError> {
        let now = Utc::now().naive_utc();
        let status = InquiryStatus::New;

        let result = sqlx::query(
            "INSERT INTO inquiries (name, email, phone, kind, room_id, check_in, check_out, \
             guests, message, status, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(inquiry.kind.label())
        .bind(inquiry.room_id)
        .bind(inquiry.check_in)
        .bind(inquiry.check_out)
        .bind(inquiry.guests)
        .bind(&inquiry.message)
        .bind(status.label())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(Inquiry {
            id: result.last_insert_rowid(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            kind: inquiry.kind,
            room_id: inquiry.room_id,
            check_in: inquiry.check_in,
            check_out: inquiry.check_out,
            guests: inquiry.guests,
            message: inquiry.message,
            status,
            created_at: now,
        })
    }

    async fn insert_event(
        &self,
        inquiry: NewEventInquiry,
    ) -> Result<EventInquiry, InquiryStoreError> {
        let now = Utc::now().naive_utc();
        let status = InquiryStatus::New;

        let result = sqlx::query(
            "INSERT INTO event_inquiries (name, email, phone, event_type, event_date, \
             guest_count, venue_preference, message, status, created_at) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )
        .bind(&inquiry.name)
        .bind(&inquiry.email)
        .bind(&inquiry.phone)
        .bind(inquiry.event_kind.label())
        .bind(inquiry.event_date)
        .bind(inquiry.guest_count)
        .bind(&inquiry.venue_preference)
        .bind(&inquiry.message)
        .bind(status.label())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(unavailable)?;

        Ok(EventInquiry {
            id: result.last_insert_rowid(),
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            event_kind: inquiry.event_kind,
            event_date: inquiry.event_date,
            guest_count: inquiry.guest_count,
            venue_preference: inquiry.venue_preference,
            message: inquiry.message,
            status,
            created_at: now,
        })
    }

    async fn recent(&self, limit: u32) -> Result<Vec<Inquiry>, InquiryStoreError> {
        let rows =
            sqlx::query("SELECT * FROM inquiries ORDER BY created_at DESC, id DESC LIMIT ?1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(unavailable)?;
        rows.iter()
            .map(|row| inquiry_from_row(row).map_err(unavailable))
            .collect()
    }

    async fn recent_events(&self, limit: u32) -> Result<Vec<EventInquiry>, InquiryStoreError> {
        let rows =
            sqlx::query("SELECT * FROM event_inquiries ORDER BY created_at DESC, id DESC LIMIT ?1")
                .bind(limit)
                .fetch_all(&self.pool)
                .await
                .map_err(unavailable)?;
        rows.iter()
            .map(|row| event_from_row(row).map_err(unavailable))
            .collect()
    }
}
