//! SQLite-backed implementations of the catalog and inquiry store seams.

mod inquiries;
mod rooms;

pub use inquiries::SqliteInquiryStore;
pub use rooms::SqliteRoomStore;

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Open a connection pool for the configured database URL, creating the
/// file on first use.
pub async fn connect(url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

    // An in-memory database lives per connection; a larger pool would hand
    // out connections that never saw the schema.
    let max_connections = if url.contains(":memory:") { 1 } else { 5 };

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

const CREATE_ROOMS: &str = "\
CREATE TABLE IF NOT EXISTS rooms (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    slug TEXT NOT NULL UNIQUE,
    room_type TEXT NOT NULL,
    description TEXT NOT NULL,
    capacity INTEGER NOT NULL,
    price_per_night INTEGER NOT NULL,
    breakfast_included INTEGER NOT NULL DEFAULT 1,
    amenities TEXT NOT NULL DEFAULT '[]',
    images TEXT NOT NULL DEFAULT '[]',
    is_featured INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

const CREATE_INQUIRIES: &str = "\
CREATE TABLE IF NOT EXISTS inquiries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    kind TEXT NOT NULL,
    room_id INTEGER REFERENCES rooms(id),
    check_in TEXT,
    check_out TEXT,
    guests INTEGER,
    message TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'new',
    created_at TEXT NOT NULL
)";

const CREATE_EVENT_INQUIRIES: &str = "\
CREATE TABLE IF NOT EXISTS event_inquiries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    phone TEXT NOT NULL,
    event_type TEXT NOT NULL,
    event_date TEXT NOT NULL,
    guest_count INTEGER NOT NULL,
    venue_preference TEXT,
    message TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'new',
    created_at TEXT NOT NULL
)";

/// Create the tables if they do not exist yet. Safe to run on every start.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for statement in [CREATE_ROOMS, CREATE_INQUIRIES, CREATE_EVENT_INQUIRIES] {
        sqlx::query(statement).execute(pool).await?;
    }
    Ok(())
}

/// Build a `ColumnDecode` error for a value the schema should have ruled out.
pub(crate) fn column_decode(column: &str, message: String) -> sqlx::Error {
    sqlx::Error::ColumnDecode {
        index: column.to_string(),
        source: message.into(),
    }
}
