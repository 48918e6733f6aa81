use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A guest room or standalone cottage in the inventory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub room_type: String,
    pub description: String,
    pub capacity: u32,
    /// Nightly rate in KSh.
    pub price_per_night: u32,
    pub breakfast_included: bool,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub is_active: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Room payload accepted by the store before an id is assigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub slug: String,
    pub room_type: String,
    pub description: String,
    pub capacity: u32,
    pub price_per_night: u32,
    pub breakfast_included: bool,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub is_active: bool,
}

/// Wire representation returned by the catalog endpoints. The soft-delete
/// flag stays internal; timestamps go out as ISO 8601.
#[derive(Debug, Clone, Serialize)]
pub struct RoomView {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub room_type: String,
    pub description: String,
    pub capacity: u32,
    pub price_per_night: u32,
    pub breakfast_included: bool,
    pub amenities: Vec<String>,
    pub images: Vec<String>,
    pub is_featured: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// Abbreviated room block embedded in inquiry responses and emails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoomSummary {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub room_type: String,
}

impl Room {
    pub fn view(&self) -> RoomView {
        RoomView {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            room_type: self.room_type.clone(),
            description: self.description.clone(),
            capacity: self.capacity,
            price_per_night: self.price_per_night,
            breakfast_included: self.breakfast_included,
            amenities: self.amenities.clone(),
            images: self.images.clone(),
            is_featured: self.is_featured,
            created_at: self.created_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
            updated_at: self.updated_at.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }

    pub fn summary(&self) -> RoomSummary {
        RoomSummary {
            id: self.id,
            name: self.name.clone(),
            slug: self.slug.clone(),
            room_type: self.room_type.clone(),
        }
    }

    /// URL-safe identifier derived from a display name.
    pub fn slug_for(name: &str) -> String {
        name.to_lowercase().replace([' ', '/'], "-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn slug_for_replaces_separators() {
        assert_eq!(Room::slug_for("Garden Cottage"), "garden-cottage");
        assert_eq!(Room::slug_for("Twin/Family Room"), "twin-family-room");
    }

    #[test]
    fn view_formats_timestamps_as_iso() {
        let stamp = NaiveDate::from_ymd_opt(2026, 1, 5)
            .expect("valid date")
            .and_hms_opt(8, 30, 0)
            .expect("valid time");
        let room = Room {
            id: 1,
            name: "Deluxe Room 1".to_string(),
            slug: "deluxe-room-1".to_string(),
            room_type: "deluxe".to_string(),
            description: "A room".to_string(),
            capacity: 2,
            price_per_night: 5000,
            breakfast_included: true,
            amenities: vec!["WiFi".to_string()],
            images: Vec::new(),
            is_featured: true,
            is_active: true,
            created_at: stamp,
            updated_at: stamp,
        };

        let view = room.view();
        assert_eq!(view.created_at, "2026-01-05T08:30:00");
        assert_eq!(view.room_type, "deluxe");
    }
}
