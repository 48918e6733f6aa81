use super::domain::NewRoom;
use super::repository::{RoomStore, RoomStoreError};

/// Counts reported by the seed routine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedOutcome {
    pub inserted: usize,
    pub skipped: usize,
}

/// Insert the built-in catalog, skipping rooms whose slug already exists.
/// Safe to run repeatedly.
pub async fn seed_rooms<R: RoomStore>(store: &R) -> Result<SeedOutcome, RoomStoreError> {
    let mut outcome = SeedOutcome::default();

    for room in catalog() {
        if store.by_slug(&room.slug).await?.is_some() {
            outcome.skipped += 1;
            continue;
        }
        store.insert(room).await?;
        outcome.inserted += 1;
    }

    Ok(outcome)
}

fn room(
    name: &str,
    room_type: &str,
    description: &str,
    capacity: u32,
    price_per_night: u32,
    amenities: &[&str],
    images: &[&str],
    is_featured: bool,
) -> NewRoom {
    NewRoom {
        name: name.to_string(),
        slug: super::domain::Room::slug_for(name),
        room_type: room_type.to_string(),
        description: description.to_string(),
        capacity,
        price_per_night,
        breakfast_included: true,
        amenities: amenities.iter().map(|value| value.to_string()).collect(),
        images: images.iter().map(|value| value.to_string()).collect(),
        is_featured,
        is_active: true,
    }
}

/// The property's room inventory. Nightly rates in KSh; breakfast for two is
/// part of every rate.
pub fn catalog() -> Vec<NewRoom> {
    const DELUXE_AMENITIES: &[&str] = &[
        "Double bed",
        "En-suite bathroom",
        "Hot shower",
        "WiFi",
        "Work desk",
        "Wardrobe",
        "Complimentary toiletries",
    ];
    const EXECUTIVE_AMENITIES: &[&str] = &[
        "King-size bed",
        "Premium bedding",
        "En-suite bathroom",
        "Hot shower",
        "WiFi",
        "TV with DSTV",
        "Private balcony",
        "Garden view",
        "Executive work desk",
        "Large wardrobe",
        "Complimentary toiletries",
    ];

    vec![
        room(
            "Deluxe Room 1",
            "deluxe",
            "Cozy deluxe room for couples, with a double bed, en-suite bathroom \
             with hot shower, and garden views. Breakfast for two included.",
            2,
            5000,
            DELUXE_AMENITIES,
            &[
                "/images/rooms/deluxe-1-main.jpg",
                "/images/rooms/deluxe-1-view.jpg",
            ],
            true,
        ),
        room(
            "Deluxe Room 2",
            "deluxe",
            "Well-appointed deluxe room suited to business travelers and \
             couples alike, with a comfortable double bed and a quiet aspect \
             over the gardens. Breakfast for two included.",
            2,
            5000,
            DELUXE_AMENITIES,
            &[
                "/images/rooms/deluxe-2-main.jpg",
                "/images/rooms/deluxe-2-bed.jpg",
            ],
            true,
        ),
        room(
            "Deluxe Room 3",
            "deluxe",
            "Inviting deluxe room with everything needed for a restful stay: \
             WiFi, a work desk, and views of the grounds. Breakfast for two \
             included in the rate.",
            2,
            5000,
            DELUXE_AMENITIES,
            &[
                "/images/rooms/deluxe-3-main.jpg",
                "/images/rooms/deluxe-3-view.jpg",
            ],
            false,
        ),
        room(
            "Double Room",
            "double",
            "Spacious double room for couples or small families wanting extra \
             space, with a large double bed, generous storage, and a modern \
             en-suite bathroom. Breakfast for two included.",
            2,
            6000,
            &[
                "Large double bed",
                "En-suite bathroom",
                "Hot shower",
                "WiFi",
                "Large wardrobe",
                "Work desk",
                "Complimentary toiletries",
            ],
            &[
                "/images/rooms/double-main.jpg",
                "/images/rooms/double-bed.jpg",
                "/images/rooms/double-bathroom.jpg",
            ],
            true,
        ),
        room(
            "Executive Room 1",
            "executive",
            "Premium executive room with high-quality bedding, a spacious \
             en-suite bathroom, and a private balcony over the gardens. \
             Breakfast for two included.",
            2,
            6000,
            EXECUTIVE_AMENITIES,
            &[
                "/images/rooms/executive-1-main.jpg",
                "/images/rooms/executive-1-bathroom.jpg",
                "/images/rooms/executive-1-balcony.jpg",
            ],
            true,
        ),
        room(
            "Executive Room 2",
            "executive",
            "Sophisticated executive room with a king-size bed and a balcony \
             view of the grounds, equally suited to work trips and getaways. \
             Breakfast for two included.",
            2,
            6000,
            EXECUTIVE_AMENITIES,
            &[
                "/images/rooms/executive-2-main.jpg",
                "/images/rooms/executive-2-bed.jpg",
                "/images/rooms/executive-2-view.jpg",
            ],
            false,
        ),
        room(
            "Garden Cottage",
            "cottage",
            "Standalone cottage tucked into the gardens, with a separate \
             living area, kitchenette, and private patio. Sleeps three. \
             Breakfast for two included.",
            3,
            7000,
            &[
                "Queen-size bed",
                "Separate living area",
                "Kitchenette",
                "Mini fridge",
                "En-suite bathroom",
                "Hot shower",
                "WiFi",
                "TV with DSTV",
                "Private patio",
                "Garden view",
                "Outdoor seating",
                "Work desk",
                "Large wardrobe",
                "Complimentary toiletries",
            ],
            &[
                "/images/rooms/cottage-exterior.jpg",
                "/images/rooms/cottage-interior.jpg",
                "/images/rooms/cottage-living.jpg",
                "/images/rooms/cottage-patio.jpg",
            ],
            true,
        ),
    ]
}
