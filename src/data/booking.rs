use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: String,
    pub address: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    #[serde(rename = "roomType")]
    pub room_type: String,
    #[serde(rename = "pricePerNight")]
    pub price_per_night: u32,
    pub images: Vec<String>,
}

/// One reservation as held for the whole session. Ids are unique within the
/// collection; the seed source guarantees that on entry and the lifecycle
/// operations preserve it (they never mint ids).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(rename = "_id")]
    pub id: String,
    pub hotel: Hotel,
    pub room: Room,
    pub guests: u32,
    #[serde(rename = "checkInDate")]
    pub check_in_date: String,
    #[serde(rename = "checkOutDate")]
    pub check_out_date: String,
    #[serde(rename = "totalPrice")]
    pub total_price: u32,
    #[serde(rename = "isPaid")]
    pub is_paid: bool,
}

impl Booking {
    pub fn first_image(&self) -> Option<&str> {
        self.room.images.first().map(String::as_str)
    }
}
