use serde::{Deserialize, Serialize};

use super::booking::{Booking, Hotel, Room};

static SEED_BOOKINGS: &str = include_str!("seed_bookings.json");

/// The dummy bookings every session starts from. There is no persistence
/// behind this; reloading the page starts over from the same records.
pub fn user_bookings() -> Vec<Booking> {
    match serde_json::from_str(SEED_BOOKINGS) {
        Ok(bookings) => bookings,
        Err(err) => {
            leptos::logging::error!("failed to parse seed bookings: {err}");
            Vec::new()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturedRoom {
    pub hotel: Hotel,
    pub room: Room,
    pub rating: f32,
}

pub fn featured_rooms() -> Vec<FeaturedRoom> {
    vec![
        FeaturedRoom {
            hotel: Hotel {
                name: "Urbanza Suites".to_string(),
                address: "Main Road 123 Street, 23 Colony".to_string(),
                city: "New York".to_string(),
            },
            room: Room {
                room_type: "Double Bed".to_string(),
                price_per_night: 399,
                images: vec!["/images/rooms/urbanza-double-1.png".to_string()],
            },
            rating: 4.5,
        },
        FeaturedRoom {
            hotel: Hotel {
                name: "The Grand Resort".to_string(),
                address: "Ocean Drive 8, Seaside Quarter".to_string(),
                city: "Los Angeles".to_string(),
            },
            room: Room {
                room_type: "Luxury Room".to_string(),
                price_per_night: 299,
                images: vec!["/images/rooms/grand-luxury-1.png".to_string()],
            },
            rating: 4.8,
        },
        FeaturedRoom {
            hotel: Hotel {
                name: "Velvet Nights Inn".to_string(),
                address: "Harbour View 12, Old Town".to_string(),
                city: "Chicago".to_string(),
            },
            room: Room {
                room_type: "Family Suite".to_string(),
                price_per_night: 349,
                images: vec!["/images/rooms/velvet-suite-1.png".to_string()],
            },
            rating: 4.3,
        },
        FeaturedRoom {
            hotel: Hotel {
                name: "Crystal Waters Resort".to_string(),
                address: "Palm Boulevard 45, Lagoon District".to_string(),
                city: "Miami".to_string(),
            },
            room: Room {
                room_type: "Single Bed".to_string(),
                price_per_night: 199,
                images: vec!["/images/rooms/crystal-single-1.png".to_string()],
            },
            rating: 4.1,
        },
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub quote: &'static str,
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            name: "Emma Rodriguez",
            location: "Barcelona, Spain",
            quote: "I've used many booking platforms before, but none compare to the personalized experience and attention to detail that StayHaven provides.",
        },
        Testimonial {
            name: "Liam Johnson",
            location: "New York, USA",
            quote: "StayHaven is my go-to platform for hotel bookings. Exceptional service and stunning properties, every single time.",
        },
        Testimonial {
            name: "Sophia Lee",
            location: "Seoul, South Korea",
            quote: "Amazing selection of stays and a booking flow that takes seconds. Managing my reservations has never been easier.",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_bookings_parse_and_have_unique_ids() {
        let bookings = user_bookings();
        assert!(!bookings.is_empty());

        let ids: HashSet<_> = bookings.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), bookings.len());
    }

    #[test]
    fn seed_contains_both_initial_payment_states() {
        let bookings = user_bookings();
        assert!(bookings.iter().any(|b| b.is_paid));
        assert!(bookings.iter().any(|b| !b.is_paid));
    }
}
