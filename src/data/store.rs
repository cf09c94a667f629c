use super::booking::Booking;

/// Produces the collection with the matching booking flipped to paid.
///
/// Everything else passes through untouched, order included. An id that
/// matches nothing leaves the collection as-is: the id always comes from a
/// live selection, so a stale one simply finds no target.
pub fn mark_paid(bookings: &[Booking], booking_id: &str) -> Vec<Booking> {
    bookings
        .iter()
        .map(|booking| {
            if booking.id == booking_id {
                let mut paid = booking.clone();
                paid.is_paid = true;
                paid
            } else {
                booking.clone()
            }
        })
        .collect()
}

/// Produces the collection with the matching booking removed, preserving the
/// relative order of the rest. Unknown ids are a no-op, same as `mark_paid`.
///
/// Deliberately ignores the paid flag; whether cancellation is offered for
/// unpaid bookings is a presentation decision, not enforced here.
pub fn remove_booking(bookings: &[Booking], booking_id: &str) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|booking| booking.id != booking_id)
        .cloned()
        .collect()
}

pub fn revenue(bookings: &[Booking]) -> u32 {
    bookings
        .iter()
        .filter(|booking| booking.is_paid)
        .map(|booking| booking.total_price)
        .sum()
}

/// Session-scoped owner of the booking collection. There is no partial
/// update: every mutation computes the full next collection and swaps it in
/// through `replace_all`, so a render in between never sees a half-applied
/// transition.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new(seed: Vec<Booking>) -> Self {
        Self { bookings: seed }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn get(&self, booking_id: &str) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|booking| booking.id == booking_id)
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    pub fn replace_all(&mut self, next: Vec<Booking>) {
        self.bookings = next;
    }

    pub fn mark_paid(&mut self, booking_id: &str) {
        let next = mark_paid(&self.bookings, booking_id);
        self.replace_all(next);
    }

    pub fn cancel(&mut self, booking_id: &str) {
        let next = remove_booking(&self.bookings, booking_id);
        self.replace_all(next);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::booking::{Hotel, Room};

    fn booking(id: &str, is_paid: bool) -> Booking {
        Booking {
            id: id.to_string(),
            hotel: Hotel {
                name: "Urbanza Suites".to_string(),
                address: "Main Road 123 Street, 23 Colony".to_string(),
                city: "New York".to_string(),
            },
            room: Room {
                room_type: "Double Bed".to_string(),
                price_per_night: 399,
                images: vec!["/images/room1.png".to_string()],
            },
            guests: 2,
            check_in_date: "2025-04-30T05:17:22.000Z".to_string(),
            check_out_date: "2025-05-02T05:17:22.000Z".to_string(),
            total_price: 799,
            is_paid,
        }
    }

    #[test]
    fn mark_paid_flips_only_the_target() {
        let store = vec![booking("b1", false), booking("b2", false)];
        let next = mark_paid(&store, "b1");

        assert!(next[0].is_paid);
        assert_eq!(next[0].id, "b1");
        assert_eq!(next[1], store[1]);
        // Every non-paid field of the target survives.
        let mut expected = store[0].clone();
        expected.is_paid = true;
        assert_eq!(next[0], expected);
    }

    #[test]
    fn mark_paid_unknown_id_is_a_no_op() {
        let store = vec![booking("b1", false)];
        assert_eq!(mark_paid(&store, "nope"), store);
    }

    #[test]
    fn remove_booking_drops_the_target_and_keeps_order() {
        let store = vec![booking("b1", false), booking("b2", true), booking("b3", true)];
        let next = remove_booking(&store, "b2");

        assert_eq!(next.len(), 2);
        assert_eq!(next[0].id, "b1");
        assert_eq!(next[1].id, "b3");
        assert!(!next.iter().any(|b| b.id == "b2"));
    }

    #[test]
    fn remove_booking_unknown_id_is_a_no_op() {
        let store = vec![booking("b1", true)];
        assert_eq!(remove_booking(&store, "b9"), store);
    }

    #[test]
    fn remove_booking_ignores_the_paid_flag() {
        let store = vec![booking("b1", false)];
        assert!(remove_booking(&store, "b1").is_empty());
    }

    #[test]
    fn cancel_then_mark_paid_scenario() {
        let mut store = BookingStore::new(vec![booking("b1", false), booking("b2", true)]);

        store.cancel("b2");
        assert_eq!(store.len(), 1);
        assert_eq!(store.bookings()[0].id, "b1");
        assert!(!store.bookings()[0].is_paid);

        store.mark_paid("b1");
        assert!(store.get("b1").is_some_and(|b| b.is_paid));
    }

    #[test]
    fn replace_all_accepts_empty() {
        let mut store = BookingStore::new(vec![booking("b1", false)]);
        store.replace_all(Vec::new());
        assert!(store.is_empty());
    }

    #[test]
    fn revenue_counts_paid_bookings_only() {
        let store = vec![booking("b1", false), booking("b2", true), booking("b3", true)];
        assert_eq!(revenue(&store), 799 * 2);
    }
}
