pub mod booking_row;
pub mod home;
pub mod my_bookings;
pub mod owner;
pub mod payment_modal;
pub mod title;
