pub mod booking;
pub mod payment;
pub mod seed;
pub mod store;
