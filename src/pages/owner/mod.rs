pub mod add_room;
pub mod dashboard;
pub mod layout;
