pub mod booking_draft;
pub mod health;
pub mod tool;
pub mod v1;
