pub mod advisory;
pub mod chat;
pub mod diagnosis;
pub mod health;
pub mod listings;
