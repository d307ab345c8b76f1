// Presentation layer - HTTP surface for the host page
pub mod app_state;
pub mod handlers;
pub mod payload;
