// Presentation layer - HTTP surface and page shell
pub mod app_state;
pub mod errors;
pub mod handlers;
pub mod page;
