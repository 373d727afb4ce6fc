//! HTTP request handlers.

pub mod follow_handler;
pub mod user_handler;

pub use follow_handler::follow_routes;
pub use user_handler::user_routes;
