//! HTTP request handlers for API endpoints.

pub mod catalog;
pub mod health;

pub use catalog::{
    SharedService, create_handler, delete_handler, get_handler, list_handler, patch_handler,
    update_handler,
};
pub use health::health_handler;
