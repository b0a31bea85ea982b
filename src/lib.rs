//! SportHub REST API
//!
//! A JSON API for community sports events: events with geocoded locations,
//! the sports offered at each event, and user reviews with a denormalized
//! average rating.

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

pub use config::Settings;
pub use handlers::{api_router, AppState};
pub use utils::errors::{ApiError, Result};
