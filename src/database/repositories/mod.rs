//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod event;
pub mod review;
pub mod sport;
pub mod user;

// Re-export repositories
pub use event::EventRepository;
pub use review::ReviewRepository;
pub use sport::SportRepository;
pub use user::UserRepository;
