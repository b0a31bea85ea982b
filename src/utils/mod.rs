//! Utility modules

pub mod errors;
pub mod geo;
pub mod helpers;
pub mod logging;
pub mod pagination;
pub mod validation;
