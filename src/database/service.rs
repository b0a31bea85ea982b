//! Database service layer
//!
//! Bundles the repositories behind one injected handle.

use crate::database::{DatabasePool, EventRepository, ReviewRepository, SportRepository, UserRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub events: EventRepository,
    pub sports: SportRepository,
    pub reviews: ReviewRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            sports: SportRepository::new(pool.clone()),
            reviews: ReviewRepository::new(pool),
        }
    }
}
