//! Repository layer for database operations

pub mod rentals;
pub mod tools;
pub mod users;
pub mod wishlist;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub users: users::UsersRepository,
    pub tools: tools::ToolsRepository,
    pub rentals: rentals::RentalsRepository,
    pub wishlist: wishlist::WishlistRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            users: users::UsersRepository::new(pool.clone()),
            tools: tools::ToolsRepository::new(pool.clone()),
            rentals: rentals::RentalsRepository::new(pool.clone()),
            wishlist: wishlist::WishlistRepository::new(pool.clone()),
            pool,
        }
    }
}
