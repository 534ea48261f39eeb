//! Business logic services

pub mod catalog;
pub mod rentals;
pub mod users;
pub mod wishlist;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub users: users::UsersService,
    pub catalog: catalog::CatalogService,
    pub rentals: rentals::RentalsService,
    pub wishlist: wishlist::WishlistService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            users: users::UsersService::new(repository.clone()),
            catalog: catalog::CatalogService::new(repository.clone()),
            rentals: rentals::RentalsService::new(repository.clone()),
            wishlist: wishlist::WishlistService::new(repository),
        }
    }
}
