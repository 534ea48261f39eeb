//! User account service

use crate::{
    error::AppResult,
    models::user::{CreateUser, Credentials, UpdateUser, User},
    repository::Repository,
};

#[derive(Clone)]
pub struct UsersService {
    repository: Repository,
}

impl UsersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Register a new account
    pub async fn register(&self, user: CreateUser) -> AppResult<u64> {
        self.repository.users.create(&user).await
    }

    /// Match an id/credential pair against the stored accounts
    pub async fn login(&self, credentials: Credentials) -> AppResult<Vec<User>> {
        self.repository.users.find_by_credentials(&credentials).await
    }

    /// Update a profile
    pub async fn update_profile(&self, update: UpdateUser) -> AppResult<u64> {
        self.repository.users.update(&update).await
    }
}
