//! ToolLink - Peer-to-Peer Tool Rental Marketplace
//!
//! A Rust REST JSON API server for listing tools, renting them out for a
//! priced duration, and tracking availability, wishlists and lender earnings.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
