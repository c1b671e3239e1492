//! GearLoan School Equipment Lending System
//!
//! A Rust server for a school equipment lending tracker: catalog browsing,
//! borrow requests moving through an approval lifecycle, availability
//! bookkeeping, booking conflict detection and overdue fines, served over a
//! REST JSON API. State lives in an in-memory store seeded at startup; the
//! only durable state is the cached session user.

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
