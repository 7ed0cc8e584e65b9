//! # reviewdb - restaurant review persistence
//!
//! Data layer for a restaurant-review application.
//!
//! reviewdb provides:
//! - `Restaurant` and `Review` entities with two-phase construction
//!   (`NewRestaurant` / `NewReview` before insert, identified entities after)
//! - SQLite-backed stores with scoped per-operation connections
//! - Application-assigned review timestamps through an injectable `Clock`

pub mod clock;
pub mod config;
pub mod logging;
pub mod restaurant;
pub mod review;
pub mod storage;

// Re-exports for convenient access
pub use clock::{Clock, ManualClock, SystemClock};
pub use restaurant::{NewRestaurant, Restaurant, RestaurantId};
pub use review::{NewReview, Review, ReviewId};
pub use storage::{
    Database, DbStats, RestaurantStore, ReviewStore, SqliteRestaurantStore, SqliteReviewStore,
};

/// Result type alias for reviewdb operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for reviewdb operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Database is closed")]
    Closed,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Restaurant not found: {0}")]
    RestaurantNotFound(RestaurantId),

    #[error("Review not found: {0}")]
    ReviewNotFound(ReviewId),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(i64),
}
