//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - restaurants(id, name, address, zip, phone, website, email)
//! - reviews(id, author, content, rating, createdat, restaurant_id)
//!
//! `Database` hands out one connection per operation. The stores are thin
//! translators between rows and entities on top of it.

pub mod database;
pub mod schema;
pub mod sqlite;

pub use database::{Database, DbStats};
pub use sqlite::{SqliteRestaurantStore, SqliteReviewStore};

use crate::Result;
use crate::restaurant::{NewRestaurant, Restaurant, RestaurantId};
use crate::review::{NewReview, Review, ReviewId};

/// Persistence for restaurants.
pub trait RestaurantStore {
    /// Insert a restaurant and return it with its assigned identifier
    fn add(&self, restaurant: &NewRestaurant) -> Result<Restaurant>;

    /// Fails with `Error::RestaurantNotFound` if no such restaurant exists
    fn find_by_id(&self, id: RestaurantId) -> Result<Restaurant>;

    /// All restaurants in insertion order
    fn get_all(&self) -> Result<Vec<Restaurant>>;

    fn count(&self) -> Result<usize>;
}

/// Persistence for reviews.
pub trait ReviewStore {
    /// Insert a review and return it with its assigned identifier
    fn add(&self, review: &NewReview) -> Result<Review>;

    /// Fails with `Error::ReviewNotFound` if no such review exists
    fn find_by_id(&self, id: ReviewId) -> Result<Review>;

    /// Every review across all restaurants, in insertion order
    fn get_all(&self) -> Result<Vec<Review>>;

    /// Reviews for one restaurant in insertion order.
    ///
    /// Empty if the restaurant has no reviews or does not exist.
    fn get_all_by_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Review>>;

    /// Reviews for one restaurant, most recently created first
    fn get_all_by_restaurant_sorted_newest_to_oldest(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Review>>;

    fn count(&self) -> Result<usize>;
}
