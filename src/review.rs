//! Review entity
//!
//! Reviews carry an application-assigned creation timestamp in milliseconds
//! since the Unix epoch. The store passes it through untouched, so a reloaded
//! review reports exactly the time it was built with.

use crate::clock::{Clock, SystemClock};
use crate::restaurant::RestaurantId;
use crate::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display format for review timestamps, rendered in UTC.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y @ %-I:%M %p";

/// Database-assigned review identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub i64);

impl ReviewId {
    pub fn get(self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Render a millisecond timestamp with [`TIMESTAMP_FORMAT`]
pub fn format_timestamp(millis: i64) -> Result<String> {
    let at = DateTime::<Utc>::from_timestamp_millis(millis).ok_or(Error::InvalidTimestamp(millis))?;
    Ok(at.format(TIMESTAMP_FORMAT).to_string())
}

/// A review that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewReview {
    /// Name of the reviewer
    pub author: String,
    pub content: String,
    pub rating: i32,
    pub restaurant_id: RestaurantId,
    /// Milliseconds since the Unix epoch, captured at construction
    pub created_at: i64,
}

impl NewReview {
    /// Build a review stamped with the current system time
    pub fn new(
        author: impl Into<String>,
        content: impl Into<String>,
        rating: i32,
        restaurant_id: RestaurantId,
    ) -> Self {
        Self::with_clock(author, content, rating, restaurant_id, &SystemClock)
    }

    /// Build a review stamped by `clock`
    pub fn with_clock(
        author: impl Into<String>,
        content: impl Into<String>,
        rating: i32,
        restaurant_id: RestaurantId,
        clock: &dyn Clock,
    ) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
            rating,
            restaurant_id,
            created_at: clock.now_millis(),
        }
    }

    pub fn formatted_created_at(&self) -> Result<String> {
        format_timestamp(self.created_at)
    }
}

/// A stored review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    pub content: String,
    pub rating: i32,
    pub restaurant_id: RestaurantId,
    pub created_at: i64,
}

impl Review {
    /// Attach a freshly assigned identifier to an unsaved review
    pub fn from_new(id: ReviewId, new: &NewReview) -> Self {
        Self {
            id,
            author: new.author.clone(),
            content: new.content.clone(),
            rating: new.rating,
            restaurant_id: new.restaurant_id,
            created_at: new.created_at,
        }
    }

    pub fn formatted_created_at(&self) -> Result<String> {
        format_timestamp(self.created_at)
    }
}
