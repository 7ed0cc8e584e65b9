//! SQLite store implementations

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OptionalExtension, Params, params};

use super::{Database, RestaurantStore, ReviewStore};
use crate::restaurant::{NewRestaurant, Restaurant, RestaurantId};
use crate::review::{NewReview, Review, ReviewId};
use crate::{Error, Result};

const RESTAURANT_COLUMNS: &str = "id, name, address, zip, phone, website, email";
const REVIEW_COLUMNS: &str = "id, author, content, rating, createdat, restaurant_id";

impl ToSql for RestaurantId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for RestaurantId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(RestaurantId)
    }
}

impl ToSql for ReviewId {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for ReviewId {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(ReviewId)
    }
}

/// Run `sql` and collect every row, failing on the first bad row
fn query_all<T, P, F>(conn: &Connection, sql: &str, params: P, map: F) -> Result<Vec<T>>
where
    P: Params,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<T>,
{
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map(params, map)?
        .collect::<rusqlite::Result<Vec<T>>>()?;
    Ok(rows)
}

fn count_rows(conn: &Connection, table: &str) -> Result<usize> {
    let count: i64 = conn.query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| row.get(0))?;
    Ok(count as usize)
}

// ========== Restaurants ==========

/// Restaurant persistence over a [`Database`]
#[derive(Debug, Clone, Copy)]
pub struct SqliteRestaurantStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteRestaurantStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Helper to convert a row to a Restaurant
    fn row_to_restaurant(row: &rusqlite::Row) -> rusqlite::Result<Restaurant> {
        Ok(Restaurant {
            id: row.get(0)?,
            name: row.get(1)?,
            address: row.get(2)?,
            zip: row.get(3)?,
            phone: row.get(4)?,
            website: row.get(5)?,
            email: row.get(6)?,
        })
    }
}

impl RestaurantStore for SqliteRestaurantStore<'_> {
    fn add(&self, restaurant: &NewRestaurant) -> Result<Restaurant> {
        self.db.with_connection(|conn| {
            conn.execute(
                r#"
                INSERT INTO restaurants (name, address, zip, phone, website, email)
                VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                "#,
                params![
                    restaurant.name,
                    restaurant.address,
                    restaurant.zip,
                    restaurant.phone,
                    restaurant.website,
                    restaurant.email,
                ],
            )?;
            let id = RestaurantId(conn.last_insert_rowid());
            tracing::debug!("Inserted restaurant {} ({})", id, restaurant.name);
            Ok(Restaurant::from_new(id, restaurant))
        })
    }

    fn find_by_id(&self, id: RestaurantId) -> Result<Restaurant> {
        self.db.with_connection(|conn| {
            conn.query_row(
                &format!("SELECT {} FROM restaurants WHERE id = ?1", RESTAURANT_COLUMNS),
                [id],
                Self::row_to_restaurant,
            )
            .optional()?
            .ok_or(Error::RestaurantNotFound(id))
        })
    }

    fn get_all(&self) -> Result<Vec<Restaurant>> {
        self.db.with_connection(|conn| {
            query_all(
                conn,
                &format!("SELECT {} FROM restaurants ORDER BY id", RESTAURANT_COLUMNS),
                [],
                Self::row_to_restaurant,
            )
        })
    }

    fn count(&self) -> Result<usize> {
        self.db.with_connection(|conn| count_rows(conn, "restaurants"))
    }
}

// ========== Reviews ==========

/// Review persistence over a [`Database`]
#[derive(Debug, Clone, Copy)]
pub struct SqliteReviewStore<'a> {
    db: &'a Database,
}

impl<'a> SqliteReviewStore<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Helper to convert a row to a Review
    fn row_to_review(row: &rusqlite::Row) -> rusqlite::Result<Review> {
        Ok(Review {
            id: row.get(0)?,
            author: row.get(1)?,
            content: row.get(2)?,
            rating: row.get(3)?,
            created_at: row.get(4)?,
            restaurant_id: row.get(5)?,
        })
    }

    fn reviews_for(&self, restaurant_id: RestaurantId, order_by: &str) -> Result<Vec<Review>> {
        let sql = format!(
            "SELECT {} FROM reviews WHERE restaurant_id = ?1 ORDER BY {}",
            REVIEW_COLUMNS, order_by
        );
        let reviews = self
            .db
            .with_connection(|conn| query_all(conn, &sql, [restaurant_id], Self::row_to_review))?;
        tracing::debug!("Loaded {} reviews for restaurant {}", reviews.len(), restaurant_id);
        Ok(reviews)
    }
}

impl ReviewStore for SqliteReviewStore<'_> {
    fn add(&self, review: &NewReview) -> Result<Review> {
        self.db.with_connection(|conn| {
            conn.execute(
                r#"
                INSERT INTO reviews (author, content, rating, createdat, restaurant_id)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    review.author,
                    review.content,
                    review.rating,
                    review.created_at,
                    review.restaurant_id,
                ],
            )?;
            let id = ReviewId(conn.last_insert_rowid());
            tracing::debug!("Inserted review {} for restaurant {}", id, review.restaurant_id);
            Ok(Review::from_new(id, review))
        })
    }

    fn find_by_id(&self, id: ReviewId) -> Result<Review> {
        self.db.with_connection(|conn| {
            conn.query_row(
                &format!("SELECT {} FROM reviews WHERE id = ?1", REVIEW_COLUMNS),
                [id],
                Self::row_to_review,
            )
            .optional()?
            .ok_or(Error::ReviewNotFound(id))
        })
    }

    fn get_all(&self) -> Result<Vec<Review>> {
        self.db.with_connection(|conn| {
            query_all(
                conn,
                &format!("SELECT {} FROM reviews ORDER BY id", REVIEW_COLUMNS),
                [],
                Self::row_to_review,
            )
        })
    }

    fn get_all_by_restaurant(&self, restaurant_id: RestaurantId) -> Result<Vec<Review>> {
        self.reviews_for(restaurant_id, "id")
    }

    fn get_all_by_restaurant_sorted_newest_to_oldest(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Review>> {
        // equal timestamps fall back to insertion order, newest first
        self.reviews_for(restaurant_id, "createdat DESC, id DESC")
    }

    fn count(&self) -> Result<usize> {
        self.db.with_connection(|conn| count_rows(conn, "reviews"))
    }
}
