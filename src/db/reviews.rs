// src/db/reviews.rs
use crate::db::connection::Database;
use crate::domain::{Category, Rating, Review, ReviewStatus};
use crate::errors::ServerError;
use crate::store::ReviewSource;
use chrono::NaiveDate;

/// Read-only review source backed by the `reviews` table.
#[derive(Debug, Clone)]
pub struct SqliteReviews {
    db: Database,
}

impl SqliteReviews {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

struct ReviewRow {
    id: i64,
    author: String,
    rating: i64,
    category: String,
    text: String,
    date: NaiveDate,
    status: String,
}

impl TryFrom<ReviewRow> for Review {
    type Error = ServerError;

    fn try_from(row: ReviewRow) -> Result<Self, Self::Error> {
        let bad = |what: &str, val: &str| {
            ServerError::DbError(format!("review {}: bad {what} {val:?}", row.id))
        };

        Ok(Review {
            id: row.id,
            rating: Rating::try_from(row.rating).map_err(|_| bad("rating", &row.rating.to_string()))?,
            category: Category::from_slug(&row.category).ok_or_else(|| bad("category", &row.category))?,
            status: ReviewStatus::from_slug(&row.status).ok_or_else(|| bad("status", &row.status))?,
            author: row.author,
            text: row.text,
            date: row.date,
        })
    }
}

impl ReviewSource for SqliteReviews {
    fn list_reviews(&self) -> Result<Vec<Review>, ServerError> {
        let rows = self.db.with_conn(|conn| {
            let mut stmt = conn
                .prepare(
                    r#"
                    select id, author, rating, category, body, created_on, status
                    from reviews
                    order by id
                    "#,
                )
                .map_err(|e| ServerError::DbError(format!("Prepare failed: {e}")))?;

            let rows = stmt
                .query_map([], |row| {
                    Ok(ReviewRow {
                        id: row.get(0)?,
                        author: row.get(1)?,
                        rating: row.get(2)?,
                        category: row.get(3)?,
                        text: row.get(4)?,
                        date: row.get(5)?,
                        status: row.get(6)?,
                    })
                })
                .map_err(|e| ServerError::DbError(format!("Query failed: {e}")))?
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| ServerError::DbError(format!("Row read failed: {e}")))?;

            Ok(rows)
        })?;

        rows.into_iter().map(Review::try_from).collect()
    }
}
