// store.rs
//
// Read access to the review collection. Handlers only see `ReviewSource`,
// so the fixture set and the SQLite table are interchangeable.

use crate::domain::{Category, Rating, Review, ReviewStatus};
use crate::errors::ServerError;
use chrono::NaiveDate;

pub trait ReviewSource: Send + Sync {
    fn list_reviews(&self) -> Result<Vec<Review>, ServerError>;
}

/// The built-in six-review dataset.
#[derive(Debug, Clone, Default)]
pub struct FixtureReviews;

impl ReviewSource for FixtureReviews {
    fn list_reviews(&self) -> Result<Vec<Review>, ServerError> {
        Ok(fixture_reviews())
    }
}

/// Any fixed list of reviews.
#[cfg(test)]
#[derive(Debug, Clone, Default)]
pub struct StaticReviews(pub Vec<Review>);

#[cfg(test)]
impl ReviewSource for StaticReviews {
    fn list_reviews(&self) -> Result<Vec<Review>, ServerError> {
        Ok(self.0.clone())
    }
}

pub fn fixture_reviews() -> Vec<Review> {
    FIXTURE
        .iter()
        .map(|&(id, author, stars, category, text, (y, m, d), status)| Review {
            id,
            author: author.to_string(),
            rating: Rating::new(stars).unwrap_or_default(),
            category,
            text: text.to_string(),
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
            status,
        })
        .collect()
}

type FixtureRow = (
    i64,
    &'static str,
    u8,
    Category,
    &'static str,
    (i32, u32, u32),
    ReviewStatus,
);

const FIXTURE: [FixtureRow; 6] = [
    (
        1,
        "Alexey Ivanov",
        5,
        Category::Services,
        "Excellent service! Fast, high quality and professional. I recommend it to everyone.",
        (2025, 9, 28),
        ReviewStatus::Approved,
    ),
    (
        2,
        "Maria Petrova",
        4,
        Category::Goods,
        "Good product quality, but delivery could have been faster.",
        (2025, 9, 27),
        ReviewStatus::Approved,
    ),
    (
        3,
        "Dmitry Sidorov",
        5,
        Category::Services,
        "Superb! Exactly what I was looking for. I will come back again.",
        (2025, 9, 26),
        ReviewStatus::Approved,
    ),
    (
        4,
        "Ekaterina Smirnova",
        3,
        Category::Goods,
        "Not bad, but there is room to grow. The price matches the quality.",
        (2025, 9, 25),
        ReviewStatus::Pending,
    ),
    (
        5,
        "Igor Kozlov",
        5,
        Category::Support,
        "Responsive support team, they solved my problem in minutes!",
        (2025, 9, 24),
        ReviewStatus::Approved,
    ),
    (
        6,
        "Olga Novikova",
        4,
        Category::Goods,
        "Quality product, excellent packaging. Thank you!",
        (2025, 9, 23),
        ReviewStatus::Approved,
    ),
];
