// src/domain/review.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A star rating, always within 1..=5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(stars: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&stars).then_some(Self(stars))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl Default for Rating {
    fn default() -> Self {
        Self(Self::MAX)
    }
}

impl TryFrom<u8> for Rating {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Rating::new(value).ok_or_else(|| format!("rating {value} is outside 1..=5"))
    }
}

impl TryFrom<i64> for Rating {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Rating::new)
            .ok_or_else(|| format!("rating {value} is outside 1..=5"))
    }
}

impl From<Rating> for u8 {
    fn from(r: Rating) -> u8 {
        r.0
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Services,
    Goods,
    Support,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Services, Category::Goods, Category::Support];

    /// Stable value used in query strings and database rows.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Services => "services",
            Category::Goods => "goods",
            Category::Support => "support",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Services => "Services",
            Category::Goods => "Goods",
            Category::Support => "Support",
        }
    }

    pub fn from_slug(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    Approved,
    Pending,
    Rejected,
}

impl ReviewStatus {
    pub fn from_slug(raw: &str) -> Option<Self> {
        match raw {
            "approved" => Some(ReviewStatus::Approved),
            "pending" => Some(ReviewStatus::Pending),
            "rejected" => Some(ReviewStatus::Rejected),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: i64,
    pub author: String,
    pub rating: Rating,
    pub category: Category,
    pub text: String,
    pub date: NaiveDate,
    pub status: ReviewStatus,
}

impl Review {
    /// First letter of every name part, e.g. "Maria Petrova" -> "MP".
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }
}
