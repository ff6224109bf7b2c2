// src/domain/draft.rs

use crate::domain::review::{Category, Rating};
use crate::domain::view_state::parse_params;
use serde::Serialize;

/// Unsubmitted "new review" form state. Never merged into the review
/// collection.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DraftReview {
    pub author: String,
    pub rating: Rating,
    pub category: Category,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftAction {
    SetAuthor(String),
    SetCategory(Category),
    /// Index of the clicked star, 1..=5. Anything else is ignored.
    SetRating(u8),
    SetText(String),
}

impl DraftReview {
    pub fn apply(self, action: DraftAction) -> Self {
        match action {
            DraftAction::SetAuthor(author) => Self { author, ..self },
            DraftAction::SetCategory(category) => Self { category, ..self },
            DraftAction::SetRating(star) => match Rating::new(star) {
                Some(rating) => Self { rating, ..self },
                None => self,
            },
            DraftAction::SetText(text) => Self { text, ..self },
        }
    }

    /// Build a draft from an urlencoded form body or query string.
    /// No validation: unknown or missing fields keep their defaults.
    pub fn from_form(raw: &str) -> Self {
        let params = parse_params(raw);
        let mut draft = Self::default();

        if let Some(author) = params.get("author") {
            draft = draft.apply(DraftAction::SetAuthor(author.clone()));
        }
        if let Some(category) = params.get("category").and_then(|c| Category::from_slug(c)) {
            draft = draft.apply(DraftAction::SetCategory(category));
        }
        if let Some(star) = params.get("rating").and_then(|r| r.trim().parse::<u8>().ok()) {
            draft = draft.apply(DraftAction::SetRating(star));
        }
        if let Some(text) = params.get("text") {
            draft = draft.apply(DraftAction::SetText(text.clone()));
        }

        draft
    }
}
