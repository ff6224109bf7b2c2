// src/domain/logic.rs

use crate::domain::review::{Review, ReviewStatus};
use crate::domain::view_state::{SortKey, ViewState};
use serde::Serialize;

/// Reviews to list for the given state, in display order.
///
/// Visibility comes from the tab (pending on moderation, approved
/// everywhere else), then the category and rating filters narrow it down.
/// Sorting is stable and has no secondary key.
pub fn derive_view(reviews: &[Review], state: &ViewState) -> Vec<Review> {
    let visible = state.tab.visible_status();

    let mut out: Vec<Review> = reviews
        .iter()
        .filter(|r| r.status == visible)
        .filter(|r| state.category.matches(r))
        .filter(|r| state.rating.matches(r))
        .cloned()
        .collect();

    match state.sort {
        SortKey::Date => out.sort_by(|a, b| b.date.cmp(&a.date)),
        SortKey::Rating => out.sort_by(|a, b| b.rating.cmp(&a.rating)),
        SortKey::Unsorted(_) => {}
    }

    out
}

/// Platform-wide numbers for the summary cards. Independent of filters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReviewStats {
    /// `None` when nothing is approved yet.
    pub average_rating: Option<f64>,
    pub total_reviews: usize,
    pub pending_reviews: usize,
}

impl ReviewStats {
    /// One decimal place, or a placeholder when there is nothing to average.
    pub fn average_label(&self) -> String {
        match self.average_rating {
            Some(avg) => format!("{avg:.1}"),
            None => "No ratings yet".to_string(),
        }
    }
}

pub fn aggregate(reviews: &[Review]) -> ReviewStats {
    let (sum, approved) = reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Approved)
        .fold((0u32, 0usize), |(sum, n), r| {
            (sum + u32::from(r.rating.get()), n + 1)
        });

    let pending = reviews
        .iter()
        .filter(|r| r.status == ReviewStatus::Pending)
        .count();

    ReviewStats {
        average_rating: (approved > 0).then(|| f64::from(sum) / approved as f64),
        total_reviews: approved,
        pending_reviews: pending,
    }
}
