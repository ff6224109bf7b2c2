pub mod draft;
pub mod logic;
pub mod review;
pub mod view_state;

pub use draft::DraftReview;
pub use logic::{aggregate, derive_view, ReviewStats};
pub use review::{Category, Rating, Review, ReviewStatus};
pub use view_state::{parse_params, CategoryFilter, RatingFilter, SortKey, Tab, ViewAction, ViewState};
