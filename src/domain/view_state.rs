// src/domain/view_state.rs
//
// Tab, filter and sort selection. The state lives entirely in the request
// URL: it is parsed on every request and serialized back into every link,
// so a page render is a pure function of (path, query).

use crate::domain::review::{Category, Review, ReviewStatus};
use std::collections::HashMap;
use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Home,
    Moderation,
    Faq,
    About,
}

impl Tab {
    pub const ALL: [Tab; 4] = [Tab::Home, Tab::Moderation, Tab::Faq, Tab::About];

    pub fn path(self) -> &'static str {
        match self {
            Tab::Home => "/",
            Tab::Moderation => "/moderation",
            Tab::Faq => "/faq",
            Tab::About => "/about",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Moderation => "Moderation",
            Tab::Faq => "FAQ",
            Tab::About => "About",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.path() == path)
    }

    /// Status a review must have to be listed under this tab.
    pub fn visible_status(self) -> ReviewStatus {
        match self {
            Tab::Moderation => ReviewStatus::Pending,
            _ => ReviewStatus::Approved,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A raw value naming no known category. Matches nothing.
    Unmatched(String),
}

impl CategoryFilter {
    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            return CategoryFilter::All;
        }
        match Category::from_slug(raw) {
            Some(c) => CategoryFilter::Only(c),
            None => CategoryFilter::Unmatched(raw.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(c) => c.slug(),
            CategoryFilter::Unmatched(raw) => raw,
        }
    }

    pub fn matches(&self, review: &Review) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => review.category == *c,
            CategoryFilter::Unmatched(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RatingFilter {
    #[default]
    All,
    /// Exact star count. Not range-checked: "7" parses but matches nothing.
    Only(i64),
    Unmatched(String),
}

impl RatingFilter {
    /// Choices offered by the filter bar.
    pub const CHOICES: [i64; 3] = [5, 4, 3];

    pub fn parse(raw: &str) -> Self {
        if raw == "all" {
            return RatingFilter::All;
        }
        match leading_int(raw) {
            Some(n) => RatingFilter::Only(n),
            None => RatingFilter::Unmatched(raw.to_string()),
        }
    }

    pub fn as_param(&self) -> String {
        match self {
            RatingFilter::All => "all".to_string(),
            RatingFilter::Only(n) => n.to_string(),
            RatingFilter::Unmatched(raw) => raw.clone(),
        }
    }

    pub fn matches(&self, review: &Review) -> bool {
        match self {
            RatingFilter::All => true,
            RatingFilter::Only(n) => i64::from(review.rating.get()) == *n,
            RatingFilter::Unmatched(_) => false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortKey {
    /// Most recent first.
    #[default]
    Date,
    /// Highest rating first.
    Rating,
    /// Unknown key: input order is kept.
    Unsorted(String),
}

impl SortKey {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "date" => SortKey::Date,
            "rating" => SortKey::Rating,
            other => SortKey::Unsorted(other.to_string()),
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            SortKey::Date => "date",
            SortKey::Rating => "rating",
            SortKey::Unsorted(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectTab(Tab),
    FilterCategory(CategoryFilter),
    FilterRating(RatingFilter),
    SortBy(SortKey),
    /// Clears filters and sort, keeps the tab.
    Reset,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub tab: Tab,
    pub category: CategoryFilter,
    pub rating: RatingFilter,
    pub sort: SortKey,
}

impl ViewState {
    pub fn new(tab: Tab) -> Self {
        Self {
            tab,
            ..Self::default()
        }
    }

    pub fn reduce(self, action: ViewAction) -> Self {
        match action {
            ViewAction::SelectTab(tab) => Self { tab, ..self },
            ViewAction::FilterCategory(category) => Self { category, ..self },
            ViewAction::FilterRating(rating) => Self { rating, ..self },
            ViewAction::SortBy(sort) => Self { sort, ..self },
            ViewAction::Reset => Self::new(self.tab),
        }
    }

    /// Build the state for `tab` from decoded query parameters.
    /// Absent parameters keep their defaults.
    pub fn from_params(tab: Tab, params: &HashMap<String, String>) -> Self {
        let mut state = Self::new(tab);
        if let Some(raw) = params.get("category") {
            state = state.reduce(ViewAction::FilterCategory(CategoryFilter::parse(raw)));
        }
        if let Some(raw) = params.get("rating") {
            state = state.reduce(ViewAction::FilterRating(RatingFilter::parse(raw)));
        }
        if let Some(raw) = params.get("sort") {
            state = state.reduce(ViewAction::SortBy(SortKey::parse(raw)));
        }
        state
    }

    /// Inverse of [`ViewState::href`]. `None` when the path is not a tab.
    pub fn from_href(href: &str) -> Option<Self> {
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        let tab = Tab::from_path(path)?;
        Some(Self::from_params(tab, &parse_params(query)))
    }

    /// Query string carrying the non-default fields, without leading '?'.
    pub fn to_query(&self) -> String {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        if self.category != CategoryFilter::All {
            ser.append_pair("category", self.category.as_param());
        }
        if self.rating != RatingFilter::All {
            ser.append_pair("rating", &self.rating.as_param());
        }
        if self.sort != SortKey::Date {
            ser.append_pair("sort", self.sort.as_param());
        }
        ser.finish()
    }

    pub fn href(&self) -> String {
        let query = self.to_query();
        if query.is_empty() {
            self.tab.path().to_string()
        } else {
            format!("{}?{}", self.tab.path(), query)
        }
    }

    /// Link to the state reached by applying `action` to this one.
    pub fn href_after(&self, action: ViewAction) -> String {
        self.clone().reduce(action).href()
    }
}

/// Integer prefix of `raw` after leading whitespace, with an optional sign:
/// "4abc" -> 4, " 5" -> 5, "abc" -> None.
fn leading_int(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let digits_from = usize::from(s.starts_with(['+', '-']));
    let end = s[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    s[..end].parse().ok()
}

/// Decode an urlencoded string (query or form body) into a map.
/// Later duplicates win.
pub fn parse_params(raw: &str) -> HashMap<String, String> {
    form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
