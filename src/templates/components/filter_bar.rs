use crate::domain::{Category, CategoryFilter, RatingFilter, SortKey, ViewAction, ViewState};
use maud::{html, Markup};

/// GET form carrying the category, rating and sort selectors. Submits to
/// the current tab so the tab is kept.
pub fn filter_bar(state: &ViewState) -> Markup {
    html! {
        form method="get" action=(state.tab.path()) class="filter-bar flex flex-wrap gap-4 bg-white p-6 rounded-lg border" {
            label {
                span class="sr-only" { "Category" }
                select name="category" {
                    option value="all" selected[state.category == CategoryFilter::All] { "All categories" }
                    @for c in Category::ALL {
                        option value=(c.slug()) selected[state.category == CategoryFilter::Only(c)] { (c.label()) }
                    }
                }
            }

            label {
                span class="sr-only" { "Rating" }
                select name="rating" {
                    option value="all" selected[state.rating == RatingFilter::All] { "All ratings" }
                    @for n in RatingFilter::CHOICES {
                        option value=(n) selected[state.rating == RatingFilter::Only(n)] { (n) " stars" }
                    }
                }
            }

            label {
                span class="sr-only" { "Sort" }
                select name="sort" {
                    option value="date" selected[state.sort == SortKey::Date] { "By date" }
                    option value="rating" selected[state.sort == SortKey::Rating] { "By rating" }
                }
            }

            button type="submit" class="btn" { "Apply" }
            a href=(state.href_after(ViewAction::Reset)) class="btn outline" { "Reset" }
        }
    }
}
