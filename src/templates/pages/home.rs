// templates/pages/home.rs

use crate::domain::{Review, ReviewStats, ViewState};
use crate::templates::{
    components::{filter_bar, review_card, summary_card, CardStyle},
    desktop_layout,
};
use maud::{html, Markup};

/// Everything a review-listing tab needs to render.
pub struct BoardVm {
    pub state: ViewState,
    pub reviews: Vec<Review>,
    pub stats: ReviewStats,
}

pub fn home_page(vm: &BoardVm) -> Markup {
    desktop_layout(
        "Home",
        &vm.state,
        Some(vm.state.tab),
        html! {
            div class="space-y-8" {
                section class="grid grid-cols-3 gap-6" {
                    (summary_card(&vm.stats.average_label(), "Average rating"))
                    (summary_card(&vm.stats.total_reviews.to_string(), "Total reviews"))
                    (summary_card("98%", "Satisfied customers"))
                }

                (filter_bar(&vm.state))

                @if vm.reviews.is_empty() {
                    p class="empty text-muted-foreground" { "No reviews match the selected filters." }
                } @else {
                    section class="grid grid-cols-2 gap-6" {
                        @for review in &vm.reviews {
                            (review_card(review, CardStyle::Public))
                        }
                    }
                }
            }
        },
    )
}
