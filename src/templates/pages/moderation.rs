use crate::templates::components::{badge, filter_bar, review_card, CardStyle};
use crate::templates::desktop_layout;
use crate::templates::pages::BoardVm;
use maud::{html, Markup};

pub fn moderation_page(vm: &BoardVm) -> Markup {
    desktop_layout(
        "Moderation",
        &vm.state,
        Some(vm.state.tab),
        html! {
            div class="space-y-6" {
                div class="flex items-center justify-between" {
                    div {
                        h2 class="text-3xl font-bold" { "Review moderation" }
                        p class="text-muted-foreground mt-2" { "Manage new reviews before they are published" }
                    }
                    (badge(&format!("{} awaiting moderation", vm.stats.pending_reviews), "secondary"))
                }

                (filter_bar(&vm.state))

                @if vm.reviews.is_empty() {
                    p class="empty text-muted-foreground" { "Nothing to moderate." }
                } @else {
                    section class="grid grid-cols-1 gap-6" {
                        @for review in &vm.reviews {
                            (review_card(review, CardStyle::Moderation))
                        }
                    }
                }
            }
        },
    )
}
