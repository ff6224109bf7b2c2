use crate::domain::ViewState;
use crate::templates::components::accordion;
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const FAQ_ITEMS: [(&str, &str); 5] = [
    (
        "How do I add a review?",
        "Click the \"Add review\" button at the top of the page, fill in your name, pick a \
         category, choose a rating and write your review. After submission the review goes to \
         moderation.",
    ),
    (
        "How does moderation work?",
        "Every new review is checked by a moderator before it is published. This keeps content \
         quality high and filters out unwanted messages. Moderation usually takes up to 24 hours.",
    ),
    (
        "Can I edit my review?",
        "Editing published reviews is not available in the current version of the platform. If \
         you need to change your review, contact support.",
    ),
    (
        "How do the filters work?",
        "You can filter reviews by category (Services, Goods, Support) and by rating (1 to 5 \
         stars). Sorting by date or by rating is also available.",
    ),
    (
        "How is the average rating calculated?",
        "The average rating is calculated from all published reviews. Reviews awaiting \
         moderation are not counted in the overall statistics.",
    ),
];

pub fn faq_page(state: &ViewState) -> Markup {
    desktop_layout(
        "FAQ",
        state,
        Some(state.tab),
        html! {
            div class="max-w-3xl mx-auto space-y-6" {
                div class="text-center space-y-4" {
                    h2 class="text-3xl font-bold" { "Questions and answers" }
                    p class="text-muted-foreground" { "Answers to frequently asked questions about the review platform" }
                }
                (accordion(&FAQ_ITEMS, None))
            }
        },
    )
}
