use crate::domain::Review;
use crate::templates::components::{badge, button, stars};
use maud::{html, Markup};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStyle {
    /// Published review with a long date.
    Public,
    /// Moderation queue entry with a short date and approve/reject buttons.
    Moderation,
}

pub fn review_card(review: &Review, style: CardStyle) -> Markup {
    let date = match style {
        CardStyle::Public => review.date.format("%-d %B %Y").to_string(),
        CardStyle::Moderation => review.date.format("%d.%m.%Y").to_string(),
    };

    html! {
        article class="card review-card" data-review-id=(review.id) {
            div class="flex items-start justify-between" {
                div class="flex items-center space-x-3" {
                    span class="avatar" { (review.initials()) }
                    div {
                        p class="font-semibold" { (review.author) }
                        p class="text-xs text-muted-foreground" { (date) }
                    }
                }
                div class="flex items-center space-x-2" {
                    (badge(review.category.label(), "secondary"))
                    @if style == CardStyle::Moderation {
                        (badge("Awaiting moderation", "outline"))
                    }
                }
            }
            (stars(review.rating.get()))
            p class="text-sm leading-relaxed" { (review.text) }

            // Not wired to any state change.
            @if style == CardStyle::Moderation {
                div class="flex space-x-3 pt-4 border-t" {
                    (button("Approve", "primary"))
                    (button("Reject", "outline"))
                }
            }
        }
    }
}
