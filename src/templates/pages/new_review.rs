use crate::domain::{Category, DraftReview, Rating, ViewState};
use crate::templates::components::stars::star_icon;
use crate::templates::desktop_layout;
use maud::{html, Markup};

/// The "new review" dialog. Posting it goes through the submit stub.
/// `from` is the page the dialog was opened over; no tab is highlighted.
pub fn new_review_page(draft: &DraftReview, from: &ViewState) -> Markup {
    desktop_layout(
        "New review",
        from,
        None,
        html! {
            div class="dialog max-w-lg mx-auto card" role="dialog" aria-labelledby="new-review-title" {
                header {
                    h2 id="new-review-title" class="text-xl font-semibold" { "New review" }
                    p class="text-muted-foreground" { "Share your experience with others" }
                }

                form method="post" action="/reviews" class="space-y-4 py-4" {
                    label class="space-y-2 block" {
                        span class="text-sm font-medium" { "Your name" }
                        input type="text" name="author" placeholder="Enter your name" value=(draft.author);
                    }

                    label class="space-y-2 block" {
                        span class="text-sm font-medium" { "Category" }
                        select name="category" {
                            @for c in Category::ALL {
                                option value=(c.slug()) selected[draft.category == c] { (c.label()) }
                            }
                        }
                    }

                    fieldset class="space-y-2" {
                        legend class="text-sm font-medium" { "Rating" }
                        div class="flex space-x-2 star-picker" {
                            @for star in Rating::MIN..=Rating::MAX {
                                label title=(format!("{star} stars")) {
                                    input type="radio" name="rating" value=(star) class="sr-only"
                                        checked[draft.rating.get() == star];
                                    (star_icon(star <= draft.rating.get(), 24))
                                }
                            }
                        }
                    }

                    label class="space-y-2 block" {
                        span class="text-sm font-medium" { "Review" }
                        textarea name="text" rows="4" placeholder="Tell us about your experience..." { (draft.text) }
                    }

                    button type="submit" class="btn primary w-full" { "Submit review" }
                }

                a href=(from.href()) class="btn outline" { "Close" }
            }
        },
    )
}
