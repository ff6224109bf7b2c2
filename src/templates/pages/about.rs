use crate::domain::ViewState;
use crate::templates::desktop_layout;
use maud::{html, Markup};

const ADVANTAGES: [(&str, &str); 4] = [
    ("Moderation", "Every review is checked before publication"),
    ("Filtering", "Convenient filters by category and rating"),
    ("Speed", "Published right after approval"),
    ("Analytics", "Statistics and average rating"),
];

pub fn about_page(state: &ViewState) -> Markup {
    desktop_layout(
        "About",
        state,
        Some(state.tab),
        html! {
            div class="max-w-3xl mx-auto space-y-8" {
                div class="text-center space-y-4" {
                    h2 class="text-3xl font-bold" { "About us" }
                    p class="text-lg text-muted-foreground" { "A modern platform for collecting and managing reviews" }
                }

                div class="card space-y-6" {
                    section class="space-y-4" {
                        h3 class="text-xl font-semibold" { "Our mission" }
                        p class="text-muted-foreground leading-relaxed" {
                            "We built this platform to make collecting and processing reviews as simple "
                            "and effective as possible. Our goal is to help companies improve their "
                            "service based on real customer feedback."
                        }
                    }

                    section class="space-y-4" {
                        h3 class="text-xl font-semibold" { "Advantages" }
                        ul class="grid grid-cols-2 gap-4" {
                            @for (title, detail) in ADVANTAGES {
                                li {
                                    p class="font-medium" { (title) }
                                    p class="text-sm text-muted-foreground" { (detail) }
                                }
                            }
                        }
                    }

                    section class="space-y-4" {
                        h3 class="text-xl font-semibold" { "Contacts" }
                        p class="text-muted-foreground" {
                            a href="mailto:support@reviews.com" { "support@reviews.com" }
                        }
                        p class="text-muted-foreground" {
                            a href="tel:+78001234567" { "+7 (800) 123-45-67" }
                        }
                    }
                }
            }
        },
    )
}
