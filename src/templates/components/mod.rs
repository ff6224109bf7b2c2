use maud::{html, Markup};

pub mod accordion;
pub mod error;
pub mod filter_bar;
pub mod review_card;
pub mod stars;

pub use accordion::accordion;
pub use error::error_page;
pub use filter_bar::filter_bar;
pub use review_card::{review_card, CardStyle};
pub use stars::stars;

pub fn button(label: &str, class: &str) -> Markup {
    html! {
        button type="button" class=(format!("btn {class}")) { (label) }
    }
}

pub fn summary_card(value: &str, caption: &str) -> Markup {
    html! {
        div class="card summary-card text-center" {
            p class="text-3xl font-bold" { (value) }
            p class="text-sm text-muted-foreground" { (caption) }
        }
    }
}

pub fn badge(label: &str, variant: &str) -> Markup {
    html! {
        span class=(format!("badge badge-{variant}")) { (label) }
    }
}

pub fn icon_message(size: u32) -> Markup {
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width=(size)
            height=(size)
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            class="icon text-primary"
        {
            path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" {}
        }
    }
}
