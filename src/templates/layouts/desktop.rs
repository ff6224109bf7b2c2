use crate::domain::{Tab, ViewAction, ViewState};
use crate::templates::components::icon_message;
use maud::{html, Markup, DOCTYPE};
use url::form_urlencoded;

/// Page shell: header with tab navigation, the "add review" trigger and
/// the footer. Nav links carry the current filters so switching tabs
/// keeps them. `active` is the tab to highlight, if the page is one.
pub fn desktop_layout(title: &str, state: &ViewState, active: Option<Tab>, content: Markup) -> Markup {
    let add_review_href = format!(
        "/reviews/new?{}",
        form_urlencoded::Serializer::new(String::new())
            .append_pair("from", &state.href())
            .finish()
    );

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " · Review Platform" }
                link rel="stylesheet" href="/static/main.css";
            }
            body class="min-h-screen bg-background" {
                header class="border-b bg-white sticky top-0" {
                    div class="container mx-auto px-4 py-4 flex items-center justify-between" {
                        a href="/" class="flex items-center space-x-2" {
                            (icon_message(28))
                            h1 class="text-2xl font-bold" { "Review Platform" }
                        }
                        nav {
                            ul class="flex items-center space-x-6" {
                                @for tab in Tab::ALL {
                                    li {
                                        @if active == Some(tab) {
                                            a href=(state.href_after(ViewAction::SelectTab(tab)))
                                                class="text-sm font-medium text-primary"
                                                aria-current="page" { (tab.label()) }
                                        } @else {
                                            a href=(state.href_after(ViewAction::SelectTab(tab)))
                                                class="text-sm font-medium text-muted-foreground" { (tab.label()) }
                                        }
                                    }
                                }
                            }
                        }
                        a href=(add_review_href) class="btn primary" { "+ Add review" }
                    }
                }

                main class="container mx-auto px-4 py-8" {
                    (content)
                }

                footer class="border-t bg-white mt-16" {
                    div class="container mx-auto px-4 py-8 flex items-center justify-between" {
                        div class="flex items-center space-x-2" {
                            (icon_message(24))
                            span class="font-semibold" { "Review Platform" }
                        }
                        p class="text-sm text-muted-foreground" { "© 2025 All rights reserved" }
                    }
                }
            }
        }
    }
}
