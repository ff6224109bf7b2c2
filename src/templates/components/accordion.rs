use maud::{html, Markup};

/// Collapsible question/answer list. At most one item starts open.
pub fn accordion(items: &[(&str, &str)], open: Option<usize>) -> Markup {
    html! {
        div class="accordion w-full space-y-4" {
            @for (i, (question, answer)) in items.iter().enumerate() {
                details class="accordion-item bg-white rounded-lg border px-6" open[open == Some(i)] {
                    summary class="text-left font-semibold" { (question) }
                    div class="text-muted-foreground" { (answer) }
                }
            }
        }
    }
}
