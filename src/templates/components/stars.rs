use maud::{html, Markup};

const STAR_PATH: &str = "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z";

pub fn star_icon(filled: bool, size: u32) -> Markup {
    let class = if filled { "star star-filled" } else { "star" };
    html! {
        svg
            xmlns="http://www.w3.org/2000/svg"
            width=(size)
            height=(size)
            viewBox="0 0 24 24"
            fill=(if filled { "currentColor" } else { "none" })
            stroke="currentColor"
            stroke-width="2"
            class=(class)
        {
            path d=(STAR_PATH) {}
        }
    }
}

/// Five stars, the first `rating` filled.
pub fn stars(rating: u8) -> Markup {
    html! {
        div class="flex space-x-1" aria-label=(format!("{rating} out of 5")) {
            @for i in 0..5u8 {
                (star_icon(i < rating, 18))
            }
        }
    }
}
