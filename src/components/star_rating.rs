use leptos::*;

use crate::models::review::Rating;

#[component]
pub fn StarRating(rating: u8) -> impl IntoView {
    view! {
        <div class="star-rating" title=format!("{} out of {}", rating, Rating::MAX)>
            {(Rating::MIN..=Rating::MAX).map(|star| view! {
                <span class="star" class:filled={star <= rating}>"★"</span>
            }).collect::<Vec<_>>()}
        </div>
    }
}
