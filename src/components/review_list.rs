use leptos::*;

use crate::components::skeleton::ListSkeleton;
use crate::components::star_rating::StarRating;
use crate::models::review::Review;

#[component]
pub fn ReviewList(
    #[prop(into)] reviews: Signal<Vec<Review>>,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <ListSkeleton rows=3 shape="card" /> }
        >
            <div class="list-toolbar">
                <button type="button" class="button primary" on:click=move |_| on_refresh.call(())>
                    { "Refresh" }
                </button>
            </div>
            <Show
                when=move || reviews.with(|reviews| !reviews.is_empty())
                fallback=|| view! { <p class="empty">{ "No reviews for this book yet." }</p> }
            >
                <ul class="review-list">
                    <For
                        each=move || reviews.get()
                        key=|review: &Review| review.id.clone()
                        children=move |review: Review| {
                            let comment = review.comment_text().unwrap_or("No comment.").to_string();
                            view! {
                                <li class="card review">
                                    <StarRating rating=review.rating />
                                    <p class="comment">{ comment }</p>
                                    <footer>{ review.created_on() }</footer>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </Show>
    }
}
