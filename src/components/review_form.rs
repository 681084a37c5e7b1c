use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::SharedClient;
use crate::components::field_message::FieldMessage;
use crate::error::{Field, FieldErrors, SubmitError};
use crate::forms::{submit_review, ReviewDraft};
use crate::models::book::Book;
use crate::models::review::{Rating, Review};
use crate::notifications::Notifier;
use crate::polling::RequestGeneration;

/// Form for rating one of `books`.
#[component]
pub fn ReviewForm(
    #[prop(into)] books: Signal<Vec<Book>>,
    on_created: Callback<Review>,
) -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let notifier = Notifier::from_context();

    let draft = create_rw_signal(ReviewDraft::default());
    let errors = create_rw_signal(FieldErrors::new());
    let (submitting, set_submitting) = create_signal(false);
    let submission = RequestGeneration::new();
    submission.expire_on_cleanup();

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }

        let current = draft.get_untracked();
        let client = client.clone();
        let submission = submission.clone();
        let ticket = submission.issue();
        set_submitting.set(true);

        spawn_local(async move {
            let result = submit_review(&client, &current).await;
            // The notifier outlives the form; everything else belongs to it.
            let mounted = submission.is_current(ticket);
            match result {
                Ok(review) => {
                    log!("[REVIEWS] Created review {} for book {}", review.id, review.book_id);
                    notifier.success("Review saved", "Your review was added.");
                    if !mounted {
                        log!("[REVIEWS] Form removed while the review was being saved");
                        return;
                    }
                    errors.set(FieldErrors::new());
                    draft.set(ReviewDraft::default());
                    on_created.call(review);
                }
                Err(SubmitError::Invalid(invalid)) => {
                    log!("[REVIEWS] Rejected draft: {}", invalid);
                    if mounted {
                        errors.set(invalid);
                    }
                }
                Err(SubmitError::Remote(err)) => {
                    error!("[REVIEWS] Could not create review: {}", err);
                    notifier.error(
                        "Could not save review",
                        "The review could not be saved. Please try again.",
                    );
                }
            }
            if mounted {
                set_submitting.set(false);
            }
        });
    };

    view! {
        <form class="form" on:submit=handle_submit novalidate=true>
            <label for="review-book">{ "Book*" }</label>
            <select
                id="review-book"
                class:invalid=move || errors.with(|e| e.contains(Field::Book))
                on:change=move |e| {
                    draft.update(|d| d.book_id = event_target_value(&e));
                    errors.update(|errors| errors.remove(Field::Book));
                }
            >
                <option value="" prop:selected=move || draft.with(|d| d.book_id.is_empty())>
                    { "Select a book" }
                </option>
                <For
                    each=move || books.get()
                    key=|book: &Book| book.id.clone()
                    children=move |book: Book| {
                        let id = book.id.clone();
                        view! {
                            <option
                                value=book.id.clone()
                                prop:selected=move || draft.with(|d| d.book_id == id)
                            >
                                { book.label() }
                            </option>
                        }
                    }
                />
            </select>
            <FieldMessage errors=errors field=Field::Book />

            <label for="review-rating">{ "Rating*" }</label>
            <select
                id="review-rating"
                class:invalid=move || errors.with(|e| e.contains(Field::Rating))
                on:change=move |e| {
                    draft.update(|d| d.rating = event_target_value(&e));
                    errors.update(|errors| errors.remove(Field::Rating));
                }
            >
                <option value="" prop:selected=move || draft.with(|d| d.rating.is_empty())>
                    { "Select a rating" }
                </option>
                {Rating::all().map(|rating| {
                    let value = rating.get().to_string();
                    let current = value.clone();
                    let label = if rating.get() == 1 { "1 star".to_string() } else { format!("{} stars", rating.get()) };
                    view! {
                        <option value=value prop:selected=move || draft.with(|d| d.rating == current)>
                            { label }
                        </option>
                    }
                }).collect::<Vec<_>>()}
            </select>
            <FieldMessage errors=errors field=Field::Rating />

            <label for="review-comment">{ "Comment" }</label>
            <textarea
                id="review-comment"
                placeholder="What did you think of the book?"
                prop:value=move || draft.with(|d| d.comment.clone())
                on:input=move |e| draft.update(|d| d.comment = event_target_value(&e))
            />

            <button type="submit" class="button primary" disabled=move || submitting.get()>
                { move || if submitting.get() { "Saving..." } else { "Add review" } }
            </button>
        </form>
    }
}
