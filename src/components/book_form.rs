use leptos::ev::SubmitEvent;
use leptos::logging::{error, log};
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::SharedClient;
use crate::components::field_message::FieldMessage;
use crate::error::{Field, FieldErrors, SubmitError};
use crate::forms::{submit_book, BookDraft};
use crate::models::book::Book;
use crate::notifications::Notifier;
use crate::polling::RequestGeneration;

#[component]
pub fn BookForm(on_created: Callback<Book>) -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let notifier = Notifier::from_context();

    let draft = create_rw_signal(BookDraft::default());
    let errors = create_rw_signal(FieldErrors::new());
    let (submitting, set_submitting) = create_signal(false);
    let submission = RequestGeneration::new();
    submission.expire_on_cleanup();

    // Editing a field clears its message; the rest stay until the next submit.
    let edit = move |field: Option<Field>, apply: fn(&mut BookDraft, String), value: String| {
        draft.update(|draft| apply(draft, value));
        if let Some(field) = field {
            errors.update(|errors| errors.remove(field));
        }
    };

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
            let result = submit_book(&client, &current).await;
            // The notifier outlives the form; everything else belongs to it.
            let mounted = submission.is_current(ticket);
            match result {
                Ok(book) => {
                    log!("[BOOKS] Created book {} ({})", book.id, book.title);
                    notifier.success("Book created", "The book was added to the catalog.");
                    if !mounted {
                        log!("[BOOKS] Form removed while the book was being saved");
                        return;
                    }
                    errors.set(FieldErrors::new());
                    draft.set(BookDraft::default());
                    on_created.call(book);
                }
                Err(SubmitError::Invalid(invalid)) => {
                    log!("[BOOKS] Rejected draft: {}", invalid);
                    if mounted {
                        errors.set(invalid);
                    }
                }
                Err(SubmitError::Remote(err)) => {
                    error!("[BOOKS] Could not create book: {}", err);
                    notifier.error(
                        "Could not create book",
                        "The book could not be saved. Please try again.",
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
            <label for="book-title">{ "Title*" }</label>
            <input
                id="book-title"
                type="text"
                placeholder="Enter the book title"
                class:invalid=move || errors.with(|e| e.contains(Field::Title))
                prop:value=move || draft.with(|d| d.title.clone())
                on:input=move |e| edit(Some(Field::Title), |d, v| d.title = v, event_target_value(&e))
            />
            <FieldMessage errors=errors field=Field::Title />

            <label for="book-author">{ "Author*" }</label>
            <input
                id="book-author"
                type="text"
                placeholder="Enter the author's name"
                class:invalid=move || errors.with(|e| e.contains(Field::Author))
                prop:value=move || draft.with(|d| d.author.clone())
                on:input=move |e| edit(Some(Field::Author), |d, v| d.author = v, event_target_value(&e))
            />
            <FieldMessage errors=errors field=Field::Author />

            <label for="book-year">{ "Year" }</label>
            <input
                id="book-year"
                type="text"
                inputmode="numeric"
                placeholder="Publication year"
                class:invalid=move || errors.with(|e| e.contains(Field::Year))
                prop:value=move || draft.with(|d| d.year.clone())
                on:input=move |e| edit(Some(Field::Year), |d, v| d.year = v, event_target_value(&e))
            />
            <FieldMessage errors=errors field=Field::Year />

            <label for="book-description">{ "Description" }</label>
            <textarea
                id="book-description"
                placeholder="What is the book about?"
                prop:value=move || draft.with(|d| d.description.clone())
                on:input=move |e| edit(None, |d, v| d.description = v, event_target_value(&e))
            />

            <button type="submit" class="button primary" disabled=move || submitting.get()>
                { move || if submitting.get() { "Saving..." } else { "Add book" } }
            </button>
        </form>
    }
}
