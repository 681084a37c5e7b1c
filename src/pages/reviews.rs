use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::SharedClient;
use crate::components::{review_form::ReviewForm, review_list::ReviewList};
use crate::config::ApiConfig;
use crate::models::book::Book;
use crate::models::review::Review;
use crate::notifications::Notifier;
use crate::polling::{use_polling, RequestGeneration};

/// Review form plus the reviews of one selected book.
///
/// The book list is fetched like on the books page. Until the user picks a
/// book, the first one returned is selected. Every tick refetches the books
/// and the selected book's reviews. Switching books empties the list and
/// supersedes any review fetch still in flight for the previous one.
#[component]
pub fn ReviewsPage() -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let config = expect_context::<ApiConfig>();
    let notifier = Notifier::from_context();

    let (books, set_books) = create_signal(Vec::<Book>::new());
    let (reviews, set_reviews) = create_signal(Vec::<Review>::new());
    let (selected, set_selected) = create_signal(None::<String>);
    let (loading, set_loading) = create_signal(true);
    let book_generation = RequestGeneration::new();
    let review_generation = RequestGeneration::new();
    book_generation.expire_on_cleanup();
    review_generation.expire_on_cleanup();

    let fetch_reviews = Callback::new({
        let client = client.clone();
        move |book_id: String| {
            let client = client.clone();
            let generation = review_generation.clone();
            let ticket = generation.issue();

            spawn_local(async move {
                let result = client.list_reviews_for_book(&book_id).await;
                if !generation.is_current(ticket) {
                    log!("[REVIEWS] Ignoring superseded reviews for book {}", book_id);
                    return;
                }
                match result {
                    Ok(list) => set_reviews.set(list),
                    Err(_) => {
                        notifier.error(
                            "Could not load reviews",
                            "The reviews for this book could not be loaded.",
                        );
                    }
                }
            });
        }
    });

    let fetch_books = Callback::new(move |_: ()| {
        let client = client.clone();
        let generation = book_generation.clone();
        let ticket = generation.issue();

        spawn_local(async move {
            let result = client.list_books().await;
            if !generation.is_current(ticket) {
                log!("[REVIEWS] Ignoring superseded book list");
                return;
            }
            match result {
                Ok(list) => {
                    let first = list.first().map(|book| book.id.clone());
                    set_books.set(list);
                    if selected.get_untracked().is_none() {
                        if let Some(book_id) = first {
                            log!("[REVIEWS] Selecting first book {}", book_id);
                            set_selected.set(Some(book_id.clone()));
                            fetch_reviews.call(book_id);
                        }
                    }
                }
                Err(_) => {
                    notifier.error("Could not load books", "The book list could not be loaded.");
                }
            }
            set_loading.set(false);
        });
    });

    use_polling("reviews", config.poll_interval, move || {
        fetch_books.call(());
        if let Some(book_id) = selected.get_untracked() {
            fetch_reviews.call(book_id);
        }
    });

    let refresh_selected = Callback::new(move |_: ()| {
        if let Some(book_id) = selected.get_untracked() {
            fetch_reviews.call(book_id);
        }
    });

    let on_filter_change = move |ev: ev::Event| {
        let book_id = event_target_value(&ev);
        if book_id.is_empty() || selected.get_untracked().as_deref() == Some(book_id.as_str()) {
            return;
        }
        set_selected.set(Some(book_id.clone()));
        set_reviews.set(Vec::new());
        fetch_reviews.call(book_id);
    };

    let on_created = Callback::new(move |_: Review| refresh_selected.call(()));

    view! {
        <section class="page">
            <div class="intro">
                <h1>{ "Reviews" }</h1>
                <p class="muted">{ "Rate books and read what others thought." }</p>
            </div>
            <div class="grid">
                <div class="card">
                    <h2>{ "New review" }</h2>
                    <p class="muted">{ "Rate a book from the catalog." }</p>
                    <Show
                        when=move || books.with(|books| !books.is_empty())
                        fallback=|| view! {
                            <p class="empty">
                                { "There are no books yet. Add a book first to review it." }
                            </p>
                        }
                    >
                        <ReviewForm books=books on_created=on_created />
                    </Show>
                </div>
                <div class="card">
                    <h2>{ "Reviews" }</h2>
                    <p class="muted">{ "Reviews of the selected book." }</p>
                    <label for="review-filter">{ "Filter by book" }</label>
                    <select
                        id="review-filter"
                        disabled=move || books.with(Vec::is_empty)
                        on:change=on_filter_change
                    >
                        <option value="" disabled=true prop:selected=move || selected.with(Option::is_none)>
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
                                        prop:selected=move || selected.with(|s| s.as_deref() == Some(id.as_str()))
                                    >
                                        { book.label() }
                                    </option>
                                }
                            }
                        />
                    </select>
                    <ReviewList reviews=reviews loading=loading on_refresh=refresh_selected />
                </div>
            </div>
        </section>
    }
}
