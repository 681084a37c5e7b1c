use leptos::logging::log;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::SharedClient;
use crate::components::{book_form::BookForm, book_list::BookList};
use crate::config::ApiConfig;
use crate::models::book::Book;
use crate::notifications::Notifier;
use crate::polling::{use_polling, RequestGeneration};

/// Book form next to the catalog, refreshed on a timer and after every
/// successful create.
#[component]
pub fn BooksPage() -> impl IntoView {
    let client = expect_context::<SharedClient>();
    let config = expect_context::<ApiConfig>();
    let notifier = Notifier::from_context();

    let (books, set_books) = create_signal(Vec::<Book>::new());
    let (loading, set_loading) = create_signal(true);
    let generation = RequestGeneration::new();
    generation.expire_on_cleanup();

    let refresh = Callback::new(move |_: ()| {
        let client = client.clone();
        let generation = generation.clone();
        let ticket = generation.issue();

        spawn_local(async move {
            let result = client.list_books().await;
            if !generation.is_current(ticket) {
                log!("[BOOKS] Ignoring superseded book list");
                return;
            }
            match result {
                Ok(list) => set_books.set(list),
                Err(_) => {
                    notifier.error("Could not load books", "The book list could not be loaded.");
                }
            }
            set_loading.set(false);
        });
    });

    use_polling("books", config.poll_interval, move || refresh.call(()));

    let on_created = Callback::new(move |_: Book| refresh.call(()));

    view! {
        <section class="page">
            <div class="intro">
                <h1>{ "Books" }</h1>
                <p class="muted">{ "Add books and browse the catalog." }</p>
            </div>
            <div class="grid">
                <div class="card">
                    <h2>{ "New book" }</h2>
                    <p class="muted">{ "Fill in the details to add a book to the catalog." }</p>
                    <BookForm on_created=on_created />
                </div>
                <div class="card">
                    <h2>{ "Catalog" }</h2>
                    <p class="muted">{ "Every book in the catalog." }</p>
                    <BookList books=books loading=loading on_refresh=refresh />
                </div>
            </div>
        </section>
    }
}
