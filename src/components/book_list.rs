/// Table of the books currently in the catalog.
use leptos::*;

use crate::components::skeleton::ListSkeleton;
use crate::models::book::Book;

#[component]
pub fn BookList(
    #[prop(into)] books: Signal<Vec<Book>>,
    #[prop(into)] loading: Signal<bool>,
    on_refresh: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <ListSkeleton rows=5 /> }
        >
            <div class="list-toolbar">
                <button type="button" class="button outline" on:click=move |_| on_refresh.call(())>
                    { "Refresh" }
                </button>
            </div>
            <Show
                when=move || books.with(|books| !books.is_empty())
                fallback=|| view! { <p class="empty">{ "No books in the catalog yet." }</p> }
            >
                <table class="book-table">
                    <thead>
                        <tr>
                            <th>{ "Title" }</th>
                            <th>{ "Author" }</th>
                            <th>{ "Year" }</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || books.get()
                            key=|book: &Book| book.id.clone()
                            children=move |book: Book| view! {
                                <tr>
                                    <td class="title">{ book.title }</td>
                                    <td>{ book.author }</td>
                                    <td>{ book.year.map(|year| year.to_string()).unwrap_or_else(|| "-".to_string()) }</td>
                                </tr>
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </Show>
    }
}
