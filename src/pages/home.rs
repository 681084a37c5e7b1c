use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <div class="intro">
                <h1>{ "Mini Book Catalog" }</h1>
                <p class="muted">
                    { "Manage your book collection and its reviews in one place." }
                </p>
            </div>
            <div class="grid">
                <a class="card link-card" href="/books">
                    <h2>{ "Manage books" }</h2>
                    <p class="muted">{ "Add books to the catalog and browse what is already there." }</p>
                    <span class="button primary">{ "Open books" }</span>
                </a>
                <a class="card link-card" href="/reviews">
                    <h2>{ "Manage reviews" }</h2>
                    <p class="muted">{ "Rate the books in the catalog and read their reviews." }</p>
                    <span class="button primary">{ "Open reviews" }</span>
                </a>
            </div>
        </section>
    }
}
