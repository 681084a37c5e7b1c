use leptos::*;
use leptos_router::A;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <header class="navbar">
            <A href="/" class="brand" exact=true>{ "Mini Catalog" }</A>
            <nav>
                <A href="/books" class="nav-link" active_class="active">{ "Books" }</A>
                <A href="/reviews" class="nav-link" active_class="active">{ "Reviews" }</A>
            </nav>
        </header>
    }
}
