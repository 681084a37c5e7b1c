/// Main application entry point for the Mini Catalog console.
/// Provides the catalog client, configuration and notifier to every page and
/// routes between the home, books and reviews views.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::SharedClient;
use crate::components::{navbar::Navbar, toaster::Toaster};
use crate::config::ApiConfig;
use crate::notifications::Notifier;
use crate::pages::{books::BooksPage, home::HomePage, reviews::ReviewsPage};

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ApiConfig::from_env();
    provide_context(SharedClient::browser(&config));
    provide_context(config);
    provide_context(Notifier::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/minicatalog.css" />
        <Title text="Mini Book Catalog" />
        <Meta name="description" content="Add and browse books and their reviews" />

        <Router>
            <Navbar />
            <main class="container">
                <Routes>
                    <Route path="" view=HomePage />
                    <Route path="/books" view=BooksPage />
                    <Route path="/reviews" view=ReviewsPage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
