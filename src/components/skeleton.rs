use leptos::*;

/// Grey placeholder blocks shown until a list has loaded once.
#[component]
pub fn ListSkeleton(rows: usize, #[prop(default = "row")] shape: &'static str) -> impl IntoView {
    view! {
        <div class="skeleton-list" aria-busy="true">
            <div class="skeleton button"></div>
            {(0..rows).map(|_| view! {
                <div class=format!("skeleton {shape}")></div>
            }).collect::<Vec<_>>()}
        </div>
    }
}
