use leptos::*;

use crate::notifications::{Notification, NotificationKind, Notifier};

#[component]
pub fn Toaster() -> impl IntoView {
    let notifier = Notifier::from_context();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notifier.entries().get()
                key=|notification: &Notification| notification.id.clone()
                children=move |notification: Notification| {
                    let id = notification.id.clone();
                    view! {
                        <div
                            class="toast"
                            class:error={notification.kind == NotificationKind::Error}
                        >
                            <div>
                                <strong>{ notification.title }</strong>
                                <p>{ notification.message }</p>
                            </div>
                            <button
                                type="button"
                                class="dismiss"
                                aria-label="Dismiss"
                                on:click=move |_| notifier.dismiss(&id)
                            >
                                { "×" }
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
