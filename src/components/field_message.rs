use leptos::*;

use crate::error::{Field, FieldErrors};

/// Inline validation message for one form field; renders nothing while the
/// field is valid.
#[component]
pub fn FieldMessage(errors: RwSignal<FieldErrors>, field: Field) -> impl IntoView {
    move || {
        errors.with(|errors| {
            errors.get(field).map(|message| {
                let message = message.to_string();
                view! { <p class="field-error" role="alert">{ message }</p> }
            })
        })
    }
}
