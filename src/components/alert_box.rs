//! Alert banner shown above the auth forms.

use leptos::prelude::*;

use crate::state::auth::UiAlert;

/// Renders the current alert, or nothing when there is none.
#[component]
pub fn AlertBox(alert: Signal<Option<UiAlert>>) -> impl IntoView {
    let class = move || {
        let severity = alert.get().map(|a| a.severity.css_class()).unwrap_or_default();
        format!("alert {severity}")
    };
    let message = move || alert.get().map(|a| a.message).unwrap_or_default();

    view! {
        <Show when=move || alert.with(Option::is_some)>
            <div class=class role="alert">
                {message}
            </div>
        </Show>
    }
}
