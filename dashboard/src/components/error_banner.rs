use leptos::prelude::*;

/// Non-blocking banner for the most recent poll failure. The stale data
/// view stays visible underneath; the next successful poll clears it.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="error-banner">{move || message.get().unwrap_or_default()}</div>
        </Show>
    }
}
