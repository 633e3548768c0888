//! Loading and refresh indicators.

use leptos::prelude::*;

/// Full-area loading indicator shown before the first poll resolves.
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="loading">
            <span class="loading__spinner"></span>
            " Loading..."
        </div>
    }
}

/// Pre-data view: the loading indicator, or the first poll's error when
/// it failed before any data ever arrived. Once data exists this view is
/// never shown again; later errors go to the non-blocking banner.
#[component]
pub fn InitialView(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=Loading>
            <div class="loading loading--failed">{move || error.get().unwrap_or_default()}</div>
        </Show>
    }
}

/// Small inline spinner reflecting an in-flight refresh.
#[component]
pub fn RefreshIndicator(#[prop(into)] active: Signal<bool>) -> impl IntoView {
    view! { <span class="refresh" class:refresh--active=move || active.get()></span> }
}
