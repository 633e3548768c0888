use leptos::prelude::*;

use crate::net::types::StateColor;

/// Colored state dot with the legend text as hover title.
#[component]
pub fn StateIcon(color: StateColor) -> impl IntoView {
    view! { <span class=color.css_class() title=color.description()></span> }
}
