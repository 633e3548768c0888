use leptos::prelude::*;

use crate::net::types::OperatorReference;
use crate::state::operator::type_label;

/// Links to other operators discovered in the cluster; rendered under
/// whichever primary operator view is active.
#[component]
pub fn OperatorLinks(#[prop(into)] links: Signal<Vec<OperatorReference>>) -> impl IntoView {
    view! {
        <Show when=move || !links.get().is_empty()>
            <nav class="operator-links">
                <h3>"Other operators"</h3>
                <ul>
                    <For
                        each=move || links.get()
                        key=Clone::clone
                        let:reference
                    >
                        <li>
                            <a href=reference.url.clone()>{type_label(reference.kind)}</a>
                            <span class="operator-links__namespace">
                                {format!(" ({})", reference.namespace)}
                            </span>
                        </li>
                    </For>
                </ul>
            </nav>
        </Show>
    }
}
