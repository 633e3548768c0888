//! Local-storage list view: polls `/api/storage`; each row expands into
//! the volume list for that storage resource.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::{InitialView, RefreshIndicator};
use crate::components::state_icon::StateIcon;
use crate::components::volume_list::VolumeList;
use crate::net::types::{StorageInfo, StorageListResponse};
use crate::state::poll::PollState;

#[component]
pub fn StorageList(logout: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(PollState::<StorageListResponse>::default());

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        "/api/storage".to_owned(),
        crate::net::poll::LIST_POLL_INTERVAL,
        state,
        logout,
    );

    let items = Memo::new(move |_| {
        state.with(|s| s.data.as_ref().map(|data| data.storages.clone()))
    });
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let refreshing = Signal::derive(move || state.with(|s| s.loading));

    view! {
        {move || match items.get() {
            None => view! { <InitialView error=error/> }.into_any(),
            Some(items) if items.is_empty() => {
                view! {
                    <ErrorBanner message=error/>
                    <p class="list__empty">"No local storage resources"</p>
                }
                .into_any()
            }
            Some(_) => view! {
                <ErrorBanner message=error/>
                <table class="list">
                    <thead>
                        <tr>
                            <th>"State"</th>
                            <th>"Name"</th>
                            <th>"Local path(s)"</th>
                            <th>
                                "StorageClass"
                                <RefreshIndicator active=refreshing/>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || items.get().unwrap_or_default()
                            key=Clone::clone
                            let:item
                        >
                            <StorageRow item=item logout=logout/>
                        </For>
                    </tbody>
                </table>
            }
            .into_any(),
        }}
    }
}

/// One storage row plus, while expanded, a nested row with its volumes.
/// Collapsing tears the volume poller down.
#[component]
fn StorageRow(item: StorageInfo, logout: Callback<()>) -> impl IntoView {
    let expanded = RwSignal::new(true);
    let name = item.name.clone();

    view! {
        <tr>
            <td><StateIcon color=item.state_color/></td>
            <td class="list__toggle" on:click=move |_| expanded.update(|e| *e = !*e)>
                {item.name.clone()}
            </td>
            <td>
                {item
                    .local_paths
                    .iter()
                    .map(|path| view! { <code>{path.clone()}</code> " " })
                    .collect::<Vec<_>>()}
            </td>
            <td>
                {item.storage_class.clone()}
                {item.storage_class_is_default.then_some(" (default)")}
            </td>
        </tr>
        <Show when=move || expanded.get()>
            <tr class="list__nested">
                <td colspan="4">
                    <h4>"Volumes"</h4>
                    <VolumeList storage_name=name.clone() logout=logout/>
                </td>
            </tr>
        </Show>
    }
}
