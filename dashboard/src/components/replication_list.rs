//! Deployment replication list view, polled from
//! `/api/deployment-replication`.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::{InitialView, RefreshIndicator};
use crate::components::replication_details::ReplicationDetails;
use crate::components::state_icon::StateIcon;
use crate::net::types::{ReplicationInfo, ReplicationListResponse};
use crate::state::poll::PollState;

#[component]
pub fn ReplicationList(logout: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(PollState::<ReplicationListResponse>::default());
    let selected: RwSignal<Option<String>> = RwSignal::new(None);

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        "/api/deployment-replication".to_owned(),
        crate::net::poll::LIST_POLL_INTERVAL,
        state,
        logout,
    );

    let items = Memo::new(move |_| {
        state.with(|s| s.data.as_ref().map(|data| data.replications.clone()))
    });
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let refreshing = Signal::derive(move || state.with(|s| s.loading));

    let on_select = Callback::new(move |name: String| selected.set(Some(name)));
    let on_back = Callback::new(move |()| selected.set(None));

    view! {
        {move || match selected.get() {
            Some(name) => {
                view! { <ReplicationDetails name=name logout=logout on_back=on_back/> }.into_any()
            }
            None => view! {
                {move || match items.get() {
                    None => view! { <InitialView error=error/> }.into_any(),
                    Some(items) if items.is_empty() => {
                        view! {
                            <ErrorBanner message=error/>
                            <p class="list__empty">"No deployment replications"</p>
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
                                    <th>
                                        "Namespace"
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
                                    <ReplicationRow item=item on_select=on_select/>
                                </For>
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            }
            .into_any(),
        }}
    }
}

#[component]
fn ReplicationRow(item: ReplicationInfo, on_select: Callback<String>) -> impl IntoView {
    let name = item.name.clone();
    view! {
        <tr>
            <td><StateIcon color=item.state_color/></td>
            <td>
                <a class="list__link" on:click=move |_| on_select.run(name.clone())>
                    {item.name.clone()}
                </a>
            </td>
            <td>{item.namespace.clone()}</td>
        </tr>
    }
}
