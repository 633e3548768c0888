//! Deployment list view: polls `/api/deployment` and drills down into a
//! detail view when a row is selected.

use leptos::prelude::*;

use crate::components::deployment_details::DeploymentDetails;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::{InitialView, RefreshIndicator};
use crate::components::state_icon::StateIcon;
use crate::net::types::{DeploymentInfo, DeploymentListResponse};
use crate::state::poll::PollState;

#[component]
pub fn DeploymentList(logout: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(PollState::<DeploymentListResponse>::default());
    let selected: RwSignal<Option<String>> = RwSignal::new(None);

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        "/api/deployment".to_owned(),
        crate::net::poll::LIST_POLL_INTERVAL,
        state,
        logout,
    );

    let items = Memo::new(move |_| {
        state.with(|s| s.data.as_ref().map(|data| data.deployments.clone()))
    });
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let refreshing = Signal::derive(move || state.with(|s| s.loading));

    let on_select = Callback::new(move |name: String| selected.set(Some(name)));
    let on_back = Callback::new(move |()| selected.set(None));

    view! {
        {move || match selected.get() {
            Some(name) => {
                view! { <DeploymentDetails name=name logout=logout on_back=on_back/> }.into_any()
            }
            None => view! {
                {move || match items.get() {
                    None => view! { <InitialView error=error/> }.into_any(),
                    Some(items) if items.is_empty() => {
                        view! {
                            <ErrorBanner message=error/>
                            <p class="list__empty">"No deployments"</p>
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
                                    <th>"Mode"</th>
                                    <th>"Environment"</th>
                                    <th>"Pods"</th>
                                    <th>"Volumes"</th>
                                    <th>"Storage classes"</th>
                                    <th>"Version"</th>
                                    <th>
                                        "Database"
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
                                    <DeploymentRow item=item on_select=on_select/>
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
fn DeploymentRow(item: DeploymentInfo, on_select: Callback<String>) -> impl IntoView {
    let name = item.name.clone();
    view! {
        <tr>
            <td><StateIcon color=item.state_color/></td>
            <td>
                <a class="list__link" on:click=move |_| on_select.run(name.clone())>
                    {item.name.clone()}
                </a>
            </td>
            <td>{item.mode.clone()}</td>
            <td>{item.environment.clone()}</td>
            <td>{format!("{}/{}", item.ready_pod_count, item.pod_count)}</td>
            <td>{format!("{}/{}", item.ready_volume_count, item.volume_count)}</td>
            <td>{item.storage_classes.join(", ")}</td>
            <td>{format!("{} {}", item.database_version, item.database_license)}</td>
            <td>
                <a href=item.database_url.clone() target="_blank" rel="noreferrer">
                    {item.database_url.clone()}
                </a>
            </td>
        </tr>
    }
}
