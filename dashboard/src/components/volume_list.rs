//! Volume list for one storage resource, polled from
//! `/api/storage/{name}`.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::{InitialView, RefreshIndicator};
use crate::components::state_icon::StateIcon;
use crate::net::types::VolumeListResponse;
use crate::state::poll::PollState;

#[component]
pub fn VolumeList(storage_name: String, logout: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(PollState::<VolumeListResponse>::default());

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        format!("/api/storage/{storage_name}"),
        crate::net::poll::LIST_POLL_INTERVAL,
        state,
        logout,
    );
    #[cfg(not(feature = "browser"))]
    let _ = (storage_name, logout);

    let items = Memo::new(move |_| {
        state.with(|s| s.data.as_ref().map(|data| data.volumes.clone()))
    });
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let refreshing = Signal::derive(move || state.with(|s| s.loading));

    view! {
        {move || match items.get() {
            None => view! { <InitialView error=error/> }.into_any(),
            Some(items) if items.is_empty() => {
                view! {
                    <ErrorBanner message=error/>
                    <p class="list__empty">"No volumes"</p>
                }
                .into_any()
            }
            Some(items) => view! {
                <ErrorBanner message=error/>
                <table class="list list--nested">
                    <thead>
                        <tr>
                            <th>"State"</th>
                            <th>"Name"</th>
                            <th>"Node"</th>
                            <th>
                                "Capacity"
                                <RefreshIndicator active=refreshing/>
                            </th>
                        </tr>
                    </thead>
                    <tbody>
                        {items
                            .into_iter()
                            .map(|volume| {
                                view! {
                                    <tr>
                                        <td><StateIcon color=volume.state_color/></td>
                                        <td>{volume.name}</td>
                                        <td>{volume.node_name}</td>
                                        <td>{volume.capacity}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </tbody>
                </table>
            }
            .into_any(),
        }}
    }
}
