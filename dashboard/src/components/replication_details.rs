//! Detail view for one deployment replication: source and destination
//! endpoints, polled from `/api/deployment-replication/{name}`.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::{InitialView, RefreshIndicator};
use crate::components::state_icon::StateIcon;
use crate::net::types::{EndpointInfo, ReplicationDetailsResponse};
use crate::state::poll::PollState;

#[component]
pub fn ReplicationDetails(
    name: String,
    logout: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(PollState::<ReplicationDetailsResponse>::default());

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        format!("/api/deployment-replication/{name}"),
        crate::net::poll::LIST_POLL_INTERVAL,
        state,
        logout,
    );
    #[cfg(not(feature = "browser"))]
    let _ = logout;

    let details = Memo::new(move |_| state.with(|s| s.data.clone()));
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));
    let refreshing = Signal::derive(move || state.with(|s| s.loading));

    view! {
        <div class="details">
            <header class="details__header">
                <button class="btn" on:click=move |_| on_back.run(())>
                    "Back"
                </button>
                <h2>{name.clone()}</h2>
                <RefreshIndicator active=refreshing/>
            </header>
            {move || match details.get() {
                None => view! { <InitialView error=error/> }.into_any(),
                Some(details) => view! {
                    <ErrorBanner message=error/>
                    <p class="details__state">
                        <StateIcon color=details.info.state_color/>
                        {format!(" {}", details.info.namespace)}
                    </p>
                    <EndpointView title="Source" endpoint=details.source.clone()/>
                    <EndpointView title="Destination" endpoint=details.destination.clone()/>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn EndpointView(title: &'static str, endpoint: EndpointInfo) -> impl IntoView {
    view! {
        <section class="endpoint">
            <h3>{title}</h3>
            <dl class="details__summary">
                <dt>"Deployment"</dt>
                <dd>{endpoint.deployment_name.clone()}</dd>
                <dt>"Endpoints"</dt>
                <dd>
                    {endpoint
                        .endpoints
                        .iter()
                        .map(|endpoint| view! { <code>{endpoint.clone()}</code> " " })
                        .collect::<Vec<_>>()}
                </dd>
            </dl>
        </section>
    }
}
