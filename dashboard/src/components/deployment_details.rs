//! Detail view for one deployment: summary fields plus member groups
//! (pods, PVCs, PVs), polled from `/api/deployment/{name}`.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::loading::{InitialView, RefreshIndicator};
use crate::components::member_list::MemberList;
use crate::components::state_icon::StateIcon;
use crate::net::types::DeploymentDetailsResponse;
use crate::state::poll::PollState;

#[component]
pub fn DeploymentDetails(
    name: String,
    logout: Callback<()>,
    on_back: Callback<()>,
) -> impl IntoView {
    let state = RwSignal::new(PollState::<DeploymentDetailsResponse>::default());

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        format!("/api/deployment/{name}"),
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
                    <dl class="details__summary">
                        <dt>"State"</dt>
                        <dd><StateIcon color=details.info.state_color/></dd>
                        <dt>"Mode"</dt>
                        <dd>{details.info.mode.clone()}</dd>
                        <dt>"Environment"</dt>
                        <dd>{details.info.environment.clone()}</dd>
                        <dt>"Version"</dt>
                        <dd>
                            {format!(
                                "{} {}",
                                details.info.database_version,
                                details.info.database_license,
                            )}
                        </dd>
                        <dt>"Database"</dt>
                        <dd>
                            <a href=details.info.database_url.clone() target="_blank" rel="noreferrer">
                                {details.info.database_url.clone()}
                            </a>
                        </dd>
                        <dt>"Storage classes"</dt>
                        <dd>{details.info.storage_classes.join(", ")}</dd>
                    </dl>
                    <MemberList groups=details.member_groups.clone()/>
                }
                .into_any(),
            }}
        </div>
    }
}
