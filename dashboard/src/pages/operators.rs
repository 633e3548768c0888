//! Operator summary page: polls `/api/operators` and mounts the view
//! for the active operator kind.

use leptos::prelude::*;

use crate::components::deployment_list::DeploymentList;
use crate::components::error_banner::ErrorBanner;
use crate::components::loading::InitialView;
use crate::components::operator_links::OperatorLinks;
use crate::components::replication_list::ReplicationList;
use crate::components::storage_list::StorageList;
use crate::net::types::OperatorsInfo;
use crate::state::operator::OperatorKind;
use crate::state::poll::PollState;

/// Landing page once authenticated. Decides, per summary poll, which
/// operator subtree is mounted, and always lists links to the other
/// operators in the cluster.
#[component]
pub fn OperatorsPage(logout: Callback<()>) -> impl IntoView {
    let state = RwSignal::new(PollState::<OperatorsInfo>::default());

    #[cfg(feature = "browser")]
    crate::net::poll::spawn_poller(
        "/api/operators".to_owned(),
        crate::net::poll::SUMMARY_POLL_INTERVAL,
        state,
        logout,
    );

    // Memos so a poll tick only reaches the subtree when the payload
    // actually changed; otherwise the child pollers would be torn down
    // and restarted every interval.
    let active = Memo::new(move |_| {
        state.with(|s| s.data.as_ref().map(OperatorsInfo::active_operator))
    });
    let origin = Memo::new(move |_| {
        state.with(|s| {
            s.data
                .as_ref()
                .map(|info| (info.namespace.clone(), info.pod.clone()))
        })
    });
    let links = Memo::new(move |_| {
        state.with(|s| s.data.as_ref().map(|info| info.other.clone()).unwrap_or_default())
    });
    let error = Memo::new(move |_| state.with(|s| s.error.clone()));

    view! {
        <div class="operators-page">
            {move || match active.get() {
                None => view! { <InitialView error=error/> }.into_any(),
                Some(kind) => {
                    view! {
                        <header class="operators-page__header">
                            <h1>{title_for(kind)}</h1>
                            <span class="operators-page__origin">
                                {move || {
                                    origin
                                        .get()
                                        .map(|(namespace, pod)| format!("{namespace} / {pod}"))
                                        .unwrap_or_default()
                                }}
                            </span>
                            <button class="btn" on:click=move |_| logout.run(())>
                                "Logout"
                            </button>
                        </header>
                        <ErrorBanner message=error/>
                        {operator_view(kind, logout)}
                        <OperatorLinks links=links/>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn title_for(kind: OperatorKind) -> &'static str {
    match kind {
        OperatorKind::Deployment => "Deployments",
        OperatorKind::DeploymentReplication => "Deployment replications",
        OperatorKind::Storage => "Local storage",
        OperatorKind::None => "Operator dashboard",
    }
}

fn operator_view(kind: OperatorKind, logout: Callback<()>) -> AnyView {
    match kind {
        OperatorKind::Deployment => view! { <DeploymentList logout=logout/> }.into_any(),
        OperatorKind::DeploymentReplication => {
            view! { <ReplicationList logout=logout/> }.into_any()
        }
        OperatorKind::Storage => view! { <StorageList logout=logout/> }.into_any(),
        OperatorKind::None => {
            view! { <p class="operators-page__empty">"No operator is active in this pod."</p> }
                .into_any()
        }
    }
}
