//! Root application component: the auth gate wrapping the operator views.
//!
//! The gate owns the only `AuthState` signal and the only code paths that
//! mutate the shared bearer token. Components that can observe a 401 get
//! the logout handle passed down explicitly as a prop; nothing reaches
//! for it through context.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::loading::Loading;
use crate::pages::login::LoginPage;
use crate::pages::operators::OperatorsPage;
use crate::state::auth::{AuthPhase, AuthState, TOKEN_KEY};

/// Root component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());

    // Silent re-authentication from the persisted token, once at startup.
    check_session(auth);

    // Clears the token everywhere and drops back to the login page.
    // Injected into every subtree that can receive a 401.
    let logout = Callback::new(move |()| {
        crate::net::token::clear();
        #[cfg(feature = "browser")]
        crate::util::session::browser().remove(TOKEN_KEY);
        auth.update(|a| a.reject(None));
    });

    view! {
        <Title text="Operator Dashboard"/>
        {move || match auth.get().phase {
            AuthPhase::Checking => view! { <Loading/> }.into_any(),
            AuthPhase::Unauthenticated => view! { <LoginPage auth=auth/> }.into_any(),
            AuthPhase::Authenticated => view! { <OperatorsPage logout=logout/> }.into_any(),
        }}
    }
}

/// Validate a persisted token with one authenticated call; any failure
/// clears the token and lands on the login page.
fn check_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "browser")]
    {
        let Some(token) = crate::util::session::browser().get::<String>(TOKEN_KEY) else {
            auth.update(|a| a.reject(None));
            return;
        };
        crate::net::token::set(&token);
        leptos::task::spawn_local(async move {
            let result =
                crate::net::api::get::<crate::net::types::OperatorsInfo>("/api/operators").await;
            match result {
                Ok(_) => auth.update(|a| a.accept()),
                Err(_) => {
                    crate::net::token::clear();
                    crate::util::session::browser().remove(TOKEN_KEY);
                    auth.update(|a| a.reject(None));
                }
            }
        });
    }
    #[cfg(not(feature = "browser"))]
    auth.update(|a| a.reject(None));
}
