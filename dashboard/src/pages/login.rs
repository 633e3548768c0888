//! Login page: exchanges username/password for a bearer token.

use leptos::prelude::*;

use crate::state::auth::{AuthState, TOKEN_KEY};

/// Login form. On success the token is persisted and activated and the
/// gate flips to authenticated; on failure the server's message shows
/// above the form and the gate stays where it is.
#[component]
pub fn LoginPage(auth: RwSignal<AuthState>) -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() {
            return;
        }
        auth.update(AuthState::begin_login);

        #[cfg(feature = "browser")]
        {
            let user = user.trim().to_owned();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&user, &pass).await {
                    Ok(response) => {
                        crate::net::token::set(&response.token);
                        crate::util::session::browser().set(TOKEN_KEY, &response.token);
                        auth.update(|a| a.accept());
                    }
                    Err(error) => {
                        crate::net::token::clear();
                        crate::util::session::browser().remove(TOKEN_KEY);
                        auth.update(|a| a.reject(Some(error.to_string())));
                    }
                }
            });
        }
        #[cfg(not(feature = "browser"))]
        {
            let _ = pass;
        }
    });

    let pending = move || auth.with(|a| a.pending);
    let error = move || auth.with(|a| a.error.clone());

    view! {
        <div class="login-page">
            <h1>"Operator Dashboard"</h1>
            <Show when=move || error().is_some()>
                <div class="login-page__error">{move || error().unwrap_or_default()}</div>
            </Show>
            <label class="login-page__label">
                "Username"
                <input
                    class="login-page__input"
                    type="text"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="login-page__label">
                "Password"
                <input
                    class="login-page__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit.run(());
                        }
                    }
                />
            </label>
            <button
                class="btn btn--primary"
                disabled=pending
                on:click=move |_| submit.run(())
            >
                {move || if pending() { "Signing in..." } else { "Sign in" }}
            </button>
        </div>
    }
}
