//! Login page with username/password form.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::types::Credentials;
use crate::state::auth::use_session;
use crate::util::guard::{self, Decision};

/// Trim the username and require both fields before a submit goes out.
fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok(Credentials {
        username: username.to_owned(),
        password: password.to_owned(),
    })
}

/// Where a successful login lands, given the raw query string.
///
/// Delegates to the guard's callback rule so the form and the guard can
/// never disagree about valid return targets.
fn post_login_destination(search: &str) -> String {
    let callback = guard::callback_param(search);
    match guard::decide(guard::LOGIN_PATH, callback.as_deref(), true) {
        Decision::Redirect(target) => target,
        Decision::Allow => "/".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let submitted = match validate_login_input(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let destination = post_login_destination(&location.search.get_untracked());
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match session.login(&submitted).await {
                    Ok(_) => {
                        // Leave `busy` set; the page is going away.
                        navigate(&destination, leptos_router::NavigateOptions::default());
                    }
                    Err(auth_error) => {
                        error.set(auth_error.message().to_owned());
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (submitted, &navigate, &location);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"HR Console"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
