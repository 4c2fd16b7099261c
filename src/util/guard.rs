//! Route-access guard evaluated on every navigation.
//!
//! DESIGN
//! ======
//! One classification table is the single source of truth for which paths
//! need a session, so the middleware-style redirect and the layout gating
//! can never drift apart. The decision itself is a pure function of
//! `(path, callback, token-present)`; the [`RouteGuard`] component only
//! wires it to the router. Token presence is a routing convenience, not a
//! security boundary: the backend re-checks every protected request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::util::credentials::{BrowserCredentials, CredentialStore};

/// Path of the login page, the only auth-only route.
pub const LOGIN_PATH: &str = "/login";

/// Query key carrying the path to return to after login.
pub const CALLBACK_PARAM: &str = "callbackUrl";

/// Access class of a navigable path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// Requires a session token to render.
    Protected,
    /// Only sensible without a session (the login page).
    AuthOnly,
    /// Reachable either way.
    Public,
}

/// Prefix-classified routes. The root path is matched exactly in
/// [`classify`]; everything absent from this table is public.
const ROUTE_TABLE: &[(&str, RouteClass)] = &[
    ("/companies", RouteClass::Protected),
    ("/departments", RouteClass::Protected),
    ("/positions", RouteClass::Protected),
    ("/employees", RouteClass::Protected),
    ("/leave-requests", RouteClass::Protected),
    (LOGIN_PATH, RouteClass::AuthOnly),
];

/// Classify a path: exact match for the root, prefix match otherwise.
pub fn classify(path: &str) -> RouteClass {
    if path == "/" {
        return RouteClass::Protected;
    }
    ROUTE_TABLE
        .iter()
        .find(|(prefix, _)| path.starts_with(prefix))
        .map_or(RouteClass::Public, |(_, class)| *class)
}

/// Outcome of a guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Let the navigation proceed unchanged.
    Allow,
    /// Replace the navigation with this target.
    Redirect(String),
}

/// Decide what to do with a navigation to `path`.
///
/// `callback` is the already-extracted `callbackUrl` query value, consulted
/// only when leaving the login page. Stateless and side-effect free.
pub fn decide(path: &str, callback: Option<&str>, token_present: bool) -> Decision {
    match classify(path) {
        RouteClass::Protected if !token_present => {
            Decision::Redirect(format!("{LOGIN_PATH}?{CALLBACK_PARAM}={path}"))
        }
        RouteClass::AuthOnly if token_present => match callback {
            Some(target) if target.starts_with('/') && !target.starts_with(LOGIN_PATH) => {
                Decision::Redirect(target.to_owned())
            }
            _ => Decision::Redirect("/".to_owned()),
        },
        _ => Decision::Allow,
    }
}

/// Extract the `callbackUrl` value from a raw query string.
///
/// Values are stored as raw paths, so no percent-decoding is applied.
pub fn callback_param(search: &str) -> Option<String> {
    let query = search.strip_prefix('?').unwrap_or(search);
    query
        .split('&')
        .find_map(|pair| {
            pair.strip_prefix(CALLBACK_PARAM)
                .and_then(|rest| rest.strip_prefix('='))
        })
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}

/// Re-evaluates the guard on every location change and applies redirects.
///
/// Rendered once inside the router, before the route outlet.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let path = location.pathname.get();
        let search = location.search.get();
        let callback = callback_param(&search);
        let token_present = BrowserCredentials.read().is_some();
        if let Decision::Redirect(target) = decide(&path, callback.as_deref(), token_present) {
            #[cfg(feature = "hydrate")]
            log::info!("guard redirect: {path} -> {target}");
            navigate(&target, NavigateOptions::default());
        }
    });
}
