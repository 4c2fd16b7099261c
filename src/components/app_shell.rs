//! Application shell: sidebar navigation, header, and session gating.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected page renders inside this shell. It reads `{user,
//! loading}` from the session context to gate its chrome; redirecting
//! unauthenticated visitors is the route guard's job, not the shell's.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;
#[cfg(feature = "hydrate")]
use leptos_router::hooks::use_navigate;

use crate::state::auth::use_session;

/// Sidebar sections in display order. One table, no branching dispatch.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("/companies", "Companies"),
    ("/departments", "Departments"),
    ("/positions", "Positions"),
    ("/employees", "Employees"),
    ("/leave-requests", "Leave requests"),
];

/// Layout wrapper for protected pages.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    let session = use_session();
    // Memo is Copy, so each nav link can capture it independently.
    let pathname = use_location().pathname;

    #[cfg(feature = "hydrate")]
    let on_logout = {
        let navigate = use_navigate();
        move |_| {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                session.logout().await;
                navigate("/login", leptos_router::NavigateOptions::default());
            });
        }
    };
    #[cfg(not(feature = "hydrate"))]
    let on_logout = move |_| {};

    view! {
        <div class="app-shell">
            <aside class="app-shell__sidebar">
                <A href="/" {..} class="app-shell__brand">
                    "HR Console"
                </A>
                <nav class="app-shell__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|(path, label)| {
                            let link_class = {
                                let path = *path;
                                move || {
                                    if pathname.get().starts_with(path) {
                                        "app-shell__nav-link app-shell__nav-link--active"
                                    } else {
                                        "app-shell__nav-link"
                                    }
                                }
                            };
                            view! {
                                <A href=*path {..} class=link_class>
                                    {*label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>
            </aside>
            <div class="app-shell__body">
                <header class="app-shell__header">
                    <span class="app-shell__user">
                        {move || session.display_name().unwrap_or_default()}
                    </span>
                    <button class="btn app-shell__logout" on:click=on_logout>
                        "Sign out"
                    </button>
                </header>
                <main class="app-shell__main">
                    <Show when=move || session.state().is_unknown()>
                        <p class="app-shell__loading">"Loading session..."</p>
                    </Show>
                    {children()}
                </main>
            </div>
        </div>
    }
}
