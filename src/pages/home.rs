//! Home page with navigation cards into the resource sections.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::app_shell::NAV_ITEMS;
use crate::state::auth::use_session;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();

    view! {
        <div class="home-page">
            <h1>
                {move || match session.display_name() {
                    Some(name) => format!("Welcome, {name}"),
                    None => "Welcome".to_owned(),
                }}
            </h1>
            <div class="home-page__cards">
                {NAV_ITEMS
                    .iter()
                    .map(|(path, label)| {
                        view! {
                            <A href=*path {..} class="home-page__card">
                                {*label}
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
