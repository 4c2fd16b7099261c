//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::app_shell::AppShell;
use crate::pages::{
    companies::CompaniesPage, departments::DepartmentsPage, employees::EmployeesPage,
    home::HomePage, leave_requests::LeaveRequestsPage, login::LoginPage,
    positions::PositionsPage,
};
use crate::state::auth::SessionContext;
use crate::util::guard::RouteGuard;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context, installs the route guard, and sets up
/// client-side routing. The guard and the session both resolve token
/// presence from the same credential store, so their views of "signed in"
/// cannot drift.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let _session = SessionContext::provide();

    view! {
        <Stylesheet id="leptos" href="/pkg/hr-console.css"/>
        <Title text="HR Console"/>

        <Router>
            <RouteGuard/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <AppShell><HomePage/></AppShell> }
                />
                <Route
                    path=StaticSegment("companies")
                    view=|| view! { <AppShell><CompaniesPage/></AppShell> }
                />
                <Route
                    path=StaticSegment("departments")
                    view=|| view! { <AppShell><DepartmentsPage/></AppShell> }
                />
                <Route
                    path=StaticSegment("positions")
                    view=|| view! { <AppShell><PositionsPage/></AppShell> }
                />
                <Route
                    path=StaticSegment("employees")
                    view=|| view! { <AppShell><EmployeesPage/></AppShell> }
                />
                <Route
                    path=StaticSegment("leave-requests")
                    view=|| view! { <AppShell><LeaveRequestsPage/></AppShell> }
                />
            </Routes>
        </Router>
    }
}
