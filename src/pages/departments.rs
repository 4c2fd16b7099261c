//! Departments listing page.

use leptos::prelude::*;

use crate::components::pagination::{PaginationBar, bar_metrics};
use crate::net::resources;
use crate::net::types::{Department, PageParams};
use crate::state::paged::PagedResource;

#[component]
pub fn DepartmentsPage() -> impl IntoView {
    let departments: PagedResource<Department> =
        PagedResource::new(PageParams::sorted_by("name"), |params| {
            Box::pin(async move { resources::list_departments(&params).await })
        });
    departments.mount();

    let search = RwSignal::new(String::new());
    let metrics = Signal::derive(move || {
        departments.with(|state| bar_metrics(state.data(), state.params().page))
    });

    view! {
        <div class="listing listing--departments">
            <header class="listing__header">
                <h1>"Departments"</h1>
            </header>

            <input
                class="listing__search"
                type="search"
                placeholder="Search departments..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    search.set(text.clone());
                    departments.set_search(&text);
                }
            />

            <Show when=move || departments.with(|state| state.has_error())>
                <div class="listing__error">
                    <p>"Could not load departments."</p>
                    <button class="btn" on:click=move |_| departments.refetch()>"Retry"</button>
                </div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Name"</th>
                        <th>"Company"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        departments
                            .with(|state| state.data().map(|page| page.items.clone()))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|department| {
                                view! {
                                    <tr>
                                        <td>{department.name.clone()}</td>
                                        <td>{department.company_name.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || departments.with(|state| state.is_loading())>
                <p class="listing__loading">"Loading..."</p>
            </Show>

            <PaginationBar
                page=Signal::derive(move || metrics.get().0)
                total_pages=Signal::derive(move || metrics.get().1)
                total=Signal::derive(move || metrics.get().2)
                on_page=Callback::new(move |page| departments.set_page(page))
            />
        </div>
    }
}
