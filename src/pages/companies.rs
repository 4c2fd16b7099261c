//! Companies listing page.

use leptos::prelude::*;

use crate::components::pagination::{PaginationBar, bar_metrics};
use crate::net::resources;
use crate::net::types::{Company, PageParams};
use crate::state::paged::PagedResource;

#[component]
pub fn CompaniesPage() -> impl IntoView {
    let companies: PagedResource<Company> =
        PagedResource::new(PageParams::sorted_by("name"), |params| {
            Box::pin(async move { resources::list_companies(&params).await })
        });
    companies.mount();

    let search = RwSignal::new(String::new());
    let metrics = Signal::derive(move || {
        companies.with(|state| bar_metrics(state.data(), state.params().page))
    });

    view! {
        <div class="listing listing--companies">
            <header class="listing__header">
                <h1>"Companies"</h1>
            </header>

            <input
                class="listing__search"
                type="search"
                placeholder="Search companies..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    search.set(text.clone());
                    companies.set_search(&text);
                }
            />

            <Show when=move || companies.with(|state| state.has_error())>
                <div class="listing__error">
                    <p>"Could not load companies."</p>
                    <button class="btn" on:click=move |_| companies.refetch()>"Retry"</button>
                </div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <button class="table__sort" on:click=move |_| companies.sort_by("name")>
                                "Name"
                            </button>
                        </th>
                        <th>"Address"</th>
                        <th>"Phone"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        companies
                            .with(|state| state.data().map(|page| page.items.clone()))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|company| {
                                view! {
                                    <tr>
                                        <td>{company.name.clone()}</td>
                                        <td>{company.address.clone().unwrap_or_default()}</td>
                                        <td>{company.phone.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || companies.with(|state| state.is_loading())>
                <p class="listing__loading">"Loading..."</p>
            </Show>

            <PaginationBar
                page=Signal::derive(move || metrics.get().0)
                total_pages=Signal::derive(move || metrics.get().1)
                total=Signal::derive(move || metrics.get().2)
                on_page=Callback::new(move |page| companies.set_page(page))
            />
        </div>
    }
}
