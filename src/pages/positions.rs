//! Positions listing page.

use leptos::prelude::*;

use crate::components::pagination::{PaginationBar, bar_metrics};
use crate::net::resources;
use crate::net::types::{PageParams, Position};
use crate::state::paged::PagedResource;

#[component]
pub fn PositionsPage() -> impl IntoView {
    let positions: PagedResource<Position> =
        PagedResource::new(PageParams::sorted_by("title"), |params| {
            Box::pin(async move { resources::list_positions(&params).await })
        });
    positions.mount();

    let search = RwSignal::new(String::new());
    let metrics = Signal::derive(move || {
        positions.with(|state| bar_metrics(state.data(), state.params().page))
    });

    view! {
        <div class="listing listing--positions">
            <header class="listing__header">
                <h1>"Positions"</h1>
            </header>

            <input
                class="listing__search"
                type="search"
                placeholder="Search positions..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    search.set(text.clone());
                    positions.set_search(&text);
                }
            />

            <Show when=move || positions.with(|state| state.has_error())>
                <div class="listing__error">
                    <p>"Could not load positions."</p>
                    <button class="btn" on:click=move |_| positions.refetch()>"Retry"</button>
                </div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>
                            <button class="table__sort" on:click=move |_| positions.sort_by("title")>
                                "Title"
                            </button>
                        </th>
                        <th>"Department"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        positions
                            .with(|state| state.data().map(|page| page.items.clone()))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|position| {
                                view! {
                                    <tr>
                                        <td>{position.title.clone()}</td>
                                        <td>{position.department_name.clone()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || positions.with(|state| state.is_loading())>
                <p class="listing__loading">"Loading..."</p>
            </Show>

            <PaginationBar
                page=Signal::derive(move || metrics.get().0)
                total_pages=Signal::derive(move || metrics.get().1)
                total=Signal::derive(move || metrics.get().2)
                on_page=Callback::new(move |page| positions.set_page(page))
            />
        </div>
    }
}
