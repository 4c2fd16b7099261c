//! Leave-requests listing page with kind and status labels.

use leptos::prelude::*;

use crate::components::pagination::{PaginationBar, bar_metrics};
use crate::net::resources;
use crate::net::types::{LeaveRequest, PageParams};
use crate::state::paged::PagedResource;

#[component]
pub fn LeaveRequestsPage() -> impl IntoView {
    let requests: PagedResource<LeaveRequest> =
        PagedResource::new(PageParams::sorted_by("startDate"), |params| {
            Box::pin(async move { resources::list_leave_requests(&params).await })
        });
    requests.mount();

    let search = RwSignal::new(String::new());
    let metrics = Signal::derive(move || {
        requests.with(|state| bar_metrics(state.data(), state.params().page))
    });

    view! {
        <div class="listing listing--leave-requests">
            <header class="listing__header">
                <h1>"Leave Requests"</h1>
            </header>

            <input
                class="listing__search"
                type="search"
                placeholder="Search by employee..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    search.set(text.clone());
                    requests.set_search(&text);
                }
            />

            <Show when=move || requests.with(|state| state.has_error())>
                <div class="listing__error">
                    <p>"Could not load leave requests."</p>
                    <button class="btn" on:click=move |_| requests.refetch()>"Retry"</button>
                </div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        <th>"Employee"</th>
                        <th>"Kind"</th>
                        <th>
                            <button class="table__sort" on:click=move |_| requests.sort_by("startDate")>
                                "From"
                            </button>
                        </th>
                        <th>"To"</th>
                        <th>"Status"</th>
                        <th>"Reason"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        requests
                            .with(|state| state.data().map(|page| page.items.clone()))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|request| {
                                view! {
                                    <tr>
                                        <td>{request.employee_name.clone()}</td>
                                        <td>{request.kind.label()}</td>
                                        <td>{request.start_date.clone()}</td>
                                        <td>{request.end_date.clone()}</td>
                                        <td>
                                            <span class=format!("badge {}", request.status.badge_class())>
                                                {request.status.label()}
                                            </span>
                                        </td>
                                        <td>{request.reason.clone().unwrap_or_default()}</td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || requests.with(|state| state.is_loading())>
                <p class="listing__loading">"Loading..."</p>
            </Show>

            <PaginationBar
                page=Signal::derive(move || metrics.get().0)
                total_pages=Signal::derive(move || metrics.get().1)
                total=Signal::derive(move || metrics.get().2)
                on_page=Callback::new(move |page| requests.set_page(page))
            />
        </div>
    }
}
