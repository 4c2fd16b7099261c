//! Employees listing page with search, sortable columns, create and delete.

#[cfg(test)]
#[path = "employees_test.rs"]
mod employees_test;

use leptos::prelude::*;

use crate::components::pagination::{PaginationBar, bar_metrics};
use crate::net::resources;
use crate::net::types::{Employee, NewEmployee, PageParams, SortDirection};
use crate::state::paged::PagedResource;

/// Header indicator for the column the listing is sorted by.
fn sort_indicator(params: &PageParams, field: &str) -> &'static str {
    if params.sort != field {
        ""
    } else if params.direction == SortDirection::Asc {
        " \u{25b2}"
    } else {
        " \u{25bc}"
    }
}

/// Trim all fields and require them before the create request goes out.
fn validate_new_employee(
    first_name: &str,
    last_name: &str,
    email: &str,
) -> Result<NewEmployee, &'static str> {
    let first_name = first_name.trim();
    let last_name = last_name.trim();
    let email = email.trim();
    if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
        return Err("Enter first name, last name and email.");
    }
    Ok(NewEmployee {
        first_name: first_name.to_owned(),
        last_name: last_name.to_owned(),
        email: email.to_owned(),
    })
}

#[component]
pub fn EmployeesPage() -> impl IntoView {
    let employees: PagedResource<Employee> =
        PagedResource::new(PageParams::sorted_by("lastName"), |params| {
            Box::pin(async move { resources::list_employees(&params).await })
        });
    employees.mount();

    let search = RwSignal::new(String::new());
    let show_create = RwSignal::new(false);

    let metrics = Signal::derive(move || {
        employees.with(|state| bar_metrics(state.data(), state.params().page))
    });

    let on_delete = Callback::new(move |id: String| {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if resources::delete_employee(&id).await.is_ok() {
                employees.refetch();
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = id;
    });

    let header = move |field: &'static str, label: &'static str| {
        view! {
            <th>
                <button class="table__sort" on:click=move |_| employees.sort_by(field)>
                    {label}
                    {move || employees.with(|state| sort_indicator(state.params(), field))}
                </button>
            </th>
        }
    };

    view! {
        <div class="listing listing--employees">
            <header class="listing__header">
                <h1>"Employees"</h1>
                <button class="btn btn--primary" on:click=move |_| show_create.set(true)>
                    "+ New Employee"
                </button>
            </header>

            <input
                class="listing__search"
                type="search"
                placeholder="Search employees..."
                prop:value=move || search.get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    search.set(text.clone());
                    employees.set_search(&text);
                }
            />

            <Show when=move || employees.with(|state| state.has_error())>
                <div class="listing__error">
                    <p>"Could not load employees."</p>
                    <button class="btn" on:click=move |_| employees.refetch()>"Retry"</button>
                </div>
            </Show>

            <table class="table">
                <thead>
                    <tr>
                        {header("lastName", "Name")}
                        <th>"Email"</th>
                        <th>"Department"</th>
                        <th>"Position"</th>
                        {header("hireDate", "Hired")}
                        <th>"Status"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        employees
                            .with(|state| state.data().map(|page| page.items.clone()))
                            .unwrap_or_default()
                            .into_iter()
                            .map(|employee| {
                                let id = employee.id.clone();
                                view! {
                                    <tr>
                                        <td>{employee.full_name()}</td>
                                        <td>{employee.email.clone()}</td>
                                        <td>{employee.department_name.clone()}</td>
                                        <td>{employee.position_title.clone()}</td>
                                        <td>{employee.hire_date.clone()}</td>
                                        <td>{employee.status.label()}</td>
                                        <td>
                                            <button
                                                class="btn btn--danger"
                                                on:click=move |_| on_delete.run(id.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </tbody>
            </table>

            <Show when=move || employees.with(|state| state.is_loading())>
                <p class="listing__loading">"Loading..."</p>
            </Show>

            <PaginationBar
                page=Signal::derive(move || metrics.get().0)
                total_pages=Signal::derive(move || metrics.get().1)
                total=Signal::derive(move || metrics.get().2)
                on_page=Callback::new(move |page| employees.set_page(page))
            />

            <Show when=move || show_create.get()>
                <CreateEmployeeDialog
                    employees=employees
                    on_cancel=Callback::new(move |()| show_create.set(false))
                />
            </Show>
        </div>
    }
}

/// Modal dialog for creating an employee.
#[component]
fn CreateEmployeeDialog(
    employees: PagedResource<Employee>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let first_name = RwSignal::new(String::new());
    let last_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let submit = Callback::new(move |()| {
        let payload = match validate_new_employee(
            &first_name.get_untracked(),
            &last_name.get_untracked(),
            &email.get_untracked(),
        ) {
            Ok(payload) => payload,
            Err(text) => {
                message.set(text.to_owned());
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match resources::create_employee(&payload).await {
                Ok(_) => {
                    employees.refetch();
                    on_cancel.run(());
                }
                Err(error) => {
                    message.set(crate::net::api::resolve_error_message(&error));
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (payload, &employees);
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"New Employee"</h2>
                <label class="dialog__label">
                    "First name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || first_name.get()
                        on:input=move |ev| first_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Last name"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || last_name.get()
                        on:input=move |ev| last_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Email"
                    <input
                        class="dialog__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                submit.run(());
                            }
                        }
                    />
                </label>
                <Show when=move || !message.get().is_empty()>
                    <p class="dialog__message">{move || message.get()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| submit.run(())>
                        "Create"
                    </button>
                </div>
            </div>
        </div>
    }
}
