//! Pagination bar shared by every listing page.

#[cfg(test)]
#[path = "pagination_test.rs"]
mod pagination_test;

use leptos::prelude::*;

use crate::net::types::Paged;

/// "Page X of Y" label; a missing or empty result set still reads page 1.
pub fn page_label(page: u32, total_pages: u32) -> String {
    format!("Page {page} of {}", total_pages.max(1))
}

pub fn can_go_back(page: u32) -> bool {
    page > 1
}

pub fn can_go_forward(page: u32, total_pages: u32) -> bool {
    page < total_pages
}

/// Derive `(page, total_pages, total)` for the bar from a paged result.
pub fn bar_metrics<T>(data: Option<&Paged<T>>, requested_page: u32) -> (u32, u32, u64) {
    data.map_or((requested_page, 1, 0), |page| {
        (page.page, page.total_pages.max(1), page.total)
    })
}

/// Previous/next controls with a position label and total count.
#[component]
pub fn PaginationBar(
    #[prop(into)] page: Signal<u32>,
    #[prop(into)] total_pages: Signal<u32>,
    #[prop(into)] total: Signal<u64>,
    on_page: Callback<u32>,
) -> impl IntoView {
    view! {
        <div class="pagination">
            <button
                class="btn pagination__btn"
                disabled=move || !can_go_back(page.get())
                on:click=move |_| on_page.run(page.get().saturating_sub(1))
            >
                "Previous"
            </button>
            <span class="pagination__label">
                {move || page_label(page.get(), total_pages.get())}
            </span>
            <span class="pagination__total">
                {move || format!("{} total", total.get())}
            </span>
            <button
                class="btn pagination__btn"
                disabled=move || !can_go_forward(page.get(), total_pages.get())
                on:click=move |_| on_page.run(page.get() + 1)
            >
                "Next"
            </button>
        </div>
    }
}
