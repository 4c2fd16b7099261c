//! Reusable pagination state machine for resource listing pages.
//!
//! DESIGN
//! ======
//! [`PagedState`] is pure bookkeeping: every mutator returns a
//! [`FetchTicket`] describing the exactly-one retrieval the caller must
//! issue, and [`PagedState::settle`] applies a completed retrieval. In-flight
//! retrievals are never cancelled; a ticket that is no longer the newest is
//! simply discarded on arrival, so the latest requested parameters always
//! win. [`PagedResource`] binds the machine to a Leptos signal and a page
//! fetcher for use in components.

#[cfg(test)]
#[path = "paged_test.rs"]
mod paged_test;

use futures::future::LocalBoxFuture;
use leptos::prelude::*;

use crate::net::api::ApiError;
use crate::net::types::{Paged, PageParams, SortDirection};

/// Marker for a failed retrieval. No message is retained; pages only show a
/// retry affordance, and the detail is logged at the fetch boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchError;

/// A retrieval the caller must issue for the parameters it carries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket {
    epoch: u64,
    params: PageParams,
}

impl FetchTicket {
    pub fn params(&self) -> &PageParams {
        &self.params
    }
}

/// Listing state: the last good page, current parameters, and flags.
#[derive(Clone, Debug, PartialEq)]
pub struct PagedState<T> {
    data: Option<Paged<T>>,
    params: PageParams,
    loading: bool,
    error: bool,
    epoch: u64,
}

impl<T> PagedState<T> {
    pub fn new(params: PageParams) -> Self {
        Self {
            data: None,
            params,
            loading: false,
            error: false,
            epoch: 0,
        }
    }

    pub fn data(&self) -> Option<&Paged<T>> {
        self.data.as_ref()
    }

    pub fn params(&self) -> &PageParams {
        &self.params
    }

    /// True exactly while the newest ticket is unsettled.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_error(&self) -> bool {
        self.error
    }

    /// Update the filter text. Empty input clears the filter. The page
    /// resets to 1 so results start from the beginning of the new match set.
    pub fn set_search(&mut self, text: &str) -> FetchTicket {
        let trimmed = text.trim();
        self.params.search = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_owned())
        };
        self.params.page = 1;
        self.begin()
    }

    pub fn set_page(&mut self, page: u32) -> FetchTicket {
        self.params.page = page.max(1);
        self.begin()
    }

    /// Change the sort column/direction. The page is preserved so the user
    /// keeps their position in the collection.
    pub fn set_sort(&mut self, field: &str, direction: SortDirection) -> FetchTicket {
        self.params.sort = field.to_owned();
        self.params.direction = direction;
        self.begin()
    }

    /// Reissue the current parameters unchanged, e.g. after a mutation
    /// elsewhere invalidated the listed data.
    pub fn refetch(&mut self) -> FetchTicket {
        self.begin()
    }

    fn begin(&mut self) -> FetchTicket {
        self.epoch += 1;
        self.loading = true;
        FetchTicket {
            epoch: self.epoch,
            params: self.params.clone(),
        }
    }

    /// Apply a completed retrieval for the ticket with `epoch`.
    ///
    /// Superseded tickets are ignored. On failure the previous data is kept
    /// so the table never flashes empty.
    pub fn settle(&mut self, epoch: u64, result: Result<Paged<T>, FetchError>) {
        if epoch != self.epoch {
            return;
        }
        self.loading = false;
        match result {
            Ok(page) => {
                self.data = Some(page);
                self.error = false;
            }
            Err(FetchError) => self.error = true,
        }
    }
}

/// Page-retrieval function bound to a [`PagedResource`].
///
/// A plain function pointer (capture-free closures coerce) so the handle
/// stays `Copy` and safe to move into view closures.
pub type PageFetcher<T> = fn(PageParams) -> LocalBoxFuture<'static, Result<Paged<T>, ApiError>>;

/// Copyable handle pairing a [`PagedState`] signal with its page fetcher.
pub struct PagedResource<T: Send + Sync + 'static> {
    state: RwSignal<PagedState<T>>,
    fetch: PageFetcher<T>,
}

impl<T: Send + Sync + 'static> Clone for PagedResource<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PagedResource<T> {}

impl<T: Send + Sync + 'static> PagedResource<T> {
    /// Create the handle without issuing a retrieval yet.
    pub fn new(params: PageParams, fetch: PageFetcher<T>) -> Self {
        Self {
            state: RwSignal::new(PagedState::new(params)),
            fetch,
        }
    }

    /// Issue the initial retrieval. Call once from the component body.
    pub fn mount(self) {
        self.issue(PagedState::refetch);
    }

    pub fn set_search(self, text: &str) {
        self.issue(|state| state.set_search(text));
    }

    pub fn set_page(self, page: u32) {
        self.issue(move |state| state.set_page(page));
    }

    pub fn set_sort(self, field: &str, direction: SortDirection) {
        self.issue(|state| state.set_sort(field, direction));
    }

    pub fn refetch(self) {
        self.issue(PagedState::refetch);
    }

    /// Toggle or adopt a sort column the way a header click should.
    pub fn sort_by(self, field: &str) {
        let direction = self
            .state
            .with_untracked(|state| state.params().next_direction_for(field));
        self.set_sort(field, direction);
    }

    /// Read the current state reactively.
    pub fn with<R>(self, read: impl FnOnce(&PagedState<T>) -> R) -> R {
        self.state.with(read)
    }

    fn issue(self, mutate: impl FnOnce(&mut PagedState<T>) -> FetchTicket) {
        if let Some(ticket) = self.state.try_update(mutate) {
            self.run(ticket);
        }
    }

    #[cfg(feature = "hydrate")]
    fn run(self, ticket: FetchTicket) {
        let state = self.state;
        let fetch = self.fetch;
        leptos::task::spawn_local(async move {
            let result = match fetch(ticket.params.clone()).await {
                Ok(page) => Ok(page),
                Err(error) => {
                    log::warn!("list retrieval failed: {error}");
                    Err(FetchError)
                }
            };
            let _ = state.try_update(|current| current.settle(ticket.epoch, result));
        });
    }

    #[cfg(not(feature = "hydrate"))]
    fn run(self, ticket: FetchTicket) {
        let _ = ticket;
    }
}
