use super::*;
use crate::net::types::Company;

fn params() -> PageParams {
    PageParams::sorted_by("name")
}

fn page_of(names: &[&str], page: u32, total: u64) -> Paged<Company> {
    Paged {
        items: names
            .iter()
            .map(|name| Company {
                id: format!("c-{name}"),
                name: (*name).to_owned(),
                address: None,
                phone: None,
            })
            .collect(),
        total,
        page,
        limit: 10,
        total_pages: total.div_ceil(10) as u32,
    }
}

// =============================================================
// Construction
// =============================================================

#[test]
fn new_state_is_idle_and_empty() {
    let state: PagedState<Company> = PagedState::new(params());
    assert!(state.data().is_none());
    assert!(!state.is_loading());
    assert!(!state.has_error());
}

// =============================================================
// Mutators
// =============================================================

#[test]
fn set_search_resets_page_and_issues_one_ticket() {
    let mut state: PagedState<Company> = PagedState::new(params());
    state.set_page(5);
    let epoch_before = state.epoch;
    let ticket = state.set_search("abc");

    assert_eq!(ticket.params().search, Some("abc".to_owned()));
    assert_eq!(ticket.params().page, 1);
    assert_eq!(state.params().page, 1);
    // Exactly one retrieval per mutation: the epoch advanced once.
    assert_eq!(state.epoch, epoch_before + 1);
    assert_eq!(ticket.epoch, state.epoch);
    assert!(state.is_loading());
}

#[test]
fn set_search_trims_and_clears_empty_input() {
    let mut state: PagedState<Company> = PagedState::new(params());
    let ticket = state.set_search("  ops  ");
    assert_eq!(ticket.params().search, Some("ops".to_owned()));

    let ticket = state.set_search("   ");
    assert_eq!(ticket.params().search, None);
}

#[test]
fn set_page_keeps_search_and_clamps_to_one() {
    let mut state: PagedState<Company> = PagedState::new(params());
    state.set_search("abc");
    let ticket = state.set_page(3);
    assert_eq!(ticket.params().page, 3);
    assert_eq!(ticket.params().search, Some("abc".to_owned()));

    let ticket = state.set_page(0);
    assert_eq!(ticket.params().page, 1);
}

#[test]
fn set_sort_preserves_page_position() {
    let mut state: PagedState<Company> = PagedState::new(params());
    state.set_page(5);
    let ticket = state.set_sort("phone", SortDirection::Desc);

    assert_eq!(ticket.params().page, 5);
    assert_eq!(ticket.params().sort, "phone");
    assert_eq!(ticket.params().direction, SortDirection::Desc);
}

#[test]
fn refetch_reissues_identical_params() {
    let mut state: PagedState<Company> = PagedState::new(params());
    let first = state.refetch();
    let second = state.refetch();

    assert_eq!(first.params(), second.params());
    assert_ne!(first, second);
}

// =============================================================
// settle
// =============================================================

#[test]
fn settle_success_installs_data_and_clears_flags() {
    let mut state: PagedState<Company> = PagedState::new(params());
    let ticket = state.refetch();

    state.settle(ticket.epoch, Ok(page_of(&["Acme"], 1, 1)));

    assert!(!state.is_loading());
    assert!(!state.has_error());
    assert_eq!(state.data().map(|page| page.items.len()), Some(1));
}

#[test]
fn settle_failure_keeps_previous_data() {
    let mut state: PagedState<Company> = PagedState::new(params());
    let ticket = state.refetch();
    state.settle(ticket.epoch, Ok(page_of(&["Acme", "Globex"], 1, 2)));

    let ticket = state.set_page(2);
    state.settle(ticket.epoch, Err(FetchError));

    assert!(state.has_error());
    assert!(!state.is_loading());
    let names: Vec<&str> = state
        .data()
        .map(|page| page.items.iter().map(|c| c.name.as_str()).collect())
        .unwrap_or_default();
    assert_eq!(names, vec!["Acme", "Globex"]);
}

#[test]
fn settle_ignores_superseded_ticket() {
    let mut state: PagedState<Company> = PagedState::new(params());
    let stale = state.set_search("a");
    let fresh = state.set_search("ab");

    // The stale response arrives after the fresh request was issued.
    state.settle(stale.epoch, Ok(page_of(&["Wrong"], 1, 1)));
    assert!(state.data().is_none());
    assert!(state.is_loading());

    state.settle(fresh.epoch, Ok(page_of(&["Right"], 1, 1)));
    assert_eq!(
        state.data().map(|page| page.items[0].name.as_str()),
        Some("Right")
    );
    assert!(!state.is_loading());
}

#[test]
fn settle_success_clears_a_previous_error() {
    let mut state: PagedState<Company> = PagedState::new(params());
    let ticket = state.refetch();
    state.settle(ticket.epoch, Err(FetchError));
    assert!(state.has_error());

    let ticket = state.refetch();
    state.settle(ticket.epoch, Ok(page_of(&["Acme"], 1, 1)));
    assert!(!state.has_error());
}

#[test]
fn loading_spans_exactly_the_newest_retrieval() {
    let mut state: PagedState<Company> = PagedState::new(params());
    assert!(!state.is_loading());

    let first = state.refetch();
    assert!(state.is_loading());

    let second = state.refetch();
    state.settle(first.epoch, Ok(page_of(&["Acme"], 1, 1)));
    // The first retrieval no longer counts; the second is still in flight.
    assert!(state.is_loading());

    state.settle(second.epoch, Ok(page_of(&["Acme"], 1, 1)));
    assert!(!state.is_loading());
}
