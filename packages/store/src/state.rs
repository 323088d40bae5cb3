//! # Collection state machine
//!
//! [`CollectionState`] is the authoritative client-side view of one paginated
//! resource collection: the current page of items, an optional selected
//! entity, request lifecycle bookkeeping, and the mutation marks that drive
//! refetching. One instance exists per resource type; the UI layer wraps it
//! in a reactive signal and calls the transition methods from its async
//! actions.
//!
//! ## Request lifecycle
//!
//! Every operation is a three-state transition: a `begin_*` call clears the
//! previous error and bumps the in-flight counter, and a `finish_*`/`fail_*`
//! call settles it. `is_loading` is therefore true exactly while at least one
//! request for the slice is unresolved, even when requests overlap.
//!
//! ## Fetch fencing
//!
//! Collection fetches are not cancelled when a newer one is issued; instead
//! each fetch carries a [`FetchTicket`] from a monotonically increasing
//! sequence, and a completion whose ticket is no longer the latest issued is
//! discarded ([`Applied::Stale`]). Whichever page the user requested last is
//! the one that lands, regardless of network ordering.
//!
//! ## Mutation marks
//!
//! Create/update/delete results land in [`MutationMark`] slots rather than
//! being patched into `items`. A mark compares by *generation*, not content,
//! so deleting two different ids (or the same id twice) always reads as a
//! change. List controllers watch [`CollectionState::mutation_revision`] and
//! refetch the current page, keeping the server authoritative for ordering
//! and counts at the cost of one extra round-trip per mutation.

use serde::Deserialize;

use crate::models::Entity;
use crate::params::{FetchParams, FilterMap};

/// Server-derived pagination, normalized by the API layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub page_size: u32,
    pub pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            page_size: crate::params::DEFAULT_PAGE_SIZE,
            pages: 1,
        }
    }
}

/// One page of a collection, as returned by a fetch.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionPage<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

/// A mutation-result slot whose identity, not content, signals change.
#[derive(Clone, Debug)]
pub struct MutationMark<T> {
    generation: u64,
    payload: Option<T>,
}

impl<T> Default for MutationMark<T> {
    fn default() -> Self {
        Self {
            generation: 0,
            payload: None,
        }
    }
}

// Equality is generation equality on purpose: two deletes of the same id
// must still read as distinct events.
impl<T> PartialEq for MutationMark<T> {
    fn eq(&self, other: &Self) -> bool {
        self.generation == other.generation
    }
}

impl<T> MutationMark<T> {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn payload(&self) -> Option<&T> {
        self.payload.as_ref()
    }

    pub fn is_set(&self) -> bool {
        self.payload.is_some()
    }
}

/// Handle for one issued collection fetch. Holds the params so the state can
/// echo them back when the response lands.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchTicket {
    seq: u64,
    pub params: FetchParams,
}

/// Whether a settled fetch was the latest issued or lost the fence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    Latest,
    Stale,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CollectionState<T> {
    pub items: Vec<T>,
    pub selected: Option<T>,
    pub error: Option<String>,
    pub pagination: Pagination,
    pub filters: FilterMap,
    pub search: String,
    pub last_created: MutationMark<T>,
    pub last_updated: MutationMark<T>,
    pub last_deleted: MutationMark<String>,
    in_flight: u32,
    issued: u64,
    generation: u64,
}

impl<T> Default for CollectionState<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            selected: None,
            error: None,
            pagination: Pagination::default(),
            filters: FilterMap::new(),
            search: String::new(),
            last_created: MutationMark::default(),
            last_updated: MutationMark::default(),
            last_deleted: MutationMark::default(),
            in_flight: 0,
            issued: 0,
            generation: 0,
        }
    }
}

impl<T: Clone> CollectionState<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while at least one request for this slice is unresolved.
    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Latest mutation generation. Bumped by every settled create/update/
    /// delete; list controllers subscribe to this to refetch.
    pub fn mutation_revision(&self) -> u64 {
        self.generation
    }

    /// Start a collection fetch. Clears the error and optimistically records
    /// the requested page; the response recomputes pagination
    /// authoritatively.
    pub fn begin_fetch(&mut self, params: FetchParams) -> FetchTicket {
        self.error = None;
        self.in_flight += 1;
        self.pagination.page = params.page;
        self.pagination.page_size = params.page_size;
        self.issued += 1;
        FetchTicket {
            seq: self.issued,
            params,
        }
    }

    /// Settle a successful fetch. Stale completions (a newer fetch was issued
    /// meanwhile) are discarded without touching items or pagination.
    pub fn finish_fetch(&mut self, ticket: &FetchTicket, page: CollectionPage<T>) -> Applied {
        self.settle();
        if ticket.seq != self.issued {
            return Applied::Stale;
        }
        self.items = page.items;
        self.pagination = page.pagination;
        self.filters = ticket.params.filters.clone();
        self.search = ticket.params.search.clone();
        Applied::Latest
    }

    /// Settle a failed fetch. A stale failure must not clobber the state of
    /// the fetch that superseded it.
    pub fn fail_fetch(&mut self, ticket: &FetchTicket, message: impl Into<String>) -> Applied {
        self.settle();
        if ticket.seq != self.issued {
            return Applied::Stale;
        }
        self.error = Some(message.into());
        Applied::Latest
    }

    /// Start a single-entity fetch or a mutation.
    pub fn begin_request(&mut self) {
        self.error = None;
        self.in_flight += 1;
    }

    pub fn finish_fetch_one(&mut self, entity: T) {
        self.settle();
        self.selected = Some(entity);
    }

    pub fn finish_create(&mut self, entity: T) {
        self.settle();
        self.generation += 1;
        self.last_created = MutationMark {
            generation: self.generation,
            payload: Some(entity),
        };
    }

    pub fn finish_delete(&mut self, id: String) {
        self.settle();
        self.generation += 1;
        self.last_deleted = MutationMark {
            generation: self.generation,
            payload: Some(id),
        };
    }

    pub fn fail_request(&mut self, message: impl Into<String>) {
        self.settle();
        self.error = Some(message.into());
    }

    fn settle(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}

impl<T: Entity + Clone> CollectionState<T> {
    /// Settle a successful update. Replaces `selected` when it is the same
    /// entity.
    pub fn finish_update(&mut self, entity: T) {
        self.settle();
        if self
            .selected
            .as_ref()
            .is_some_and(|selected| selected.id() == entity.id())
        {
            self.selected = Some(entity.clone());
        }
        self.generation += 1;
        self.last_updated = MutationMark {
            generation: self.generation,
            payload: Some(entity),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{User, UserRole};

    fn user(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: format!("{id}@example.com"),
            role: UserRole::Admin,
            is_active: true,
        }
    }

    fn page_of(ids: &[&str]) -> CollectionPage<User> {
        CollectionPage {
            items: ids.iter().map(|id| user(id)).collect(),
            pagination: Pagination {
                total: ids.len() as u64,
                page: 1,
                page_size: 10,
                pages: 1,
            },
        }
    }

    #[test]
    fn loading_tracks_every_unresolved_request() {
        let mut state = CollectionState::<User>::new();
        assert!(!state.is_loading());

        let first = state.begin_fetch(FetchParams::default());
        state.begin_request();
        assert!(state.is_loading());

        state.finish_fetch(&first, page_of(&["u1"]));
        assert!(state.is_loading(), "mutation still in flight");

        state.finish_delete("u1".to_string());
        assert!(!state.is_loading());
    }

    #[test]
    fn error_is_cleared_when_a_new_request_starts() {
        let mut state = CollectionState::<User>::new();
        let ticket = state.begin_fetch(FetchParams::default());
        state.fail_fetch(&ticket, "Failed to fetch users");
        assert_eq!(state.error.as_deref(), Some("Failed to fetch users"));

        state.begin_request();
        assert_eq!(state.error, None);
    }

    #[test]
    fn requested_page_is_recorded_before_the_response_lands() {
        let mut state = CollectionState::<User>::new();
        let params = FetchParams {
            page: 3,
            ..FetchParams::default()
        };
        let _ticket = state.begin_fetch(params);
        assert!(state.is_loading());
        assert_eq!(state.pagination.page, 3);
    }

    #[test]
    fn stale_fetch_results_are_discarded() {
        let mut state = CollectionState::<User>::new();
        let first = state.begin_fetch(FetchParams::default());
        let second = state.begin_fetch(FetchParams {
            page: 2,
            ..FetchParams::default()
        });

        // The superseded fetch resolves last-wins style in the source; here
        // it loses the fence no matter the arrival order.
        assert_eq!(state.finish_fetch(&first, page_of(&["old"])), Applied::Stale);
        assert!(state.items.is_empty());

        assert_eq!(
            state.finish_fetch(&second, page_of(&["fresh"])),
            Applied::Latest
        );
        assert_eq!(state.items[0].id, "fresh");
        assert!(!state.is_loading());
    }

    #[test]
    fn stale_fetch_failures_do_not_clobber_the_latest() {
        let mut state = CollectionState::<User>::new();
        let first = state.begin_fetch(FetchParams::default());
        let second = state.begin_fetch(FetchParams::default());

        assert_eq!(state.fail_fetch(&first, "timed out"), Applied::Stale);
        assert_eq!(state.error, None);

        state.finish_fetch(&second, page_of(&["u1"]));
        assert_eq!(state.error, None);
    }

    #[test]
    fn fetch_echoes_the_requested_filters_and_search() {
        let mut state = CollectionState::<User>::new();
        let mut params = FetchParams {
            search: "ada".to_string(),
            ..FetchParams::default()
        };
        params
            .filters
            .insert("role".to_string(), "admin".to_string());
        let ticket = state.begin_fetch(params);
        state.finish_fetch(&ticket, page_of(&["u1"]));
        assert_eq!(state.search, "ada");
        assert_eq!(state.filters.get("role").map(String::as_str), Some("admin"));
    }

    #[test]
    fn every_delete_changes_the_mark_identity() {
        let mut state = CollectionState::<User>::new();
        state.begin_request();
        state.finish_delete("u1".to_string());
        let first = state.last_deleted.clone();
        let revision = state.mutation_revision();

        state.begin_request();
        state.finish_delete("u2".to_string());
        assert_ne!(state.last_deleted, first);
        assert!(state.mutation_revision() > revision);

        // Same id again is still a new event.
        let second = state.last_deleted.clone();
        state.begin_request();
        state.finish_delete("u2".to_string());
        assert_ne!(state.last_deleted, second);
    }

    #[test]
    fn update_replaces_the_selected_entity_when_ids_match() {
        let mut state = CollectionState::<User>::new();
        state.begin_request();
        state.finish_fetch_one(user("u1"));

        let mut renamed = user("u1");
        renamed.first_name = "Grace".to_string();
        state.begin_request();
        state.finish_update(renamed);
        assert_eq!(
            state.selected.as_ref().map(|u| u.first_name.as_str()),
            Some("Grace")
        );

        let other = user("u2");
        state.begin_request();
        state.finish_update(other);
        assert_eq!(state.selected.as_ref().map(|u| u.id.as_str()), Some("u1"));
    }

    #[test]
    fn mutation_failure_sets_the_error() {
        let mut state = CollectionState::<User>::new();
        state.begin_request();
        state.fail_request("Failed to delete user");
        assert_eq!(state.error.as_deref(), Some("Failed to delete user"));
        assert!(!state.is_loading());
    }
}
