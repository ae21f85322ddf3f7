use serde::{Deserialize, Serialize};

use crate::error::FetchError;
use crate::page::Page;
use crate::resource::Resource;

/// Visibility ratio at which the scroll sentinel starts the next load.
pub const SCROLL_THRESHOLD: f64 = 0.1;

/// Identity of an accumulated listing: collection plus normalized name filter.
/// The page number is deliberately not part of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListQuery {
    pub resource: Resource,
    pub name: Option<String>,
}

impl ListQuery {
    pub fn new(resource: Resource, name: &str) -> Self {
        let name = name.trim();
        Self {
            resource,
            name: (!name.is_empty()).then(|| name.to_string()),
        }
    }

    pub fn unfiltered(resource: Resource) -> Self {
        Self {
            resource,
            name: None,
        }
    }
}

/// Receipt for one in-flight page request. Results are only committed when the
/// ticket still matches the list's active query and generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTicket {
    pub query: ListQuery,
    pub page: u32,
    generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Applied,
    /// The response belongs to an abandoned query or request and was dropped.
    Stale,
}

/// Pages of one query accumulated in request order.
#[derive(Debug, Clone, PartialEq)]
pub struct PagedList<T> {
    query: ListQuery,
    items: Vec<T>,
    pages_loaded: u32,
    next_page: Option<u32>,
    in_flight: Option<u32>,
    error: Option<FetchError>,
    generation: u64,
}

impl<T> PagedList<T> {
    pub fn new(query: ListQuery) -> Self {
        Self {
            query,
            items: Vec::new(),
            pages_loaded: 0,
            next_page: Some(1),
            in_flight: None,
            error: None,
            generation: 0,
        }
    }

    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    pub fn has_next_page(&self) -> bool {
        self.next_page.is_some()
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// First page requested and not yet answered.
    pub fn is_loading_initial(&self) -> bool {
        self.pages_loaded == 0 && self.in_flight.is_some()
    }

    pub fn is_fetching_next(&self) -> bool {
        self.pages_loaded > 0 && self.in_flight.is_some()
    }

    /// Nothing loaded, nothing in flight and no error to show.
    pub fn needs_initial_load(&self) -> bool {
        self.pages_loaded == 0 && self.in_flight.is_none() && self.error.is_none()
    }

    /// At least one page loaded and the envelope says there are no more.
    pub fn is_exhausted(&self) -> bool {
        self.pages_loaded > 0 && self.next_page.is_none()
    }

    /// Start loading the next page. Returns `None` while a request is already in flight
    /// or when pagination is exhausted.
    pub fn begin_next(&mut self) -> Option<PageTicket> {
        if self.in_flight.is_some() {
            return None;
        }
        let page = self.next_page?;
        self.in_flight = Some(page);
        self.error = None;
        Some(PageTicket {
            query: self.query.clone(),
            page,
            generation: self.generation,
        })
    }

    /// Apply the outcome of a page request.
    pub fn commit(
        &mut self,
        ticket: &PageTicket,
        result: Result<Page<T>, FetchError>,
    ) -> CommitOutcome {
        if ticket.generation != self.generation
            || ticket.query != self.query
            || self.in_flight != Some(ticket.page)
        {
            return CommitOutcome::Stale;
        }
        self.in_flight = None;

        match result {
            Ok(page) => {
                // Never step backwards, even if the envelope misreports its page.
                self.next_page = page.next_page().filter(|next| *next > ticket.page);
                self.items.extend(page.items);
                self.pages_loaded += 1;
            }
            Err(err) => {
                self.error = Some(err);
            }
        }
        CommitOutcome::Applied
    }

    /// Switch to another query, discarding everything accumulated so far.
    pub fn reset(&mut self, query: ListQuery) {
        let generation = self.generation.wrapping_add(1);
        *self = Self::new(query);
        self.generation = generation;
    }

    /// Adopt a previously accumulated list, typically restored from the cache.
    /// Tickets issued before the swap stay stale.
    pub fn restore(&mut self, mut snapshot: Self) {
        snapshot.in_flight = None;
        snapshot.generation = self.generation.wrapping_add(1);
        *self = snapshot;
    }

    /// Forget the in-flight request; its response will be treated as stale.
    pub fn abandon_in_flight(&mut self) {
        if self.in_flight.take().is_some() {
            self.generation = self.generation.wrapping_add(1);
        }
    }
}

/// Decides when the scroll sentinel should request another page.
///
/// Fires at most once per visibility transition, and again after a load completes
/// while the sentinel is still on screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollGate {
    visible: bool,
    fired: bool,
}

impl ScrollGate {
    pub fn observe(&mut self, visible: bool, can_load: bool) -> bool {
        if !visible {
            self.visible = false;
            self.fired = false;
            return false;
        }
        self.visible = true;
        self.try_fire(can_load)
    }

    /// Called when the previous load finished.
    pub fn rearm(&mut self, can_load: bool) -> bool {
        self.fired = false;
        self.try_fire(can_load)
    }

    fn try_fire(&mut self, can_load: bool) -> bool {
        if self.visible && !self.fired && can_load {
            self.fired = true;
            return true;
        }
        false
    }
}

/// Whether an intersection report counts as visible for the given threshold.
pub fn sentinel_visible(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}
