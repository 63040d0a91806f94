//! Cursor-driven incremental loading of paginated collections.
//!
//! A [`SyncCursor`] owns the merged, de-duplicated item list for one
//! paginated stream. Fetching is split into [`SyncCursor::begin`] and
//! [`SyncCursor::complete`] so a caller can run the request elsewhere (a
//! worker thread, an event loop) and route the response back later;
//! [`SyncCursor::load_more`] does both in one call against a [`PageSource`].

use std::collections::HashSet;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Opaque server-issued resumption token.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// `None` means there are no further pages.
    pub next_cursor: Option<Cursor>,
}

impl<T> Page<T> {
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_cursor: None,
        }
    }
}

/// Capability to fetch one page of a collection.
pub trait PageSource<T> {
    fn fetch_page(&mut self, cursor: Option<&Cursor>) -> Result<Page<T>>;
}

/// An in-flight fetch issued by [`SyncCursor::begin`].
#[derive(Debug)]
#[must_use = "a begun request must be completed or the cursor stays busy"]
pub struct PageRequest {
    cursor: Option<Cursor>,
    reset: bool,
    generation: u64,
}

impl PageRequest {
    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn is_reset(&self) -> bool {
        self.reset
    }
}

#[derive(Debug)]
pub enum BeginLoad {
    Fetch(PageRequest),
    /// Another fetch is in flight on this instance.
    Busy,
    /// The stream already reported its last page.
    Exhausted,
    /// The cursor to request was already consumed without progress; the
    /// cursor has been cleared.
    Stalled,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    /// New items were appended.
    Appended(usize),
    /// The page held only known items but named a next cursor.
    Advanced,
    /// The page held nothing new and there are no further pages.
    Finished,
    Busy,
    Exhausted,
    Stalled,
    /// The response belonged to a request issued before the last reset.
    Stale,
}

impl LoadOutcome {
    pub fn fetched(self) -> bool {
        matches!(
            self,
            LoadOutcome::Appended(_) | LoadOutcome::Advanced | LoadOutcome::Finished
        )
    }
}

pub struct SyncCursor<T> {
    items: Vec<T>,
    cursor: Option<Cursor>,
    loading: bool,
    seen_ids: HashSet<String>,
    last_consumed: Option<Cursor>,
    generation: u64,
    id_of: fn(&T) -> &str,
}

impl<T> SyncCursor<T> {
    pub fn new(id_of: fn(&T) -> &str) -> Self {
        Self {
            items: Vec::new(),
            cursor: None,
            loading: false,
            seen_ids: HashSet::new(),
            last_consumed: None,
            generation: 0,
            id_of,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn cursor(&self) -> Option<&Cursor> {
        self.cursor.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.cursor.is_some()
    }

    /// Drops all loaded state. Responses to requests begun before the reset
    /// are discarded by [`SyncCursor::complete`].
    pub fn reset(&mut self) {
        self.items.clear();
        self.seen_ids.clear();
        self.cursor = None;
        self.last_consumed = None;
        self.loading = false;
        self.generation += 1;
    }

    pub fn begin(&mut self, reset: bool) -> BeginLoad {
        if self.loading {
            return BeginLoad::Busy;
        }

        let request = if reset { None } else { self.cursor.clone() };
        if !reset {
            if request.is_none() {
                return BeginLoad::Exhausted;
            }
            if request == self.last_consumed {
                tracing::debug!(
                    cursor = ?request,
                    "cursor already consumed without progress; stopping pagination"
                );
                self.cursor = None;
                return BeginLoad::Stalled;
            }
        }

        self.loading = true;
        BeginLoad::Fetch(PageRequest {
            cursor: request,
            reset,
            generation: self.generation,
        })
    }

    pub fn complete(&mut self, request: PageRequest, result: Result<Page<T>>) -> Result<LoadOutcome> {
        if request.generation != self.generation {
            tracing::debug!(cursor = ?request.cursor, "discarding response from before reset");
            return Ok(LoadOutcome::Stale);
        }
        self.loading = false;
        let page = result?;

        if request.reset {
            self.items.clear();
            self.seen_ids.clear();
        }

        let mut incoming = Vec::new();
        for item in page.items {
            let id = (self.id_of)(&item);
            if self.seen_ids.contains(id) {
                tracing::debug!(id, "skipping duplicate record");
                continue;
            }
            self.seen_ids.insert(id.to_string());
            incoming.push(item);
        }

        let outcome = if !incoming.is_empty() {
            let added = incoming.len();
            self.items.extend(incoming);
            self.last_consumed = request.cursor;
            self.cursor = page.next_cursor;
            LoadOutcome::Appended(added)
        } else if page.next_cursor.is_some() {
            tracing::debug!(next = ?page.next_cursor, "no new records but cursor exists; advancing");
            self.last_consumed = request.cursor;
            self.cursor = page.next_cursor;
            LoadOutcome::Advanced
        } else {
            tracing::debug!("no more records to load");
            self.cursor = None;
            LoadOutcome::Finished
        };
        Ok(outcome)
    }

    pub fn load_more<S>(&mut self, source: &mut S, reset: bool) -> Result<LoadOutcome>
    where
        S: PageSource<T> + ?Sized,
    {
        let request = match self.begin(reset) {
            BeginLoad::Fetch(request) => request,
            BeginLoad::Busy => return Ok(LoadOutcome::Busy),
            BeginLoad::Exhausted => return Ok(LoadOutcome::Exhausted),
            BeginLoad::Stalled => return Ok(LoadOutcome::Stalled),
        };
        let result = source.fetch_page(request.cursor());
        self.complete(request, result)
    }

    /// Loads from the first page until the stream ends or `max_pages`
    /// fetches have been issued.
    pub fn load_all<S>(&mut self, source: &mut S, max_pages: usize) -> Result<usize>
    where
        S: PageSource<T> + ?Sized,
    {
        let mut fetches = 0;
        let mut reset = true;
        while fetches < max_pages {
            let outcome = self.load_more(source, reset)?;
            reset = false;
            if !outcome.fetched() {
                break;
            }
            fetches += 1;
            if !self.has_more() {
                break;
            }
        }
        Ok(fetches)
    }
}

#[cfg(test)]
#[path = "tests/sync_tests.rs"]
mod tests;
