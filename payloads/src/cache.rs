//! Client-side query cache with explicit invalidation.
//!
//! Every remote read is identified by a [`QueryKey`]. At most one request
//! per key is in flight at a time. Writes never patch cached data; a
//! successful mutation reports the [`QueryKeyPrefix`]es it affects, the
//! matching entries are marked stale, and the hooks watching them refetch
//! while still showing the old data.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use crate::query::{BiddingSessionQuery, BookingQuery};
use crate::{CompanyId, LocationId};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum QueryKey {
    CompanyBiddingSessions {
        company_id: CompanyId,
        query: BiddingSessionQuery,
    },
    CompanyTaxes {
        company_id: CompanyId,
        location_id: LocationId,
    },
    BiddingConfig(LocationId),
    CdwSettings(LocationId),
    CompanyBookings {
        company_id: CompanyId,
        query: BookingQuery,
    },
}

/// A set of cache keys, used to describe what a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKeyPrefix {
    /// Every bidding session page of the company, whatever the filters.
    CompanyBiddingSessions(CompanyId),
    /// Every tax list of the company, whatever the location.
    CompanyTaxes(CompanyId),
    CompanyTaxesAt(CompanyId, LocationId),
    BiddingConfig(LocationId),
    CdwSettings(LocationId),
    CompanyBookings(CompanyId),
}

impl QueryKeyPrefix {
    pub fn matches(&self, key: &QueryKey) -> bool {
        match (self, key) {
            (
                Self::CompanyBiddingSessions(company),
                QueryKey::CompanyBiddingSessions { company_id, .. },
            ) => company == company_id,
            (
                Self::CompanyTaxes(company),
                QueryKey::CompanyTaxes { company_id, .. },
            ) => company == company_id,
            (
                Self::CompanyTaxesAt(company, location),
                QueryKey::CompanyTaxes {
                    company_id,
                    location_id,
                },
            ) => company == company_id && location == location_id,
            (Self::BiddingConfig(a), QueryKey::BiddingConfig(b)) => a == b,
            (Self::CdwSettings(a), QueryKey::CdwSettings(b)) => a == b,
            (
                Self::CompanyBookings(company),
                QueryKey::CompanyBookings { company_id, .. },
            ) => company == company_id,
            _ => false,
        }
    }
}

/// Result of a successful write together with the cached reads it made
/// outdated.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutated<T> {
    pub value: T,
    pub affected: Vec<QueryKeyPrefix>,
}

impl<T> Mutated<T> {
    pub fn new(value: T, affected: Vec<QueryKeyPrefix>) -> Self {
        Self { value, affected }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry<V> {
    data: Option<V>,
    error: Option<String>,
    in_flight: bool,
    stale: bool,
    /// Invalidated after the current request was sent, so its response
    /// predates the write and must not clear `stale`.
    invalidated_in_flight: bool,
}

impl<V> Default for Entry<V> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight: false,
            stale: false,
            invalidated_in_flight: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct QueryCache<V> {
    entries: HashMap<QueryKey, Entry<V>>,
    revision: u64,
}

impl<V> Default for QueryCache<V> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            revision: 0,
        }
    }
}

impl<V> QueryCache<V> {
    /// Claim the key for a new request. Returns false if a request for the
    /// same key is already in flight, in which case the caller must not
    /// issue another one.
    pub fn begin_fetch(&mut self, key: &QueryKey) -> bool {
        let entry = self.entries.entry(key.clone()).or_default();
        if entry.in_flight {
            return false;
        }
        entry.in_flight = true;
        entry.invalidated_in_flight = false;
        entry.error = None;
        self.revision += 1;
        true
    }

    /// Record the outcome of a request started with `begin_fetch`. A
    /// failure keeps the previous data so screens can show both. If the key
    /// was invalidated while the request was out, the entry stays stale and
    /// is fetched again.
    pub fn complete(&mut self, key: &QueryKey, result: Result<V, String>) {
        let entry = self.entries.entry(key.clone()).or_default();
        entry.in_flight = false;
        entry.stale = entry.invalidated_in_flight;
        entry.invalidated_in_flight = false;
        match result {
            Ok(data) => {
                entry.data = Some(data);
                entry.error = None;
            }
            Err(message) => {
                entry.error = Some(message);
            }
        }
        self.revision += 1;
    }

    /// Whether a hook mounting on `key` should fetch on its own. Failed
    /// entries are not retried; the operator refreshes explicitly.
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        match self.entries.get(key) {
            None => true,
            Some(entry) => entry.stale && !entry.in_flight,
        }
    }

    pub fn get(&self, key: &QueryKey) -> Option<&V> {
        self.entries.get(key)?.data.as_ref()
    }

    pub fn error(&self, key: &QueryKey) -> Option<&str> {
        self.entries.get(key)?.error.as_deref()
    }

    pub fn is_in_flight(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.in_flight)
    }

    pub fn is_stale(&self, key: &QueryKey) -> bool {
        self.entries.get(key).is_some_and(|entry| entry.stale)
    }

    /// Mark every entry matched by one of `prefixes` stale. Returns how many
    /// entries were affected.
    pub fn invalidate(&mut self, prefixes: &[QueryKeyPrefix]) -> usize {
        let mut affected = 0;
        for (key, entry) in self.entries.iter_mut() {
            if prefixes.iter().any(|prefix| prefix.matches(key)) {
                entry.stale = true;
                entry.invalidated_in_flight |= entry.in_flight;
                affected += 1;
            }
        }
        if affected > 0 {
            self.revision += 1;
        }
        affected
    }

    /// Monotonic counter bumped on every change, for cheap change
    /// detection in effect dependencies.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.revision += 1;
    }
}

/// Writes that were sent and have not answered yet, keyed by the record
/// they change. A second write to the same record is refused until the
/// first one finishes.
#[derive(Debug, Clone)]
pub struct PendingWrites<K> {
    pending: HashSet<K>,
}

impl<K: Eq + Hash> PartialEq for PendingWrites<K> {
    fn eq(&self, other: &Self) -> bool {
        self.pending == other.pending
    }
}

impl<K> Default for PendingWrites<K> {
    fn default() -> Self {
        Self {
            pending: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> PendingWrites<K> {
    /// Returns false if a write for `key` is already pending.
    pub fn begin(&mut self, key: K) -> bool {
        self.pending.insert(key)
    }

    pub fn finish(&mut self, key: &K) {
        self.pending.remove(key);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.pending.contains(key)
    }
}
