//! Short-lived read cache over the store.
//!
//! The TTL mirrors the refresh cadence: a snapshot fetched for one render
//! may serve repeated reads until the next tick. Correctness never waits
//! for expiry; writers call [`ReadCache::invalidate`] so their own next
//! read reflects the write, and the periodic tick bypasses the cache
//! entirely via [`ReadCache::read_fresh`].

use std::time::{Duration, Instant};

use crate::store::{Row, StoreError, Table, TableStore};

struct Slot {
    rows: Vec<Row>,
    fetched_at: Instant,
}

pub struct ReadCache {
    ttl: Duration,
    directory: Option<Slot>,
    messages: Option<Slot>,
}

impl ReadCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            directory: None,
            messages: None,
        }
    }

    fn slot(&self, table: Table) -> &Option<Slot> {
        match table {
            Table::Directory => &self.directory,
            Table::Messages => &self.messages,
        }
    }

    fn slot_mut(&mut self, table: Table) -> &mut Option<Slot> {
        match table {
            Table::Directory => &mut self.directory,
            Table::Messages => &mut self.messages,
        }
    }

    /// Serve the cached snapshot while it is fresh, else fetch and refill.
    pub fn read_through(
        &mut self,
        store: &dyn TableStore,
        table: Table,
    ) -> Result<Vec<Row>, StoreError> {
        if let Some(slot) = self.slot(table) {
            if slot.fetched_at.elapsed() < self.ttl {
                return Ok(slot.rows.clone());
            }
        }
        self.read_fresh(store, table)
    }

    /// Fetch from the store unconditionally and refill the slot.
    ///
    /// The periodic tick uses this path: its whole purpose is to observe
    /// other sessions' appends, so it must not be served a cached copy.
    pub fn read_fresh(
        &mut self,
        store: &dyn TableStore,
        table: Table,
    ) -> Result<Vec<Row>, StoreError> {
        let rows = store.read(table)?;
        *self.slot_mut(table) = Some(Slot {
            rows: rows.clone(),
            fetched_at: Instant::now(),
        });
        Ok(rows)
    }

    /// Drop both snapshots. Called after a successful append so the
    /// writer's next read reflects the write.
    pub fn invalidate(&mut self) {
        self.directory = None;
        self.messages = None;
    }
}
