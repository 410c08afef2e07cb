use super::{CsvTableLoader, LoadError, TableLoader, TableSource};
use crate::model::Table;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError, TryLockError},
};

/// lifecycle of one cache entry. a failed load returns the entry to `Empty`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheState {
    Empty,
    Loading,
    Populated,
}

type Slot<R> = Arc<Mutex<Option<Arc<Table<R>>>>>;

/// memoizes loaded tables by [`TableSource`].
///
/// each source has its own slot, locked for the duration of a load, so
/// concurrent callers asking for the same source wait for the first load
/// instead of starting their own. tables are immutable once loaded and are
/// handed out as shared [`Arc`] references. failures are never stored: the
/// next call for that source loads again.
pub struct TableCache<R, L = CsvTableLoader> {
    loader: L,
    slots: Mutex<HashMap<TableSource, Slot<R>>>,
}

impl<R> Default for TableCache<R, CsvTableLoader> {
    fn default() -> Self {
        Self {
            loader: CsvTableLoader,
            slots: Mutex::new(HashMap::new()),
        }
    }
}

impl<R, L> TableCache<R, L>
where
    L: TableLoader<R>,
{
    pub fn new(loader: L) -> Self {
        Self {
            loader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// returns the cached table for this source, loading it on first use.
    pub fn get(&self, source: &TableSource) -> Result<Arc<Table<R>>, LoadError> {
        let slot = self.slot(source);
        // the slot only ever holds a fully loaded table, so a poisoned lock
        // still guards a consistent value
        let mut entry = slot.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = entry.as_ref() {
            log::debug!("cache hit for {source}");
            return Ok(Arc::clone(table));
        }

        log::info!("loading table from {source}");
        match self.loader.load(source) {
            Ok(table) => {
                let table = Arc::new(table);
                *entry = Some(Arc::clone(&table));
                Ok(table)
            }
            Err(e) => {
                log::warn!("failed loading {source}, entry not cached: {e}");
                Err(e)
            }
        }
    }

    /// current lifecycle state of a source. a slot held by another caller
    /// reads as `Loading`, which includes the brief hold of a cache hit.
    pub fn state(&self, source: &TableSource) -> CacheState {
        let slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        let Some(slot) = slots.get(source) else {
            return CacheState::Empty;
        };
        let state = match slot.try_lock() {
            Ok(entry) if entry.is_some() => CacheState::Populated,
            Ok(_) => CacheState::Empty,
            Err(TryLockError::WouldBlock) => CacheState::Loading,
            Err(TryLockError::Poisoned(entry)) if entry.get_ref().is_some() => {
                CacheState::Populated
            }
            Err(TryLockError::Poisoned(_)) => CacheState::Empty,
        };
        state
    }

    /// drops the cached table for a source. returns true if one was present.
    pub fn invalidate(&self, source: &TableSource) -> bool {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        match slots.remove(source) {
            Some(slot) => slot
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .is_some(),
            None => false,
        }
    }

    fn slot(&self, source: &TableSource) -> Slot<R> {
        let mut slots = self.slots.lock().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slots.entry(source.clone()).or_default())
    }
}
