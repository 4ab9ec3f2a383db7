// src/store.rs

use crate::domain::{merge_unique, Cafe};
use crate::errors::ServerError;
use chrono::{DateTime, Utc};
use std::sync::{Arc, RwLock};

/// Result of the most recent fetch cycle, as the list page shows it.
#[derive(Debug, Clone, Default)]
pub struct FeedState {
    pub cafes: Vec<Cafe>,
    pub fetched_at: Option<DateTime<Utc>>,
    pub fetch_failed: bool,
}

/// Cheap-to-clone handle to the in-memory cafe list.
///
/// There is exactly one writer per fetch cycle (`replace`/`mark_failed`);
/// server workers only read through `with_state`.
#[derive(Clone, Default)]
pub struct CafeStore {
    inner: Arc<RwLock<FeedState>>,
}

impl CafeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provides a read-only view of the feed state to the closure.
    pub fn with_state<F, T>(&self, f: F) -> Result<T, ServerError>
    where
        F: FnOnce(&FeedState) -> T,
    {
        let state = self.inner.read().map_err(|_| ServerError::InternalError)?;
        Ok(f(&state))
    }

    /// Installs a freshly fetched list and stamps the fetch time.
    pub fn replace(&self, cafes: Vec<Cafe>) {
        if let Ok(mut state) = self.inner.write() {
            state.cafes = cafes;
            state.fetched_at = Some(Utc::now());
            state.fetch_failed = false;
        }
    }

    /// Records a failed fetch. The previous list stays visible.
    pub fn mark_failed(&self) {
        if let Ok(mut state) = self.inner.write() {
            state.fetch_failed = true;
        }
    }

    /// Appends cafes whose id is not already present (demo records).
    pub fn merge(&self, incoming: Vec<Cafe>) {
        if let Ok(mut state) = self.inner.write() {
            let existing = std::mem::take(&mut state.cafes);
            state.cafes = merge_unique(existing, incoming);
        }
    }

    pub fn find(&self, cafe_id: i64) -> Result<Option<Cafe>, ServerError> {
        self.with_state(|state| state.cafes.iter().find(|c| c.cafe_id == cafe_id).cloned())
    }
}
