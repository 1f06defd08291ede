//! Debounced autosave.
//!
//! The host calls [`AutosaveScheduler::poll`] once per frame with the current
//! time. Proposals arm a quiet-period timer; only the last proposal of a burst
//! produces a save. At most one save is in flight at a time, and a proposal
//! that matures while one is running waits for it to finish.

use futures::FutureExt;
use std::task::{Context, Poll};

use crate::state::{self, DrawingStore};
use crate::storage::{DrawingPersistence, StorageFuture};

/// Outcome of a save attempt that finished
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// Nothing changed since the last successful save
    Unchanged,
    Failed(String),
}

struct InFlightSave {
    data: String,
    future: StorageFuture<()>,
}

impl std::fmt::Debug for InFlightSave {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InFlightSave")
            .field("bytes", &self.data.len())
            .finish()
    }
}

#[derive(Debug)]
pub struct AutosaveScheduler {
    key: String,
    quiet_period: f64,
    enabled: bool,
    deadline: Option<f64>,
    in_flight: Option<InFlightSave>,
    observed_revision: Option<u64>,
    last_saved: Option<String>,
    last_error: Option<String>,
}

impl AutosaveScheduler {
    /// `quiet_period` is in seconds
    pub fn new(key: impl Into<String>, quiet_period: f64) -> Self {
        Self {
            key: key.into(),
            quiet_period,
            enabled: true,
            deadline: None,
            in_flight: None,
            observed_revision: None,
            last_saved: None,
            last_error: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.cancel();
        }
    }

    /// Treat `data` as already persisted, e.g. right after loading it
    pub fn mark_saved(&mut self, data: impl Into<String>) {
        self.last_saved = Some(data.into());
    }

    /// Ask for a save once things have been quiet for the configured period.
    /// Each call restarts the timer.
    pub fn propose(&mut self, now: f64) {
        if self.enabled {
            self.deadline = Some(now + self.quiet_period);
        }
    }

    /// Propose a save if the saved part of the store changed since the last
    /// observation. Strokes still being drawn do not count.
    pub fn observe(&mut self, now: f64, store: &DrawingStore) {
        let revision = store.saved_revision();
        match self.observed_revision {
            Some(seen) if seen == revision => {}
            Some(_) => {
                self.observed_revision = Some(revision);
                self.propose(now);
            }
            // The first observation is the baseline, not a change
            None => self.observed_revision = Some(revision),
        }
    }

    /// Drop a pending proposal. A save already in flight is left to finish.
    pub fn cancel(&mut self) {
        if self.deadline.take().is_some() {
            log::debug!("Cancelled pending autosave for {}", self.key);
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Error of the most recent failed save, cleared by the next success
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn has_unsaved_changes(&self, store: &DrawingStore) -> bool {
        match state::serialize(&store.snapshot_state()) {
            Ok(data) => self.last_saved.as_deref() != Some(data.as_str()),
            Err(_) => true,
        }
    }

    /// Drive the scheduler. Returns the outcome of a save that finished
    /// during this call, if any.
    pub fn poll(
        &mut self,
        now: f64,
        store: &DrawingStore,
        storage: &dyn DrawingPersistence,
    ) -> Option<SaveOutcome> {
        let mut outcome = self.poll_in_flight();

        let due = self.deadline.is_some_and(|deadline| now >= deadline);
        if due && self.in_flight.is_none() {
            self.deadline = None;
            outcome = self.start_save(store, storage, false).or(outcome);
        }

        outcome
    }

    /// Save right now, bypassing the quiet period. Waits for a save already in
    /// flight first so the two never overlap.
    pub fn flush(
        &mut self,
        store: &DrawingStore,
        storage: &dyn DrawingPersistence,
        completed: bool,
    ) -> SaveOutcome {
        self.deadline = None;

        if let Some(in_flight) = self.in_flight.take() {
            let result = futures::executor::block_on(in_flight.future);
            self.record(in_flight.data, result);
        }

        let Some(data) = self.serialize(store) else {
            return SaveOutcome::Failed(self.last_error.clone().unwrap_or_default());
        };
        if !completed && self.last_saved.as_deref() == Some(data.as_str()) {
            return SaveOutcome::Unchanged;
        }

        let result = futures::executor::block_on(storage.save(&self.key, data.clone(), completed));
        self.record(data, result)
    }

    fn start_save(
        &mut self,
        store: &DrawingStore,
        storage: &dyn DrawingPersistence,
        completed: bool,
    ) -> Option<SaveOutcome> {
        let data = self.serialize(store)?;
        if self.last_saved.as_deref() == Some(data.as_str()) {
            log::debug!("Skipping autosave for {}: unchanged", self.key);
            return Some(SaveOutcome::Unchanged);
        }

        log::debug!("Starting autosave for {} ({} bytes)", self.key, data.len());
        let future = storage.save(&self.key, data.clone(), completed);
        self.in_flight = Some(InFlightSave { data, future });
        self.poll_in_flight()
    }

    fn poll_in_flight(&mut self) -> Option<SaveOutcome> {
        let in_flight = self.in_flight.as_mut()?;

        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        match in_flight.future.poll_unpin(&mut cx) {
            Poll::Pending => None,
            Poll::Ready(result) => {
                let data = self.in_flight.take().map(|save| save.data).unwrap_or_default();
                Some(self.record(data, result))
            }
        }
    }

    fn serialize(&mut self, store: &DrawingStore) -> Option<String> {
        match state::serialize(&store.snapshot_state()) {
            Ok(data) => Some(data),
            Err(err) => {
                log::error!("Failed to serialize drawing {}: {}", self.key, err);
                self.last_error = Some(err.to_string());
                None
            }
        }
    }

    fn record(&mut self, data: String, result: crate::error::StorageResult<()>) -> SaveOutcome {
        match result {
            Ok(()) => {
                log::info!("Saved drawing {}", self.key);
                self.last_saved = Some(data);
                self.last_error = None;
                SaveOutcome::Saved
            }
            Err(err) => {
                log::error!("Failed to save drawing {}: {}", self.key, err);
                let message = err.to_string();
                self.last_error = Some(message.clone());
                SaveOutcome::Failed(message)
            }
        }
    }
}

impl Drop for AutosaveScheduler {
    fn drop(&mut self) {
        self.cancel();
        if self.in_flight.is_some() {
            log::warn!("Autosave for {} dropped while a save was in flight", self.key);
        }
    }
}
