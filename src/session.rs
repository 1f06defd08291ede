use crate::autosave::{AutosaveScheduler, SaveOutcome};
use crate::config::CanvasConfig;
use crate::input::{GestureEvent, GestureRouter};
use crate::state::{self, CanvasSize, DrawingStore};
use crate::storage::{self, DrawingPersistence};
use crate::tool::{FillParams, ToolSettings};

/// Everything owned by one open coloring page: the store, the gesture router
/// feeding it, and the autosave scheduler watching it.
///
/// Closing the session flushes any pending save; dropping it without closing
/// cancels the pending timer so nothing is written for a page that is gone.
#[derive(Debug)]
pub struct DrawingSession {
    key: String,
    store: DrawingStore,
    router: GestureRouter,
    autosave: AutosaveScheduler,
}

impl DrawingSession {
    /// Start an empty session for `key`
    pub fn new(key: impl Into<String>, config: &CanvasConfig, size: CanvasSize) -> Self {
        let key = key.into();
        Self {
            store: DrawingStore::new(size).with_fill_params(FillParams::from(config)),
            router: GestureRouter::new(config.min_point_distance),
            autosave: AutosaveScheduler::new(key.clone(), config.autosave_quiet_secs()),
            key,
        }
    }

    /// Open the page `key`, restoring whatever was saved for it.
    ///
    /// Blocks on the storage load; with the bundled backends this completes
    /// immediately.
    pub fn open(
        key: impl Into<String>,
        config: &CanvasConfig,
        size: CanvasSize,
        storage: &dyn DrawingPersistence,
    ) -> Self {
        let mut session = Self::new(key, config, size);
        let restored = futures::executor::block_on(storage::load_drawing(
            storage,
            &session.key,
            size.width,
            size.height,
        ));
        session.store.load_state(restored);

        // What was just loaded does not need saving again
        if let Ok(data) = state::serialize(&session.store.snapshot_state()) {
            session.autosave.mark_saved(data);
        }
        session
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &DrawingStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DrawingStore {
        &mut self.store
    }

    pub fn autosave(&self) -> &AutosaveScheduler {
        &self.autosave
    }

    pub fn handle_gesture(&mut self, event: GestureEvent, tools: &ToolSettings) {
        self.router.handle(event, &mut self.store, tools);
    }

    pub fn undo(&mut self) {
        self.store.undo();
    }

    pub fn redo(&mut self) {
        self.store.redo();
    }

    pub fn clear(&mut self) {
        self.store.clear_all();
    }

    /// Per-frame housekeeping: notice changes and drive autosave
    pub fn tick(&mut self, now: f64, storage: &dyn DrawingPersistence) -> Option<SaveOutcome> {
        self.autosave.observe(now, &self.store);
        self.autosave.poll(now, &self.store, storage)
    }

    /// Save immediately, e.g. from a save button
    pub fn save_now(&mut self, storage: &dyn DrawingPersistence, completed: bool) -> SaveOutcome {
        self.autosave.flush(&self.store, storage, completed)
    }

    /// Leave the page, writing out anything not yet saved
    pub fn close(mut self, storage: &dyn DrawingPersistence) -> SaveOutcome {
        // A gesture still in progress is committed rather than lost
        self.router.finish(&mut self.store);
        self.autosave.flush(&self.store, storage, false)
    }
}
