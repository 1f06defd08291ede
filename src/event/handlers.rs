use parking_lot::Mutex;
use std::sync::Arc;

use crate::event::{DrawingEvent, EventHandler};

/// Records every event it sees into a shared list
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    events: Arc<Mutex<Vec<DrawingEvent>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to register on a bus; shares storage with `self`
    pub fn handler(&self) -> Box<dyn EventHandler> {
        Box::new(self.clone())
    }

    pub fn events(&self) -> Vec<DrawingEvent> {
        self.events.lock().clone()
    }

    pub fn take(&self) -> Vec<DrawingEvent> {
        std::mem::take(&mut *self.events.lock())
    }
}

impl EventHandler for EventRecorder {
    fn handle_event(&mut self, event: &DrawingEvent) {
        self.events.lock().push(event.clone());
    }
}
