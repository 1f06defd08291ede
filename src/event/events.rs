use egui::Pos2;

use crate::stroke::StrokeId;

/// Changes to the drawing state, emitted by the store after each mutation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawingEvent {
    StrokeStarted {
        id: StrokeId,
        is_eraser: bool,
    },
    StrokeCommitted {
        id: StrokeId,
        point_count: usize,
    },
    /// A gesture ended with too few points to keep
    StrokeDiscarded {
        id: StrokeId,
    },
    Filled {
        id: StrokeId,
        at: Pos2,
    },
    Undone {
        visible: usize,
    },
    Redone {
        visible: usize,
    },
    Cleared,
    Loaded {
        stroke_count: usize,
    },
}

impl DrawingEvent {
    /// Whether the event changes what gets persisted
    pub fn affects_saved_state(&self) -> bool {
        !matches!(
            self,
            DrawingEvent::StrokeStarted { .. } | DrawingEvent::StrokeDiscarded { .. }
        )
    }
}
