use egui::Pos2;

use super::throttle::PointThrottler;
use crate::state::DrawingStore;
use crate::tool::ToolSettings;

/// Phase of a single-pointer drawing gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    Begin,
    Move,
    End,
    /// The platform took the gesture away; handled exactly like `End`
    Cancel,
}

/// One raw pointer sample in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureEvent {
    pub point: Pos2,
    pub phase: GesturePhase,
}

impl GestureEvent {
    pub fn new(point: Pos2, phase: GesturePhase) -> Self {
        Self { point, phase }
    }

    pub fn begin(point: Pos2) -> Self {
        Self::new(point, GesturePhase::Begin)
    }

    pub fn moved(point: Pos2) -> Self {
        Self::new(point, GesturePhase::Move)
    }

    pub fn end(point: Pos2) -> Self {
        Self::new(point, GesturePhase::End)
    }

    pub fn cancel(point: Pos2) -> Self {
        Self::new(point, GesturePhase::Cancel)
    }
}

/// Feeds gesture events through the throttler into the store.
///
/// A gesture always ends in a commit attempt, whether it finished normally
/// or was cancelled, so no in-progress stroke is ever left dangling. If the
/// fill tool gets selected while a stroke is being drawn, the stroke is
/// dropped instead of committed.
#[derive(Debug, Clone, Default)]
pub struct GestureRouter {
    throttler: PointThrottler,
}

impl GestureRouter {
    pub fn new(min_point_distance: f32) -> Self {
        Self {
            throttler: PointThrottler::new(min_point_distance),
        }
    }

    pub fn throttler(&self) -> &PointThrottler {
        &self.throttler
    }

    pub fn is_active(&self) -> bool {
        self.throttler.is_active()
    }

    pub fn handle(&mut self, event: GestureEvent, store: &mut DrawingStore, tools: &ToolSettings) {
        match event.phase {
            GesturePhase::Begin => {
                if self.throttler.is_active() {
                    // A begin without an end: close out the old gesture first
                    self.finish(store);
                }
                store.start_stroke(event.point, tools.color(), tools.stroke_width(), tools.tool());
                if tools.tool().accumulates_points() {
                    self.throttler.begin(event.point);
                }
            }
            GesturePhase::Move if !tools.tool().accumulates_points() => self.abandon(store),
            GesturePhase::Move => {
                if let Some(point) = self.throttler.accept(event.point) {
                    store.extend_stroke(point);
                }
            }
            GesturePhase::End | GesturePhase::Cancel if !tools.tool().accumulates_points() => {
                self.abandon(store)
            }
            GesturePhase::End | GesturePhase::Cancel => self.finish(store),
        }
    }

    /// Commit whatever gesture is in progress, including the held-back tail
    /// sample, as if the pointer had been released at its last position
    pub fn finish(&mut self, store: &mut DrawingStore) {
        if let Some(tail) = self.throttler.finish() {
            store.extend_stroke(tail);
        }
        store.commit_stroke();
    }

    fn abandon(&mut self, store: &mut DrawingStore) {
        self.throttler.finish();
        store.abandon_stroke();
    }
}
