use egui::Pos2;

use super::editor_state::EditorState;
use super::history::StrokeHistory;
use super::persistence::{CanvasSize, DrawingState};
use crate::event::{DrawingEvent, EventBus, EventHandler, SubscriptionId};
use crate::stroke::{Stroke, StrokeBuilder, StrokeRef};
use crate::tool::fill::{self, FillParams};
use crate::tool::Tool;

/// Owner of all drawing state for one editing session.
///
/// One store is created per page being colored and passed by reference to
/// the gesture router, the renderer and the autosave scheduler. Every
/// mutation bumps [`DrawingStore::revision`] and is announced on the event
/// bus, so observers can tell when to redraw or save.
#[derive(Debug, Default)]
pub struct DrawingStore {
    history: StrokeHistory,
    state: EditorState,
    size: CanvasSize,
    fill_params: FillParams,
    revision: u64,
    saved_revision: u64,
    event_bus: EventBus,
}

impl DrawingStore {
    pub fn new(size: CanvasSize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    pub fn with_fill_params(mut self, params: FillParams) -> Self {
        self.fill_params = params;
        self
    }

    pub fn subscribe(&self, handler: Box<dyn EventHandler>) -> SubscriptionId {
        self.event_bus.subscribe(handler)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.event_bus.unsubscribe(id)
    }

    /// Begin a gesture at `point`.
    ///
    /// The fill tool commits a fill mark immediately and never enters the
    /// drawing state. Any other tool opens a new in-progress stroke, replacing
    /// one that was never committed.
    pub fn start_stroke(&mut self, point: Pos2, color: &str, width: f32, tool: Tool) {
        if let Some(abandoned) = self.state.take_stroke() {
            log::debug!("Abandoning uncommitted stroke with {} point(s)", abandoned.len());
        }

        if tool == Tool::Fill {
            self.fill(point, color);
            return;
        }

        let stroke = StrokeBuilder::new(point, color, width, tool == Tool::Eraser);
        let event = DrawingEvent::StrokeStarted {
            id: stroke.id().clone(),
            is_eraser: stroke.is_eraser(),
        };
        self.state = EditorState::Drawing { stroke };
        self.changed(event);
    }

    /// Append a point to the in-progress stroke; ignored when idle
    pub fn extend_stroke(&mut self, point: Pos2) {
        if let Some(stroke) = self.state.current_stroke_mut() {
            stroke.add_point(point);
            self.revision += 1;
        }
    }

    /// Throw the in-progress stroke away without committing it
    pub fn abandon_stroke(&mut self) {
        if let Some(abandoned) = self.state.take_stroke() {
            log::debug!("Abandoning stroke with {} point(s)", abandoned.len());
            let id = abandoned.id().clone();
            self.changed(DrawingEvent::StrokeDiscarded { id });
        }
    }

    /// Finish the in-progress stroke. Strokes with fewer than two points are
    /// dropped rather than committed.
    pub fn commit_stroke(&mut self) {
        let Some(builder) = self.state.take_stroke() else {
            return;
        };

        if builder.len() < 2 {
            log::debug!("Discarding stroke with {} point(s)", builder.len());
            let id = builder.id().clone();
            self.changed(DrawingEvent::StrokeDiscarded { id });
            return;
        }

        let stroke = builder.finish();
        let event = DrawingEvent::StrokeCommitted {
            id: stroke.id().clone(),
            point_count: stroke.points().len(),
        };
        self.history.push(stroke.into_ref());
        self.changed(event);
    }

    /// Drop a fill mark at `point`, committing it in one step
    pub fn fill(&mut self, point: Pos2, color: &str) {
        if self.state.is_drawing() {
            log::debug!("Ignoring fill while a stroke is in progress");
            return;
        }

        let stroke = fill::fill_stroke(point, color, self.history.visible(), &self.fill_params);
        let event = DrawingEvent::Filled {
            id: stroke.id().clone(),
            at: point,
        };
        self.history.push(stroke.into_ref());
        self.changed(event);
    }

    pub fn undo(&mut self) {
        if !self.ensure_idle("undo") {
            return;
        }
        if self.history.undo() {
            let visible = self.history.visible_len();
            self.changed(DrawingEvent::Undone { visible });
        }
    }

    pub fn redo(&mut self) {
        if !self.ensure_idle("redo") {
            return;
        }
        if self.history.redo() {
            let visible = self.history.visible_len();
            self.changed(DrawingEvent::Redone { visible });
        }
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Remove every stroke. This cannot be undone.
    pub fn clear_all(&mut self) {
        if !self.ensure_idle("clear") {
            return;
        }
        self.history.clear();
        self.changed(DrawingEvent::Cleared);
    }

    /// Clear everything including a gesture that is still in progress
    pub fn reset(&mut self) {
        self.state = EditorState::Idle;
        self.history.clear();
        self.changed(DrawingEvent::Cleared);
    }

    /// Replace the whole drawing with `state`, dropping any gesture in progress
    pub fn load_state(&mut self, state: DrawingState) {
        self.state = EditorState::Idle;
        self.history = StrokeHistory::from_parts(state.strokes, state.cursor);
        self.size = state.size;
        log::info!(
            "Loaded drawing: {} stroke(s), {} visible, {}x{}",
            self.history.len(),
            self.history.visible_len(),
            self.size.width,
            self.size.height
        );
        let stroke_count = self.history.len();
        self.changed(DrawingEvent::Loaded { stroke_count });
    }

    /// The persistable part of the drawing: visible strokes, cursor and size
    pub fn snapshot_state(&self) -> DrawingState {
        DrawingState {
            strokes: self.history.visible().to_vec(),
            cursor: self.history.cursor(),
            size: self.size,
        }
    }

    pub fn canvas_size(&self) -> CanvasSize {
        self.size
    }

    pub fn visible_strokes(&self) -> &[StrokeRef] {
        self.history.visible()
    }

    /// Every committed stroke, including the redo buffer
    pub fn strokes(&self) -> &[StrokeRef] {
        self.history.all()
    }

    pub fn cursor(&self) -> isize {
        self.history.cursor()
    }

    pub fn current_stroke(&self) -> Option<&StrokeBuilder> {
        self.state.current_stroke()
    }

    /// Preview of the in-progress stroke as an ordinary stroke
    pub fn current_stroke_preview(&self) -> Option<Stroke> {
        self.state.current_stroke().map(StrokeBuilder::to_stroke)
    }

    pub fn editor_state(&self) -> &EditorState {
        &self.state
    }

    pub fn is_drawing(&self) -> bool {
        self.state.is_drawing()
    }

    /// Monotonic change counter; differs whenever anything visible changed
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Like [`DrawingStore::revision`], but only counts changes to what a
    /// snapshot would contain. Gesture bookkeeping leaves it alone.
    pub fn saved_revision(&self) -> u64 {
        self.saved_revision
    }

    fn ensure_idle(&self, operation: &str) -> bool {
        if self.state.is_idle() {
            true
        } else {
            log::debug!("Ignoring {} while a stroke is in progress", operation);
            false
        }
    }

    fn changed(&mut self, event: DrawingEvent) {
        self.revision += 1;
        if event.affects_saved_state() {
            self.saved_revision += 1;
        }
        self.event_bus.emit(event);
    }
}
