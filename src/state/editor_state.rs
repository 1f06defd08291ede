//! The drawing session state machine.
//!
//! ```text
//!   ┌──────────┐  start_stroke   ┌───────────┐
//!   │          ├────────────────►│           │
//!   │   Idle   │                 │  Drawing  ├──┐ extend_stroke
//!   │          │◄────────────────┤           │◄─┘
//!   └──┬───────┘  commit_stroke  └───────────┘
//!      │ ▲
//!      └─┘ undo / redo / clear / fill
//! ```
//!
//! Fill taps commit straight from `Idle` and never enter `Drawing`. History
//! operations are only accepted from `Idle`.
use crate::stroke::StrokeBuilder;

#[derive(Debug, Clone, Default)]
pub enum EditorState {
    /// No gesture in progress
    #[default]
    Idle,
    /// A brush or eraser gesture is accumulating points
    Drawing {
        stroke: StrokeBuilder,
    },
}

impl EditorState {
    /// Returns true if the editor is currently in an idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    /// Returns true if the editor is currently in a drawing state
    pub fn is_drawing(&self) -> bool {
        matches!(self, EditorState::Drawing { .. })
    }

    /// The stroke being drawn, if any
    pub fn current_stroke(&self) -> Option<&StrokeBuilder> {
        match self {
            EditorState::Drawing { stroke } => Some(stroke),
            EditorState::Idle => None,
        }
    }

    pub fn current_stroke_mut(&mut self) -> Option<&mut StrokeBuilder> {
        match self {
            EditorState::Drawing { stroke } => Some(stroke),
            EditorState::Idle => None,
        }
    }

    /// Leave the drawing state, handing back the in-progress stroke
    pub fn take_stroke(&mut self) -> Option<StrokeBuilder> {
        match std::mem::take(self) {
            EditorState::Drawing { stroke } => Some(stroke),
            EditorState::Idle => None,
        }
    }
}
