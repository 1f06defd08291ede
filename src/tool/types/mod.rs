pub mod brush;

pub use brush::{BrushSize, DEFAULT_COLORS, EXTENDED_COLORS};

use serde::{Deserialize, Serialize};

/// The tools available on the coloring canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tool {
    /// Freehand brush in the selected colour
    #[default]
    Brush,
    /// Paints with the canvas background colour
    Eraser,
    /// Tap to drop a fill mark; has no drag phase
    Fill,
}

impl Tool {
    pub const ALL: [Tool; 3] = [Tool::Brush, Tool::Eraser, Tool::Fill];

    pub fn name(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Tool::Brush => "🖌",
            Tool::Eraser => "⌫",
            Tool::Fill => "🪣",
        }
    }

    /// Whether a pointer drag accumulates points for this tool
    pub fn accumulates_points(self) -> bool {
        !matches!(self, Tool::Fill)
    }
}
