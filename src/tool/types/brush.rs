use serde::{Deserialize, Serialize};

/// Palette offered on the toolbar
pub const DEFAULT_COLORS: [&str; 12] = [
    "#FF0000", // Red
    "#FF6B00", // Orange
    "#FFD700", // Yellow
    "#00C853", // Green
    "#00BCD4", // Cyan
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#E91E63", // Pink
    "#795548", // Brown
    "#000000", // Black
    "#9E9E9E", // Gray
    "#FFFFFF", // White
];

/// Default palette followed by lighter variants
pub const EXTENDED_COLORS: [&str; 22] = [
    "#FF0000", "#FF6B00", "#FFD700", "#00C853", "#00BCD4", "#2196F3", "#9C27B0", "#E91E63",
    "#795548", "#000000", "#9E9E9E", "#FFFFFF",
    "#FF5252", // Light Red
    "#FFAB40", // Light Orange
    "#FFFF00", // Bright Yellow
    "#69F0AE", // Light Green
    "#40C4FF", // Light Blue
    "#7C4DFF", // Light Purple
    "#FF80AB", // Light Pink
    "#8D6E63", // Light Brown
    "#B0BEC5", // Blue Gray
    "#F5F5F5", // Off White
];

/// Discrete brush sizes, small enough for little fingers to pick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum BrushSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BrushSize {
    pub const ALL: [BrushSize; 3] = [BrushSize::Small, BrushSize::Medium, BrushSize::Large];

    /// Stroke width in pixels
    pub fn width(self) -> f32 {
        match self {
            BrushSize::Small => 4.0,
            BrushSize::Medium => 12.0,
            BrushSize::Large => 24.0,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BrushSize::Small => "S",
            BrushSize::Medium => "M",
            BrushSize::Large => "L",
        }
    }
}
