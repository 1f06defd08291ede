use serde::{Deserialize, Serialize};

/// Shape of the synthetic mark placed when a fill tap has no enclosing stroke
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FillStyle {
    /// Expanding spiral, reads as a solid blob once rendered with a wide pen
    Spiral,
    /// Closed circle traced with a pen twice the radius wide
    Circle,
}

/// Tunables for a drawing session.
///
/// Persisted alongside the rest of the app state; fields missing from older
/// saves fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Minimum distance in pixels between consecutive forwarded pointer samples
    pub min_point_distance: f32,
    /// Quiet period before a proposed autosave is written
    pub autosave_quiet_ms: u64,
    /// Radius of the fallback fill mark
    pub fill_size: f32,
    pub fill_spiral_turns: u32,
    pub fill_points_per_turn: u32,
    pub fill_style: FillStyle,
    /// Colour painted under every stroke; eraser strokes use it too
    pub background_color: String,
    /// Directory drawings are written to by the native file storage
    pub storage_dir: String,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            min_point_distance: 3.0,
            autosave_quiet_ms: 2000,
            fill_size: 60.0,
            fill_spiral_turns: 3,
            fill_points_per_turn: 20,
            fill_style: FillStyle::Spiral,
            background_color: "#FFFFFF".to_owned(),
            storage_dir: "drawings".to_owned(),
        }
    }
}

impl CanvasConfig {
    pub fn autosave_quiet_secs(&self) -> f64 {
        self.autosave_quiet_ms as f64 / 1000.0
    }
}
