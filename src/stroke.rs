use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use crate::util::time;

/// Stable identifier of a stroke, kept across save/load cycles
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StrokeId(String);

impl StrokeId {
    /// Generate a fresh random identifier
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for StrokeId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&str> for StrokeId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for StrokeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Immutable stroke for sharing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Pos2>,
    color: String,
    stroke_width: f32,
    is_eraser: bool,
    #[serde(default)]
    timestamp: u64,
}

// Define a reference-counted type alias for Stroke
pub type StrokeRef = Arc<Stroke>;

impl Stroke {
    /// Create a new immutable stroke with a fresh id
    pub fn new(
        color: impl Into<String>,
        stroke_width: f32,
        is_eraser: bool,
        points: Vec<Pos2>,
    ) -> Self {
        Self {
            id: StrokeId::new(),
            points,
            color: color.into(),
            stroke_width,
            is_eraser,
            timestamp: time::timestamp_millis(),
        }
    }

    /// Replace the generated id, used when rebuilding strokes from known data
    pub fn with_id(mut self, id: StrokeId) -> Self {
        self.id = id;
        self
    }

    pub fn id(&self) -> &StrokeId {
        &self.id
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn is_eraser(&self) -> bool {
        self.is_eraser
    }

    pub fn timestamp(&self) -> u64 {
        self.timestamp
    }

    pub fn into_ref(self) -> StrokeRef {
        Arc::new(self)
    }
}

/// A stroke that is still being drawn.
///
/// Points can only be appended. Once the gesture ends the builder is turned
/// into an immutable [`Stroke`] and committed to the history.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    id: StrokeId,
    points: Vec<Pos2>,
    color: String,
    stroke_width: f32,
    is_eraser: bool,
    timestamp: u64,
}

impl StrokeBuilder {
    /// Open a new stroke seeded with its first point
    pub fn new(start: Pos2, color: impl Into<String>, stroke_width: f32, is_eraser: bool) -> Self {
        Self {
            id: StrokeId::new(),
            points: vec![start],
            color: color.into(),
            stroke_width,
            is_eraser,
            timestamp: time::timestamp_millis(),
        }
    }

    pub fn id(&self) -> &StrokeId {
        &self.id
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn is_eraser(&self) -> bool {
        self.is_eraser
    }

    /// Freeze the builder into an immutable stroke
    pub fn finish(self) -> Stroke {
        Stroke {
            id: self.id,
            points: self.points,
            color: self.color,
            stroke_width: self.stroke_width,
            is_eraser: self.is_eraser,
            timestamp: self.timestamp,
        }
    }

    /// Snapshot of the in-progress stroke for previews
    pub fn to_stroke(&self) -> Stroke {
        self.clone().finish()
    }
}
