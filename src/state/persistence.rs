use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::SnapshotError;
use crate::stroke::{Stroke, StrokeRef};

/// Format version written into every snapshot. Any other value on load is
/// treated as unreadable; stroke data is never migrated between versions.
pub const SNAPSHOT_VERSION: i64 = 1;

/// Size of the drawing surface in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn to_vec2(self) -> egui::Vec2 {
        egui::vec2(self.width, self.height)
    }
}

/// Plain drawing data, as handed to and from storage
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DrawingState {
    pub strokes: Vec<StrokeRef>,
    /// Index of the last visible stroke, `-1` when nothing is visible
    pub cursor: isize,
    pub size: CanvasSize,
}

impl DrawingState {
    pub fn empty(width: f32, height: f32) -> Self {
        Self {
            strokes: Vec::new(),
            cursor: -1,
            size: CanvasSize::new(width, height),
        }
    }

    /// Strokes up to and including the cursor
    pub fn visible(&self) -> &[StrokeRef] {
        let visible = usize::try_from(self.cursor.saturating_add(1))
            .unwrap_or(0)
            .min(self.strokes.len());
        &self.strokes[..visible]
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotOut<'a> {
    version: i64,
    paths: Vec<&'a Stroke>,
    current_path_index: isize,
    canvas_width: f32,
    canvas_height: f32,
}

/// Serialize the visible part of `state` to JSON.
///
/// Strokes past the cursor (the redo buffer) are not written.
pub fn serialize(state: &DrawingState) -> Result<String, SnapshotError> {
    let paths: Vec<&Stroke> = state.visible().iter().map(|stroke| stroke.as_ref()).collect();
    let snapshot = SnapshotOut {
        version: SNAPSHOT_VERSION,
        current_path_index: paths.len() as isize - 1,
        paths,
        canvas_width: state.size.width,
        canvas_height: state.size.height,
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Restore a drawing from JSON. Never fails: anything unreadable gives an
/// empty canvas of the fallback size.
pub fn deserialize(text: &str, fallback_width: f32, fallback_height: f32) -> DrawingState {
    match try_deserialize(text, fallback_width, fallback_height) {
        Ok(state) => state,
        Err(err) => {
            log::warn!("Discarding stored drawing: {}", err);
            DrawingState::empty(fallback_width, fallback_height)
        }
    }
}

fn try_deserialize(
    text: &str,
    fallback_width: f32,
    fallback_height: f32,
) -> Result<DrawingState, SnapshotError> {
    let parsed: Value = serde_json::from_str(text)?;

    let version = parsed.get("version").and_then(Value::as_f64);
    if version != Some(SNAPSHOT_VERSION as f64) {
        return Err(SnapshotError::VersionMismatch {
            found: version.map_or(-1, |v| v as i64),
            expected: SNAPSHOT_VERSION,
        });
    }

    let entries = parsed
        .get("paths")
        .and_then(Value::as_array)
        .ok_or(SnapshotError::Malformed("paths is not an array"))?;

    let strokes: Vec<StrokeRef> = entries
        .iter()
        .filter_map(validate_stroke)
        .map(Stroke::into_ref)
        .collect();
    if strokes.len() != entries.len() {
        log::warn!(
            "Dropped {} invalid stroke(s) from stored drawing",
            entries.len() - strokes.len()
        );
    }

    let last_valid = strokes.len() as isize - 1;
    let cursor = parsed
        .get("currentPathIndex")
        .and_then(Value::as_f64)
        .map_or(last_valid, |index| (index as isize).min(last_valid))
        .max(-1);

    Ok(DrawingState {
        strokes,
        cursor,
        size: CanvasSize::new(
            positive_or(parsed.get("canvasWidth"), fallback_width),
            positive_or(parsed.get("canvasHeight"), fallback_height),
        ),
    })
}

/// Structural check of one stored stroke, then a typed parse of it
fn validate_stroke(entry: &Value) -> Option<Stroke> {
    let object = entry.as_object()?;

    let id_ok = object.get("id").and_then(Value::as_str).is_some_and(|id| !id.is_empty());
    let points_ok = object
        .get("points")
        .and_then(Value::as_array)
        .is_some_and(|points| !points.is_empty());
    let color_ok = object.get("color").is_some_and(Value::is_string);
    let width_ok = object
        .get("strokeWidth")
        .and_then(Value::as_f64)
        .is_some_and(|width| width.is_finite() && width > 0.0);
    let eraser_ok = object.get("isEraser").is_some_and(Value::is_boolean);

    if !(id_ok && points_ok && color_ok && width_ok && eraser_ok) {
        return None;
    }

    serde_json::from_value(entry.clone()).ok()
}

fn positive_or(value: Option<&Value>, fallback: f32) -> f32 {
    value
        .and_then(Value::as_f64)
        .filter(|v| v.is_finite() && *v > 0.0)
        .map_or(fallback, |v| v as f32)
}
