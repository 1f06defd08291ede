//! Bucket fill for a vector-only canvas.
//!
//! There is no pixel access, so a real flood fill is not possible. A tap either
//! lands inside a closed-looking stroke, in which case a blob is sized to stay
//! within that outline, or it lands in open space and gets a fixed-size blob.
//! The blob is an ordinary stroke that traces an expanding spiral.

use egui::Pos2;
use std::f32::consts::TAU;

use crate::config::{CanvasConfig, FillStyle};
use crate::geometry::{self, is_point_in_path};
use crate::stroke::{Stroke, StrokeRef};

/// Smallest blob radius produced inside a tight outline
const MIN_ENCLOSED_RADIUS: f32 = 2.0;

/// Numeric tuning of the fill mark
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillParams {
    pub size: f32,
    pub spiral_turns: u32,
    pub points_per_turn: u32,
    pub style: FillStyle,
}

impl Default for FillParams {
    fn default() -> Self {
        Self::from(&CanvasConfig::default())
    }
}

impl From<&CanvasConfig> for FillParams {
    fn from(config: &CanvasConfig) -> Self {
        Self {
            size: config.fill_size,
            spiral_turns: config.fill_spiral_turns,
            points_per_turn: config.fill_points_per_turn,
            style: config.fill_style,
        }
    }
}

/// Most recently drawn non-eraser stroke whose outline encloses `point`
pub fn find_enclosing_stroke(point: Pos2, strokes: &[StrokeRef]) -> Option<&StrokeRef> {
    strokes
        .iter()
        .rev()
        .find(|stroke| !stroke.is_eraser() && is_point_in_path(point, stroke.points()))
}

/// Spiral from `center` out to `size`, drawn with a pen half as wide as `size`
pub fn spiral_fill_stroke(
    center: Pos2,
    color: &str,
    size: f32,
    turns: u32,
    points_per_turn: u32,
) -> Stroke {
    let points_per_turn = points_per_turn.max(1);
    let total = turns.max(1) * points_per_turn;

    let points = (0..=total)
        .map(|i| {
            let angle = i as f32 / points_per_turn as f32 * TAU;
            let radius = i as f32 / total as f32 * size;
            Pos2::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect();

    Stroke::new(color, size / 2.0, false, points)
}

/// Closed 36-segment circle drawn with a pen as wide as its diameter
pub fn circular_fill_stroke(center: Pos2, radius: f32, color: &str) -> Stroke {
    const SEGMENTS: u32 = 36;

    let points = (0..=SEGMENTS)
        .map(|i| {
            let angle = i as f32 / SEGMENTS as f32 * TAU;
            Pos2::new(center.x + angle.cos() * radius, center.y + angle.sin() * radius)
        })
        .collect();

    Stroke::new(color, radius * 2.0, false, points)
}

/// Build the fill mark for a tap at `point` over the currently visible strokes.
///
/// Inside an enclosing outline the blob radius shrinks so that the blob plus
/// its pen width stays clear of the nearest edge.
pub fn fill_stroke(point: Pos2, color: &str, visible: &[StrokeRef], params: &FillParams) -> Stroke {
    let size = match find_enclosing_stroke(point, visible) {
        Some(outline) => {
            let clearance =
                geometry::distance_to_outline(point, outline.points()).unwrap_or(params.size);
            let radius = enclosed_radius(clearance, params.style)
                .clamp(MIN_ENCLOSED_RADIUS, params.size.max(MIN_ENCLOSED_RADIUS));
            log::debug!(
                "Fill at ({:.1}, {:.1}) enclosed by stroke {}, radius {:.1}",
                point.x,
                point.y,
                outline.id(),
                radius
            );
            radius
        }
        None => {
            log::debug!("Fill at ({:.1}, {:.1}) has no enclosing stroke", point.x, point.y);
            params.size
        }
    };

    match params.style {
        FillStyle::Spiral => {
            spiral_fill_stroke(point, color, size, params.spiral_turns, params.points_per_turn)
        }
        FillStyle::Circle => circular_fill_stroke(point, size, color),
    }
}

/// Largest radius whose rendered extent fits within `clearance`
fn enclosed_radius(clearance: f32, style: FillStyle) -> f32 {
    match style {
        // radius + pen half-width (radius / 4)
        FillStyle::Spiral => clearance / 1.25,
        // radius + pen half-width (radius)
        FillStyle::Circle => clearance / 2.0,
    }
}
