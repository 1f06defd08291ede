// src/renderer.rs
use egui::{Color32, Painter, Pos2, Rect, Shape, TextureHandle};

use crate::geometry::{fit_contain, CanvasTransform};
use crate::state::DrawingStore;
use crate::stroke::{Stroke, StrokeRef};

/// Line segments used to flatten each quadratic curve
const CURVE_SEGMENTS: usize = 4;

/// Parse a `#RRGGBB` style colour, falling back to black
pub fn parse_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(Color32::BLACK)
}

/// Smooth a polyline with quadratic curves through the midpoints of
/// consecutive points, then flatten the curves back to a polyline.
///
/// Every interior point becomes a control point; the curve passes through the
/// midpoints and ends exactly on the last point.
pub fn smooth_points(points: &[Pos2]) -> Vec<Pos2> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut out = Vec::with_capacity(points.len() * CURVE_SEGMENTS);
    let mut pen = points[0];
    out.push(pen);

    let rest = &points[1..];
    for pair in rest.windows(2) {
        let control = pair[0];
        let end = pen_midpoint(pair[0], pair[1]);
        for step in 1..=CURVE_SEGMENTS {
            let t = step as f32 / CURVE_SEGMENTS as f32;
            out.push(quadratic(pen, control, end, t));
        }
        pen = end;
    }

    if let Some(last) = rest.last() {
        out.push(*last);
    }
    out
}

fn pen_midpoint(a: Pos2, b: Pos2) -> Pos2 {
    Pos2::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

fn quadratic(p0: Pos2, c: Pos2, p1: Pos2, t: f32) -> Pos2 {
    let u = 1.0 - t;
    Pos2::new(
        u * u * p0.x + 2.0 * u * t * c.x + t * t * p1.x,
        u * u * p0.y + 2.0 * u * t * c.y + t * t * p1.y,
    )
}

/// Turns strokes into egui shapes and paints the canvas layers.
///
/// Layer order, bottom to top: background colour, committed strokes, the
/// stroke in progress, then the page line art. Keeping the line art on top
/// means colour appears to sit inside the printed outlines. Everything is
/// placed through one [`CanvasTransform`], so strokes scale together with the
/// line art. Eraser strokes
/// are painted in the background colour rather than clearing pixels.
#[derive(Debug, Clone)]
pub struct CanvasRenderer {
    background: Color32,
}

impl Default for CanvasRenderer {
    fn default() -> Self {
        Self::new(Color32::WHITE)
    }
}

impl CanvasRenderer {
    pub fn new(background: Color32) -> Self {
        Self { background }
    }

    pub fn from_hex(background: &str) -> Self {
        Self::new(Color32::from_hex(background).unwrap_or(Color32::WHITE))
    }

    pub fn background(&self) -> Color32 {
        self.background
    }

    /// Colour a stroke is painted with
    pub fn stroke_color(&self, stroke: &Stroke) -> Color32 {
        if stroke.is_eraser() {
            self.background
        } else {
            parse_color(stroke.color())
        }
    }

    /// Shapes for a single stroke, placed on screen by `view`
    pub fn stroke_shapes(&self, stroke: &Stroke, view: &CanvasTransform) -> Vec<Shape> {
        let color = self.stroke_color(stroke);
        let width = stroke.stroke_width() * view.scale();
        let radius = width / 2.0;
        let points: Vec<Pos2> = smooth_points(stroke.points())
            .into_iter()
            .map(|p| view.to_screen(p))
            .collect();

        match points.as_slice() {
            [] => Vec::new(),
            [dot] => vec![Shape::circle_filled(*dot, radius, color)],
            [first, .., last] => vec![
                // Round caps at both ends
                Shape::circle_filled(*first, radius, color),
                Shape::line(points.clone(), egui::Stroke::new(width, color)),
                Shape::circle_filled(*last, radius, color),
            ],
        }
    }

    /// All shapes below the line art, in paint order
    pub fn shapes(
        &self,
        strokes: &[StrokeRef],
        current: Option<&Stroke>,
        view: &CanvasTransform,
    ) -> Vec<Shape> {
        let mut shapes = vec![Shape::rect_filled(view.page_rect(), 0.0, self.background)];
        for stroke in strokes.iter().map(|s| s.as_ref()).chain(current) {
            shapes.extend(self.stroke_shapes(stroke, view));
        }
        shapes
    }

    /// Paint the store's visible drawing, fitted inside `canvas_rect`
    pub fn paint(
        &self,
        painter: &Painter,
        store: &DrawingStore,
        canvas_rect: Rect,
        line_art: Option<&TextureHandle>,
    ) {
        let view = CanvasTransform::fit(store.canvas_size().to_vec2(), canvas_rect);
        let painter = painter.with_clip_rect(view.page_rect());
        let current = store.current_stroke_preview();
        painter.extend(self.shapes(store.visible_strokes(), current.as_ref(), &view));

        if let Some(texture) = line_art {
            let target = fit_contain(texture.size_vec2(), view.page_rect());
            painter.image(
                texture.id(),
                target,
                Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_smoothing_keeps_endpoints() {
        let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0), pos2(20.0, 10.0)];
        let smoothed = smooth_points(&points);
        assert_eq!(smoothed.first(), Some(&pos2(0.0, 0.0)));
        assert_eq!(smoothed.last(), Some(&pos2(20.0, 10.0)));
        assert!(smoothed.len() > points.len());
    }

    #[test]
    fn test_short_paths_are_not_smoothed() {
        let points = [pos2(1.0, 2.0), pos2(3.0, 4.0)];
        assert_eq!(smooth_points(&points), points.to_vec());
    }

    fn stroke(points: &[Pos2], color: &str, is_eraser: bool) -> Stroke {
        Stroke::new(color, 10.0, is_eraser, points.to_vec())
    }

    fn circle_fill(shape: &Shape) -> Option<Color32> {
        match shape {
            Shape::Circle(circle) => Some(circle.fill),
            _ => None,
        }
    }

    #[test]
    fn test_shapes_are_layered_bottom_to_top() {
        let renderer = CanvasRenderer::new(Color32::WHITE);
        let page = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let view = CanvasTransform::identity(page);
        let committed = vec![
            stroke(&[pos2(0.0, 0.0), pos2(50.0, 0.0)], "#FF0000", false).into_ref(),
            stroke(&[pos2(0.0, 10.0), pos2(50.0, 10.0)], "#FF0000", true).into_ref(),
        ];
        let current = stroke(&[pos2(0.0, 20.0), pos2(60.0, 20.0)], "#0000FF", false);

        let shapes = renderer.shapes(&committed, Some(&current), &view);

        match &shapes[0] {
            Shape::Rect(background) => {
                assert_eq!(background.rect, page);
                assert_eq!(background.fill, Color32::WHITE);
            }
            other => panic!("expected the background first, got {:?}", other),
        }
        // Three shapes per stroke: start cap, line, end cap
        assert_eq!(shapes.len(), 1 + 3 * 3);
        assert_eq!(circle_fill(&shapes[1]), Some(Color32::RED));
        assert_eq!(circle_fill(&shapes[4]), Some(Color32::WHITE));
        assert_eq!(circle_fill(&shapes[7]), Some(Color32::BLUE));
        match shapes.last() {
            Some(Shape::Circle(cap)) => {
                assert_eq!(cap.center, pos2(60.0, 20.0));
                assert_eq!(cap.fill, Color32::BLUE);
            }
            other => panic!("expected the current stroke on top, got {:?}", other),
        }
    }

    #[test]
    fn test_strokes_scale_with_the_page() {
        let renderer = CanvasRenderer::default();
        let view = CanvasTransform::fit(
            egui::vec2(800.0, 600.0),
            Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(400.0, 600.0)),
        );
        let dot = stroke(&[pos2(100.0, 100.0)], "#000000", false);

        match renderer.stroke_shapes(&dot, &view).as_slice() {
            [Shape::Circle(circle)] => {
                assert_eq!(circle.center, pos2(50.0, 200.0));
                assert_eq!(circle.radius, 2.5);
            }
            other => panic!("expected a single dot, got {:?}", other),
        }
    }

    #[test]
    fn test_paint_with_stroke_in_progress() {
        let ctx = egui::Context::default();
        let rect = Rect::from_min_size(pos2(0.0, 0.0), egui::vec2(100.0, 100.0));
        let painter = Painter::new(ctx, egui::LayerId::background(), rect);

        let mut store = DrawingStore::default();
        store.start_stroke(pos2(10.0, 10.0), "#00FF00", 4.0, crate::tool::Tool::Brush);
        store.extend_stroke(pos2(20.0, 20.0));
        CanvasRenderer::default().paint(&painter, &store, rect, None);
        assert!(store.is_drawing());
    }
}
