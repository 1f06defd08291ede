//! SVG export of a drawing, used for gallery thumbnails.

use egui::Rect;
use std::fmt::Write as _;

use crate::geometry;
use crate::state::CanvasSize;
use crate::stroke::{Stroke, StrokeRef};

/// SVG path data for a stroke.
///
/// A single point becomes a tiny segment so round caps still show a dot; two
/// points are a straight line; longer strokes use quadratic curves through
/// the midpoints of consecutive points.
pub fn path_to_svg_d(stroke: &Stroke) -> String {
    let Some((first, rest)) = stroke.points().split_first() else {
        return String::new();
    };

    let mut d = format!("M {} {}", first.x, first.y);
    match rest {
        [] => {
            let _ = write!(d, " L {} {}", first.x + 0.1, first.y + 0.1);
        }
        [only] => {
            let _ = write!(d, " L {} {}", only.x, only.y);
        }
        _ => {
            for pair in rest.windows(2) {
                let (current, next) = (pair[0], pair[1]);
                let mid_x = (current.x + next.x) / 2.0;
                let mid_y = (current.y + next.y) / 2.0;
                let _ = write!(d, " Q {} {} {} {}", current.x, current.y, mid_x, mid_y);
            }
            if let Some(last) = rest.last() {
                let _ = write!(d, " L {} {}", last.x, last.y);
            }
        }
    }
    d
}

/// Bounding box of every point in `strokes`, ignoring pen width
pub fn drawing_bounds(strokes: &[StrokeRef]) -> Option<Rect> {
    let points: Vec<_> = strokes
        .iter()
        .flat_map(|stroke| stroke.points().iter().copied())
        .collect();
    geometry::calculate_bounds(&points, 0.0)
}

/// Standalone SVG document of the given strokes on a solid background
pub fn to_svg(strokes: &[StrokeRef], size: CanvasSize, background: &str) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = size.width,
        h = size.height
    );
    let _ = write!(svg, r#"<rect width="100%" height="100%" fill="{}"/>"#, escape_attr(background));

    for stroke in strokes {
        let d = path_to_svg_d(stroke);
        if d.is_empty() {
            continue;
        }
        let color = if stroke.is_eraser() { background } else { stroke.color() };
        let _ = write!(
            svg,
            r#"<path d="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" fill="none"/>"#,
            d,
            escape_attr(color),
            stroke.stroke_width()
        );
    }

    svg.push_str("</svg>");
    svg
}

fn escape_attr(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_path_shapes() {
        let dot = Stroke::new("#000", 2.0, false, vec![pos2(1.0, 1.0)]);
        assert_eq!(path_to_svg_d(&dot), "M 1 1 L 1.1 1.1");

        let line = Stroke::new("#000", 2.0, false, vec![pos2(0.0, 0.0), pos2(5.0, 5.0)]);
        assert_eq!(path_to_svg_d(&line), "M 0 0 L 5 5");

        let curve = Stroke::new(
            "#000",
            2.0,
            false,
            vec![pos2(0.0, 0.0), pos2(2.0, 0.0), pos2(4.0, 2.0)],
        );
        assert_eq!(path_to_svg_d(&curve), "M 0 0 Q 2 0 3 1 L 4 2");
    }

    #[test]
    fn test_svg_paints_eraser_with_background() {
        let strokes = vec![
            Stroke::new("#FF0000", 4.0, false, vec![pos2(0.0, 0.0), pos2(5.0, 5.0)]).into_ref(),
            Stroke::new("#FF0000", 4.0, true, vec![pos2(0.0, 5.0), pos2(5.0, 0.0)]).into_ref(),
        ];
        let svg = to_svg(&strokes, CanvasSize::new(10.0, 10.0), "#FFFFFF");
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<path").count(), 2);
        assert_eq!(svg.matches(r##"stroke="#FF0000""##).count(), 1);
    }

    #[test]
    fn test_bounds() {
        let strokes = vec![
            Stroke::new("#000", 1.0, false, vec![pos2(3.0, 4.0), pos2(-1.0, 8.0)]).into_ref(),
            Stroke::new("#000", 1.0, false, vec![pos2(10.0, 0.0)]).into_ref(),
        ];
        let bounds = drawing_bounds(&strokes).unwrap();
        assert_eq!(bounds.min, pos2(-1.0, 0.0));
        assert_eq!(bounds.max, pos2(10.0, 8.0));
        assert!(drawing_bounds(&[]).is_none());
    }
}
