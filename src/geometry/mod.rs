use egui::{Pos2, Rect, Vec2};

mod hit_testing;

pub use hit_testing::is_point_in_path;

/// Euclidean distance between two canvas points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    a.distance(b)
}

/// Distance from a point to a line segment
pub fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Shortest distance from `point` to the outline of a closed polygon
pub fn distance_to_outline(point: Pos2, outline: &[Pos2]) -> Option<f32> {
    match outline {
        [] => None,
        [only] => Some(distance(point, *only)),
        _ => {
            let closing = [outline[outline.len() - 1], outline[0]];
            outline
                .windows(2)
                .chain(std::iter::once(&closing[..]))
                .map(|edge| distance_to_line_segment(point, edge[0], edge[1]))
                .reduce(f32::min)
        }
    }
}

/// Calculate the bounding box for a set of points, or `None` when empty
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Option<Rect> {
    if points.is_empty() {
        return None;
    }

    let mut min_x = f32::INFINITY;
    let mut min_y = f32::INFINITY;
    let mut max_x = f32::NEG_INFINITY;
    let mut max_y = f32::NEG_INFINITY;

    for point in points {
        min_x = min_x.min(point.x);
        min_y = min_y.min(point.y);
        max_x = max_x.max(point.x);
        max_y = max_y.max(point.y);
    }

    Some(Rect::from_min_max(
        Pos2::new(min_x - padding, min_y - padding),
        Pos2::new(max_x + padding, max_y + padding),
    ))
}

/// Largest rect with the content's aspect ratio centered inside `bounds`
pub fn fit_contain(content_size: Vec2, bounds: Rect) -> Rect {
    if content_size.x <= 0.0 || content_size.y <= 0.0 {
        return bounds;
    }
    let scale = (bounds.width() / content_size.x).min(bounds.height() / content_size.y);
    Rect::from_center_size(bounds.center(), content_size * scale)
}

/// Maps the page's fixed drawing coordinates onto the screen rect it is
/// currently shown in. Strokes and line art go through the same mapping, so
/// they stay lined up however the panel is resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasTransform {
    page_rect: Rect,
    scale: f32,
}

impl CanvasTransform {
    /// One drawing unit per screen point, with the page at `rect`
    pub fn identity(rect: Rect) -> Self {
        Self {
            page_rect: rect,
            scale: 1.0,
        }
    }

    /// Fit a page of `page_size` inside `bounds`, keeping its aspect ratio
    pub fn fit(page_size: Vec2, bounds: Rect) -> Self {
        let page_rect = fit_contain(page_size, bounds);
        let scale = page_rect.width() / page_size.x;
        if scale.is_finite() && scale > 0.0 {
            Self { page_rect, scale }
        } else {
            Self::identity(bounds)
        }
    }

    /// Where the page sits on screen
    pub fn page_rect(&self) -> Rect {
        self.page_rect
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn to_screen(&self, point: Pos2) -> Pos2 {
        self.page_rect.min + point.to_vec2() * self.scale
    }

    pub fn to_canvas(&self, pos: Pos2) -> Pos2 {
        ((pos - self.page_rect.min) / self.scale).to_pos2()
    }
}
