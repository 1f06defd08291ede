use coloring_canvas::geometry::is_point_in_path;
use coloring_canvas::tool::fill::{FillParams, fill_stroke, find_enclosing_stroke};
use coloring_canvas::{CanvasSize, DrawingStore, FillStyle, Stroke, StrokeRef, Tool};
use egui::{Pos2, pos2};

fn square(min: f32, max: f32) -> Vec<Pos2> {
    vec![pos2(min, min), pos2(max, min), pos2(max, max), pos2(min, max)]
}

fn outline(points: Vec<Pos2>, is_eraser: bool) -> StrokeRef {
    Stroke::new("#000000", 4.0, is_eraser, points).into_ref()
}

#[test]
fn test_short_paths_never_contain_points() {
    let queries = [pos2(0.0, 0.0), pos2(5.0, 5.0), pos2(-3.0, 7.5), pos2(1e6, -1e6)];
    let paths = [vec![], vec![pos2(0.0, 0.0)], vec![pos2(0.0, 0.0), pos2(10.0, 10.0)]];
    for path in &paths {
        for query in queries {
            assert!(!is_point_in_path(query, path));
        }
    }
}

#[test]
fn test_most_recent_enclosing_stroke_wins() {
    let older = outline(square(0.0, 100.0), false);
    let newer = outline(square(20.0, 80.0), false);
    let strokes = vec![older.clone(), newer.clone()];

    let found = find_enclosing_stroke(pos2(50.0, 50.0), &strokes).unwrap();
    assert_eq!(found.id(), newer.id());

    // Only the outer square covers this point
    let found = find_enclosing_stroke(pos2(10.0, 10.0), &strokes).unwrap();
    assert_eq!(found.id(), older.id());
}

#[test]
fn test_eraser_strokes_do_not_enclose() {
    let strokes = vec![outline(square(0.0, 100.0), true)];
    assert!(find_enclosing_stroke(pos2(50.0, 50.0), &strokes).is_none());
}

#[test]
fn test_open_space_gets_default_spiral() {
    let params = FillParams::default();
    let stroke = fill_stroke(pos2(50.0, 50.0), "#FFAA00", &[], &params);

    assert_eq!(stroke.points().len(), 3 * 20 + 1);
    assert_eq!(stroke.points()[0], pos2(50.0, 50.0));
    assert_eq!(stroke.stroke_width(), params.size / 2.0);
    assert_eq!(stroke.color(), "#FFAA00");
    assert!(!stroke.is_eraser());
}

#[test]
fn test_enclosed_fill_stays_inside_outline() {
    let strokes = vec![outline(square(0.0, 40.0), false)];
    let center = pos2(20.0, 20.0);
    let stroke = fill_stroke(center, "#00FF00", &strokes, &FillParams::default());

    let half_pen = stroke.stroke_width() / 2.0;
    for point in stroke.points() {
        let reach = point.distance(center) + half_pen;
        assert!(reach <= 20.0 + 0.01, "fill reaches {} past a 20px clearance", reach);
    }
}

#[test]
fn test_circle_style() {
    let params = FillParams {
        style: FillStyle::Circle,
        ..FillParams::default()
    };
    let stroke = fill_stroke(pos2(0.0, 0.0), "#123456", &[], &params);
    assert_eq!(stroke.points().len(), 37);
    assert_eq!(stroke.stroke_width(), params.size * 2.0);
}

#[test]
fn test_store_fill_commits_immediately() {
    let mut store = DrawingStore::new(CanvasSize::new(200.0, 200.0));
    store.start_stroke(pos2(10.0, 10.0), "#FF00FF", 12.0, Tool::Fill);

    assert!(!store.is_drawing());
    assert_eq!(store.visible_strokes().len(), 1);
    assert_eq!(store.cursor(), 0);
}

#[test]
fn test_fill_ignored_while_drawing() {
    let mut store = DrawingStore::default();
    store.start_stroke(pos2(0.0, 0.0), "#000000", 4.0, Tool::Brush);
    store.fill(pos2(5.0, 5.0), "#FF0000");

    assert!(store.is_drawing());
    assert!(store.strokes().is_empty());
}
