use coloring_canvas::state::{self, SNAPSHOT_VERSION};
use coloring_canvas::{CanvasSize, DrawingState, DrawingStore, Stroke, StrokeId, Tool};
use egui::pos2;
use serde_json::{Value, json};

fn sample_state() -> DrawingState {
    let strokes = vec![
        Stroke::new("#FF0000", 12.0, false, vec![pos2(1.0, 2.0), pos2(3.5, 4.25), pos2(8.0, 9.0)])
            .with_id(StrokeId::from("red"))
            .into_ref(),
        Stroke::new("#FFFFFF", 24.0, true, vec![pos2(0.0, 0.0), pos2(10.0, 0.0)])
            .with_id(StrokeId::from("eraser"))
            .into_ref(),
    ];
    DrawingState {
        strokes,
        cursor: 1,
        size: CanvasSize::new(1024.0, 768.0),
    }
}

#[test]
fn test_round_trip_preserves_visible_strokes() {
    let original = sample_state();
    let text = state::serialize(&original).unwrap();
    let restored = state::deserialize(&text, 1.0, 1.0);

    assert_eq!(restored.cursor, original.cursor);
    assert_eq!(restored.size, original.size);
    assert_eq!(restored.visible().len(), original.visible().len());
    for (a, b) in restored.visible().iter().zip(original.visible()) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.points(), b.points());
        assert_eq!(a.color(), b.color());
        assert_eq!(a.stroke_width(), b.stroke_width());
        assert_eq!(a.is_eraser(), b.is_eraser());
    }
}

#[test]
fn test_redo_buffer_is_not_saved() {
    let mut original = sample_state();
    original.cursor = 0;

    let text = state::serialize(&original).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(value["paths"].as_array().unwrap().len(), 1);
    assert_eq!(value["currentPathIndex"], json!(0));

    let restored = state::deserialize(&text, 1.0, 1.0);
    assert_eq!(restored.strokes.len(), 1);
    assert_eq!(restored.cursor, 0);
}

#[test]
fn test_snapshot_field_names() {
    let text = state::serialize(&sample_state()).unwrap();
    let value: Value = serde_json::from_str(&text).unwrap();

    assert_eq!(value["version"], json!(SNAPSHOT_VERSION));
    assert_eq!(value["canvasWidth"], json!(1024.0));
    assert_eq!(value["canvasHeight"], json!(768.0));
    let first = &value["paths"][0];
    assert_eq!(first["id"], json!("red"));
    assert_eq!(first["strokeWidth"], json!(12.0));
    assert_eq!(first["isEraser"], json!(false));
    assert_eq!(first["points"][1], json!({"x": 3.5, "y": 4.25}));
}

#[test]
fn test_version_mismatch_gives_empty_canvas() {
    let text = state::serialize(&sample_state()).unwrap();
    let mut value: Value = serde_json::from_str(&text).unwrap();
    value["version"] = json!(999);

    let restored = state::deserialize(&value.to_string(), 320.0, 240.0);
    assert!(restored.strokes.is_empty());
    assert_eq!(restored.cursor, -1);
    assert_eq!(restored.size, CanvasSize::new(320.0, 240.0));
}

#[test]
fn test_garbage_gives_empty_canvas() {
    for text in ["", "not json", "[]", "{\"version\": 1, \"paths\": 5}", "null"] {
        let restored = state::deserialize(text, 100.0, 50.0);
        assert!(restored.strokes.is_empty(), "restored strokes from {text:?}");
        assert_eq!(restored.size, CanvasSize::new(100.0, 50.0));
    }
}

#[test]
fn test_invalid_entries_dropped_and_cursor_clamped() {
    let text = json!({
        "version": SNAPSHOT_VERSION,
        "paths": [
            {"id": "ok", "points": [{"x": 0, "y": 0}, {"x": 1, "y": 1}], "color": "#000", "strokeWidth": 4, "isEraser": false},
            {"id": "", "points": [{"x": 0, "y": 0}], "color": "#000", "strokeWidth": 4, "isEraser": false},
            {"id": "no-points", "points": [], "color": "#000", "strokeWidth": 4, "isEraser": false}
        ],
        "currentPathIndex": 2,
        "canvasWidth": 640,
        "canvasHeight": 480
    })
    .to_string();

    let restored = state::deserialize(&text, 1.0, 1.0);
    assert_eq!(restored.strokes.len(), 1);
    assert_eq!(restored.strokes[0].id().as_str(), "ok");
    assert_eq!(restored.cursor, 0);
    assert_eq!(restored.size, CanvasSize::new(640.0, 480.0));
}

#[test]
fn test_missing_fields_fall_back() {
    let text = json!({
        "version": SNAPSHOT_VERSION,
        "paths": [
            {"id": "a", "points": [{"x": 0, "y": 0}], "color": "#000", "strokeWidth": 4, "isEraser": false},
            {"id": "b", "points": [{"x": 0, "y": 0}], "color": "#000", "strokeWidth": 4, "isEraser": false}
        ],
        "canvasWidth": 0
    })
    .to_string();

    let restored = state::deserialize(&text, 300.0, 200.0);
    // No cursor stored: everything is visible
    assert_eq!(restored.cursor, 1);
    assert_eq!(restored.size, CanvasSize::new(300.0, 200.0));
}

#[test]
fn test_negative_cursor_is_clamped() {
    let text = json!({
        "version": SNAPSHOT_VERSION,
        "paths": [],
        "currentPathIndex": -7
    })
    .to_string();
    assert_eq!(state::deserialize(&text, 1.0, 1.0).cursor, -1);
}

#[test]
fn test_store_snapshot_and_reload() {
    let mut store = DrawingStore::new(CanvasSize::new(500.0, 400.0));
    store.start_stroke(pos2(0.0, 0.0), "#00FF00", 4.0, Tool::Brush);
    store.extend_stroke(pos2(10.0, 10.0));
    store.commit_stroke();
    store.start_stroke(pos2(20.0, 20.0), "#0000FF", 4.0, Tool::Brush);
    store.extend_stroke(pos2(30.0, 30.0));
    store.commit_stroke();
    store.undo();

    let text = state::serialize(&store.snapshot_state()).unwrap();

    let mut reloaded = DrawingStore::default();
    reloaded.load_state(state::deserialize(&text, 1.0, 1.0));
    assert_eq!(reloaded.visible_strokes(), store.visible_strokes());
    assert_eq!(reloaded.cursor(), 0);
    assert!(!reloaded.can_redo());
    assert_eq!(reloaded.canvas_size(), CanvasSize::new(500.0, 400.0));
}
