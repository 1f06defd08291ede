use coloring_canvas::error::StorageError;
use coloring_canvas::state;
use coloring_canvas::storage::{self, DrawingPersistence, FileStorage, MemoryStorage};
use coloring_canvas::{CanvasSize, DrawingStore, Tool};
use egui::pos2;
use futures::executor::block_on;

fn saved_drawing() -> String {
    let mut store = DrawingStore::new(CanvasSize::new(320.0, 200.0));
    store.start_stroke(pos2(1.0, 1.0), "#3366FF", 12.0, Tool::Brush);
    store.extend_stroke(pos2(9.0, 9.0));
    store.commit_stroke();
    state::serialize(&store.snapshot_state()).unwrap()
}

#[test]
fn test_file_storage_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let files = FileStorage::new(dir.path().join("drawings"));
    let data = saved_drawing();

    assert_eq!(block_on(files.load("page-1")).unwrap(), None);

    block_on(files.save("page-1", data.clone(), false)).unwrap();
    assert_eq!(block_on(files.load("page-1")).unwrap(), Some(data.clone()));
    assert!(!files.is_completed("page-1").unwrap());
    assert!(dir.path().join("drawings/page-1.json").exists());
    assert!(!dir.path().join("drawings/page-1.json.tmp").exists());

    block_on(files.save("page-1", data, true)).unwrap();
    assert!(files.is_completed("page-1").unwrap());
}

#[test]
fn test_invalid_keys_are_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let files = FileStorage::new(dir.path());
    let memory = MemoryStorage::new();

    for key in ["", "../escape", "a/b", "page 1", "café"] {
        assert!(matches!(
            block_on(files.save(key, "{}".to_owned(), false)),
            Err(StorageError::InvalidKey(_))
        ));
        assert!(matches!(
            block_on(memory.load(key)),
            Err(StorageError::InvalidKey(_))
        ));
    }
    assert!(storage::validate_key("Page_2-b").is_ok());
    assert!(memory.is_empty());
}

#[test]
fn test_memory_storage_tracks_completion() {
    let memory = MemoryStorage::new();
    block_on(memory.save("art-7", "first".to_owned(), false)).unwrap();
    block_on(memory.save("art-7", "second".to_owned(), true)).unwrap();

    let stored = memory.get("art-7").unwrap();
    assert_eq!(stored.data, "second");
    assert!(stored.completed);
    assert_eq!(memory.len(), 1);

    // Clones share the same backing map
    let shared = memory.clone();
    assert_eq!(block_on(shared.load("art-7")).unwrap().as_deref(), Some("second"));
}

#[test]
fn test_load_drawing_restores_or_falls_back() {
    let memory = MemoryStorage::new();
    block_on(memory.save("page-1", saved_drawing(), false)).unwrap();
    block_on(memory.save("broken", "{\"version\":".to_owned(), false)).unwrap();

    let restored = block_on(storage::load_drawing(&memory, "page-1", 10.0, 10.0));
    assert_eq!(restored.visible().len(), 1);
    assert_eq!(restored.size, CanvasSize::new(320.0, 200.0));

    let missing = block_on(storage::load_drawing(&memory, "nothing-here", 10.0, 20.0));
    assert!(missing.strokes.is_empty());
    assert_eq!(missing.size, CanvasSize::new(10.0, 20.0));

    let broken = block_on(storage::load_drawing(&memory, "broken", 10.0, 20.0));
    assert!(broken.strokes.is_empty());
    assert_eq!(broken.cursor, -1);
}
