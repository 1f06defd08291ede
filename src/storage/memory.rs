use futures::FutureExt;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::{validate_key, DrawingPersistence, StorageFuture};

/// One saved drawing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDrawing {
    pub data: String,
    pub completed: bool,
}

/// In-process storage, shared between clones. Used on the web build and in
/// tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    drawings: Arc<Mutex<HashMap<String, StoredDrawing>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<StoredDrawing> {
        self.drawings.lock().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.drawings.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.drawings.lock().is_empty()
    }
}

impl DrawingPersistence for MemoryStorage {
    fn save(&self, key: &str, data: String, completed: bool) -> StorageFuture<()> {
        let result = validate_key(key).map(|()| {
            self.drawings
                .lock()
                .insert(key.to_owned(), StoredDrawing { data, completed });
        });
        futures::future::ready(result).boxed()
    }

    fn load(&self, key: &str) -> StorageFuture<Option<String>> {
        let result = validate_key(key).map(|()| self.get(key).map(|stored| stored.data));
        futures::future::ready(result).boxed()
    }
}
