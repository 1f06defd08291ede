//! Persistence collaborators for drawings.
//!
//! The drawing core only sees an async key-value store keyed by page or
//! artwork id. Values are the serialized snapshot text; the store never looks
//! inside them.

#[cfg(not(target_arch = "wasm32"))]
mod file;
mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;
pub use memory::{MemoryStorage, StoredDrawing};

use futures::future::BoxFuture;

use crate::error::{StorageError, StorageResult};
use crate::state::{self, DrawingState};

pub type StorageFuture<T> = BoxFuture<'static, StorageResult<T>>;

/// Async key-value persistence for serialized drawings
pub trait DrawingPersistence {
    /// Store `data` under `key`. `completed` marks the artwork as finished.
    fn save(&self, key: &str, data: String, completed: bool) -> StorageFuture<()>;

    /// Fetch the data stored under `key`, if any
    fn load(&self, key: &str) -> StorageFuture<Option<String>>;
}

/// Keys end up in file names, so only a conservative alphabet is accepted
pub fn validate_key(key: &str) -> StorageResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_owned()))
    }
}

/// Load and restore the drawing stored under `key`.
///
/// Missing data and load failures both give an empty canvas of the fallback
/// size; failures are logged, never returned.
pub async fn load_drawing(
    storage: &dyn DrawingPersistence,
    key: &str,
    fallback_width: f32,
    fallback_height: f32,
) -> DrawingState {
    match storage.load(key).await {
        Ok(Some(text)) => {
            log::info!("Restoring drawing {} ({} bytes)", key, text.len());
            state::deserialize(&text, fallback_width, fallback_height)
        }
        Ok(None) => {
            log::debug!("No saved drawing for {}", key);
            DrawingState::empty(fallback_width, fallback_height)
        }
        Err(err) => {
            log::error!("Failed to load drawing {}: {}", key, err);
            DrawingState::empty(fallback_width, fallback_height)
        }
    }
}
