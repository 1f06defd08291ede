use futures::FutureExt;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{validate_key, DrawingPersistence, StorageFuture};
use crate::error::StorageResult;
use crate::util::time;

/// Sidecar metadata written next to each drawing
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DrawingMeta {
    completed: bool,
    /// Seconds since the UNIX epoch
    saved_at: u64,
}

/// Stores each drawing as `<key>.json` in a directory, with a
/// `<key>.meta.json` sidecar recording completion.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn data_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn meta_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.meta.json", key))
    }

    /// Whether the drawing under `key` was saved as completed
    pub fn is_completed(&self, key: &str) -> StorageResult<bool> {
        validate_key(key)?;
        match fs::read_to_string(self.meta_path(key)) {
            Ok(text) => Ok(serde_json::from_str::<DrawingMeta>(&text)
                .map(|meta| meta.completed)
                .unwrap_or(false)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, data: &str, completed: bool) -> StorageResult<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write to a temporary file first so a crash never leaves half a drawing
        let path = self.data_path(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &path)?;

        let meta = DrawingMeta {
            completed,
            saved_at: time::current_time_secs() as u64,
        };
        let meta = serde_json::to_string(&meta).map_err(std::io::Error::other)?;
        fs::write(self.meta_path(key), meta)?;

        log::info!("Saved drawing {} to {}", key, path.display());
        Ok(())
    }

    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.data_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

impl DrawingPersistence for FileStorage {
    fn save(&self, key: &str, data: String, completed: bool) -> StorageFuture<()> {
        let storage = self.clone();
        let key = key.to_owned();
        async move { storage.write(&key, &data, completed) }.boxed()
    }

    fn load(&self, key: &str) -> StorageFuture<Option<String>> {
        let storage = self.clone();
        let key = key.to_owned();
        async move { storage.read(&key) }.boxed()
    }
}
