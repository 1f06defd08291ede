use thiserror::Error;

/// Errors raised by a persistence backend while saving or loading a drawing
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to access drawing storage: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid drawing key: {0:?}")]
    InvalidKey(String),
}

/// Reasons a snapshot could not be written or restored.
///
/// Restore failures never escape the serializer; they are logged and the
/// caller gets an empty canvas instead.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("Invalid drawing snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported snapshot version {found} (expected {expected})")]
    VersionMismatch { found: i64, expected: i64 },

    #[error("Malformed drawing snapshot: {0}")]
    Malformed(&'static str),
}

/// Errors that can occur while decoding page line art
#[derive(Debug, Error)]
pub enum LineArtError {
    #[error("Failed to decode line art: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Line art has invalid dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to read line art file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not an image: {0}")]
    Unsupported(String),
}

pub type StorageResult<T> = Result<T, StorageError>;
