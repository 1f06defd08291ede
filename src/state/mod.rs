mod editor_state;
pub mod history;
pub mod persistence;
mod store;

pub use editor_state::EditorState;
pub use history::StrokeHistory;
pub use persistence::{deserialize, serialize, CanvasSize, DrawingState, SNAPSHOT_VERSION};
pub use store::DrawingStore;
