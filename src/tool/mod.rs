pub mod fill;
mod settings;
pub mod types;

pub use fill::FillParams;
pub use settings::ToolSettings;
pub use types::{BrushSize, Tool, DEFAULT_COLORS, EXTENDED_COLORS};
