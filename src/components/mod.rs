mod color_swatch;
mod tool_button;

pub use color_swatch::ColorSwatch;
pub use tool_button::ToolButton;
