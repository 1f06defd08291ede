use serde::{Deserialize, Serialize};

use super::types::{BrushSize, Tool, DEFAULT_COLORS};

/// Current tool, colour and brush size chosen on the toolbar.
///
/// Changing any of these never touches the stroke history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolSettings {
    tool: Tool,
    color: String,
    brush_size: BrushSize,
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Brush,
            color: DEFAULT_COLORS[0].to_owned(),
            brush_size: BrushSize::Medium,
        }
    }
}

impl ToolSettings {
    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn brush_size(&self) -> BrushSize {
        self.brush_size
    }

    pub fn stroke_width(&self) -> f32 {
        self.brush_size.width()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("Tool changed: {:?} -> {:?}", self.tool, tool);
        self.tool = tool;
    }

    /// Picking a colour while erasing switches back to the brush, so the new
    /// colour shows up straight away. The fill tool is kept.
    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
        if self.tool == Tool::Eraser {
            self.set_tool(Tool::Brush);
        }
    }

    pub fn set_brush_size(&mut self, size: BrushSize) {
        self.brush_size = size;
    }

    pub fn is_eraser(&self) -> bool {
        self.tool == Tool::Eraser
    }

    pub fn toggle_eraser(&mut self) {
        let next = if self.is_eraser() { Tool::Brush } else { Tool::Eraser };
        self.set_tool(next);
    }
}
