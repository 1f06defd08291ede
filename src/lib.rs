#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod autosave;
pub mod components;
pub mod config;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod input;
pub mod line_art;
pub mod panels;
pub mod renderer;
pub mod session;
pub mod state;
pub mod storage;
pub mod stroke;
pub mod tool;
pub mod util;

pub use app::ColoringApp;
pub use autosave::{AutosaveScheduler, SaveOutcome};
pub use config::{CanvasConfig, FillStyle};
pub use event::{DrawingEvent, EventBus, EventHandler};
pub use input::{GestureEvent, GesturePhase, GestureRouter, InputHandler, PointThrottler};
pub use renderer::CanvasRenderer;
pub use session::DrawingSession;
pub use state::{CanvasSize, DrawingState, DrawingStore, EditorState, StrokeHistory};
pub use storage::DrawingPersistence;
pub use stroke::{Stroke, StrokeBuilder, StrokeId, StrokeRef};
pub use tool::{BrushSize, Tool, ToolSettings};
