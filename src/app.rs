use crate::autosave::SaveOutcome;
use crate::config::CanvasConfig;
use crate::export;
use crate::geometry::CanvasTransform;
use crate::input::InputHandler;
use crate::line_art::LineArt;
use crate::panels::{central_panel, tools_panel};
use crate::renderer::CanvasRenderer;
use crate::session::DrawingSession;
use crate::state::CanvasSize;
use crate::storage::{self, DrawingPersistence};
use crate::tool::ToolSettings;
use crate::util::time;

/// Page opened when nothing else was chosen
pub const DEFAULT_PAGE: &str = "free-draw";

fn default_storage(config: &CanvasConfig) -> Box<dyn DrawingPersistence> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(storage::FileStorage::new(&config.storage_dir))
    }
    #[cfg(target_arch = "wasm32")]
    {
        let _ = config;
        Box::new(storage::MemoryStorage::new())
    }
}

/// We derive Deserialize/Serialize so we can persist app state on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ColoringApp {
    config: CanvasConfig,
    tools: ToolSettings,
    page: String,

    // The drawing itself is saved through `storage`, not with the app state
    #[serde(skip)]
    session: Option<DrawingSession>,
    #[serde(skip)]
    storage: Box<dyn DrawingPersistence>,
    #[serde(skip)]
    input: InputHandler,
    #[serde(skip)]
    renderer: CanvasRenderer,
    #[serde(skip)]
    line_art: Option<LineArt>,
    #[serde(skip)]
    page_input: String,
    #[serde(skip)]
    status: Option<String>,
}

impl Default for ColoringApp {
    fn default() -> Self {
        let config = CanvasConfig::default();
        Self {
            storage: default_storage(&config),
            renderer: CanvasRenderer::from_hex(&config.background_color),
            config,
            tools: ToolSettings::default(),
            page: DEFAULT_PAGE.to_owned(),
            session: None,
            input: InputHandler::new(egui::Rect::NOTHING),
            line_art: None,
            page_input: DEFAULT_PAGE.to_owned(),
            status: None,
        }
    }
}

impl ColoringApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app: Self = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        // Rebuild everything derived from the restored config
        app.storage = default_storage(&app.config);
        app.renderer = CanvasRenderer::from_hex(&app.config.background_color);
        app.page_input = app.page.clone();
        log::info!("Starting coloring app on page {}", app.page);
        app
    }

    pub fn config(&self) -> &CanvasConfig {
        &self.config
    }

    pub fn tools(&self) -> &ToolSettings {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolSettings {
        &mut self.tools
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn page_input_mut(&mut self) -> &mut String {
        &mut self.page_input
    }

    pub fn session(&self) -> Option<&DrawingSession> {
        self.session.as_ref()
    }

    pub fn renderer(&self) -> &CanvasRenderer {
        &self.renderer
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn line_art_name(&self) -> Option<&str> {
        self.line_art.as_ref().map(|art| art.name())
    }

    pub fn clear_line_art(&mut self) {
        self.line_art = None;
    }

    /// Make sure a session is open for the current page. A page with nothing
    /// saved takes the canvas size as its drawing size; after that the page
    /// keeps its size and is scaled to fit the panel.
    pub fn ensure_session(&mut self, canvas_size: egui::Vec2) {
        if self.session.is_some() {
            return;
        }
        let size = CanvasSize::new(canvas_size.x, canvas_size.y);
        self.session = Some(DrawingSession::open(
            self.page.clone(),
            &self.config,
            size,
            self.storage.as_ref(),
        ));
    }

    /// Save the current page and switch to another one
    pub fn open_page(&mut self, key: &str) {
        if let Err(err) = storage::validate_key(key) {
            self.status = Some(err.to_string());
            return;
        }
        if key == self.page && self.session.is_some() {
            return;
        }
        self.close_session();
        self.page = key.to_owned();
        self.page_input = self.page.clone();
        self.status = None;
        log::info!("Switched to page {}", key);
    }

    fn close_session(&mut self) {
        if let Some(session) = self.session.take() {
            let outcome = session.close(self.storage.as_ref());
            self.report(outcome);
        }
    }

    pub fn undo(&mut self) {
        if let Some(session) = &mut self.session {
            session.undo();
        }
    }

    pub fn redo(&mut self) {
        if let Some(session) = &mut self.session {
            session.redo();
        }
    }

    pub fn clear(&mut self) {
        if let Some(session) = &mut self.session {
            session.clear();
        }
    }

    /// Save immediately; `completed` marks the artwork as finished
    pub fn save_now(&mut self, completed: bool) {
        if let Some(session) = &mut self.session {
            let outcome = session.save_now(self.storage.as_ref(), completed);
            self.report(outcome);
        }
    }

    /// SVG of the visible drawing on the configured background
    pub fn export_svg(&self) -> Option<String> {
        let store = self.session.as_ref()?.store();
        Some(export::to_svg(
            store.visible_strokes(),
            store.canvas_size(),
            &self.config.background_color,
        ))
    }

    /// Write the SVG next to the saved drawings
    #[cfg(not(target_arch = "wasm32"))]
    pub fn export_svg_file(&mut self) {
        let Some(svg) = self.export_svg() else {
            return;
        };
        let dir = std::path::Path::new(&self.config.storage_dir);
        let path = dir.join(format!("{}.svg", self.page));
        let result = std::fs::create_dir_all(dir).and_then(|()| std::fs::write(&path, svg));
        self.status = Some(match result {
            Ok(()) => {
                log::info!("Exported {}", path.display());
                format!("Exported {}", path.display())
            }
            Err(err) => {
                log::error!("Failed to export {}: {}", path.display(), err);
                format!("Export failed: {}", err)
            }
        });
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.autosave().has_unsaved_changes(session.store()))
    }

    /// Route this frame's pointer input into the drawing
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        let Some(session) = &mut self.session else {
            return;
        };
        let page_size = session.store().canvas_size().to_vec2();
        self.input.set_view(CanvasTransform::fit(page_size, canvas_rect));
        for gesture in self.input.process_input(ctx) {
            session.handle_gesture(gesture, &self.tools);
        }
    }

    /// Paint the open page into `canvas_rect`
    pub fn paint(&mut self, ctx: &egui::Context, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let Some(session) = &self.session else {
            return;
        };
        let texture = self.line_art.as_mut().map(|art| art.texture(ctx).clone());
        self.renderer
            .paint(painter, session.store(), canvas_rect, texture.as_ref());
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        let (undo, redo) = ctx.input(|i| {
            let command = i.modifiers.command;
            let shift = i.modifiers.shift;
            let z = i.key_pressed(egui::Key::Z);
            (
                command && z && !shift,
                command && ((z && shift) || i.key_pressed(egui::Key::Y)),
            )
        });
        if undo {
            self.undo();
        } else if redo {
            self.redo();
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in &dropped {
            match LineArt::from_dropped_file(file) {
                Ok(art) => {
                    self.status = Some(format!("Loaded {}", art.name()));
                    self.line_art = Some(art);
                }
                Err(err) => {
                    log::warn!("Ignoring dropped file: {}", err);
                    self.status = Some(err.to_string());
                }
            }
        }
    }

    fn tick_autosave(&mut self, ctx: &egui::Context) {
        let Some(session) = &mut self.session else {
            return;
        };
        let outcome = session.tick(time::current_time_secs(), self.storage.as_ref());
        if session.autosave().is_pending() || session.autosave().is_saving() {
            // Keep frames coming so the quiet period can elapse without input
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
        if let Some(outcome) = outcome {
            self.report(outcome);
        }
    }

    fn report(&mut self, outcome: SaveOutcome) {
        match outcome {
            SaveOutcome::Saved => self.status = Some("Saved".to_owned()),
            SaveOutcome::Unchanged => {}
            SaveOutcome::Failed(message) => self.status = Some(format!("Save failed: {}", message)),
        }
    }
}

impl eframe::App for ColoringApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.save_now(false);
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        self.handle_dropped_files(ctx);

        tools_panel(self, ctx);
        central_panel(self, ctx);

        self.tick_autosave(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.close_session();
    }
}
