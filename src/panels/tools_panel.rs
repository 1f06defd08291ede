use crate::ColoringApp;
use crate::components::{ColorSwatch, ToolButton};
use crate::tool::{BrushSize, DEFAULT_COLORS, EXTENDED_COLORS, Tool};

pub fn tools_panel(app: &mut ColoringApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(220.0)
        .show(ctx, |ui| {
            page_section(app, ui);
            ui.separator();

            ui.heading("Tools");
            ui.horizontal(|ui| {
                let active = app.tools().tool();
                for tool in Tool::ALL {
                    if ToolButton::new(tool, tool == active).show(ui).clicked() {
                        log::info!("Tool selected from UI: {}", tool.name());
                        app.tools_mut().set_tool(tool);
                    }
                }
            });

            ui.separator();
            ui.label("Brush size");
            ui.horizontal(|ui| {
                let current = app.tools().brush_size();
                for size in BrushSize::ALL {
                    if ui.selectable_label(size == current, size.label()).clicked() {
                        app.tools_mut().set_brush_size(size);
                    }
                }
            });

            ui.separator();
            ui.label("Colors");
            palette(app, ui, &DEFAULT_COLORS);
            ui.collapsing("More colors", |ui| {
                palette(app, ui, &EXTENDED_COLORS);
            });

            ui.separator();
            history_section(app, ui);

            ui.separator();
            line_art_section(app, ui);

            if let Some(status) = app.status() {
                ui.separator();
                ui.label(status);
            }
        });
}

fn palette(app: &mut ColoringApp, ui: &mut egui::Ui, colors: &[&str]) {
    ui.horizontal_wrapped(|ui| {
        for &color in colors {
            let selected = app.tools().tool() != Tool::Eraser
                && app.tools().color().eq_ignore_ascii_case(color);
            if ColorSwatch::new(color, selected).show(ui).clicked() {
                app.tools_mut().set_color(color);
            }
        }
    });
}

fn page_section(app: &mut ColoringApp, ui: &mut egui::Ui) {
    ui.heading("Page");
    ui.horizontal(|ui| {
        ui.text_edit_singleline(app.page_input_mut());
        if ui.button("Open").clicked() {
            let key = app.page_input_mut().trim().to_owned();
            app.open_page(&key);
        }
    });

    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            app.save_now(false);
        }
        if ui.button("Finish").on_hover_text("Save and mark as completed").clicked() {
            app.save_now(true);
        }
        #[cfg(not(target_arch = "wasm32"))]
        if ui.button("Export SVG").clicked() {
            app.export_svg_file();
        }
        if app.has_unsaved_changes() {
            ui.label("●").on_hover_text("Unsaved changes");
        }
    });
}

fn history_section(app: &mut ColoringApp, ui: &mut egui::Ui) {
    let (can_undo, can_redo, stroke_count, idle) = match app.session() {
        Some(session) => {
            let store = session.store();
            (
                store.can_undo(),
                store.can_redo(),
                store.visible_strokes().len(),
                !store.is_drawing(),
            )
        }
        None => (false, false, 0, false),
    };

    ui.horizontal(|ui| {
        if ui.add_enabled(can_undo && idle, egui::Button::new("Undo")).clicked() {
            app.undo();
        }
        if ui.add_enabled(can_redo && idle, egui::Button::new("Redo")).clicked() {
            app.redo();
        }
        if ui
            .add_enabled(stroke_count > 0 && idle, egui::Button::new("Clear"))
            .clicked()
        {
            app.clear();
        }
    });
    ui.label(format!("Strokes: {}", stroke_count));
}

fn line_art_section(app: &mut ColoringApp, ui: &mut egui::Ui) {
    match app.line_art_name().map(str::to_owned) {
        Some(name) => {
            ui.label(format!("Line art: {}", name));
            if ui.button("Remove line art").clicked() {
                app.clear_line_art();
            }
        }
        None => {
            ui.weak("Drop an image onto the window to color it in");
        }
    }
}
