use crate::ColoringApp;

pub fn central_panel(app: &mut ColoringApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::drag());
        let canvas_rect = response.rect;

        // The first laid-out canvas decides the size of a page with nothing saved
        app.ensure_session(canvas_rect.size());

        app.handle_input(ctx, canvas_rect);
        app.paint(ctx, &painter, canvas_rect);

        if response.hovered() {
            ctx.set_cursor_icon(egui::CursorIcon::Crosshair);
        }
    });
}
