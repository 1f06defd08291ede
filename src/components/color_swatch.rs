use crate::renderer::parse_color;

/// Round palette entry; the selected one gets a ring
pub struct ColorSwatch<'a> {
    pub color: &'a str,
    pub selected: bool,
}

impl<'a> ColorSwatch<'a> {
    pub fn new(color: &'a str, selected: bool) -> Self {
        Self { color, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let size = egui::vec2(28.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let radius = rect.width() / 2.0 - 3.0;
            ui.painter()
                .circle_filled(rect.center(), radius, parse_color(self.color));
            // White swatches vanish on a light theme without an outline
            ui.painter().circle_stroke(
                rect.center(),
                radius,
                egui::Stroke::new(1.0, egui::Color32::from_gray(120)),
            );
            if self.selected {
                ui.painter().circle_stroke(
                    rect.center(),
                    radius + 2.5,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(self.color)
    }
}
