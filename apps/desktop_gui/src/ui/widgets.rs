//! Form widgets: probability inputs and operation toggles.

use eframe::egui;
use shared::domain::Operation;

use crate::ui::theme;

pub const PROBABILITY_HINT: &str = "e.g. 0.5";

/// Labelled single-line input. The border turns red while `invalid` is set.
pub fn probability_field(
    ui: &mut egui::Ui,
    id: &'static str,
    label: &str,
    value: &mut String,
    invalid: bool,
) -> egui::Response {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(label).strong());
        ui.scope(|ui| {
            if invalid {
                let stroke = egui::Stroke::new(1.5, theme::INVALID_FIELD_STROKE);
                let visuals = ui.visuals_mut();
                visuals.widgets.inactive.bg_stroke = stroke;
                visuals.widgets.hovered.bg_stroke = stroke;
                visuals.selection.stroke = stroke;
            }
            let edit = egui::TextEdit::singleline(value)
                .id_salt(id)
                .hint_text(PROBABILITY_HINT)
                .desired_width(f32::INFINITY);
            ui.add_sized([ui.available_width(), 32.0], edit)
        })
        .inner
    })
    .inner
}

/// Toggle button for one operation; `selected` is its pressed state.
pub fn operation_toggle(ui: &mut egui::Ui, operation: Operation, selected: bool) -> egui::Response {
    let text = egui::RichText::new(format!(
        "{}\n{}",
        operation.label(),
        operation.symbolic_formula()
    ))
    .strong();

    ui.add(
        egui::Button::new(text)
            .selected(selected)
            .min_size(egui::vec2(ui.available_width(), 48.0)),
    )
}
