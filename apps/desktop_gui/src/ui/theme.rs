//! Colors and visuals for the calculator card.

use eframe::egui;

pub const ERROR_FILL: egui::Color32 = egui::Color32::from_rgb(111, 53, 53);
pub const ERROR_STROKE: egui::Color32 = egui::Color32::from_rgb(175, 96, 96);
pub const SUCCESS_FILL: egui::Color32 = egui::Color32::from_rgb(38, 84, 62);
pub const SUCCESS_STROKE: egui::Color32 = egui::Color32::from_rgb(86, 160, 120);
pub const INVALID_FIELD_STROKE: egui::Color32 = egui::Color32::from_rgb(214, 92, 92);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(88, 101, 242);

pub fn apply(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.selection.bg_fill = ACCENT;
    visuals.widgets.noninteractive.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.inactive.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.hovered.corner_radius = egui::CornerRadius::same(8);
    visuals.widgets.active.corner_radius = egui::CornerRadius::same(8);
    ctx.set_visuals(visuals);
}

pub fn status_frame(fill: egui::Color32, stroke: egui::Color32) -> egui::Frame {
    egui::Frame::NONE
        .fill(fill)
        .stroke(egui::Stroke::new(1.0, stroke))
        .corner_radius(8.0)
        .inner_margin(egui::Margin::symmetric(12, 10))
}
