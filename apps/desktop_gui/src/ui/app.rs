use std::time::Duration;

use client_core::{
    settings::DEFAULT_API_BASE_URL, CalculatorForm, ClientSettings, HttpOutcome, Outcome,
    SubmitAction, Ticket,
};
use crossbeam_channel::{Receiver, Sender};
use eframe::egui;
use shared::domain::Operation;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiEvent};
use crate::controller::orchestration::dispatch_backend_command;
use crate::ui::{theme, widgets};

#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub api_base_url: String,
}

impl Default for StartupConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl StartupConfig {
    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self {
            api_base_url: settings.api_base_url.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
struct StatusBanner {
    severity: StatusBannerSeverity,
    message: String,
}

pub struct CalculatorApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    form: CalculatorForm,
    // Ticket handed to the backend worker and not answered yet.
    in_flight: Option<Ticket>,

    status: String,
    status_banner: Option<StatusBanner>,
}

impl CalculatorApp {
    pub fn bootstrap(
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        startup: StartupConfig,
    ) -> Self {
        Self {
            cmd_tx,
            ui_rx,
            form: CalculatorForm::new(startup.api_base_url),
            in_flight: None,
            status: "Ready".to_string(),
            status_banner: None,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            match event {
                UiEvent::Info(message) => {
                    self.status = message;
                }
                UiEvent::Error(err) => self.handle_backend_error(err),
                UiEvent::CalculationFinished { ticket, outcome } => {
                    if self.in_flight == Some(ticket) {
                        self.in_flight = None;
                    }
                    if self.form.complete(ticket, &outcome) {
                        self.status = match self.form.outcome() {
                            Outcome::Success(_) => "Calculation finished".to_string(),
                            _ => "Calculation failed".to_string(),
                        };
                    }
                }
            }
        }
    }

    fn handle_backend_error(&mut self, err: UiError) {
        tracing::warn!(context = ?err.context(), "backend error: {}", err.message());
        self.status = err.message().to_string();
        if err.is_fatal_to_backend() {
            self.status_banner = Some(StatusBanner {
                severity: StatusBannerSeverity::Error,
                message: "The calculation worker stopped; restart the app to calculate again."
                    .to_string(),
            });
            if let Some(ticket) = self.in_flight.take() {
                self.form
                    .complete(ticket, &HttpOutcome::Transport(err.message().to_string()));
            }
        }
    }

    fn try_calculate(&mut self) {
        match self.form.submit() {
            SubmitAction::Dispatch { ticket, request } => {
                match dispatch_backend_command(
                    &self.cmd_tx,
                    BackendCommand::Calculate { ticket, request },
                ) {
                    Ok(()) => {
                        self.in_flight = Some(ticket);
                        self.status = "Calculating...".to_string();
                    }
                    Err(err) => {
                        self.form
                            .complete(ticket, &HttpOutcome::Transport(err.message().to_string()));
                        self.handle_backend_error(err);
                    }
                }
            }
            SubmitAction::Rejected(err) => {
                self.status = format!("Input rejected: {err}");
            }
            SubmitAction::Busy => {}
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.in_flight = None;
        self.status = "Form reset".to_string();
    }

    fn show_status_banner(&mut self, ui: &mut egui::Ui) {
        if let Some(banner) = self.status_banner.clone() {
            let (fill, stroke) = match banner.severity {
                StatusBannerSeverity::Error => (theme::ERROR_FILL, theme::ERROR_STROKE),
            };

            theme::status_frame(fill, stroke).show(ui, |ui| {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(&banner.message).color(egui::Color32::WHITE));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("Dismiss").clicked() {
                            self.status_banner = None;
                        }
                    });
                });
            });
        }
    }

    fn show_inputs(&mut self, ui: &mut egui::Ui) {
        let mut probability_a = self.form.input().probability_a.clone();
        let mut probability_b = self.form.input().probability_b.clone();
        let invalid_a = self.form.probability_a_invalid();
        let invalid_b = self.form.probability_b_invalid();

        let (resp_a, resp_b) = ui.columns(2, |columns| {
            let resp_a = widgets::probability_field(
                &mut columns[0],
                "probability_a",
                "Probability A (P(A))",
                &mut probability_a,
                invalid_a,
            );
            let resp_b = widgets::probability_field(
                &mut columns[1],
                "probability_b",
                "Probability B (P(B))",
                &mut probability_b,
                invalid_b,
            );
            (resp_a, resp_b)
        });

        if resp_a.changed() {
            self.form.set_probability_a(probability_a);
        }
        if resp_b.changed() {
            self.form.set_probability_b(probability_b);
        }

        // Enter in either field submits, like a form.
        let enter_pressed = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if enter_pressed && (resp_a.lost_focus() || resp_b.lost_focus()) {
            self.try_calculate();
        }
    }

    fn show_operation_toggles(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Select Function").strong());
        let form = &mut self.form;
        ui.columns(2, |columns| {
            for (column, operation) in columns.iter_mut().zip(Operation::ALL) {
                if widgets::operation_toggle(column, operation, form.is_selected(operation))
                    .clicked()
                {
                    form.select_operation(operation);
                }
            }
        });
    }

    fn show_actions(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = if self.form.is_loading() {
                "Calculating..."
            } else {
                "Calculate Result"
            };
            let submit = egui::Button::new(egui::RichText::new(label).strong())
                .fill(theme::ACCENT)
                .min_size(egui::vec2(170.0, 36.0));
            if ui.add_enabled(self.form.can_submit(), submit).clicked() {
                self.try_calculate();
            }

            if ui
                .add(egui::Button::new("Reset").min_size(egui::vec2(90.0, 36.0)))
                .clicked()
            {
                self.reset();
            }
        });
    }

    fn show_outcome(&self, ui: &mut egui::Ui) {
        match self.form.outcome() {
            Outcome::Failure(err) => {
                let message = err.message();
                theme::status_frame(theme::ERROR_FILL, theme::ERROR_STROKE).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(
                            egui::RichText::new("Error:")
                                .strong()
                                .color(egui::Color32::WHITE),
                        );
                        ui.label(egui::RichText::new(message).color(egui::Color32::WHITE));
                    });
                });
            }
            Outcome::Success(summary) => {
                let formula = summary.formula();
                let value = summary.formatted_result();
                theme::status_frame(theme::SUCCESS_FILL, theme::SUCCESS_STROKE).show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(egui::RichText::new("Calculation Successful").strong());
                            ui.label(egui::RichText::new(formula).weak());
                        });
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                            ui.label(egui::RichText::new(value).size(26.0).strong());
                        });
                    });
                });
            }
            Outcome::Idle | Outcome::Loading => {}
        }
    }

    fn show_calculator(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let avail = ui.available_size();
            let card_width = avail.x.clamp(360.0, 560.0);
            ui.add_space((avail.y * 0.06).clamp(8.0, 48.0));

            ui.vertical_centered(|ui| {
                ui.set_width(card_width);
                egui::Frame::NONE
                    .fill(ui.visuals().faint_bg_color)
                    .corner_radius(14.0)
                    .stroke(egui::Stroke::new(
                        1.0,
                        ui.visuals().widgets.noninteractive.bg_stroke.color,
                    ))
                    .inner_margin(egui::Margin::symmetric(20, 18))
                    .show(ui, |ui| {
                        ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
                            ui.style_mut().spacing.item_spacing = egui::vec2(10.0, 10.0);

                            ui.heading("Probability Calculator");
                            ui.weak(
                                "Calculate combined or either probability events. Inputs must be between 0 and 1.",
                            );
                            ui.add_space(6.0);
                            self.show_status_banner(ui);

                            self.show_inputs(ui);
                            self.show_operation_toggles(ui);
                            self.show_actions(ui);
                            self.show_outcome(ui);

                            ui.separator();
                            ui.horizontal_wrapped(|ui| {
                                ui.small("Status:");
                                ui.small(egui::RichText::new(&self.status).weak());
                            });
                        });
                    });
            });
        });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();
        self.show_calculator(ctx);

        if self.form.is_loading() {
            ctx.request_repaint_after(Duration::from_millis(16));
        } else {
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
