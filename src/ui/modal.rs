//! Message boxes and the text color picker

use eframe::egui;
use egui::Color32;

/// Severity of a message box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A message box waiting to be dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub body: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Show the message box. Returns true once the user dismissed it.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let mut dismissed = false;

        egui::Window::new(&self.title)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match self.kind {
                    NoticeKind::Info => {
                        ui.label(&self.body);
                    }
                    NoticeKind::Error => {
                        ui.colored_label(ui.visuals().error_fg_color, &self.body);
                    }
                }

                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape))
    }
}

/// Result of one frame of the color picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerOutcome {
    Open,
    Accepted(Color32),
    Cancelled,
}

/// Modal color picker for the text color
#[derive(Debug, Clone, Copy)]
pub struct ColorPicker {
    color: Color32,
}

impl ColorPicker {
    pub fn new(initial: Color32) -> Self {
        Self { color: initial }
    }

    #[allow(dead_code)]
    pub fn color(&self) -> Color32 {
        self.color
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PickerOutcome {
        let mut outcome = PickerOutcome::Open;

        egui::Window::new("Select Color")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.color,
                    egui::color_picker::Alpha::Opaque,
                );

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        outcome = PickerOutcome::Cancelled;
                    }
                    if ui.button("OK").clicked() {
                        outcome = PickerOutcome::Accepted(self.color);
                    }
                });
            });

        if outcome == PickerOutcome::Open && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            outcome = PickerOutcome::Cancelled;
        }
        outcome
    }
}
