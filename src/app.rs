//! Main application state and UI coordination

use std::path::{Path, PathBuf};

use eframe::egui;
use egui::Color32;

use crate::core::{config::AppConfig, file_io, workspace::Workspace};
use crate::ui::{
    editor::EditorPanel,
    file_dialog::{FileDialogs, NativeDialogs},
    modal::{ColorPicker, Notice, PickerOutcome},
    toolbar::Toolbar,
};

/// Labels shared by the File menu and the button row
pub const NEW_TAB_LABEL: &str = "New Tab";
pub const OPEN_LABEL: &str = "Open";
pub const SAVE_LABEL: &str = "Save";

/// Main application state
pub struct TabpadApp {
    /// Open tabs
    pub workspace: Workspace,
    /// Application configuration
    pub config: AppConfig,
    /// Where `config` is written back to, if anywhere
    config_path: Option<PathBuf>,
    /// Open/save dialogs
    dialogs: Box<dyn FileDialogs>,
    /// Message box currently shown
    pub notice: Option<Notice>,
    /// Color picker currently shown
    pub color_picker: Option<ColorPicker>,
}

impl TabpadApp {
    /// Create a new application instance
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        Self::with_parts(config, AppConfig::config_path(), Box::new(NativeDialogs))
    }

    /// Create an application from its parts without a window
    pub fn with_parts(
        config: AppConfig,
        config_path: Option<PathBuf>,
        dialogs: Box<dyn FileDialogs>,
    ) -> Self {
        Self {
            workspace: Workspace::new(),
            config,
            config_path,
            dialogs,
            notice: None,
            color_picker: None,
        }
    }

    /// Append a new empty tab
    pub fn add_new_tab(&mut self) {
        let index = self.workspace.add_tab();
        tracing::info!("Created {}", self.workspace.tabs()[index].label);
    }

    /// Clear the selected tab
    pub fn new_file(&mut self) {
        let tab = self.workspace.active_mut();
        tab.clear();
        tracing::info!("Cleared {}", tab.label);
    }

    /// Load a text file into the selected tab
    pub fn open_file(&mut self) {
        let Some(path) = self.dialogs.pick_open(self.config.last_directory.as_deref()) else {
            tracing::debug!("Open cancelled");
            return;
        };

        match file_io::read_text(&path) {
            Ok(text) => {
                tracing::info!("Opened document: {}", path.display());
                self.remember_directory(&path);
                self.workspace.active_mut().load(path, text);
            }
            Err(e) => {
                tracing::error!("Failed to open document: {}", e);
                self.notice = Some(Notice::error("Error", e.to_string()));
            }
        }
    }

    /// Write the selected tab to a file chosen by the user
    pub fn save_file(&mut self) {
        let file_name = self.workspace.active().file_name();
        let Some(path) = self
            .dialogs
            .pick_save(self.config.last_directory.as_deref(), file_name.as_deref())
        else {
            tracing::debug!("Save cancelled");
            return;
        };
        let path = file_io::with_txt_extension(path);

        let text = self.workspace.active().plain_text();
        match file_io::write_text(&path, &text) {
            Ok(()) => {
                tracing::info!("Saved document: {}", path.display());
                self.remember_directory(&path);
                self.workspace.active_mut().mark_saved(path);
                self.notice = Some(Notice::info("Success", "File saved successfully!"));
            }
            Err(e) => {
                tracing::error!("Failed to save document: {}", e);
                self.notice = Some(Notice::error("Error", e.to_string()));
            }
        }
    }

    /// Open the color picker, seeded with the selected tab's text color
    pub fn change_color(&mut self, default_color: Color32) {
        let initial = self.workspace.active().text_color().unwrap_or(default_color);
        self.color_picker = Some(ColorPicker::new(initial));
    }

    /// Apply the picker's result to the selected tab's selection and caret.
    /// `None` means it was cancelled.
    pub fn apply_color(&mut self, color: Option<Color32>) {
        match color {
            Some(color) => {
                let tab = self.workspace.active_mut();
                tab.set_text_color(color);
                tracing::info!("Text color of {} set to {:?}", tab.label, color);
            }
            None => tracing::debug!("Color change cancelled"),
        }
    }

    fn remember_directory(&mut self, file: &Path) {
        self.config.remember_directory(file);
        if let Some(ref path) = self.config_path {
            if let Err(e) = self.config.save_to(path) {
                tracing::warn!("Failed to save config: {:#}", e);
            }
        }
    }

    fn modal_open(&self) -> bool {
        self.notice.is_some() || self.color_picker.is_some()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &egui::Context, enabled: bool) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| {
                egui::menu::bar(ui, |ui| {
                    ui.menu_button("File", |ui| {
                        if ui.button(NEW_TAB_LABEL).clicked() {
                            self.add_new_tab();
                            ui.close();
                        }
                        if ui.button("New").clicked() {
                            self.new_file();
                            ui.close();
                        }
                        if ui.button(OPEN_LABEL).clicked() {
                            ui.close();
                            self.open_file();
                        }
                        if ui.button(SAVE_LABEL).clicked() {
                            ui.close();
                            self.save_file();
                        }
                        ui.separator();
                        if ui.button("Exit").clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
                });
            });
        });
    }

    /// Show whichever modal is pending
    fn render_modals(&mut self, ctx: &egui::Context) {
        if let Some(picker) = self.color_picker.as_mut() {
            match picker.show(ctx) {
                PickerOutcome::Open => {}
                PickerOutcome::Accepted(color) => {
                    self.color_picker = None;
                    self.apply_color(Some(color));
                }
                PickerOutcome::Cancelled => {
                    self.color_picker = None;
                    self.apply_color(None);
                }
            }
        }

        if let Some(ref notice) = self.notice {
            if notice.show(ctx) {
                self.notice = None;
            }
        }
    }

    /// Handle keyboard shortcuts
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if self.modal_open() {
            return;
        }

        // Read the keys first; the dialogs block and must not run inside the input lock
        let (new_tab, new, open, save) = ctx.input(|i| {
            let ctrl = i.modifiers.command;
            (
                ctrl && i.key_pressed(egui::Key::T),
                ctrl && i.key_pressed(egui::Key::N),
                ctrl && i.key_pressed(egui::Key::O),
                ctrl && i.key_pressed(egui::Key::S),
            )
        });

        if new_tab {
            self.add_new_tab();
        }
        if new {
            self.new_file();
        }
        if open {
            self.open_file();
        }
        if save {
            self.save_file();
        }
    }
}

impl eframe::App for TabpadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        // Everything behind a dialog is inert until it is dismissed
        let enabled = !self.modal_open();

        // Render menu bar
        self.render_menu_bar(ctx, enabled);

        // Button row at the bottom
        egui::TopBottomPanel::bottom("toolbar").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.add_enabled_ui(enabled, |ui| Toolbar::show(ui, self));
            ui.add_space(4.0);
        });

        // Tabs and text
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(enabled, |ui| EditorPanel::show(ui, self));
        });

        self.render_modals(ctx);
    }
}
