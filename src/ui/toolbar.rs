//! Button row duplicating the common File actions

use eframe::egui;

use crate::app::{TabpadApp, NEW_TAB_LABEL, OPEN_LABEL, SAVE_LABEL};

pub struct Toolbar;

impl Toolbar {
    pub fn show(ui: &mut egui::Ui, app: &mut TabpadApp) {
        ui.horizontal(|ui| {
            if ui.button(NEW_TAB_LABEL).clicked() {
                app.add_new_tab();
            }
            if ui.button(OPEN_LABEL).clicked() {
                app.open_file();
            }
            if ui.button(SAVE_LABEL).clicked() {
                app.save_file();
            }
            if ui.button("Change Text Color").clicked() {
                app.change_color(ui.visuals().text_color());
            }
        });
    }
}
