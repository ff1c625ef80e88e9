//! Tab strip and text editing surface

use eframe::egui;
use egui::text::{LayoutJob, TextFormat};
use egui::{Color32, FontId};

use crate::app::TabpadApp;
use crate::core::styled_text::{ColorRun, StyledText};

/// Editor panel: tab strip above the selected tab's text
pub struct EditorPanel;

impl EditorPanel {
    /// Show the editor panel
    pub fn show(ui: &mut egui::Ui, app: &mut TabpadApp) {
        ui.vertical(|ui| {
            Self::show_tabs(ui, app);
            ui.separator();
            Self::show_text(ui, app);
        });
    }

    /// Show one selectable label per tab
    fn show_tabs(ui: &mut egui::Ui, app: &mut TabpadApp) {
        egui::ScrollArea::horizontal()
            .id_salt("tab_strip")
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    let active = app.workspace.active_index();
                    let mut clicked = None;

                    for (index, tab) in app.workspace.tabs().iter().enumerate() {
                        let mut response = ui.selectable_label(index == active, tab.title());
                        if let Some(path) = &tab.path {
                            response = response.on_hover_text(path.display().to_string());
                        }
                        if response.clicked() {
                            clicked = Some(index);
                        }
                    }

                    if let Some(index) = clicked {
                        app.workspace.select(index);
                    }
                });
            });
    }

    /// Show the selected tab's text with its colors
    fn show_text(ui: &mut egui::Ui, app: &mut TabpadApp) {
        let font_id = FontId::proportional(app.config.editor.font_size);
        let placeholder = app.config.editor.placeholder.clone();
        let desired_rows = app.config.editor.desired_rows;
        let index = app.workspace.active_index();
        let tab = app.workspace.active_mut();

        let mut layouter = |ui: &egui::Ui, buf: &dyn egui::TextBuffer, wrap_width: f32| {
            let mut job = layout_buffer(buf, font_id.clone(), ui.visuals().text_color());
            job.wrap.max_width = wrap_width;
            ui.fonts(|f| f.layout_job(job))
        };

        egui::ScrollArea::vertical()
            .id_salt("editor_scroll")
            .show(ui, |ui| {
                let output = egui::TextEdit::multiline(&mut tab.content)
                    .id_salt(("tab_editor", index))
                    .hint_text(placeholder)
                    .desired_width(f32::INFINITY)
                    .desired_rows(desired_rows)
                    .layouter(&mut layouter)
                    .show(ui);

                if output.response.changed() {
                    tab.modified = true;
                }

                if let Some(range) = output.state.cursor.char_range() {
                    let (caret, anchor) = (range.primary.index, range.secondary.index);
                    tab.track_cursor(caret.min(anchor)..caret.max(anchor), caret);
                }
            });
    }
}

/// Lay out a text edit's buffer with the colors it currently holds
pub fn layout_buffer(
    buf: &dyn egui::TextBuffer,
    font_id: FontId,
    default_color: Color32,
) -> LayoutJob {
    match StyledText::downcast_ref(buf) {
        Some(styled) => build_layout_job(
            styled.as_str(),
            styled.runs(),
            font_id,
            default_color,
            styled.cursor_color(),
        ),
        None => build_layout_job(buf.as_str(), &[], font_id, default_color, None),
    }
}

/// Lay out `text` with one section per color run.
///
/// Runs past the end of `text` are cut off and any text beyond the runs is
/// drawn in `pending` (the cursor color), falling back to `default_color`.
pub fn build_layout_job(
    text: &str,
    runs: &[ColorRun],
    font_id: FontId,
    default_color: Color32,
    pending: Option<Color32>,
) -> LayoutJob {
    let mut job = LayoutJob::default();
    if text.is_empty() {
        job.append("", 0.0, TextFormat::simple(font_id, default_color));
        return job;
    }

    let mut offset = 0;
    for run in runs {
        if offset >= text.len() {
            break;
        }
        let mut end = (offset + run.len).min(text.len());
        while !text.is_char_boundary(end) {
            end += 1;
        }
        job.append(
            &text[offset..end],
            0.0,
            TextFormat::simple(font_id.clone(), run.color.unwrap_or(default_color)),
        );
        offset = end;
    }

    if offset < text.len() {
        job.append(
            &text[offset..],
            0.0,
            TextFormat::simple(font_id, pending.unwrap_or(default_color)),
        );
    }

    job
}
