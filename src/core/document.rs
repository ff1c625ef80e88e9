//! A single notepad tab and the document it holds

use std::ops::Range;
use std::path::{Path, PathBuf};

use egui::Color32;

use super::styled_text::StyledText;

/// One open document: its label, its text and where it came from
#[derive(Debug, Clone)]
pub struct Tab {
    /// Label shown in the tab strip ("Tab N")
    pub label: String,
    /// Editable content
    pub content: StyledText,
    /// File last opened into or saved from this tab
    pub path: Option<PathBuf>,
    /// Whether the tab has edits not yet written to `path`
    pub modified: bool,
    /// Selected characters in the editor, empty when nothing is selected
    pub selection: Range<usize>,
    /// Last caret position seen in the editor
    caret: Option<usize>,
}

impl Tab {
    /// Create an empty tab
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            content: StyledText::new(),
            path: None,
            modified: false,
            selection: 0..0,
            caret: None,
        }
    }

    /// Label with a trailing `*` when there are unsaved edits
    pub fn title(&self) -> String {
        if self.modified {
            format!("{}*", self.label)
        } else {
            self.label.clone()
        }
    }

    /// Empty the tab in place, forgetting its file
    pub fn clear(&mut self) {
        self.content.clear();
        self.path = None;
        self.modified = false;
        self.reset_cursor();
    }

    /// Replace the content with text read from `path`
    pub fn load(&mut self, path: PathBuf, text: String) {
        self.content.set_plain_text(text);
        self.path = Some(path);
        self.modified = false;
        self.reset_cursor();
    }

    /// Record a successful save to `path`
    pub fn mark_saved(&mut self, path: PathBuf) {
        self.path = Some(path);
        self.modified = false;
    }

    /// Content as it is written to disk
    pub fn plain_text(&self) -> String {
        self.content.to_plain_text()
    }

    pub fn file_name(&self) -> Option<String> {
        self.path
            .as_deref()
            .and_then(Path::file_name)
            .map(|s| s.to_string_lossy().to_string())
    }

    pub fn text_color(&self) -> Option<Color32> {
        self.content.cursor_color()
    }

    /// Recolor the selection, if any, and use `color` for text typed from now on
    pub fn set_text_color(&mut self, color: Color32) {
        if !self.selection.is_empty() {
            self.content.set_color_range(self.selection.clone(), Some(color));
        }
        self.content.set_cursor_color(Some(color));
    }

    /// Follow the editor's cursor. When the caret moves, the text color
    /// becomes that of the character before it.
    pub fn track_cursor(&mut self, selection: Range<usize>, caret: usize) {
        if self.caret != Some(caret) {
            self.caret = Some(caret);
            if let Some(color) = self.content.color_at_caret(caret) {
                self.content.set_cursor_color(color);
            }
        }
        self.selection = selection;
    }

    fn reset_cursor(&mut self) {
        self.selection = 0..0;
        self.caret = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_marks_modified() {
        let mut tab = Tab::new("Tab 1");
        assert_eq!(tab.title(), "Tab 1");
        tab.modified = true;
        assert_eq!(tab.title(), "Tab 1*");
    }

    #[test]
    fn test_load_then_clear() {
        let mut tab = Tab::new("Tab 1");
        tab.load(PathBuf::from("/tmp/notes.txt"), "hello".to_string());
        assert_eq!(tab.plain_text(), "hello");
        assert_eq!(tab.file_name().as_deref(), Some("notes.txt"));

        tab.modified = true;
        tab.clear();
        assert_eq!(tab.plain_text(), "");
        assert!(tab.path.is_none());
        assert!(!tab.modified);
    }

    #[test]
    fn test_color_change_recolors_selection() {
        let mut tab = Tab::new("Tab 1");
        tab.content.set_plain_text("abcd");
        tab.track_cursor(1..3, 3);

        tab.set_text_color(Color32::RED);

        let spans: Vec<_> = tab.content.spans().collect();
        assert_eq!(
            spans,
            vec![("a", None), ("bc", Some(Color32::RED)), ("d", None)]
        );
        assert_eq!(tab.text_color(), Some(Color32::RED));
    }

    #[test]
    fn test_color_change_without_selection_keeps_text() {
        let mut tab = Tab::new("Tab 1");
        tab.content.set_plain_text("abcd");
        tab.track_cursor(4..4, 4);

        tab.set_text_color(Color32::BLUE);

        assert_eq!(tab.content.runs().len(), 1);
        assert_eq!(tab.content.runs()[0].color, None);
        assert_eq!(tab.text_color(), Some(Color32::BLUE));
    }

    #[test]
    fn test_caret_picks_up_color_of_text_before_it() {
        let mut tab = Tab::new("Tab 1");
        tab.content.set_plain_text("plain");
        tab.track_cursor(0..5, 5);
        tab.set_text_color(Color32::RED);

        // Staying put keeps the chosen color
        tab.content.set_cursor_color(Some(Color32::GREEN));
        tab.track_cursor(5..5, 5);
        assert_eq!(tab.text_color(), Some(Color32::GREEN));

        // Moving into the red text picks up red
        tab.track_cursor(2..2, 2);
        assert_eq!(tab.text_color(), Some(Color32::RED));

        tab.clear();
        assert!(tab.selection.is_empty());
    }
}
