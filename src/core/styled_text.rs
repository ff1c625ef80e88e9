//! Text buffer carrying a foreground color per run of characters

use std::ops::Range;

use egui::Color32;

/// A contiguous slice of the text sharing one color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRun {
    /// Length in bytes
    pub len: usize,
    /// Foreground color, `None` for the theme's default text color
    pub color: Option<Color32>,
}

/// Editable text with color runs.
///
/// The runs always cover the text exactly: their lengths add up to the byte
/// length of the text, none is empty, and neighbours never share a color.
/// Inserted text takes the current cursor color.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyledText {
    text: String,
    runs: Vec<ColorRun>,
    cursor_color: Option<Color32>,
}

impl StyledText {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding uncolored text
    #[allow(dead_code)]
    pub fn from_plain(text: impl Into<String>) -> Self {
        let mut styled = Self::default();
        styled.set_plain_text(text);
        styled
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Text without any styling
    pub fn to_plain_text(&self) -> String {
        self.text.clone()
    }

    pub fn runs(&self) -> &[ColorRun] {
        &self.runs
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Color applied to subsequently inserted text
    pub fn cursor_color(&self) -> Option<Color32> {
        self.cursor_color
    }

    pub fn set_cursor_color(&mut self, color: Option<Color32>) {
        self.cursor_color = color;
    }

    /// Replace all content with uncolored text
    pub fn set_plain_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.runs.clear();
        if !self.text.is_empty() {
            self.runs.push(ColorRun {
                len: self.text.len(),
                color: None,
            });
        }
    }

    /// Remove all text. The cursor color is kept.
    pub fn clear(&mut self) {
        self.text.clear();
        self.runs.clear();
    }

    /// Insert `text` before the character at `char_index`, returning the
    /// number of characters inserted
    pub fn insert_text(&mut self, text: &str, char_index: usize) -> usize {
        if text.is_empty() {
            return 0;
        }

        let at = byte_index(&self.text, char_index);
        self.text.insert_str(at, text);
        self.insert_run(
            at,
            ColorRun {
                len: text.len(),
                color: self.cursor_color,
            },
        );

        text.chars().count()
    }

    /// Delete the characters in `char_range`
    pub fn delete_char_range(&mut self, char_range: Range<usize>) {
        let start = byte_index(&self.text, char_range.start);
        let end = byte_index(&self.text, char_range.end);
        if start >= end {
            return;
        }

        self.text.replace_range(start..end, "");

        let mut offset = 0;
        for run in &mut self.runs {
            let run_start = offset;
            let run_end = offset + run.len;
            offset = run_end;

            let overlap_start = run_start.max(start);
            let overlap_end = run_end.min(end);
            if overlap_start < overlap_end {
                run.len -= overlap_end - overlap_start;
            }
        }

        self.normalize();
    }

    /// Recolor the characters in `char_range`
    pub fn set_color_range(&mut self, char_range: Range<usize>, color: Option<Color32>) {
        let start = byte_index(&self.text, char_range.start);
        let end = byte_index(&self.text, char_range.end);
        if start >= end {
            return;
        }

        self.split_at(start);
        self.split_at(end);

        let mut offset = 0;
        for run in &mut self.runs {
            if offset >= start && offset < end {
                run.color = color;
            }
            offset += run.len;
        }

        self.normalize();
    }

    /// Color of the text just before a caret at `char_index` (the first
    /// character when the caret is at the start). `None` for an empty buffer.
    pub fn color_at_caret(&self, char_index: usize) -> Option<Option<Color32>> {
        if self.text.is_empty() {
            return None;
        }

        let at = byte_index(&self.text, char_index.saturating_sub(1));
        let mut offset = 0;
        for run in &self.runs {
            offset += run.len;
            if at < offset {
                return Some(run.color);
            }
        }
        self.runs.last().map(|r| r.color)
    }

    /// Recover the `StyledText` behind a text edit's buffer
    pub fn downcast_ref(buf: &dyn egui::TextBuffer) -> Option<&Self> {
        if egui::TextBuffer::type_id(buf) == std::any::TypeId::of::<Self>() {
            // SAFETY: only `StyledText` reports this type id, so the trait
            // object's data pointer points at a `StyledText`
            Some(unsafe { &*(buf as *const dyn egui::TextBuffer as *const Self) })
        } else {
            None
        }
    }

    /// Iterate over `(text, color)` pairs in order
    #[allow(dead_code)]
    pub fn spans(&self) -> impl Iterator<Item = (&str, Option<Color32>)> + '_ {
        let mut offset = 0;
        self.runs.iter().map(move |run| {
            let span = &self.text[offset..offset + run.len];
            offset += run.len;
            (span, run.color)
        })
    }

    /// Insert a run starting at byte offset `at`, splitting the run it lands in
    fn insert_run(&mut self, at: usize, run: ColorRun) {
        self.split_at(at);

        let mut offset = 0;
        let index = self
            .runs
            .iter()
            .position(|r| {
                let starts_here = offset >= at;
                offset += r.len;
                starts_here
            })
            .unwrap_or(self.runs.len());

        self.runs.insert(index, run);
        self.normalize();
    }

    /// Make sure a run boundary falls on byte offset `at`
    fn split_at(&mut self, at: usize) {
        let mut offset = 0;
        for index in 0..self.runs.len() {
            let end = offset + self.runs[index].len;
            if at > offset && at < end {
                let tail = ColorRun {
                    len: end - at,
                    color: self.runs[index].color,
                };
                self.runs[index].len = at - offset;
                self.runs.insert(index + 1, tail);
                return;
            }
            offset = end;
        }
    }

    /// Drop empty runs and merge neighbours of the same color
    fn normalize(&mut self) {
        let mut merged: Vec<ColorRun> = Vec::with_capacity(self.runs.len());
        for run in self.runs.drain(..) {
            if run.len == 0 {
                continue;
            }
            match merged.last_mut() {
                Some(last) if last.color == run.color => last.len += run.len,
                _ => merged.push(run),
            }
        }
        self.runs = merged;
    }
}

impl egui::TextBuffer for StyledText {
    fn is_mutable(&self) -> bool {
        true
    }

    fn as_str(&self) -> &str {
        &self.text
    }

    fn insert_text(&mut self, text: &str, char_index: usize) -> usize {
        StyledText::insert_text(self, text, char_index)
    }

    fn delete_char_range(&mut self, char_range: Range<usize>) {
        StyledText::delete_char_range(self, char_range);
    }

    fn type_id(&self) -> std::any::TypeId {
        std::any::TypeId::of::<Self>()
    }
}

/// Byte offset of the character at `char_index`, clamped to the end
fn byte_index(text: &str, char_index: usize) -> usize {
    text.char_indices()
        .nth(char_index)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered(styled: &StyledText) -> usize {
        styled.runs().iter().map(|r| r.len).sum()
    }

    #[test]
    fn test_plain_text_is_one_uncolored_run() {
        let styled = StyledText::from_plain("hello");
        assert_eq!(
            styled.runs(),
            &[ColorRun {
                len: 5,
                color: None
            }]
        );
        assert!(StyledText::from_plain("").runs().is_empty());
    }

    #[test]
    fn test_insert_after_color_change() {
        let mut styled = StyledText::from_plain("hello");
        styled.set_cursor_color(Some(Color32::RED));
        assert_eq!(styled.insert_text(" world", 5), 6);

        assert_eq!(styled.as_str(), "hello world");
        let spans: Vec<_> = styled.spans().collect();
        assert_eq!(
            spans,
            vec![("hello", None), (" world", Some(Color32::RED))]
        );
    }

    #[test]
    fn test_insert_in_middle_splits_run() {
        let mut styled = StyledText::from_plain("abcd");
        styled.set_cursor_color(Some(Color32::BLUE));
        styled.insert_text("X", 2);

        let spans: Vec<_> = styled.spans().collect();
        assert_eq!(
            spans,
            vec![("ab", None), ("X", Some(Color32::BLUE)), ("cd", None)]
        );
    }

    #[test]
    fn test_delete_merges_neighbours() {
        let mut styled = StyledText::from_plain("abcd");
        styled.set_cursor_color(Some(Color32::BLUE));
        styled.insert_text("X", 2);
        styled.delete_char_range(2..3);

        assert_eq!(styled.as_str(), "abcd");
        assert_eq!(
            styled.runs(),
            &[ColorRun {
                len: 4,
                color: None
            }]
        );
    }

    #[test]
    fn test_delete_across_runs() {
        let mut styled = StyledText::from_plain("one");
        styled.set_cursor_color(Some(Color32::GREEN));
        styled.insert_text("two", 3);
        styled.set_cursor_color(None);
        styled.insert_text("three", 6);

        styled.delete_char_range(1..8);
        assert_eq!(styled.as_str(), "oree");
        assert_eq!(covered(&styled), styled.as_str().len());
        let spans: Vec<_> = styled.spans().collect();
        assert_eq!(spans, vec![("oree", None)]);
    }

    #[test]
    fn test_multibyte_characters() {
        let mut styled = StyledText::from_plain("héllo");
        styled.set_cursor_color(Some(Color32::RED));
        styled.insert_text("ü", 2);

        assert_eq!(styled.as_str(), "héüllo");
        assert_eq!(covered(&styled), styled.as_str().len());

        styled.delete_char_range(0..3);
        assert_eq!(styled.as_str(), "llo");
        assert_eq!(covered(&styled), 3);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut styled = StyledText::from_plain("ab");
        styled.insert_text("c", 99);
        assert_eq!(styled.as_str(), "abc");
        assert_eq!(styled.runs().len(), 1);
    }

    #[test]
    fn test_clear_keeps_cursor_color() {
        let mut styled = StyledText::from_plain("text");
        styled.set_cursor_color(Some(Color32::YELLOW));
        styled.clear();

        assert!(styled.is_empty());
        assert!(styled.runs().is_empty());
        assert_eq!(styled.cursor_color(), Some(Color32::YELLOW));
    }

    #[test]
    fn test_edits_through_text_buffer() {
        use egui::TextBuffer;

        let mut styled = StyledText::new();
        styled.set_cursor_color(Some(Color32::RED));
        TextBuffer::insert_text(&mut styled, "abc", 0);
        TextBuffer::delete_char_range(&mut styled, 0..1);

        assert_eq!(TextBuffer::as_str(&styled), "bc");
        assert_eq!(
            styled.runs(),
            &[ColorRun {
                len: 2,
                color: Some(Color32::RED)
            }]
        );
    }

    #[test]
    fn test_set_color_range_across_runs() {
        let mut styled = StyledText::from_plain("one");
        styled.set_cursor_color(Some(Color32::GREEN));
        styled.insert_text("two", 3);
        styled.set_cursor_color(None);
        styled.insert_text("three", 6);

        styled.set_color_range(2..5, Some(Color32::RED));

        let spans: Vec<_> = styled.spans().collect();
        assert_eq!(
            spans,
            vec![
                ("on", None),
                ("etw", Some(Color32::RED)),
                ("o", Some(Color32::GREEN)),
                ("three", None),
            ]
        );
        assert_eq!(covered(&styled), styled.as_str().len());
    }

    #[test]
    fn test_set_color_range_merges_and_ignores_empty() {
        let mut styled = StyledText::from_plain("abcd");
        styled.set_color_range(2..2, Some(Color32::RED));
        assert_eq!(styled.runs().len(), 1);

        styled.set_color_range(1..3, Some(Color32::RED));
        styled.set_color_range(0..4, None);
        assert_eq!(
            styled.runs(),
            &[ColorRun {
                len: 4,
                color: None
            }]
        );

        // Past-the-end ranges are clamped
        styled.set_color_range(2..40, Some(Color32::BLUE));
        let spans: Vec<_> = styled.spans().collect();
        assert_eq!(spans, vec![("ab", None), ("cd", Some(Color32::BLUE))]);
    }

    #[test]
    fn test_color_at_caret() {
        let mut styled = StyledText::from_plain("ab");
        assert_eq!(StyledText::new().color_at_caret(0), None);

        styled.set_cursor_color(Some(Color32::RED));
        styled.insert_text("XY", 2);

        assert_eq!(styled.color_at_caret(0), Some(None));
        assert_eq!(styled.color_at_caret(2), Some(None));
        assert_eq!(styled.color_at_caret(3), Some(Some(Color32::RED)));
        assert_eq!(styled.color_at_caret(4), Some(Some(Color32::RED)));
    }

    #[test]
    fn test_downcast_from_text_buffer() {
        let styled = StyledText::from_plain("abc");
        let buf: &dyn egui::TextBuffer = &styled;
        assert_eq!(StyledText::downcast_ref(buf).map(|s| s.as_str()), Some("abc"));

        let plain = String::from("abc");
        let buf: &dyn egui::TextBuffer = &plain;
        assert!(StyledText::downcast_ref(buf).is_none());
    }
}
