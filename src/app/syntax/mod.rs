//! HTML syntax highlighting backed by syntect, rendered through FLTK style
//! buffers (one style character per byte of document text).
//!
//! The document is a single file edited interactively, so highlighting is a
//! full-document pass; no incremental state caching.

mod style_map;

pub use style_map::StyleMap;

use fltk::text::StyleTableEntry;
use syntect::easy::HighlightLines;
use syntect::highlighting::ThemeSet;
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

const DARK_THEME_KEY: &str = "base16-ocean.dark";
const LIGHT_THEME_KEY: &str = "InspiredGitHub";

pub struct HtmlHighlighter {
    syntax_set: SyntaxSet,
    theme_set: ThemeSet,
    style_map: StyleMap,
    dark: bool,
}

impl HtmlHighlighter {
    pub fn new(dark: bool) -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme_set: ThemeSet::load_defaults(),
            style_map: StyleMap::new(),
            dark,
        }
    }

    /// Switch between the dark and light palette. Clears the color map so
    /// stale entries from the previous palette can't leak through.
    pub fn set_dark(&mut self, dark: bool) {
        if self.dark != dark {
            self.dark = dark;
            self.style_map.clear();
        }
    }

    fn theme_key(&self) -> &'static str {
        if self.dark { DARK_THEME_KEY } else { LIGHT_THEME_KEY }
    }

    /// Produce the style string for `text`: one style char per byte, so the
    /// style buffer stays aligned with multi-byte UTF-8 content.
    pub fn highlight(&mut self, text: &str) -> String {
        let syntax = self
            .syntax_set
            .find_syntax_by_extension("html")
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());
        let theme = &self.theme_set.themes[self.theme_key()];
        let mut lines = HighlightLines::new(syntax, theme);

        let mut style_string = String::with_capacity(text.len());
        for line in LinesWithEndings::from(text) {
            let ranges = lines
                .highlight_line(line, &self.syntax_set)
                .unwrap_or_default();
            if ranges.is_empty() {
                // Parse hiccup: style the line as plain text.
                for _ in 0..line.len() {
                    style_string.push('A');
                }
                continue;
            }
            for (style, piece) in ranges {
                let ch = self.style_map.get_or_insert(style.foreground);
                for _ in 0..piece.len() {
                    style_string.push(ch);
                }
            }
        }
        style_string
    }

    /// Style table matching the characters produced by [`highlight`].
    ///
    /// [`highlight`]: HtmlHighlighter::highlight
    pub fn style_table(&self) -> Vec<StyleTableEntry> {
        self.style_map.entries()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "<!DOCTYPE html>\n<p class=\"x\">caf\u{e9}</p>\n";

    #[test]
    fn test_style_string_covers_every_byte() {
        let mut hl = HtmlHighlighter::new(true);
        let styles = hl.highlight(SAMPLE);
        assert_eq!(styles.len(), SAMPLE.len());
    }

    #[test]
    fn test_style_chars_stay_in_table_range() {
        let mut hl = HtmlHighlighter::new(true);
        let styles = hl.highlight(SAMPLE);
        let table_len = hl.style_table().len();
        for ch in styles.chars() {
            assert!(ch.is_ascii_uppercase());
            assert!(((ch as u8 - b'A') as usize) < table_len);
        }
    }

    #[test]
    fn test_empty_text_empty_styles() {
        let mut hl = HtmlHighlighter::new(false);
        assert_eq!(hl.highlight(""), "");
    }

    #[test]
    fn test_theme_switch_resets_style_table() {
        let mut hl = HtmlHighlighter::new(true);
        hl.highlight(SAMPLE);
        assert!(hl.style_table().len() > 1);
        hl.set_dark(false);
        assert_eq!(hl.style_table().len(), 1);
        // Same flag again is a no-op, table untouched.
        hl.highlight(SAMPLE);
        let len = hl.style_table().len();
        hl.set_dark(false);
        assert_eq!(hl.style_table().len(), len);
    }
}
