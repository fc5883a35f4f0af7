use std::collections::HashMap;

use fltk::enums::{Color, Font};
use fltk::text::StyleTableEntry;
use syntect::highlighting::Color as SyntectColor;

const STYLE_FONT: Font = Font::Courier;
const STYLE_SIZE: i32 = 15;

/// Maps highlight foreground colors to FLTK style characters ('A', 'B',
/// 'C', ...), building the StyleTableEntry table as colors appear.
/// 'A' is reserved as the plain-text fallback and sits outside the color
/// map, so a palette's genuine black still gets its own entry.
pub struct StyleMap {
    chars: HashMap<(u8, u8, u8), char>,
    entries: Vec<StyleTableEntry>,
}

impl StyleMap {
    pub fn new() -> Self {
        let mut map = Self {
            chars: HashMap::new(),
            entries: Vec::new(),
        };
        map.insert_fallback();
        map
    }

    fn insert_fallback(&mut self) {
        self.entries.push(StyleTableEntry {
            color: Color::Foreground,
            font: STYLE_FONT,
            size: STYLE_SIZE,
        });
    }

    /// Style character for a highlight color, registering a table entry the
    /// first time the color is seen. FLTK style chars run 'A'..'Z'; an HTML
    /// palette never comes close to 26 colors, but overflow clamps to 'Z'.
    pub fn get_or_insert(&mut self, color: SyntectColor) -> char {
        let key = (color.r, color.g, color.b);
        if let Some(&ch) = self.chars.get(&key) {
            return ch;
        }

        let idx = self.entries.len();
        if idx >= 26 {
            return 'Z';
        }
        let ch = (b'A' + idx as u8) as char;
        self.entries.push(StyleTableEntry {
            color: Color::from_rgb(color.r, color.g, color.b),
            font: STYLE_FONT,
            size: STYLE_SIZE,
        });
        self.chars.insert(key, ch);
        ch
    }

    /// Entries for FLTK's `set_highlight_data`.
    pub fn entries(&self) -> Vec<StyleTableEntry> {
        self.entries.clone()
    }

    /// Drop all mappings. Used on theme change, when the same syntax scopes
    /// map to a different palette.
    pub fn clear(&mut self) {
        self.chars.clear();
        self.entries.clear();
        self.insert_fallback();
    }
}

impl Default for StyleMap {
    fn default() -> Self {
        Self::new()
    }
}
