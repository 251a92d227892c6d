//! Text metrics for the standard Helvetica fonts
//!
//! Widths are the advance widths of the PDF standard 14 Helvetica and
//! Helvetica-Bold fonts in 1/1000 em, indexed by WinAnsi code from 0x20 to
//! 0xFF. Characters are measured by the byte they are drawn with, so text the
//! encoding cannot represent measures as the `?` written in its place.

use crate::{encode_char, FontStyle, REPLACEMENT};

/// Points per millimetre
pub const PT_PER_MM: f32 = 72.0 / 25.4;

const FIRST_CODE: u8 = 0x20;

#[rustfmt::skip]
const HELVETICA_WIDTHS: [u16; 224] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, 0,
    556, 556, 222, 556, 333, 1000, 556, 556, 333, 1000, 667, 333, 1000, 556, 611, 556,
    556, 222, 222, 333, 333, 350, 556, 1000, 333, 1000, 500, 333, 944, 556, 500, 667,
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_WIDTHS: [u16; 224] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, 0,
    556, 611, 278, 556, 500, 1000, 556, 556, 333, 1000, 667, 333, 1000, 611, 611, 611,
    611, 278, 278, 500, 500, 350, 556, 1000, 333, 1000, 556, 333, 944, 611, 500, 667,
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Advance width of one character in 1/1000 em
pub fn glyph_width(ch: char, style: FontStyle) -> u16 {
    let table = match style {
        FontStyle::Normal => &HELVETICA_WIDTHS,
        FontStyle::Bold => &HELVETICA_BOLD_WIDTHS,
    };
    let code = match encode_char(ch) {
        Some(code) if code >= FIRST_CODE => code,
        _ => REPLACEMENT,
    };
    table[(code - FIRST_CODE) as usize]
}

/// Measures strings for a given font weight and size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextMeasure {
    pub style: FontStyle,
    /// Font size in points
    pub font_size: f32,
}

impl TextMeasure {
    pub fn new(style: FontStyle, font_size: f32) -> Self {
        Self { style, font_size }
    }

    /// Width of `text` in millimetres
    pub fn width(&self, text: &str) -> f32 {
        let units: u32 = text.chars().map(|c| glyph_width(c, self.style) as u32).sum();
        units as f32 * self.font_size / 1000.0 / PT_PER_MM
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_widths() {
        assert_eq!(glyph_width(' ', FontStyle::Normal), 278);
        assert_eq!(glyph_width('W', FontStyle::Normal), 944);
        assert_eq!(glyph_width('i', FontStyle::Bold), 278);
        assert_eq!(glyph_width('~', FontStyle::Bold), 584);
        assert_eq!(glyph_width('\u{2022}', FontStyle::Normal), 350);
    }

    #[test]
    fn test_latin1_and_punctuation_widths() {
        assert_eq!(glyph_width('\u{C6}', FontStyle::Normal), 1000);
        assert_eq!(glyph_width('\u{152}', FontStyle::Bold), 1000);
        assert_eq!(glyph_width('\u{C9}', FontStyle::Normal), 667);
        assert_eq!(glyph_width('\u{DC}', FontStyle::Bold), 722);
        assert_eq!(glyph_width('\u{DF}', FontStyle::Normal), 611);
        assert_eq!(glyph_width('\u{2014}', FontStyle::Normal), 1000);
        assert_eq!(glyph_width('\u{E9}', FontStyle::Bold), 556);
        assert_eq!(glyph_width('\u{A0}', FontStyle::Normal), 278);
    }

    #[test]
    fn test_unencodable_text_measures_as_replacement() {
        for style in [FontStyle::Normal, FontStyle::Bold] {
            assert_eq!(glyph_width('\u{4e2d}', style), glyph_width('?', style));
            assert_eq!(glyph_width('\u{0007}', style), glyph_width('?', style));
        }
        assert_eq!(glyph_width('\t', FontStyle::Normal), glyph_width(' ', FontStyle::Normal));
    }

    #[test]
    fn test_bold_is_never_narrower() {
        for ch in ' '..='~' {
            assert!(glyph_width(ch, FontStyle::Bold) >= glyph_width(ch, FontStyle::Normal) || ch == '@');
        }
    }

    #[test]
    fn test_width_in_millimetres() {
        // 10 digits at 556 units, 12pt: 66.72pt
        let measure = TextMeasure::new(FontStyle::Normal, 12.0);
        let width = measure.width("0123456789");
        assert!((width - 66.72 / PT_PER_MM).abs() < 1e-3);
        assert_eq!(measure.width(""), 0.0);
    }
}
