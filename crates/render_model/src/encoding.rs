//! WinAnsiEncoding for the standard Helvetica fonts
//!
//! Printable ASCII and Latin-1 map to themselves. The 0x80-0x9F block holds
//! typographic punctuation such as the bullet (0x95) and dashes. Anything
//! else has no glyph in these fonts and is written as `?`.

/// Byte written for characters the encoding cannot represent
pub const REPLACEMENT: u8 = b'?';

/// Encode one character, if the encoding has it
pub fn encode_char(ch: char) -> Option<u8> {
    let byte = match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => ch as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        '\t' => b' ',
        _ => return None,
    };
    Some(byte)
}

/// Encode a string, replacing unsupported characters
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|ch| encode_char(ch).unwrap_or(REPLACEMENT))
        .collect()
}
