//! PDF Content Stream Generation
//!
//! Builder for page content streams. Exported documents are text only, so
//! just the text object operators are provided:
//! - BT/ET: begin/end text object
//! - Tf: set font and size
//! - Tm: set text matrix
//! - Tj: show text string

use render_model::encode_text;
use super::objects::{escape_string, format_real};

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: Vec<u8>,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Begin a text object (BT)
    pub fn begin_text(&mut self) -> &mut Self {
        self.write_line("BT");
        self
    }

    /// End a text object (ET)
    pub fn end_text(&mut self) -> &mut Self {
        self.write_line("ET");
        self
    }

    /// Set the font resource and size (Tf)
    pub fn set_font(&mut self, resource_name: &str, size: f64) -> &mut Self {
        self.write_line(&format!("/{} {} Tf", resource_name, format_real(size)));
        self
    }

    /// Place the text origin at `(x, y)` in points from the bottom-left (Tm)
    pub fn set_text_position(&mut self, x: f64, y: f64) -> &mut Self {
        self.write_line(&format!("1 0 0 1 {} {} Tm", format_real(x), format_real(y)));
        self
    }

    /// Show a string (Tj), encoded as WinAnsi
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.data.push(b'(');
        self.data.extend_from_slice(&escape_string(&encode_text(text)));
        self.write_line(") Tj");
        self
    }

    fn write_line(&mut self, s: &str) {
        self.data.extend_from_slice(s.as_bytes());
        self.data.push(b'\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_object() {
        let mut content = ContentStream::new();
        content
            .begin_text()
            .set_font("F2", 16.0)
            .set_text_position(56.6929, 785.1969)
            .show_text("Goals (short)")
            .end_text();

        let text = String::from_utf8(content.into_bytes()).unwrap();
        assert_eq!(
            text,
            "BT\n/F2 16 Tf\n1 0 0 1 56.6929 785.1969 Tm\n(Goals \\(short\\)) Tj\nET\n"
        );
    }

    #[test]
    fn test_bullet_is_encoded() {
        let mut content = ContentStream::new();
        content.show_text("\u{2022} Item 1:");
        assert_eq!(content.as_bytes(), b"(\\225 Item 1:) Tj\n");
    }
}
