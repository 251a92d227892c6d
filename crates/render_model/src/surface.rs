//! Render surface contract
//!
//! The export engine only talks to a [`RenderSurface`]: it sets the current
//! font, asks how text wraps, draws strings at absolute positions, starts
//! pages and finally saves. [`RecordingSurface`] implements the contract by
//! recording a [`Document`] and handing it to a [`DocumentSink`] on save.

use crate::{wrap_text, Document, FontStyle, Page, Result, TextAlign, TextMeasure, TextRun};

/// Drawing operations needed to lay out a paginated text document
pub trait RenderSurface {
    /// Set the font size, in points, for subsequent measuring and drawing
    fn set_font_size(&mut self, size: f32);

    /// Set the font weight for subsequent measuring and drawing
    fn set_font_style(&mut self, style: FontStyle);

    /// Wrap `text` to lines no wider than `max_width` in the current font
    fn measure_wrapped_lines(&self, text: &str, max_width: f32) -> Vec<String>;

    /// Width of `text` in the current font
    fn text_width(&self, text: &str) -> f32;

    /// Draw one line of text with its baseline at `y`
    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign);

    /// Draw consecutive left-aligned lines starting at baseline `y`
    fn draw_lines(&mut self, lines: &[String], x: f32, y: f32, line_height: f32) {
        for (i, line) in lines.iter().enumerate() {
            self.draw_text(line, x, y + i as f32 * line_height, TextAlign::Left);
        }
    }

    /// Finish the current page and continue on a fresh one
    fn start_new_page(&mut self);

    /// Persist the document under `file_name`
    fn save_as(&mut self, file_name: &str) -> Result<()>;
}

/// Destination for finished documents
pub trait DocumentSink {
    fn save(&mut self, document: &Document, file_name: &str) -> Result<()>;
}

/// Keeps saved documents in memory
#[derive(Debug, Default)]
pub struct MemorySink {
    pub saved: Vec<(String, Document)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recently saved document
    pub fn last(&self) -> Option<&(String, Document)> {
        self.saved.last()
    }
}

impl DocumentSink for MemorySink {
    fn save(&mut self, document: &Document, file_name: &str) -> Result<()> {
        self.saved.push((file_name.to_string(), document.clone()));
        Ok(())
    }
}

impl<K: DocumentSink + ?Sized> DocumentSink for &mut K {
    fn save(&mut self, document: &Document, file_name: &str) -> Result<()> {
        (**self).save(document, file_name)
    }
}

/// A surface that records positioned text runs page by page
#[derive(Debug)]
pub struct RecordingSurface<K> {
    document: Document,
    font_size: f32,
    font_style: FontStyle,
    sink: K,
}

impl<K: DocumentSink> RecordingSurface<K> {
    pub fn new(page_width: f32, page_height: f32, sink: K) -> Self {
        Self {
            document: Document::new(page_width, page_height),
            font_size: 12.0,
            font_style: FontStyle::Normal,
            sink,
        }
    }

    /// The document recorded so far
    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn into_parts(self) -> (Document, K) {
        (self.document, self.sink)
    }

    fn measure(&self) -> TextMeasure {
        TextMeasure::new(self.font_style, self.font_size)
    }
}

impl<K: DocumentSink> RenderSurface for RecordingSurface<K> {
    fn set_font_size(&mut self, size: f32) {
        self.font_size = size;
    }

    fn set_font_style(&mut self, style: FontStyle) {
        self.font_style = style;
    }

    fn measure_wrapped_lines(&self, text: &str, max_width: f32) -> Vec<String> {
        wrap_text(text, max_width, &self.measure())
    }

    fn text_width(&self, text: &str) -> f32 {
        self.measure().width(text)
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, align: TextAlign) {
        let left = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - self.text_width(text) / 2.0,
            TextAlign::Right => x - self.text_width(text),
        };
        let run = TextRun {
            text: text.to_string(),
            x: left,
            y,
            font_size: self.font_size,
            style: self.font_style,
        };
        match self.document.pages.last_mut() {
            Some(page) => page.runs.push(run),
            None => self.document.pages.push(Page { runs: vec![run] }),
        }
    }

    fn start_new_page(&mut self) {
        self.document.pages.push(Page::new());
    }

    fn save_as(&mut self, file_name: &str) -> Result<()> {
        tracing::debug!("saving {} ({} pages)", file_name, self.document.page_count());
        self.sink.save(&self.document, file_name)
    }
}
