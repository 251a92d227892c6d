//! Recorded document types
//!
//! A [`Document`] is an ordered list of pages, each an ordered list of
//! positioned text runs. Positions are millimetres from the top-left corner
//! of the page; `y` is the text baseline.

use serde::{Deserialize, Serialize};

/// Font weight used for a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
}

/// Horizontal anchor of a drawn string relative to its `x`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A single line of text placed on a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    /// Left edge in mm (alignment already resolved)
    pub x: f32,
    /// Baseline in mm from the top of the page
    pub y: f32,
    /// Font size in points
    pub font_size: f32,
    pub style: FontStyle,
}

/// One page of text runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub runs: Vec<TextRun>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every run, in drawing order
    pub fn lines(&self) -> Vec<&str> {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Whether any run on this page has exactly this text
    pub fn contains_text(&self, text: &str) -> bool {
        self.runs.iter().any(|r| r.text == text)
    }
}

/// A paginated document ready to be rasterized or serialized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Page width in mm
    pub page_width: f32,
    /// Page height in mm
    pub page_height: f32,
    pub pages: Vec<Page>,
}

impl Document {
    /// Create a document with a single empty page
    pub fn new(page_width: f32, page_height: f32) -> Self {
        Self {
            page_width,
            page_height,
            pages: vec![Page::new()],
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Iterate over `(page_index, run)` pairs in reading order
    pub fn runs(&self) -> impl Iterator<Item = (usize, &TextRun)> {
        self.pages
            .iter()
            .enumerate()
            .flat_map(|(i, page)| page.runs.iter().map(move |run| (i, run)))
    }

    /// Find the first run with exactly this text
    pub fn find_run(&self, text: &str) -> Option<(usize, &TextRun)> {
        self.runs().find(|(_, run)| run.text == text)
    }

    /// Page-by-page text content, for comparing layouts
    pub fn text_content(&self) -> Vec<Vec<String>> {
        self.pages
            .iter()
            .map(|page| page.runs.iter().map(|r| r.text.clone()).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str, y: f32) -> TextRun {
        TextRun {
            text: text.to_string(),
            x: 20.0,
            y,
            font_size: 12.0,
            style: FontStyle::Normal,
        }
    }

    #[test]
    fn test_new_document_has_one_page() {
        let doc = Document::new(210.0, 297.0);
        assert_eq!(doc.page_count(), 1);
        assert!(doc.pages[0].runs.is_empty());
    }

    #[test]
    fn test_runs_carry_page_index() {
        let mut doc = Document::new(210.0, 297.0);
        doc.pages[0].runs.push(run("first", 20.0));
        doc.pages.push(Page { runs: vec![run("second", 20.0)] });

        let found: Vec<_> = doc.runs().map(|(i, r)| (i, r.text.as_str())).collect();
        assert_eq!(found, vec![(0, "first"), (1, "second")]);
        assert_eq!(doc.find_run("second").map(|(i, _)| i), Some(1));
        assert!(doc.pages[1].contains_text("second"));
        assert_eq!(doc.text_content(), vec![vec!["first"], vec!["second"]]);
    }
}
