//! Pagination
//!
//! A single vertical cursor flows chunks of text down the page. Before a
//! chunk is drawn its height is checked against the lowest allowed baseline
//! and, if it would not fit, the surface starts a new page and the cursor
//! returns to the top margin.
//!
//! A [`Block`] is the unit the cursor keeps together. Its checked height is
//! the larger of its reserve and the height of the lines it draws, so the
//! check never disagrees with the advance. A block taller than a whole page
//! cannot be kept together: it starts on a fresh page and is written line by
//! line, filling each page before moving on.

use crate::{LayoutMetrics, PageGeometry};
use render_model::{FontStyle, RenderSurface, TextAlign};

/// Consecutive lines sharing a left edge and weight
#[derive(Debug, Clone, PartialEq)]
pub struct LineGroup {
    pub x: f32,
    pub style: FontStyle,
    pub lines: Vec<String>,
}

impl LineGroup {
    pub fn new(x: f32, style: FontStyle, lines: Vec<String>) -> Self {
        Self { x, style, lines }
    }
}

/// A visually atomic chunk of body text
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub groups: Vec<LineGroup>,
    /// Minimum height to check before drawing
    pub reserve: f32,
    /// Space added after the last line
    pub gap_after: f32,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plain left-aligned lines with no reserve
    pub fn paragraph(x: f32, lines: Vec<String>) -> Self {
        Self::new().with_group(LineGroup::new(x, FontStyle::Normal, lines))
    }

    pub fn with_group(mut self, group: LineGroup) -> Self {
        self.groups.push(group);
        self
    }

    pub fn with_reserve(mut self, reserve: f32) -> Self {
        self.reserve = reserve;
        self
    }

    pub fn with_gap_after(mut self, gap: f32) -> Self {
        self.gap_after = gap;
        self
    }

    pub fn line_count(&self) -> usize {
        self.groups.iter().map(|g| g.lines.len()).sum()
    }

    /// Height of the drawn lines, excluding the trailing gap
    pub fn drawn_height(&self, metrics: &LayoutMetrics) -> f32 {
        metrics.lines_height(self.line_count())
    }

    /// Height used for the overflow check
    pub fn check_height(&self, metrics: &LayoutMetrics) -> f32 {
        self.reserve.max(self.drawn_height(metrics))
    }
}

/// Vertical cursor over a sequence of pages
#[derive(Debug, Clone)]
pub struct PageCursor {
    geometry: PageGeometry,
    metrics: LayoutMetrics,
    y: f32,
    page_index: usize,
}

impl PageCursor {
    /// Start at the top margin of the first page
    pub fn new(geometry: PageGeometry, metrics: LayoutMetrics) -> Self {
        Self {
            y: geometry.margin,
            geometry,
            metrics,
            page_index: 0,
        }
    }

    /// Current baseline
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Zero-based index of the current page
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    pub fn geometry(&self) -> &PageGeometry {
        &self.geometry
    }

    pub fn advance(&mut self, delta: f32) {
        self.y += delta;
    }

    /// Whether a chunk of `height` fits below the cursor on this page
    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= self.geometry.max_y()
    }

    /// Start a new page if a chunk of `height` does not fit.
    /// Returns whether a page break occurred.
    pub fn ensure_space<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, height: f32) -> bool {
        if self.fits(height) {
            return false;
        }
        tracing::debug!(
            "page break before {:.1}mm chunk at y={:.1} on page {}",
            height,
            self.y,
            self.page_index + 1
        );
        self.break_page(surface);
        true
    }

    fn break_page<S: RenderSurface + ?Sized>(&mut self, surface: &mut S) {
        surface.start_new_page();
        self.page_index += 1;
        self.y = self.geometry.margin;
    }

    fn at_top(&self) -> bool {
        self.y <= self.geometry.margin
    }

    /// Draw a block, keeping it on one page when it can fit on any page
    pub fn place_block<S: RenderSurface + ?Sized>(&mut self, surface: &mut S, block: &Block) {
        let line_height = self.metrics.line_height;
        let check = block.check_height(&self.metrics);

        if check <= self.geometry.usable_height() {
            self.ensure_space(surface, check);
            for group in &block.groups {
                surface.set_font_style(group.style);
                surface.draw_lines(&group.lines, group.x, self.y, line_height);
                self.advance(self.metrics.lines_height(group.lines.len()));
            }
        } else {
            tracing::debug!(
                "{:.1}mm block exceeds the page, writing {} lines individually",
                check,
                block.line_count()
            );
            if !self.at_top() {
                self.break_page(surface);
            }
            for group in &block.groups {
                surface.set_font_style(group.style);
                for line in &group.lines {
                    if !self.fits(line_height) && !self.at_top() {
                        self.break_page(surface);
                    }
                    surface.draw_text(line, group.x, self.y, TextAlign::Left);
                    self.advance(line_height);
                }
            }
        }

        self.advance(block.gap_after);
    }
}
