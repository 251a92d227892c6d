//! Page geometry and layout constants
//!
//! All lengths are millimetres and all font sizes are points. The defaults
//! describe an A4 portrait page with a uniform 20mm margin and an extra 20mm
//! kept clear above the bottom margin.

use crate::{LayoutError, Result};
use serde::{Deserialize, Serialize};

/// Physical page size and the printable area inside it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageGeometry {
    pub width: f32,
    pub height: f32,
    /// Uniform margin on all four sides
    pub margin: f32,
    /// Space kept clear above the bottom margin
    pub bottom_buffer: f32,
}

impl Default for PageGeometry {
    fn default() -> Self {
        Self::a4()
    }
}

impl PageGeometry {
    /// A4 portrait (210mm x 297mm)
    pub fn a4() -> Self {
        Self {
            width: 210.0,
            height: 297.0,
            margin: 20.0,
            bottom_buffer: 20.0,
        }
    }

    /// Lowest baseline any chunk may reach
    pub fn max_y(&self) -> f32 {
        self.height - self.margin - self.bottom_buffer
    }

    pub fn content_width(&self) -> f32 {
        self.width - 2.0 * self.margin
    }

    /// Vertical space available between the top margin and `max_y`
    pub fn usable_height(&self) -> f32 {
        self.max_y() - self.margin
    }

    /// Check that the page can hold every fixed-size chunk the layout uses
    pub fn validate(&self, metrics: &LayoutMetrics) -> Result<()> {
        let finite = [self.width, self.height, self.margin, self.bottom_buffer]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0);
        if !finite || self.width <= 0.0 || self.height <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "page dimensions must be positive, got {}x{} with margin {} and buffer {}",
                self.width, self.height, self.margin, self.bottom_buffer
            )));
        }

        let narrowest = self.content_width() - metrics.goal_wrap_inset;
        if narrowest <= 0.0 {
            return Err(LayoutError::InvalidPageSetup(format!(
                "content width {:.1}mm leaves no room for indented text",
                self.content_width()
            )));
        }

        let reserve = metrics.largest_reserve();
        if self.usable_height() < reserve {
            return Err(LayoutError::InvalidPageSetup(format!(
                "usable height {:.1}mm is smaller than the {:.1}mm reserve",
                self.usable_height(),
                reserve
            )));
        }

        Ok(())
    }
}

/// Font sizes in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontSizes {
    pub timestamp: f32,
    pub title: f32,
    pub section: f32,
    pub body: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            timestamp: 10.0,
            title: 24.0,
            section: 16.0,
            body: 12.0,
        }
    }
}

/// Fixed spacing used by the layout walk.
///
/// Overflow checks and cursor advances are both derived from these values,
/// so a chunk's checked height always matches what is actually drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub line_height: f32,
    /// Advance after the header timestamp
    pub timestamp_gap: f32,
    /// Advance after the document title
    pub title_block_gap: f32,
    /// Advance after a section title
    pub title_gap: f32,
    /// Trailing space after a section body
    pub section_padding: f32,
    /// Trailing space after a list item's last line
    pub item_gap: f32,
    /// Extra space after the beta features section
    pub beta_features_gap: f32,
    /// Space reserved for a section title plus its first line
    pub section_reserve: f32,
    /// Space reserved for a goal heading plus its first line
    pub goal_reserve: f32,
    /// Minimum height checked for a technical stack line
    pub stack_line_reserve: f32,
    /// Space after each goal value except the last
    pub goal_gap: f32,
    /// Space after the last goal value
    pub last_goal_gap: f32,
    /// Offset of detail lines and goal values from the margin
    pub detail_indent: f32,
    /// Width taken from the content width when wrapping goal values
    pub goal_wrap_inset: f32,
    pub key_player_estimate: f32,
    pub issue_estimate: f32,
    pub feature_request_estimate: f32,
    pub font_sizes: FontSizes,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            line_height: 7.0,
            timestamp_gap: 15.0,
            title_block_gap: 20.0,
            title_gap: 10.0,
            section_padding: 5.0,
            item_gap: 8.0,
            beta_features_gap: 10.0,
            section_reserve: 20.0,
            goal_reserve: 30.0,
            stack_line_reserve: 15.0,
            goal_gap: 7.0,
            last_goal_gap: 10.0,
            detail_indent: 10.0,
            goal_wrap_inset: 15.0,
            key_player_estimate: 35.0,
            issue_estimate: 35.0,
            feature_request_estimate: 45.0,
            font_sizes: FontSizes::default(),
        }
    }
}

impl LayoutMetrics {
    /// Largest fixed reserve that must fit on an empty page
    pub fn largest_reserve(&self) -> f32 {
        self.section_reserve
            .max(self.goal_reserve)
            .max(self.stack_line_reserve)
    }

    /// Height of `lines` lines of body text
    pub fn lines_height(&self, lines: usize) -> f32 {
        lines as f32 * self.line_height
    }
}
