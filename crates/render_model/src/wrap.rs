//! Line wrapping
//!
//! Greedy line filling over Unicode line break opportunities (UAX #14).
//! Explicit newlines always start a new line, trailing whitespace does not
//! count toward a line's width, and a word wider than the line is split at
//! character boundaries. Wrapping never yields zero lines: empty input is one
//! empty line, so callers can size a chunk from the line count alone.

use crate::TextMeasure;
use unicode_linebreak::{linebreaks, BreakOpportunity};

/// Wrap `text` to lines no wider than `max_width` millimetres
pub fn wrap_text(text: &str, max_width: f32, measure: &TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
        wrap_paragraph(paragraph, max_width, measure, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width: f32, measure: &TextMeasure, lines: &mut Vec<String>) {
    if paragraph.is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut start = 0;

    for (end, opportunity) in linebreaks(paragraph) {
        let segment = &paragraph[start..end];
        start = end;

        let candidate = format!("{current}{segment}");
        if measure.width(candidate.trim_end()) <= max_width {
            current = candidate;
        } else {
            if !current.trim().is_empty() {
                lines.push(current.trim_end().to_string());
            }
            current = if measure.width(segment.trim_end()) <= max_width {
                segment.to_string()
            } else {
                split_oversized(segment, max_width, measure, lines)
            };
        }

        if opportunity == BreakOpportunity::Mandatory && end < paragraph.len() {
            lines.push(current.trim_end().to_string());
            current.clear();
        }
    }

    lines.push(current.trim_end().to_string());
}

/// Break a segment that cannot fit on any line by itself. Full lines are
/// pushed to `lines`; the unfinished remainder is returned.
fn split_oversized(
    segment: &str,
    max_width: f32,
    measure: &TextMeasure,
    lines: &mut Vec<String>,
) -> String {
    let mut current = String::new();
    for ch in segment.chars() {
        current.push(ch);
        if current.chars().count() > 1 && measure.width(current.trim_end()) > max_width {
            current.pop();
            lines.push(current.trim_end().to_string());
            current = ch.to_string();
        }
    }
    current
}
