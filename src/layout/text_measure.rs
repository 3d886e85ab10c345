//! Text Measurement
//!
//! Measurement of text in terminal cells, and a ready-made measurement
//! callback for text leaves.
//!
//! Cell widths come from `unicode-width`:
//! - ASCII printable: 1 cell
//! - CJK and most emoji: 2 cells
//! - Control and zero-width characters: 0 cells
//!
//! Wrapping breaks between characters, never inside one.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::geometry::Size;

/// Cell width of a single character.
#[inline]
fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Measure the display width of a string in terminal cells.
pub fn string_width(s: &str) -> usize {
    s.width()
}

/// Number of lines `text` occupies when wrapped at `available_width` cells.
///
/// Returns 0 for empty text and at least 1 otherwise. A width of 0 only
/// breaks at explicit newlines.
pub fn measure_text_height(text: &str, available_width: usize) -> usize {
    if text.is_empty() {
        return 0;
    }

    let mut lines = 0usize;
    let mut current_line_width = 0usize;

    for c in text.chars() {
        if c == '\n' {
            lines += 1;
            current_line_width = 0;
            continue;
        }

        let w = char_width(c);
        if available_width > 0 && current_line_width + w > available_width && current_line_width > 0 {
            lines += 1;
            current_line_width = w;
        } else {
            current_line_width += w;
        }
    }

    // Final line, if it has content
    if current_line_width > 0 || lines == 0 {
        lines += 1;
    }

    lines
}

/// Wrap text to lines of at most `width` cells.
///
/// A width of 0 only breaks at explicit newlines.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![];
    }

    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0usize;

    for c in text.chars() {
        if c == '\n' {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
            continue;
        }

        let w = char_width(c);
        if width > 0 && current_width + w > width && !current_line.is_empty() {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0;
        }

        current_line.push(c);
        current_width += w;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }

    lines
}

/// Measurement callback for a text leaf.
///
/// The returned size is the widest wrapped line by the number of lines.
/// An undefined or unbounded available width leaves the text unwrapped.
pub fn text_measure(content: impl Into<String>) -> impl Fn(f32) -> Size + 'static {
    let content: String = content.into();
    move |available_width: f32| {
        let cells = if available_width.is_finite() {
            available_width.max(0.0).floor() as usize
        } else {
            0
        };

        let lines = wrap_text(&content, cells);
        let width = lines.iter().map(|line| string_width(line)).max().unwrap_or(0);
        Size::new(width as f32, lines.len() as f32)
    }
}
