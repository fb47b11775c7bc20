//! Display-width measurement of styled text.
//!
//! Widths are counted in terminal columns. Escape sequences contribute
//! nothing; combining marks contribute 0 and East-Asian wide/fullwidth
//! characters 2, per the tables in `unicode-width`.

use unicode_width::UnicodeWidthChar;

use crate::ansi::{segments, Segment};

/// Column width of a single character.
///
/// Characters without a defined width (C0/C1 controls) count as one column.
#[inline]
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(1)
}

/// Column width of a single line, ignoring escape sequences.
pub fn line_width(line: &str) -> usize {
    segments(line)
        .filter(Segment::is_visible)
        .flat_map(|s| s.text.chars())
        .map(char_width)
        .sum()
}

/// Widest line of a multi-line string. `0` for the empty string.
pub fn block_width(text: &str) -> usize {
    split_lines(text).map(line_width).max().unwrap_or(0)
}

/// Number of lines in a multi-line string. `0` for the empty string.
pub fn block_height(text: &str) -> usize {
    split_lines(text).count()
}

/// Split on line feeds, dropping a `\r` right before each `\n`.
///
/// The empty string has no lines.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut lines = text.split('\n').peekable();
    if text.is_empty() {
        lines.next();
    }
    std::iter::from_fn(move || {
        let line = lines.next()?;
        if lines.peek().is_some() {
            Some(line.strip_suffix('\r').unwrap_or(line))
        } else {
            Some(line)
        }
    })
}

/// Cut `line` down to at most `width` columns.
///
/// Escape sequences are kept (including ones after the cut, so closing
/// resets still apply). A wide character that would straddle the limit is
/// dropped whole.
pub fn truncate(line: &str, width: usize) -> String {
    let mut out = String::with_capacity(line.len());
    let mut used = 0;
    let mut full = false;
    for segment in segments(line) {
        if segment.is_control() {
            out.push_str(segment.text);
            continue;
        }
        for c in segment.text.chars() {
            let w = char_width(c);
            if full || used + w > width {
                full = true;
                continue;
            }
            used += w;
            out.push(c);
        }
    }
    out
}

/// Repeat `glyph` to cover exactly `width` columns.
///
/// Columns a wide glyph cannot fill evenly are completed with spaces. A
/// zero-width glyph yields spaces only.
pub(crate) fn repeat_to_width(glyph: char, width: usize) -> String {
    let glyph_width = char_width(glyph);
    if glyph_width == 0 {
        return " ".repeat(width);
    }
    let count = width / glyph_width;
    let mut run: String = std::iter::repeat_n(glyph, count).collect();
    run.extend(std::iter::repeat_n(' ', width - count * glyph_width));
    run
}

/// Append spaces to `line` until it is `width` columns wide.
pub(crate) fn pad_right(line: &str, width: usize) -> String {
    let short = width.saturating_sub(line_width(line));
    let mut out = String::with_capacity(line.len() + short);
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', short));
    out
}
