//! Escape-sequence model: control/visible segmentation of styled text.

pub mod lexer;
pub mod sgr;

use std::borrow::Cow;

pub use lexer::{segments, Segment, SegmentKind, Segments};
pub use sgr::{SgrState, RESET};

/// Remove every escape sequence from `text`.
///
/// Returns `Cow::Borrowed` when there is nothing to remove. Stripping is
/// idempotent.
pub fn strip(text: &str) -> Cow<'_, str> {
    if !has_escapes(text) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        segments(text)
            .filter(Segment::is_visible)
            .map(|s| s.text)
            .collect(),
    )
}

/// Whether `text` contains at least one escape sequence.
pub fn has_escapes(text: &str) -> bool {
    segments(text).any(|s| s.is_control())
}
