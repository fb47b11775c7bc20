//! logos-based escape-sequence lexer.
//!
//! The lexer only recognises escape introducers and runs of printable text.
//! Once an introducer matches, a callback measures the rest of the sequence
//! by hand and bumps the lexer past it. Doing the tail by hand lets a
//! truncated sequence swallow the remainder of the input instead of leaking
//! half an escape into the visible text.
//!
//! Recognised sequences:
//! - CSI: `ESC [` params (0x30-0x3F), intermediates (0x20-0x2F), final (0x40-0x7E)
//! - OSC: `ESC ]` ... BEL or ST (`ESC \`)
//! - DCS/SOS/PM/APC: `ESC P`/`ESC X`/`ESC ^`/`ESC _` ... BEL or ST
//! - nF escapes: `ESC` intermediates (0x20-0x2F) final (0x30-0x7E)
//! - two-byte escapes: `ESC` + one byte in 0x30-0x7E
//! - 8-bit CSI: U+009B, then as CSI

use logos::{Lexer, Logos};

const ESC: u8 = 0x1B;
const BEL: u8 = 0x07;

/// Raw token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
enum RawToken {
    /// 7-bit escape introducer; the callback consumes the whole sequence.
    #[token("\x1b", escape_tail)]
    Escape,

    /// 8-bit CSI introducer.
    #[token("\u{9b}", csi_tail)]
    C1Csi,

    /// A run of printable content.
    #[regex(r"[^\x1b\x{9b}]+")]
    Text,
}

fn escape_tail(lex: &mut Lexer<RawToken>) -> bool {
    let len = escape_len(lex.remainder().as_bytes());
    lex.bump(len);
    true
}

fn csi_tail(lex: &mut Lexer<RawToken>) -> bool {
    let len = csi_len(lex.remainder().as_bytes());
    lex.bump(len);
    true
}

/// Length of the sequence following an `ESC` byte.
///
/// Every returned length ends right after an ASCII byte (or at the end of
/// input), so it always falls on a char boundary.
fn escape_len(rest: &[u8]) -> usize {
    match rest.first() {
        None => 0,
        Some(b'[') => 1 + csi_len(&rest[1..]),
        Some(b']' | b'P' | b'X' | b'^' | b'_') => 1 + string_len(&rest[1..]),
        Some(0x20..=0x2F) => nf_len(rest),
        Some(0x30..=0x7E) => 1,
        // A lone ESC in front of anything else is its own sequence.
        Some(_) => 0,
    }
}

/// CSI body: parameter and intermediate bytes, then one final byte.
fn csi_len(rest: &[u8]) -> usize {
    for (i, &b) in rest.iter().enumerate() {
        match b {
            0x40..=0x7E => return i + 1,
            0x20..=0x3F => {}
            // Invalid byte: the sequence ends before it.
            _ => return i,
        }
    }
    rest.len()
}

/// String body terminated by BEL or ST.
fn string_len(rest: &[u8]) -> usize {
    let mut i = 0;
    while i < rest.len() {
        match rest[i] {
            BEL => return i + 1,
            ESC if rest.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    rest.len()
}

/// nF escape: one or more intermediates, then a final byte.
fn nf_len(rest: &[u8]) -> usize {
    for (i, &b) in rest.iter().enumerate() {
        match b {
            0x20..=0x2F => {}
            0x30..=0x7E => return i + 1,
            _ => return i,
        }
    }
    rest.len()
}

// ---------------------------------------------------------------------------
// Segments
// ---------------------------------------------------------------------------

/// Whether a segment changes terminal state or occupies cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A non-printing escape sequence.
    Control,
    /// Printable content.
    Visible,
}

/// A run of styled text, borrowed from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<'a> {
    pub kind: SegmentKind,
    pub text: &'a str,
}

impl Segment<'_> {
    #[inline]
    pub fn is_control(&self) -> bool {
        self.kind == SegmentKind::Control
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.kind == SegmentKind::Visible
    }
}

/// Lazy iterator over the control and visible runs of a string.
///
/// Cloning the iterator restarts scanning from the clone's current position,
/// so the same text can be walked more than once without re-lexing from the
/// beginning.
#[derive(Clone)]
pub struct Segments<'a> {
    lexer: Lexer<'a, RawToken>,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let token = self.lexer.next()?;
        let kind = match token {
            Ok(RawToken::Escape | RawToken::C1Csi) => SegmentKind::Control,
            // The text pattern covers every other char, so lexing errors
            // cannot really happen. Keep them visible rather than lose text.
            Ok(RawToken::Text) | Err(()) => SegmentKind::Visible,
        };
        Some(Segment {
            kind,
            text: self.lexer.slice(),
        })
    }
}

impl std::fmt::Debug for Segments<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Segments")
            .field("remainder", &self.lexer.remainder())
            .finish()
    }
}

/// Split `text` into alternating control and visible segments.
pub fn segments(text: &str) -> Segments<'_> {
    Segments {
        lexer: RawToken::lexer(text),
    }
}
