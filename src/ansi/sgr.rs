//! Select Graphic Rendition state tracking.
//!
//! The compositor needs to know which display attributes are in effect at
//! every visible character of a line, so that a cell lifted out of its line
//! still renders with the right colours. [`SgrState`] folds SGR sequences
//! into one slot per attribute group (foreground, background, bold, ...),
//! so a later colour replaces an earlier one instead of piling up, and
//! renders the slots back as a single sequence.

use std::collections::BTreeMap;

/// Sequence that restores every display attribute to its default.
pub const RESET: &str = "\x1b[0m";

/// One independently settable display attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum Slot {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reverse,
    Conceal,
    Strike,
    Font,
    Overline,
    Foreground,
    Background,
    UnderlineColor,
    /// Any code without a known group, keyed by the code itself.
    Other(u16),
}

/// What a single SGR parameter does to the state.
enum Effect {
    Reset,
    Set(Slot),
    Clear(&'static [Slot]),
}

/// The SGR attributes currently in effect on a line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SgrState {
    slots: BTreeMap<Slot, String>,
    /// `slots` rendered as one sequence, `""` when neutral.
    active: String,
}

impl SgrState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a control sequence into the state.
    ///
    /// A `0` (or empty) parameter anywhere in the list resets everything
    /// set before it. Returns `false` (leaving the state untouched) when
    /// `control` is not an SGR sequence.
    pub fn apply(&mut self, control: &str) -> bool {
        let Some(params) = sgr_params(control) else {
            return false;
        };

        let fields: Vec<&str> = params.split(';').collect();
        let mut i = 0;
        while i < fields.len() {
            let field = fields[i];
            let code = leading_code(field);
            // 38/48/58 in semicolon form swallow their colour arguments.
            let taken = match code {
                Some(38 | 48 | 58) if !field.contains(':') => {
                    match fields.get(i + 1).copied().and_then(leading_code) {
                        Some(5) => 3,
                        Some(2) => 5,
                        _ => 1,
                    }
                }
                _ => 1,
            };
            let end = (i + taken).min(fields.len());
            match effect(code, field) {
                Effect::Reset => self.slots.clear(),
                Effect::Set(slot) => {
                    self.slots.insert(slot, fields[i..end].join(";"));
                }
                Effect::Clear(slots) => {
                    for slot in slots {
                        self.slots.remove(slot);
                    }
                }
            }
            i = end;
        }
        self.render();
        true
    }

    /// A sequence that re-creates this state, or `""` when neutral.
    pub fn as_str(&self) -> &str {
        &self.active
    }

    /// Whether no attribute is active.
    pub fn is_neutral(&self) -> bool {
        self.slots.is_empty()
    }

    fn render(&mut self) {
        self.active.clear();
        if self.slots.is_empty() {
            return;
        }
        self.active.push_str("\x1b[");
        for (n, value) in self.slots.values().enumerate() {
            if n > 0 {
                self.active.push(';');
            }
            self.active.push_str(value);
        }
        self.active.push('m');
    }
}

fn effect(code: Option<u16>, field: &str) -> Effect {
    use Slot::*;
    let Some(code) = code else {
        return Effect::Reset;
    };
    match code {
        0 => Effect::Reset,
        1 => Effect::Set(Bold),
        2 => Effect::Set(Dim),
        3 => Effect::Set(Italic),
        // `4:0` is the sub-parameter form of "no underline".
        4 if field.split(':').nth(1).is_some_and(is_zero) => Effect::Clear(&[Underline]),
        4 | 21 => Effect::Set(Underline),
        5 | 6 => Effect::Set(Blink),
        7 => Effect::Set(Reverse),
        8 => Effect::Set(Conceal),
        9 => Effect::Set(Strike),
        10 => Effect::Clear(&[Font]),
        11..=20 => Effect::Set(Font),
        22 => Effect::Clear(&[Bold, Dim]),
        23 => Effect::Clear(&[Italic]),
        24 => Effect::Clear(&[Underline]),
        25 => Effect::Clear(&[Blink]),
        27 => Effect::Clear(&[Reverse]),
        28 => Effect::Clear(&[Conceal]),
        29 => Effect::Clear(&[Strike]),
        30..=38 | 90..=97 => Effect::Set(Foreground),
        39 => Effect::Clear(&[Foreground]),
        40..=48 | 100..=107 => Effect::Set(Background),
        49 => Effect::Clear(&[Background]),
        53 => Effect::Set(Overline),
        55 => Effect::Clear(&[Overline]),
        58 => Effect::Set(UnderlineColor),
        59 => Effect::Clear(&[UnderlineColor]),
        other => Effect::Set(Other(other)),
    }
}

/// Parameter bytes of an SGR sequence, or `None` for any other control.
fn sgr_params(control: &str) -> Option<&str> {
    let body = control
        .strip_prefix("\x1b[")
        .or_else(|| control.strip_prefix('\u{9b}'))?;
    let params = body.strip_suffix('m')?;
    params
        .bytes()
        .all(|b| b.is_ascii_digit() || b == b';' || b == b':')
        .then_some(params)
}

/// The numeric code before any `:` sub-parameters. `None` means zero.
fn leading_code(field: &str) -> Option<u16> {
    let head = field.split(':').next().unwrap_or("");
    if is_zero(head) {
        return None;
    }
    // Absurdly long codes saturate into one catch-all slot.
    Some(head.parse().unwrap_or(u16::MAX))
}

/// An empty parameter means zero.
fn is_zero(param: &str) -> bool {
    param.bytes().all(|b| b == b'0')
}
