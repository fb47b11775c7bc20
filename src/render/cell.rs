//! Cell: one position of the compositor grid.

/// A single grid cell: the character shown there and the escape state it
/// carries.
///
/// The right half of a wide character is a *continuation* cell with an
/// empty symbol; it renders as nothing because its head already covers two
/// columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// One character plus any combining marks that followed it.
    pub symbol: String,
    /// SGR sequences in effect for this cell, `""` when unstyled.
    pub style: String,
    /// Non-SGR controls (hyperlinks, titles) bound to this cell.
    pub prefix: String,
}

impl Cell {
    /// A cell showing `ch`.
    pub fn new(ch: char, style: &str, prefix: String) -> Self {
        Self {
            symbol: ch.to_string(),
            style: style.to_owned(),
            prefix,
        }
    }

    /// A space with no style.
    pub fn blank() -> Self {
        Self {
            symbol: " ".to_owned(),
            style: String::new(),
            prefix: String::new(),
        }
    }

    /// The right half of a wide character.
    pub fn continuation(style: &str) -> Self {
        Self {
            symbol: String::new(),
            style: style.to_owned(),
            prefix: String::new(),
        }
    }

    /// Whether this cell is the right half of a wide character.
    #[inline]
    pub fn is_continuation(&self) -> bool {
        self.symbol.is_empty()
    }

    /// An unstyled space with nothing attached: safe to trim from a row end.
    pub fn is_blank(&self) -> bool {
        self.symbol == " " && self.style.is_empty() && self.prefix.is_empty()
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank()
    }
}
