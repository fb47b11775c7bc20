//! Border renderer: glyph sets, side masks and framing.
//!
//! A [`BorderSpec`] is a plain value: eight glyphs plus a mask of which
//! sides to draw. Presets are a closed [`BorderKind`] enum with a glyph
//! table behind a `match`.

use bitflags::bitflags;
use crossterm::style::ContentStyle;

use crate::block::Block;
use crate::measure::repeat_to_width;

// ---------------------------------------------------------------------------
// BorderSides
// ---------------------------------------------------------------------------

bitflags! {
    /// Which sides of a border are drawn.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BorderSides: u8 {
        const TOP = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const LEFT = 0b1000;
        const VERTICAL = Self::LEFT.bits() | Self::RIGHT.bits();
        const HORIZONTAL = Self::TOP.bits() | Self::BOTTOM.bits();
    }
}

impl Default for BorderSides {
    fn default() -> Self {
        Self::all()
    }
}

// ---------------------------------------------------------------------------
// BorderGlyphs
// ---------------------------------------------------------------------------

/// The eight characters a border is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderGlyphs {
    pub top: char,
    pub bottom: char,
    pub left: char,
    pub right: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderGlyphs {
    /// Every position drawn with the same character.
    pub const fn uniform(c: char) -> Self {
        Self {
            top: c,
            bottom: c,
            left: c,
            right: c,
            top_left: c,
            top_right: c,
            bottom_left: c,
            bottom_right: c,
        }
    }

    const fn lines(h: char, v: char, corners: [char; 4]) -> Self {
        Self {
            top: h,
            bottom: h,
            left: v,
            right: v,
            top_left: corners[0],
            top_right: corners[1],
            bottom_left: corners[2],
            bottom_right: corners[3],
        }
    }
}

// ---------------------------------------------------------------------------
// BorderKind
// ---------------------------------------------------------------------------

/// Built-in border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderKind {
    /// `┌─┐ │ └─┘`
    Normal,
    /// `╭─╮ │ ╰─╯`
    Rounded,
    /// `┏━┓ ┃ ┗━┛`
    Thick,
    /// `╔═╗ ║ ╚═╝`
    Double,
    /// Solid full blocks.
    Block,
    /// Spaces: takes up room without drawing anything.
    Hidden,
    /// `+-+ | +-+`
    Ascii,
}

impl BorderKind {
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderKind::Normal => BorderGlyphs::lines('─', '│', ['┌', '┐', '└', '┘']),
            BorderKind::Rounded => BorderGlyphs::lines('─', '│', ['╭', '╮', '╰', '╯']),
            BorderKind::Thick => BorderGlyphs::lines('━', '┃', ['┏', '┓', '┗', '┛']),
            BorderKind::Double => BorderGlyphs::lines('═', '║', ['╔', '╗', '╚', '╝']),
            BorderKind::Block => BorderGlyphs::uniform('█'),
            BorderKind::Hidden => BorderGlyphs::uniform(' '),
            BorderKind::Ascii => BorderGlyphs::lines('-', '|', ['+', '+', '+', '+']),
        }
    }
}

// ---------------------------------------------------------------------------
// BorderSpec
// ---------------------------------------------------------------------------

/// A border: glyphs plus the sides to draw.
///
/// Setters return a modified copy, so one spec can seed several variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BorderSpec {
    glyphs: BorderGlyphs,
    sides: BorderSides,
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self::normal()
    }
}

impl BorderSpec {
    /// A preset with every side enabled.
    pub const fn preset(kind: BorderKind) -> Self {
        Self {
            glyphs: kind.glyphs(),
            sides: BorderSides::all(),
        }
    }

    pub const fn normal() -> Self {
        Self::preset(BorderKind::Normal)
    }

    pub const fn rounded() -> Self {
        Self::preset(BorderKind::Rounded)
    }

    pub const fn thick() -> Self {
        Self::preset(BorderKind::Thick)
    }

    pub const fn double() -> Self {
        Self::preset(BorderKind::Double)
    }

    pub const fn block() -> Self {
        Self::preset(BorderKind::Block)
    }

    pub const fn hidden() -> Self {
        Self::preset(BorderKind::Hidden)
    }

    pub const fn ascii() -> Self {
        Self::preset(BorderKind::Ascii)
    }

    /// Starting point for a custom border: the normal glyphs, overridden
    /// one at a time with the `with_*` setters.
    pub const fn custom() -> Self {
        Self::normal()
    }

    /// A border from a complete glyph set.
    pub const fn from_glyphs(glyphs: BorderGlyphs) -> Self {
        Self {
            glyphs,
            sides: BorderSides::all(),
        }
    }

    pub const fn glyphs(&self) -> BorderGlyphs {
        self.glyphs
    }

    pub const fn sides(&self) -> BorderSides {
        self.sides
    }

    /// Restrict which sides are drawn.
    pub fn with_sides(mut self, sides: BorderSides) -> Self {
        self.sides = sides;
        self
    }

    pub fn with_top(mut self, c: char) -> Self {
        self.glyphs.top = c;
        self
    }

    pub fn with_bottom(mut self, c: char) -> Self {
        self.glyphs.bottom = c;
        self
    }

    pub fn with_left(mut self, c: char) -> Self {
        self.glyphs.left = c;
        self
    }

    pub fn with_right(mut self, c: char) -> Self {
        self.glyphs.right = c;
        self
    }

    pub fn with_top_left(mut self, c: char) -> Self {
        self.glyphs.top_left = c;
        self
    }

    pub fn with_top_right(mut self, c: char) -> Self {
        self.glyphs.top_right = c;
        self
    }

    pub fn with_bottom_left(mut self, c: char) -> Self {
        self.glyphs.bottom_left = c;
        self
    }

    pub fn with_bottom_right(mut self, c: char) -> Self {
        self.glyphs.bottom_right = c;
        self
    }
}

impl From<BorderKind> for BorderSpec {
    fn from(kind: BorderKind) -> Self {
        Self::preset(kind)
    }
}

// ---------------------------------------------------------------------------
// Framing
// ---------------------------------------------------------------------------

/// Surround `block` with the border described by `spec`.
///
/// A corner glyph is drawn only where both adjoining sides are enabled; with
/// one of them off, the corner position carries the enabled edge's glyph
/// instead. Content lines are not padded, so ragged input gives a ragged
/// right edge. Pad first with [`join_vertical`](crate::join_vertical) or
/// [`place`](crate::place) when a straight edge is wanted.
pub fn frame(spec: &BorderSpec, block: &Block) -> Block {
    frame_with(spec, block, |run| run)
}

/// Like [`frame`], with the border glyphs (never the content) wrapped in
/// `style`.
pub fn frame_styled(spec: &BorderSpec, block: &Block, style: ContentStyle) -> Block {
    frame_with(spec, block, |run| style.apply(run).to_string())
}

fn frame_with(spec: &BorderSpec, block: &Block, paint: impl Fn(String) -> String) -> Block {
    let g = spec.glyphs;
    let top = spec.sides.contains(BorderSides::TOP);
    let right = spec.sides.contains(BorderSides::RIGHT);
    let bottom = spec.sides.contains(BorderSides::BOTTOM);
    let left = spec.sides.contains(BorderSides::LEFT);
    let inner = block.width();

    // Top and bottom edges always span both corner positions.
    let edge = |corner_l: char, fill: char, corner_r: char| {
        let mut run = String::new();
        if left {
            run.push(corner_l);
        } else {
            run.push_str(&repeat_to_width(fill, 1));
        }
        run.push_str(&repeat_to_width(fill, inner));
        if right {
            run.push(corner_r);
        } else {
            run.push_str(&repeat_to_width(fill, 1));
        }
        paint(run)
    };

    let mut lines = Vec::with_capacity(block.height() + 2);
    if top {
        lines.push(edge(g.top_left, g.top, g.top_right));
    }
    for line in block.lines() {
        let mut out = String::with_capacity(line.len() + 8);
        if left {
            out.push_str(&paint(g.left.to_string()));
        }
        out.push_str(line);
        if right {
            out.push_str(&paint(g.right.to_string()));
        }
        lines.push(out);
    }
    if bottom {
        lines.push(edge(g.bottom_left, g.bottom, g.bottom_right));
    }
    Block::from_lines(lines)
}
