//! Placing a block inside a fixed-size field.

use crossterm::style::ContentStyle;
use log::debug;

use super::align::Align;
use super::LayoutError;
use crate::block::Block;
use crate::measure::{pad_right, repeat_to_width};

// ---------------------------------------------------------------------------
// PlaceOptions
// ---------------------------------------------------------------------------

/// How the cells around a placed block are filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceOptions {
    /// Character repeated across the fill area.
    pub fill_char: char,
    /// Style applied to fill runs only, never to the placed content.
    pub fill_style: Option<ContentStyle>,
}

impl Default for PlaceOptions {
    fn default() -> Self {
        Self {
            fill_char: ' ',
            fill_style: None,
        }
    }
}

impl PlaceOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill character (builder).
    pub fn with_fill_char(mut self, fill_char: char) -> Self {
        self.fill_char = fill_char;
        self
    }

    /// Set the fill style (builder).
    pub fn with_fill_style(mut self, style: ContentStyle) -> Self {
        self.fill_style = Some(style);
        self
    }

    /// A fill run exactly `width` columns wide.
    fn fill(&self, width: usize) -> String {
        if width == 0 {
            return String::new();
        }
        let run = repeat_to_width(self.fill_char, width);
        match self.fill_style {
            Some(style) => style.apply(run).to_string(),
            None => run,
        }
    }
}

// ---------------------------------------------------------------------------
// Placement
// ---------------------------------------------------------------------------

/// Place `block` inside a `width` × `height` field.
///
/// Content larger than the field is left unclipped; the result is then
/// larger than requested along that axis.
///
/// # Errors
///
/// [`LayoutError::NegativeWidth`] / [`LayoutError::NegativeHeight`] when a
/// dimension is below zero.
pub fn place(
    width: i32,
    height: i32,
    horizontal: impl Into<Align>,
    vertical: impl Into<Align>,
    block: &Block,
    options: &PlaceOptions,
) -> Result<Block, LayoutError> {
    let width = checked_width(width)?;
    let height = checked_height(height)?;
    let placed = horizontal_in(width, horizontal.into(), block, options);
    let fill_width = width.max(placed.width());
    Ok(vertical_in(height, fill_width, vertical.into(), &placed, options))
}

/// Place `block` horizontally in a field `width` columns wide.
///
/// # Errors
///
/// [`LayoutError::NegativeWidth`] when `width` is below zero.
pub fn place_horizontal(
    width: i32,
    align: impl Into<Align>,
    block: &Block,
    options: &PlaceOptions,
) -> Result<Block, LayoutError> {
    let width = checked_width(width)?;
    Ok(horizontal_in(width, align.into(), block, options))
}

/// Place `block` vertically in a field `height` lines tall.
///
/// # Errors
///
/// [`LayoutError::NegativeHeight`] when `height` is below zero.
pub fn place_vertical(
    height: i32,
    align: impl Into<Align>,
    block: &Block,
    options: &PlaceOptions,
) -> Result<Block, LayoutError> {
    let height = checked_height(height)?;
    Ok(vertical_in(height, block.width(), align.into(), block, options))
}

fn checked_width(width: i32) -> Result<usize, LayoutError> {
    usize::try_from(width).map_err(|_| LayoutError::NegativeWidth(width))
}

fn checked_height(height: i32) -> Result<usize, LayoutError> {
    usize::try_from(height).map_err(|_| LayoutError::NegativeHeight(height))
}

fn horizontal_in(width: usize, align: Align, block: &Block, options: &PlaceOptions) -> Block {
    let content = block.width();
    if content >= width {
        if content > width {
            debug!("placed content is {content} columns wide, field is {width}");
        }
        return Block::from_lines(block.lines().iter().map(|l| pad_right(l, content)));
    }

    let (left, right) = align.split(width - content);
    let left = options.fill(left);
    let right = options.fill(right);
    Block::from_lines(
        block
            .lines()
            .iter()
            .map(|line| format!("{left}{}{right}", pad_right(line, content))),
    )
}

/// Blank lines are `fill_width` columns of fill.
fn vertical_in(
    height: usize,
    fill_width: usize,
    align: Align,
    block: &Block,
    options: &PlaceOptions,
) -> Block {
    if block.height() >= height {
        if block.height() > height {
            debug!("placed content is {} lines tall, field is {height}", block.height());
        }
        return block.clone();
    }

    let (above, below) = align.split(height - block.height());
    let blank = options.fill(fill_width);
    let mut lines = Vec::with_capacity(height);
    lines.extend(std::iter::repeat_n(blank.clone(), above));
    lines.extend(block.lines().iter().cloned());
    lines.extend(std::iter::repeat_n(blank, below));
    Block::from_lines(lines)
}
