//! Horizontal and vertical concatenation of blocks.

use std::iter::repeat_n;

use super::align::Align;
use crate::block::Block;
use crate::measure::{line_width, pad_right};

/// Put blocks side by side, left to right.
///
/// Shorter blocks are padded with blank lines (as wide as the block itself)
/// to the tallest height, placed above and below according to `align`.
/// Ragged lines are filled to their block's width first so neighbouring
/// columns do not shift. No separator is inserted between blocks.
pub fn join_horizontal(align: impl Into<Align>, blocks: &[Block]) -> Block {
    let align = align.into();
    match blocks {
        [] => return Block::empty(),
        [only] => return only.clone(),
        _ => {}
    }

    let height = blocks.iter().map(Block::height).max().unwrap_or(0);
    let columns: Vec<Vec<String>> = blocks
        .iter()
        .map(|block| {
            let blank = " ".repeat(block.width());
            let (above, below) = align.split(height - block.height());
            let mut column = Vec::with_capacity(height);
            column.extend(repeat_n(blank.clone(), above));
            column.extend(block.lines().iter().map(|l| pad_right(l, block.width())));
            column.extend(repeat_n(blank, below));
            column
        })
        .collect();

    let lines = (0..height).map(|row| {
        columns
            .iter()
            .map(|column| column[row].as_str())
            .collect::<String>()
    });
    Block::from_lines(lines)
}

/// Stack blocks top to bottom.
///
/// Every line is padded with spaces to the widest block, split left/right
/// according to `align`.
pub fn join_vertical(align: impl Into<Align>, blocks: &[Block]) -> Block {
    let align = align.into();
    match blocks {
        [] => return Block::empty(),
        [only] => return only.clone(),
        _ => {}
    }

    let width = blocks.iter().map(Block::width).max().unwrap_or(0);
    let height = blocks.iter().map(Block::height).sum();
    let mut lines = Vec::with_capacity(height);
    for line in blocks.iter().flat_map(Block::lines) {
        let (left, right) = align.split(width - line_width(line));
        let mut out = String::with_capacity(line.len() + left + right);
        out.extend(repeat_n(' ', left));
        out.push_str(line);
        out.extend(repeat_n(' ', right));
        lines.push(out);
    }
    Block::from_lines(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn blocks(texts: &[&str]) -> Vec<Block> {
        texts.iter().map(|t| Block::new(t)).collect()
    }

    // -----------------------------------------------------------------------
    // join_horizontal
    // -----------------------------------------------------------------------

    #[test]
    fn horizontal_no_blocks() {
        assert_eq!(join_horizontal(Align::Top, &[]), Block::empty());
    }

    #[test]
    fn horizontal_single_block_is_identity() {
        let block = Block::new("a\nbcd");
        assert_eq!(join_horizontal(0.5, &[block.clone()]), block);
    }

    #[test]
    fn horizontal_equal_heights() {
        let joined = join_horizontal(Align::Top, &blocks(&["ab\ncd", "12\n34"]));
        assert_eq!(joined.lines(), ["ab12", "cd34"]);
    }

    #[test]
    fn horizontal_top_pads_below() {
        let joined = join_horizontal(Align::Top, &blocks(&["a\nb\nc", "XY"]));
        assert_eq!(joined.lines(), ["aXY", "b  ", "c  "]);
    }

    #[test]
    fn horizontal_bottom_pads_above() {
        let joined = join_horizontal(Align::Bottom, &blocks(&["a\nb\nc", "XY"]));
        assert_eq!(joined.lines(), ["a  ", "b  ", "cXY"]);
    }

    #[test]
    fn horizontal_middle_puts_odd_line_below() {
        let joined = join_horizontal(Align::Middle, &blocks(&["a\nb\nc\nd", "X"]));
        assert_eq!(joined.lines(), ["a ", "bX", "c ", "d "]);
    }

    #[test]
    fn horizontal_ragged_lines_keep_columns() {
        let joined = join_horizontal(Align::Top, &blocks(&["a\nabc", "|\n|"]));
        assert_eq!(joined.lines(), ["a  |", "abc|"]);
    }

    #[test]
    fn horizontal_separator_pseudo_block() {
        let joined = join_horizontal(Align::Top, &blocks(&["left", " | ", "right"]));
        assert_eq!(joined.lines(), ["left | right"]);
    }

    #[test]
    fn horizontal_styled_lines_measured_visibly() {
        let joined = join_horizontal(Align::Top, &blocks(&["\x1b[1ma\x1b[0m\nbb", "|"]));
        assert_eq!(joined.lines(), ["\x1b[1ma\x1b[0m |", "bb "]);
        assert_eq!(joined.width(), 3);
    }

    #[test]
    fn horizontal_with_empty_block() {
        let joined = join_horizontal(Align::Top, &blocks(&["", "x\ny"]));
        assert_eq!(joined.lines(), ["x", "y"]);
    }

    // -----------------------------------------------------------------------
    // join_vertical
    // -----------------------------------------------------------------------

    #[test]
    fn vertical_no_blocks() {
        assert_eq!(join_vertical(Align::Left, &[]), Block::empty());
    }

    #[test]
    fn vertical_single_block_is_identity() {
        let block = Block::new("a\nbcd");
        assert_eq!(join_vertical(Align::Right, &[block.clone()]), block);
    }

    #[test]
    fn vertical_left() {
        let joined = join_vertical(0.0, &blocks(&["A", "BB"]));
        assert_eq!(joined.lines(), ["A ", "BB"]);
    }

    #[test]
    fn vertical_right() {
        let joined = join_vertical(Align::Right, &blocks(&["A", "BBB"]));
        assert_eq!(joined.lines(), ["  A", "BBB"]);
    }

    #[test]
    fn vertical_center_puts_odd_column_right() {
        let joined = join_vertical(Align::Center, &blocks(&["A", "BBBB"]));
        assert_eq!(joined.lines(), [" A  ", "BBBB"]);
    }

    #[test]
    fn vertical_heights_add_up() {
        let parts = blocks(&["ab\ncd", "ef", "gh\nij\nkl"]);
        let joined = join_vertical(Align::Left, &parts);
        assert_eq!(joined.height(), parts.iter().map(Block::height).sum::<usize>());
        assert_eq!(joined.lines(), ["ab", "cd", "ef", "gh", "ij", "kl"]);
    }

    #[test]
    fn vertical_wide_chars() {
        let joined = join_vertical(Align::Left, &blocks(&["日本", "a"]));
        assert_eq!(joined.lines(), ["日本", "a   "]);
    }
}
