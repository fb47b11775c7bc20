//! Cell-grid compositor.
//!
//! The `Compositor` owns a fixed grid of [`Cell`]s. Layers are painted in
//! order, each overwriting whatever earlier layers left in the cells it
//! covers. Escape sequences are not copied verbatim: SGR sequences are folded
//! into the style each cell carries, and any other control is bound to the
//! next visible character on its line. Serializing walks each row and emits
//! only the style transitions between neighbouring cells.

use std::mem;

use log::{debug, trace};

use super::canvas::Layer;
use super::cell::Cell;
use crate::ansi::{segments, SgrState, RESET};
use crate::geometry::{Offset, Size};
use crate::measure::char_width;

/// A fixed-size grid that layers are painted onto.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compositor {
    /// `cells[y][x]` is the cell at column x, row y.
    cells: Vec<Vec<Cell>>,
    size: Size,
}

impl Compositor {
    /// A grid of blank cells. Non-positive dimensions give an empty grid.
    pub fn new(size: Size) -> Self {
        let size = Size::new(size.width.max(0), size.height.max(0));
        let cells = (0..size.height)
            .map(|_| (0..size.width).map(|_| Cell::blank()).collect())
            .collect();
        Self { cells, size }
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The cell at (x, y), or `None` outside the grid.
    pub fn get_cell(&self, x: i32, y: i32) -> Option<&Cell> {
        if !self.size.contains(x, y) {
            return None;
        }
        self.cells.get(y as usize).and_then(|row| row.get(x as usize))
    }

    /// Paint one layer over the current grid contents.
    ///
    /// Cells falling outside the grid are clipped silently.
    pub fn paint(&mut self, layer: &Layer) {
        if !layer.region().overlaps(self.size.to_region()) {
            debug!(
                "layer {:?} at ({}, {}) lies outside the {}x{} grid",
                layer.id(),
                layer.x(),
                layer.y(),
                self.size.width,
                self.size.height
            );
            return;
        }

        for (dy, line) in layer.block().lines().iter().enumerate() {
            let y = layer.y() + dy as i32;
            let mut x = layer.x();
            let mut sgr = SgrState::new();
            let mut prefix = String::new();
            let mut last_x: Option<i32> = None;

            for segment in segments(line) {
                if segment.is_control() {
                    if !sgr.apply(segment.text) {
                        prefix.push_str(segment.text);
                    }
                    continue;
                }
                for ch in segment.text.chars() {
                    let width = char_width(ch);
                    if width == 0 {
                        if let Some(px) = last_x {
                            self.append_mark(Offset::new(px, y), ch);
                        }
                        continue;
                    }
                    self.put(Offset::new(x, y), ch, width, sgr.as_str(), mem::take(&mut prefix));
                    last_x = Some(x);
                    x = x.saturating_add(width as i32);
                }
            }

            if !prefix.is_empty() {
                trace!("dropping trailing controls {prefix:?} on row {y}");
            }
        }
    }

    /// Serialize the grid to text.
    ///
    /// Rows are joined with `\n`. Trailing blank cells and trailing blank
    /// rows are trimmed, and every row that turned a style on ends neutral.
    pub fn render(&self) -> String {
        let mut rows: Vec<String> = self.cells.iter().map(|row| render_row(row)).collect();
        while rows.last().is_some_and(String::is_empty) {
            rows.pop();
        }
        rows.join("\n")
    }

    fn put(&mut self, pos: Offset, ch: char, width: usize, style: &str, prefix: String) {
        if !self.size.contains(pos.x, pos.y) {
            trace!("clipped {ch:?} at ({}, {})", pos.x, pos.y);
            return;
        }
        let (col, row) = (pos.x as usize, pos.y as usize);
        self.release(col, row);

        if width < 2 {
            self.cells[row][col] = Cell::new(ch, style, prefix);
        } else if self.size.contains(pos.x + 1, pos.y) {
            self.release(col + 1, row);
            self.cells[row][col] = Cell::new(ch, style, prefix);
            self.cells[row][col + 1] = Cell::continuation(style);
        } else {
            // Only the left half fits: keep the style, drop the glyph.
            trace!("clipped right half of {ch:?} at ({}, {})", pos.x, pos.y);
            self.cells[row][col] = Cell::new(' ', style, prefix);
        }
    }

    /// Break up a wide character that (col, row) is part of, so that
    /// overwriting one half never leaves the other half dangling.
    fn release(&mut self, col: usize, row: usize) {
        let line = &mut self.cells[row];
        if line[col].is_continuation() {
            if col > 0 {
                line[col - 1].symbol = " ".to_owned();
            }
        } else if line.get(col + 1).is_some_and(Cell::is_continuation) {
            line[col + 1].symbol = " ".to_owned();
        }
    }

    /// Attach a zero-width character to the cell at `pos`.
    fn append_mark(&mut self, pos: Offset, mark: char) {
        if self.size.contains(pos.x, pos.y) {
            self.cells[pos.y as usize][pos.x as usize].symbol.push(mark);
        }
    }
}

fn render_row(row: &[Cell]) -> String {
    let end = row.iter().rposition(|c| !c.is_blank()).map_or(0, |i| i + 1);
    let mut out = String::new();
    let mut active: &str = "";
    for cell in &row[..end] {
        if cell.is_continuation() {
            continue;
        }
        if cell.style != active {
            if !active.is_empty() {
                out.push_str(RESET);
            }
            out.push_str(&cell.style);
            active = &cell.style;
        }
        out.push_str(&cell.prefix);
        out.push_str(&cell.symbol);
    }
    if !active.is_empty() {
        out.push_str(RESET);
    }
    out
}

// ===========================================================================
// Tests
// ===========================================================================
