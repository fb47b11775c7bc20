//! Block: a measured, multi-line unit of styled text.

use std::fmt;

use crate::measure::{line_width, split_lines};

/// Styled text split into lines, with its width measured once.
///
/// Blocks are immutable. Every layout operation takes blocks by reference
/// and returns a new one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Block {
    lines: Vec<String>,
    width: usize,
}

impl Block {
    /// Split `text` on line feeds. A `\r` right before a `\n` is dropped.
    ///
    /// The empty string gives a block with no lines at all; use
    /// [`Block::from_lines`] for a single empty line.
    pub fn new(text: &str) -> Self {
        Self::from_lines(split_lines(text))
    }

    /// Build a block from already-split lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines.into_iter().map(Into::into).collect();
        let width = lines.iter().map(|l| line_width(l)).max().unwrap_or(0);
        Self { lines, width }
    }

    /// A block with no lines.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Widest line, in columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of lines.
    #[inline]
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(line)?;
        }
        Ok(())
    }
}

impl From<&str> for Block {
    fn from(text: &str) -> Self {
        Block::new(text)
    }
}

impl From<String> for Block {
    fn from(text: String) -> Self {
        Block::new(&text)
    }
}

impl From<&String> for Block {
    fn from(text: &String) -> Self {
        Block::new(text)
    }
}
