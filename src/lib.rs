//! # gilt-weave
//!
//! ANSI-aware text layout for terminals: measure styled text, frame it in
//! borders, join and place blocks, and composite positioned layers onto a
//! single canvas.
//!
//! Style is expected to be baked into the text already (as escape sequences)
//! by whatever renders it; this crate only works out where things go.
//!
//! ## Core Systems
//!
//! - **[`ansi`]**: Escape-sequence model: control/visible segmentation, strip, SGR state
//! - **[`measure`]**: Display widths (wide and zero-width aware), truncation
//! - **[`block`]**: Measured multi-line unit of styled text
//! - **[`border`]**: Border presets, custom glyphs, side masks, framing
//! - **[`layout`]**: Fractional alignment, horizontal/vertical joins, placement
//! - **[`render`]**: Layers, canvas, and the cell-grid compositor
//! - **[`geometry`]**: Offset, Size, Region primitives
//!
//! ```
//! use gilt_weave::{frame, join_horizontal, Align, Block, BorderSpec, Canvas, Layer};
//!
//! let left = frame(&BorderSpec::rounded(), &Block::new("left"));
//! let right = frame(&BorderSpec::normal(), &Block::new("right\nside"));
//! let row = join_horizontal(Align::Top, &[left, right]);
//! assert_eq!(row.height(), 4);
//!
//! let canvas = Canvas::new()
//!     .with_layer(Layer::new(row))
//!     .with_layer(Layer::new("!").at(1, 1));
//! assert!(canvas.render().starts_with("╭────╮┌─────┐"));
//! ```

// Foundation
pub mod geometry;

// Text model
pub mod ansi;
pub mod block;
pub mod measure;

// Layout
pub mod border;
pub mod layout;

// Compositing
pub mod render;

pub use ansi::{has_escapes, strip};
pub use block::Block;
pub use border::{frame, frame_styled, BorderGlyphs, BorderKind, BorderSides, BorderSpec};
pub use layout::{
    join_horizontal, join_vertical, place, place_horizontal, place_vertical, Align,
    AlignParseError, LayoutError, PlaceOptions,
};
pub use measure::{block_height, block_width, line_width, truncate};
pub use render::{Canvas, Layer};
