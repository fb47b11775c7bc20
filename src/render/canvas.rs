//! Layers and the canvas they are composited on.

use std::fmt;

use log::debug;

use super::compositor::Compositor;
use crate::block::Block;
use crate::geometry::{Offset, Region, Size};

// ---------------------------------------------------------------------------
// Layer
// ---------------------------------------------------------------------------

/// A block pinned at a position on a [`Canvas`].
///
/// Layers are values: [`Layer::at`] and [`Layer::with_id`] return a new
/// layer instead of changing this one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Layer {
    block: Block,
    offset: Offset,
    id: Option<String>,
}

impl Layer {
    /// A layer at the origin.
    pub fn new(content: impl Into<Block>) -> Self {
        Self {
            block: content.into(),
            offset: Offset::ZERO,
            id: None,
        }
    }

    /// The same layer with its top-left corner at (x, y).
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.offset = Offset::new(x, y);
        self
    }

    /// The same layer tagged with `id`, reported back by [`Canvas::hit`].
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn block(&self) -> &Block {
        &self.block
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn x(&self) -> i32 {
        self.offset.x
    }

    pub fn y(&self) -> i32 {
        self.offset.y
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn size(&self) -> Size {
        Size::new(self.block.width() as i32, self.block.height() as i32)
    }

    /// Bounding box of the layer's content on the canvas.
    pub fn region(&self) -> Region {
        Region::at(self.offset, self.size())
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// An ordered stack of layers.
///
/// Layers paint in insertion order, so later layers cover earlier ones where
/// they overlap. Unless fixed with [`Canvas::with_size`], the canvas is
/// exactly large enough to hold every layer's bounding box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Canvas {
    layers: Vec<Layer>,
    fixed: Option<Size>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_layers(layers: impl IntoIterator<Item = Layer>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
            fixed: None,
        }
    }

    /// Add `layer` on top of the existing ones (builder).
    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Fix the canvas size instead of deriving it from the layers (builder).
    ///
    /// Content beyond the fixed size is clipped. Negative dimensions count
    /// as zero.
    pub fn with_size(mut self, width: i32, height: i32) -> Self {
        self.fixed = Some(Size::new(width.max(0), height.max(0)));
        self
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// The fixed size, or the extent of all layers measured from the origin.
    pub fn size(&self) -> Size {
        if let Some(size) = self.fixed {
            return size;
        }
        let bounds = self
            .layers
            .iter()
            .map(Layer::region)
            .fold(Region::EMPTY, Region::union);
        Size::new(bounds.right().max(0), bounds.bottom().max(0))
    }

    /// The topmost layer whose bounding box covers (x, y).
    pub fn hit(&self, x: i32, y: i32) -> Option<&Layer> {
        if !self.size().contains(x, y) {
            return None;
        }
        self.layers.iter().rev().find(|l| l.region().contains(x, y))
    }

    /// Composite every layer and serialize the result.
    ///
    /// An empty canvas renders to the empty string.
    pub fn render(&self) -> String {
        let size = self.size();
        if size.is_empty() {
            return String::new();
        }
        debug!(
            "compositing {} layers onto {}x{}",
            self.layers.len(),
            size.width,
            size.height
        );
        let mut compositor = Compositor::new(size);
        for layer in &self.layers {
            compositor.paint(layer);
        }
        compositor.render()
    }
}

impl FromIterator<Layer> for Canvas {
    fn from_iter<I: IntoIterator<Item = Layer>>(iter: I) -> Self {
        Self::from_layers(iter)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

// ===========================================================================
// Tests
// ===========================================================================
