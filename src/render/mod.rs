//! Canvas compositing: layers, cell grid, serialization.

pub mod canvas;
pub mod cell;
pub mod compositor;

pub use canvas::{Canvas, Layer};
pub use cell::Cell;
pub use compositor::Compositor;
