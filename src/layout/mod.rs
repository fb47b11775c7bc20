//! Layout joiner: fractional alignment, block joins, and placement.

pub mod align;
pub mod join;
pub mod place;

pub use align::{Align, AlignParseError};
pub use join::{join_horizontal, join_vertical};
pub use place::{place, place_horizontal, place_vertical, PlaceOptions};

/// Errors from layout operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("field width must not be negative, got {0}")]
    NegativeWidth(i32),
    #[error("field height must not be negative, got {0}")]
    NegativeHeight(i32),
}
