//! Fractional alignment along one axis.

use std::str::FromStr;

/// Where a block sits along an axis when padded to a larger size.
///
/// The named forms are shorthands for the canonical fractions: `Left`,
/// `Top` = 0.0, `Center`, `Middle` = 0.5, `Right`, `Bottom` = 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
    Top,
    Middle,
    Bottom,
    /// Anchor in `[0.0, 1.0]`. Out-of-range values are clamped; NaN is 0.
    Fraction(f64),
}

impl Align {
    /// The anchor as a fraction in `[0.0, 1.0]`.
    pub fn fraction(self) -> f64 {
        match self {
            Align::Left | Align::Top => 0.0,
            Align::Center | Align::Middle => 0.5,
            Align::Right | Align::Bottom => 1.0,
            Align::Fraction(f) if f.is_nan() => 0.0,
            Align::Fraction(f) => f.clamp(0.0, 1.0),
        }
    }

    /// Split `deficit` spare cells into `(before, after)`.
    ///
    /// `before` is `fraction × deficit` rounded half down, so an odd cell
    /// left over at 0.5 goes after the content.
    pub fn split(self, deficit: usize) -> (usize, usize) {
        let exact = self.fraction() * deficit as f64;
        let before = ((exact - 0.5).ceil().max(0.0) as usize).min(deficit);
        (before, deficit - before)
    }
}

impl From<f64> for Align {
    fn from(fraction: f64) -> Self {
        Align::Fraction(fraction)
    }
}

/// Error for an alignment token that is neither a known name nor a number in
/// `0.0..=1.0`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid alignment {0:?}: expected left|center|right|top|middle|bottom or a number in 0..=1")]
pub struct AlignParseError(pub String);

impl FromStr for Align {
    type Err = AlignParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let named = match token.to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            "top" => Some(Align::Top),
            "middle" => Some(Align::Middle),
            "bottom" => Some(Align::Bottom),
            _ => None,
        };
        if let Some(align) = named {
            return Ok(align);
        }
        match token.parse::<f64>() {
            Ok(f) if (0.0..=1.0).contains(&f) => Ok(Align::Fraction(f)),
            _ => Err(AlignParseError(s.to_owned())),
        }
    }
}
