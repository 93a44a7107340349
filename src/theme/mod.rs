//! Static lookup tables: border glyphs and per-kind colors.

mod borders;
mod palettes;

pub use borders::{
    glyphs_for, BorderSet, BorderStyle, BORDER_DOUBLE, BORDER_NORMAL, BORDER_ROUNDED,
    BORDER_THICK,
};
pub use palettes::{
    PALETTE_DEFAULT, PALETTE_ERROR, PALETTE_INFO, PALETTE_SUCCESS, PALETTE_WARNING,
};

use crate::model::BoxKind;
use crate::style::Color;

/// Dim gray for footer text and hatching.
pub const NEUTRAL: Color = Color(240);

/// Colors used for one box kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindPalette {
    /// Solid color for the title text.
    pub accent: Color,
    /// Top-to-bottom border ramp.
    pub gradient: &'static [Color],
}

impl BoxKind {
    pub fn palette(&self) -> KindPalette {
        match self {
            Self::Success => PALETTE_SUCCESS,
            Self::Error => PALETTE_ERROR,
            Self::Info => PALETTE_INFO,
            Self::Warning => PALETTE_WARNING,
            Self::Default => PALETTE_DEFAULT,
        }
    }
}
