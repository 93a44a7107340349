use super::KindPalette;
use crate::style::Color;

/// Lime green sweeping toward teal
pub const PALETTE_SUCCESS: KindPalette = KindPalette {
    accent: Color(114),
    gradient: &[
        Color(114),
        Color(120),
        Color(156),
        Color(157),
        Color(158),
        Color(122),
        Color(86),
        Color(50),
    ],
};

/// Soft pink-red fading to peach
pub const PALETTE_ERROR: KindPalette = KindPalette {
    accent: Color(210),
    gradient: &[
        Color(210),
        Color(211),
        Color(217),
        Color(218),
        Color(219),
        Color(225),
        Color(224),
        Color(223),
    ],
};

/// Sky blue drifting into lavender
pub const PALETTE_INFO: KindPalette = KindPalette {
    accent: Color(111),
    gradient: &[
        Color(111),
        Color(117),
        Color(153),
        Color(189),
        Color(225),
        Color(219),
        Color(213),
        Color(177),
    ],
};

/// Golden orange through pale yellow
pub const PALETTE_WARNING: KindPalette = KindPalette {
    accent: Color(179),
    gradient: &[
        Color(179),
        Color(215),
        Color(221),
        Color(227),
        Color(228),
        Color(229),
        Color(223),
        Color(217),
    ],
};

/// Gray ramp for unclassified boxes
pub const PALETTE_DEFAULT: KindPalette = KindPalette {
    accent: Color(7),
    gradient: &[
        Color(238),
        Color(240),
        Color(242),
        Color(244),
        Color(246),
        Color(248),
        Color(250),
        Color(252),
    ],
};
