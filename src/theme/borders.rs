/// Border character set for drawing boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

/// Standard single-line borders
pub const BORDER_NORMAL: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
};

/// Rounded corners (default)
pub const BORDER_ROUNDED: BorderSet = BorderSet {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    horizontal: '─',
    vertical: '│',
};

/// Heavy/bold borders
pub const BORDER_THICK: BorderSet = BorderSet {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
};

/// Double-line borders
pub const BORDER_DOUBLE: BorderSet = BorderSet {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
};

/// Named border styles accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    Normal,
    #[default]
    Rounded,
    Thick,
    Double,
}

impl BorderStyle {
    /// Strict parse. The empty string selects the default style.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "" | "rounded" => Some(Self::Rounded),
            "normal" => Some(Self::Normal),
            "thick" => Some(Self::Thick),
            "double" => Some(Self::Double),
            _ => None,
        }
    }

    /// Lenient lookup used at render time: unknown names fall back to rounded.
    pub fn resolve(name: &str) -> Self {
        Self::from_name(name).unwrap_or_default()
    }

    pub fn names() -> &'static [&'static str] {
        &["normal", "rounded", "thick", "double"]
    }

    pub fn glyphs(&self) -> BorderSet {
        match self {
            Self::Normal => BORDER_NORMAL,
            Self::Rounded => BORDER_ROUNDED,
            Self::Thick => BORDER_THICK,
            Self::Double => BORDER_DOUBLE,
        }
    }
}

/// Glyphs for a style name, falling back to rounded.
pub fn glyphs_for(name: &str) -> BorderSet {
    BorderStyle::resolve(name).glyphs()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glyphs_for_known_styles() {
        assert_eq!(glyphs_for("normal").top_left, '┌');
        assert_eq!(glyphs_for("rounded").top_left, '╭');
        assert_eq!(glyphs_for("thick").horizontal, '━');
        assert_eq!(glyphs_for("double").vertical, '║');
    }

    #[test]
    fn glyphs_for_falls_back_to_rounded() {
        assert_eq!(glyphs_for(""), BORDER_ROUNDED);
        assert_eq!(glyphs_for("dotted"), BORDER_ROUNDED);
        assert_eq!(glyphs_for("THICK"), BORDER_ROUNDED);
    }

    #[test]
    fn from_name_is_strict() {
        assert_eq!(BorderStyle::from_name(""), Some(BorderStyle::Rounded));
        assert_eq!(BorderStyle::from_name("double"), Some(BorderStyle::Double));
        assert_eq!(BorderStyle::from_name("fancy"), None);
    }

    #[test]
    fn every_listed_name_parses() {
        for name in BorderStyle::names() {
            assert!(BorderStyle::from_name(name).is_some(), "{name}");
        }
    }
}
