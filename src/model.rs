//! Status box data model handed from validation to the renderer.

use std::fmt;

/// Semantic category of a box. Drives accent color and gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BoxKind {
    Success,
    Error,
    Info,
    Warning,
    /// Neutral gray styling. Not selectable from the CLI.
    #[default]
    Default,
}

impl BoxKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Default => "default",
        }
    }
}

impl fmt::Display for BoxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One key/value row in the content area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kv {
    pub key: String,
    pub value: String,
}

impl Kv {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Everything needed to render one box.
///
/// `width == 0` means auto-size. `border_style` is kept as the raw name;
/// the renderer resolves it and falls back to rounded for unknown names.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBox {
    pub kind: BoxKind,
    pub title: String,
    pub subtitle: String,
    pub kv_pairs: Vec<Kv>,
    pub footer: String,
    pub width: i64,
    pub border_style: String,
}

impl StatusBox {
    pub fn new(kind: BoxKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = footer.into();
        self
    }

    pub fn with_kv(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.kv_pairs.push(Kv::new(key, value));
        self
    }

    pub fn with_width(mut self, width: i64) -> Self {
        self.width = width;
        self
    }

    pub fn with_border_style(mut self, style: impl Into<String>) -> Self {
        self.border_style = style.into();
        self
    }

    /// True when at least one displayable field is set.
    pub fn has_content(&self) -> bool {
        !self.title.is_empty()
            || !self.subtitle.is_empty()
            || !self.kv_pairs.is_empty()
            || !self.footer.is_empty()
    }
}
