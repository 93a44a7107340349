//! Terminal styling: color-capability detection and SGR wrapping.
//!
//! Rendering code deals only in [`Color`] palette indices; a [`Painter`]
//! built for one render call turns them into escape sequences suited to
//! the detected [`ColorMode`].

use clap::ValueEnum;
use std::env;
use std::fmt;

const RESET: &str = "\x1b[0m";

/// An entry in the 256-color ANSI palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u8);

/// Color mode capabilities of the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// 24-bit true color (16 million colors)
    #[default]
    TrueColor,
    /// 256 color mode
    Color256,
    /// Basic 16 ANSI colors
    Ansi16,
    /// No color support
    None,
}

/// `--color` flag value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Detect from the environment; plain output when stdout is not a terminal
    #[default]
    Auto,
    /// Always emit colors, detecting depth from the environment
    Always,
    /// Never emit escape sequences
    Never,
}

impl ColorMode {
    /// Detect the terminal's color capabilities from environment variables.
    pub fn detect() -> Self {
        Self::detect_from(|key| env::var(key).ok())
    }

    /// Detection against an arbitrary variable lookup.
    pub fn detect_from(var: impl Fn(&str) -> Option<String>) -> Self {
        // https://no-color.org/
        if var("NO_COLOR").is_some() {
            return Self::None;
        }

        if let Some(colorterm) = var("COLORTERM") {
            if colorterm == "truecolor" || colorterm == "24bit" {
                return Self::TrueColor;
            }
        }

        // Some terminals support truecolor but do not set COLORTERM.
        if supports_truecolor_without_colorterm(&var) {
            return Self::TrueColor;
        }

        if let Some(term) = var("TERM") {
            if term.contains("256color") || term.contains("256-color") {
                return Self::Color256;
            }
            if term.contains("color") || term.contains("xterm") || term.contains("screen") {
                return Self::Ansi16;
            }
            if term == "dumb" {
                return Self::None;
            }
        }

        Self::Ansi16
    }

    /// Apply a `--color` choice on top of detection.
    pub fn resolve(choice: ColorChoice, stdout_is_tty: bool) -> Self {
        match choice {
            ColorChoice::Never => Self::None,
            ColorChoice::Auto if !stdout_is_tty => Self::None,
            ColorChoice::Auto => Self::detect(),
            ColorChoice::Always => match Self::detect_from(|key| {
                // NO_COLOR is overridden by an explicit request.
                (key != "NO_COLOR").then(|| env::var(key).ok()).flatten()
            }) {
                Self::None => Self::Ansi16,
                mode => mode,
            },
        }
    }

    /// Check if colors are supported at all.
    pub fn supports_color(&self) -> bool {
        !matches!(self, Self::None)
    }

    pub fn supports_256(&self) -> bool {
        matches!(self, Self::TrueColor | Self::Color256)
    }
}

fn supports_truecolor_without_colorterm(var: &impl Fn(&str) -> Option<String>) -> bool {
    if let Some(term_program) = var("TERM_PROGRAM") {
        let program = term_program.to_lowercase();
        if matches!(
            program.as_str(),
            "vscode" | "cursor" | "wezterm" | "iterm.app" | "warpterminal" | "jetbrains-jediterm"
        ) || program.contains("jetbrains")
            || program.contains("jediterm")
        {
            return true;
        }
    }

    if let Some(terminal_emulator) = var("TERMINAL_EMULATOR") {
        let emulator = terminal_emulator.to_lowercase();
        if emulator.contains("jetbrains") || emulator.contains("jediterm") {
            return true;
        }
    }

    false
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TrueColor => write!(f, "truecolor"),
            Self::Color256 => write!(f, "256"),
            Self::Ansi16 => write!(f, "ansi"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Expand a 256-palette index to approximate RGB.
fn ansi256_to_rgb(index: u8) -> (u8, u8, u8) {
    const BASE16: [(u8, u8, u8); 16] = [
        (0, 0, 0),
        (128, 0, 0),
        (0, 128, 0),
        (128, 128, 0),
        (0, 0, 128),
        (128, 0, 128),
        (0, 128, 128),
        (192, 192, 192),
        (128, 128, 128),
        (255, 0, 0),
        (0, 255, 0),
        (255, 255, 0),
        (0, 0, 255),
        (255, 0, 255),
        (0, 255, 255),
        (255, 255, 255),
    ];
    const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    match index {
        0..=15 => BASE16[index as usize],
        16..=231 => {
            let i = index - 16;
            (
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        _ => {
            let level = 8 + 10 * (index - 232);
            (level, level, level)
        }
    }
}

/// Convert a 24-bit RGB color to the closest ANSI 16 color.
fn rgb_to_ansi16(r: u8, g: u8, b: u8) -> u8 {
    let brightness = (r as u16 + g as u16 + b as u16) / 3;
    let is_bright = brightness > 127;

    let max = r.max(g).max(b);
    let base = if max == 0 {
        0
    } else if r == max && g == max && b == max {
        7
    } else if r == max && g >= b {
        if g > r / 2 {
            3
        } else {
            1
        }
    } else if g == max {
        if b > g / 2 {
            6
        } else {
            2
        }
    } else if r > b / 2 {
        5
    } else {
        4
    };

    if is_bright {
        base + 8
    } else {
        base
    }
}

/// Degrade a 256-palette index to one of the 16 base colors.
pub fn ansi256_to_ansi16(index: u8) -> u8 {
    match index {
        0..=15 => return index,
        232..=255 => {
            return match 8 + 10 * (index - 232) {
                0..=127 => 8,
                128..=223 => 7,
                _ => 15,
            };
        }
        _ => {}
    }
    let (r, g, b) = ansi256_to_rgb(index);
    rgb_to_ansi16(r, g, b)
}

/// Text attributes applied together with an optional foreground color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bold: bool,
    pub italic: bool,
    pub faint: bool,
}

impl Style {
    pub fn fg(color: Color) -> Self {
        Self {
            fg: Some(color),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn faint(mut self) -> Self {
        self.faint = true;
        self
    }
}

/// Request-scoped styler. Cheap to copy; holds no global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    mode: ColorMode,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self { mode }
    }

    /// Painter that never emits escape sequences.
    pub fn plain() -> Self {
        Self::new(ColorMode::None)
    }

    /// Wrap `text` in the SGR sequence for `style`, followed by a reset.
    pub fn paint(&self, style: Style, text: &str) -> String {
        if !self.mode.supports_color() || text.is_empty() {
            return text.to_string();
        }

        let mut params: Vec<String> = Vec::with_capacity(4);
        if style.bold {
            params.push("1".to_string());
        }
        if style.faint {
            params.push("2".to_string());
        }
        if style.italic {
            params.push("3".to_string());
        }
        if let Some(Color(index)) = style.fg {
            params.push(self.fg_param(index));
        }
        if params.is_empty() {
            return text.to_string();
        }
        format!("\x1b[{}m{text}{RESET}", params.join(";"))
    }

    /// Shorthand for a color-only span.
    pub fn fg(&self, color: Color, text: &str) -> String {
        self.paint(Style::fg(color), text)
    }

    fn fg_param(&self, index: u8) -> String {
        if self.mode.supports_256() {
            return format!("38;5;{index}");
        }
        match ansi256_to_ansi16(index) {
            c @ 0..=7 => (30 + c).to_string(),
            c => (90 + c - 8).to_string(),
        }
    }
}
