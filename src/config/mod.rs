//! Command-line parsing and validation helpers.

mod validation;

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::model::BoxKind;
use crate::style::ColorChoice;

pub use validation::{
    parse_box, parse_kv_pair, parse_kv_pairs, smart_split_kv, validate_border_style,
    validate_box, validate_kv_pair,
};

/// CLI options for boxed. Each box kind is its own subcommand.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "boxed",
    about = "Render gradient-bordered status boxes for terminal output",
    long_about = "boxed renders bordered status boxes in the terminal with titles, subtitles, \
                  key-value pairs, and footers. Useful for deployment scripts, CI pipelines, \
                  and any command-line tool that needs clear visual status output.",
    author,
    version
)]
pub struct AppConfig {
    #[command(subcommand)]
    pub command: KindCommand,

    /// When to emit colors (auto, always, never)
    #[arg(long, value_enum, global = true, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Enable structured trace logging
    #[arg(long = "logs", env = "BOXED_LOGS", global = true, default_value_t = false)]
    pub logs: bool,

    /// Disable all trace logging (overrides --logs)
    #[arg(long = "no-logs", env = "BOXED_NO_LOGS", global = true, default_value_t = false)]
    pub no_logs: bool,
}

impl AppConfig {
    pub fn logging_enabled(&self) -> bool {
        self.logs && !self.no_logs
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum KindCommand {
    /// Render a success box (green gradient)
    Success(BoxArgs),
    /// Render an error box (red gradient)
    Error(BoxArgs),
    /// Render an info box (blue gradient)
    Info(BoxArgs),
    /// Render a warning box (yellow gradient)
    Warning(BoxArgs),
}

impl KindCommand {
    pub fn kind(&self) -> BoxKind {
        match self {
            Self::Success(_) => BoxKind::Success,
            Self::Error(_) => BoxKind::Error,
            Self::Info(_) => BoxKind::Info,
            Self::Warning(_) => BoxKind::Warning,
        }
    }

    /// Flatten the parsed command into what the executor needs.
    pub fn into_invocation(self) -> Invocation {
        let kind = self.kind();
        let (Self::Success(args) | Self::Error(args) | Self::Info(args) | Self::Warning(args)) =
            self;
        let source = args.input_source();
        Invocation {
            kind,
            exit_on_error: args.exit_on_error,
            exit_on_warning: args.exit_on_warning,
            options: BoxOptions {
                title: args.title.unwrap_or_default(),
                subtitle: args.subtitle.unwrap_or_default(),
                kv_flags: args.kv,
                extra_pairs: Vec::new(),
                footer: args.footer.unwrap_or_default(),
                width: args.width,
                border_style: args.border_style.unwrap_or_default(),
            },
            source,
        }
    }
}

/// Flags shared by every box kind.
#[derive(Debug, Args, Clone, Default)]
pub struct BoxArgs {
    /// Box title (bold, accent color)
    #[arg(short = 't', long)]
    pub title: Option<String>,

    /// Box subtitle (italic, faint)
    #[arg(short = 's', long)]
    pub subtitle: Option<String>,

    /// Key-value pairs (repeatable, format: key=value)
    #[arg(short = 'k', long = "kv", value_name = "KEY=VALUE", action = ArgAction::Append)]
    pub kv: Vec<String>,

    /// Box footer (dim)
    #[arg(short = 'f', long)]
    pub footer: Option<String>,

    /// Minimum content width (0 for auto-size)
    #[arg(short = 'w', long, default_value_t = 0, allow_negative_numbers = true)]
    pub width: i64,

    /// Border style (normal, rounded, thick, double) [default: rounded]
    #[arg(short = 'b', long = "border-style")]
    pub border_style: Option<String>,

    /// Read additional key=value pairs from stdin, one per line
    #[arg(long = "stdin-kv", conflicts_with_all = ["json", "json_file"])]
    pub stdin_kv: bool,

    /// Read the box definition as JSON from stdin
    #[arg(long, conflicts_with = "json_file")]
    pub json: bool,

    /// Read the box definition as JSON from a file
    #[arg(long = "json-file", value_name = "PATH")]
    pub json_file: Option<PathBuf>,

    /// Exit with status 1 after rendering an error box
    #[arg(long = "exit-on-error")]
    pub exit_on_error: bool,

    /// Exit with status 2 after rendering a warning box
    #[arg(long = "exit-on-warning")]
    pub exit_on_warning: bool,
}

impl BoxArgs {
    pub fn input_source(&self) -> InputSource {
        if let Some(path) = &self.json_file {
            InputSource::JsonFile(path.clone())
        } else if self.json {
            InputSource::JsonStdin
        } else if self.stdin_kv {
            InputSource::StdinKv
        } else {
            InputSource::Flags
        }
    }
}

/// Where box content comes from besides the flags themselves.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InputSource {
    #[default]
    Flags,
    StdinKv,
    JsonStdin,
    JsonFile(PathBuf),
}

/// Raw, unvalidated box fields gathered from flags and input readers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoxOptions {
    pub title: String,
    pub subtitle: String,
    /// `key=value` strings from `--kv`, comma-separated pairs allowed.
    pub kv_flags: Vec<String>,
    /// Pairs already split by a reader (stdin lines, JSON objects).
    pub extra_pairs: Vec<crate::model::Kv>,
    pub footer: String,
    pub width: i64,
    pub border_style: String,
}

impl BoxOptions {
    /// Fill fields the command line left empty from `other`; append its pairs.
    pub fn merge_missing(&mut self, other: BoxOptions) {
        if self.title.is_empty() {
            self.title = other.title;
        }
        if self.subtitle.is_empty() {
            self.subtitle = other.subtitle;
        }
        if self.footer.is_empty() {
            self.footer = other.footer;
        }
        if self.width == 0 {
            self.width = other.width;
        }
        if self.border_style.is_empty() {
            self.border_style = other.border_style;
        }
        self.kv_flags.extend(other.kv_flags);
        self.extra_pairs.extend(other.extra_pairs);
    }
}

/// A fully parsed request for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub kind: BoxKind,
    pub options: BoxOptions,
    pub source: InputSource,
    pub exit_on_error: bool,
    pub exit_on_warning: bool,
}
