//! Gradient-bordered status boxes for terminal output.
//!
//! [`text`], [`gradient`], and [`theme`] are the pure building blocks;
//! [`render`] composes them into a box; [`app`] wires input, validation,
//! and rendering together for the `boxed` binary.

pub mod app;
pub mod config;
pub mod gradient;
pub mod input;
pub mod model;
pub mod render;
pub mod style;
pub mod telemetry;
pub mod text;
pub mod theme;

pub use app::{Executor, Outcome};
pub use model::{BoxKind, Kv, StatusBox};
pub use render::{GradientRenderer, Renderer};
pub use style::{Color, ColorChoice, ColorMode, Painter};
pub use telemetry::init_tracing;
