//! Box composition: measure, then emit every line with a position-based color.
//!
//! The line count is fixed by [`BoxLayout::measure`] before anything is
//! drawn, so each line's gradient color can be taken from its index in the
//! finished box. Every emitted line consumes exactly one index.

mod layout;
mod lines;

pub use layout::{
    box_width, content_lines, total_line_count, BoxLayout, ContentLine, Header, CONTENT_PADDING,
    MAX_LINE_WIDTH,
};

use crate::gradient::LinePosition;
use crate::model::StatusBox;
use crate::style::{Color, Painter};
use crate::theme::glyphs_for;
use lines::{border_line, content_line, empty_line, footer_line, header_line, Edge};

/// Turns a validated box into terminal text.
pub trait Renderer {
    fn render_box(&self, b: &StatusBox) -> String;
}

/// Renderer drawing a vertical gradient from the top border to the bottom one.
#[derive(Debug, Clone, Copy)]
pub struct GradientRenderer {
    painter: Painter,
}

impl GradientRenderer {
    pub fn new(painter: Painter) -> Self {
        Self { painter }
    }
}

impl Renderer for GradientRenderer {
    fn render_box(&self, b: &StatusBox) -> String {
        let layout = BoxLayout::measure(b);
        tracing::trace!(
            kind = %b.kind,
            content_width = layout.content_width,
            total_lines = layout.total_lines,
            "measured box"
        );
        compose(&self.painter, b, &layout).join("\n")
    }
}

/// Hands out line positions in order and tracks how many were used.
struct LineCursor<'g> {
    next: usize,
    total: usize,
    gradient: &'g [Color],
}

impl<'g> LineCursor<'g> {
    fn new(total: usize, gradient: &'g [Color]) -> Self {
        Self {
            next: 0,
            total,
            gradient,
        }
    }

    /// Color for the next line; advances the index.
    fn advance(&mut self) -> Color {
        let color = LinePosition::new(self.next, self.total).color_in(self.gradient);
        self.next += 1;
        color
    }
}

fn compose(painter: &Painter, b: &StatusBox, layout: &BoxLayout<'_>) -> Vec<String> {
    let palette = b.kind.palette();
    let glyphs = glyphs_for(&b.border_style);
    let inner = layout.inner_width();
    let mut cursor = LineCursor::new(layout.total_lines, palette.gradient);
    let mut out = Vec::with_capacity(layout.total_lines);

    out.push(border_line(painter, &glyphs, Edge::Top, inner, cursor.advance()));

    if !layout.header.is_empty() {
        out.push(header_line(
            painter,
            &glyphs,
            &layout.header,
            inner,
            palette.accent,
            palette.gradient,
            cursor.advance(),
        ));
    }

    // A box without rows gets only this one blank line.
    out.push(empty_line(painter, &glyphs, inner, cursor.advance()));
    if !layout.content.is_empty() {
        for line in &layout.content {
            out.push(content_line(
                painter,
                &glyphs,
                line,
                layout.content_width,
                cursor.advance(),
            ));
        }
        out.push(empty_line(painter, &glyphs, inner, cursor.advance()));
    }

    if !layout.footer.is_empty() {
        out.push(footer_line(painter, &glyphs, layout.footer, inner, cursor.advance()));
    }

    out.push(border_line(painter, &glyphs, Edge::Bottom, inner, cursor.advance()));

    debug_assert_eq!(cursor.next, cursor.total, "line count drifted from layout");
    out
}
