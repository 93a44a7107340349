//! Builders for each kind of emitted line.

use super::layout::{ContentLine, Header, CONTENT_PADDING};
use crate::gradient::sample;
use crate::style::{Color, Painter, Style};
use crate::text::{display_width, truncate, ELLIPSIS};
use crate::theme::{BorderSet, NEUTRAL};

/// Hatch glyph filling header and footer rows.
const HATCH: char = '╱';
const HATCH_PREFIX: &str = "╱╱ ";
const LABEL_SUFFIX: &str = " ";

/// Which border row to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Full-width border row in a single color.
pub fn border_line(
    painter: &Painter,
    glyphs: &BorderSet,
    edge: Edge,
    inner_width: usize,
    color: Color,
) -> String {
    let (left, right) = match edge {
        Edge::Top => (glyphs.top_left, glyphs.top_right),
        Edge::Bottom => (glyphs.bottom_left, glyphs.bottom_right),
    };
    let mut line = String::with_capacity((inner_width + 2) * 3);
    line.push(left);
    line.extend(std::iter::repeat(glyphs.horizontal).take(inner_width));
    line.push(right);
    painter.fg(color, &line)
}

/// Wrap already-rendered inner content in side borders.
fn framed(painter: &Painter, glyphs: &BorderSet, color: Color, inner: &str) -> String {
    let side = glyphs.vertical.to_string();
    let side = painter.fg(color, &side);
    format!("{side}{inner}{side}")
}

pub fn empty_line(painter: &Painter, glyphs: &BorderSet, inner_width: usize, color: Color) -> String {
    framed(painter, glyphs, color, &" ".repeat(inner_width))
}

/// One KV row, padded to the content width plus margins.
pub fn content_line(
    painter: &Painter,
    glyphs: &BorderSet,
    line: &ContentLine<'_>,
    content_width: usize,
    color: Color,
) -> String {
    let margin = " ".repeat(CONTENT_PADDING);
    let mut inner = String::with_capacity(content_width + CONTENT_PADDING * 2 + 16);
    inner.push_str(&margin);
    match line.key {
        Some(key) => {
            inner.push_str(&painter.paint(Style::default().faint(), key));
            inner.push_str(": ");
        }
        None => inner.push_str(&" ".repeat(line.indent)),
    }
    inner.push_str(&line.text);
    inner.push_str(&" ".repeat(content_width.saturating_sub(line.width)));
    inner.push_str(&margin);
    framed(painter, glyphs, color, &inner)
}

/// Header row: hatch prefix, styled title/subtitle, then a hatch sweep
/// across the gradient up to the right border.
pub fn header_line(
    painter: &Painter,
    glyphs: &BorderSet,
    header: &Header<'_>,
    inner_width: usize,
    accent: Color,
    gradient: &[Color],
    side_color: Color,
) -> String {
    let title_style = Style::fg(accent).bold();
    let subtitle_style = Style::default().italic().faint();

    let chrome = display_width(HATCH_PREFIX) + display_width(LABEL_SUFFIX);
    let (label, text_width) = if chrome + header.width() >= inner_width {
        fitted_header(
            painter,
            header,
            inner_width.saturating_sub(chrome),
            title_style,
            subtitle_style,
        )
    } else {
        (
            styled_header(painter, header, title_style, subtitle_style),
            header.width(),
        )
    };
    let label_width = chrome + text_width;

    let mut inner = painter.fg(sample(gradient, 0.0), HATCH_PREFIX);
    inner.push_str(&label);
    inner.push_str(LABEL_SUFFIX);
    inner.push_str(&hatch_sweep(painter, gradient, inner_width.saturating_sub(label_width)));
    framed(painter, glyphs, side_color, &inner)
}

fn styled_header(painter: &Painter, header: &Header<'_>, title: Style, subtitle: Style) -> String {
    let mut out = painter.paint(title, header.title);
    if !header.subtitle.is_empty() {
        if !header.title.is_empty() {
            out.push(' ');
        }
        out.push_str(&painter.paint(subtitle, header.subtitle));
    }
    out
}

/// Header text cut to `avail` cells, returned with its display width.
///
/// The subtitle gives way first and keeps its own style while any of it
/// still fits; past that the joined text is cut in the title style.
fn fitted_header(
    painter: &Painter,
    header: &Header<'_>,
    avail: usize,
    title: Style,
    subtitle: Style,
) -> (String, usize) {
    if header.title.is_empty() {
        let cut = truncate(header.subtitle, avail);
        let width = display_width(&cut);
        return (painter.paint(subtitle, &cut), width);
    }

    let title_width = display_width(header.title);
    let room = avail.saturating_sub(title_width + 1);
    if !header.subtitle.is_empty() && room > ELLIPSIS.len() {
        let cut = truncate(header.subtitle, room);
        let width = title_width + 1 + display_width(&cut);
        let label = format!(
            "{} {}",
            painter.paint(title, header.title),
            painter.paint(subtitle, &cut)
        );
        return (label, width);
    }

    let cut = truncate(&header.plain(), avail);
    let width = display_width(&cut);
    (painter.paint(title, &cut), width)
}

/// `count` hatch glyphs, glyph `i` colored by `sample(gradient, i / count)`.
/// Neighbouring glyphs with the same color share one escape span.
fn hatch_sweep(painter: &Painter, gradient: &[Color], count: usize) -> String {
    let mut out = String::new();
    let mut run = String::new();
    let mut run_color: Option<Color> = None;

    for i in 0..count {
        let color = sample(gradient, i as f64 / count as f64);
        if run_color != Some(color) {
            if let Some(previous) = run_color {
                out.push_str(&painter.fg(previous, &run));
                run.clear();
            }
            run_color = Some(color);
        }
        run.push(HATCH);
    }
    if let Some(color) = run_color {
        out.push_str(&painter.fg(color, &run));
    }
    out
}

/// Footer row: same shape as the header, all in the neutral color.
pub fn footer_line(
    painter: &Painter,
    glyphs: &BorderSet,
    footer: &str,
    inner_width: usize,
    side_color: Color,
) -> String {
    let chrome = display_width(HATCH_PREFIX) + display_width(LABEL_SUFFIX);
    let mut text = footer.to_string();
    if chrome + display_width(&text) >= inner_width {
        text = truncate(footer, inner_width.saturating_sub(chrome));
    }
    let label_width = chrome + display_width(&text);

    let mut inner = String::with_capacity(inner_width * 3);
    inner.push_str(HATCH_PREFIX);
    inner.push_str(&text);
    inner.push_str(LABEL_SUFFIX);
    inner.extend(std::iter::repeat(HATCH).take(inner_width.saturating_sub(label_width)));
    framed(painter, glyphs, side_color, &painter.fg(NEUTRAL, &inner))
}
