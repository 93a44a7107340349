//! Measurement pass: wrap content, size the box, count its lines.

use crate::model::{Kv, StatusBox};
use crate::text::{display_width, wrap};

/// Text wider than this wraps (KV values) or stops growing the box (footer).
pub const MAX_LINE_WIDTH: usize = 100;

/// Spaces inside the side borders on each side of every body line.
pub const CONTENT_PADDING: usize = 3;

/// Separator between a key and its value.
const KEY_SEPARATOR: &str = ": ";

/// One physical content row produced from a KV pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine<'a> {
    /// Set on the first row of a pair; continuation rows are indented instead.
    pub key: Option<&'a str>,
    /// Leading spaces on continuation rows (the key prefix width).
    pub indent: usize,
    pub text: String,
    /// Display width of the whole row, key prefix included.
    pub width: usize,
}

/// Title and subtitle as they appear in the header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header<'a> {
    pub title: &'a str,
    pub subtitle: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(title: &'a str, subtitle: &'a str) -> Self {
        Self { title, subtitle }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.subtitle.is_empty()
    }

    /// Unstyled header text: title, subtitle, or both joined by a space.
    pub fn plain(&self) -> String {
        match (self.title.is_empty(), self.subtitle.is_empty()) {
            (false, false) => format!("{} {}", self.title, self.subtitle),
            (false, true) => self.title.to_string(),
            (true, false) => self.subtitle.to_string(),
            (true, true) => String::new(),
        }
    }

    pub fn width(&self) -> usize {
        display_width(&self.plain())
    }
}

/// Result of measuring a box before any line is emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxLayout<'a> {
    pub header: Header<'a>,
    pub footer: &'a str,
    pub content: Vec<ContentLine<'a>>,
    /// Width of the text column between the padding.
    pub content_width: usize,
    /// Number of lines the box will emit, borders included.
    pub total_lines: usize,
}

impl<'a> BoxLayout<'a> {
    pub fn measure(b: &'a StatusBox) -> Self {
        let content = content_lines(&b.kv_pairs);
        let content_max = content.iter().map(|line| line.width).max().unwrap_or(0);
        let header = Header::new(&b.title, &b.subtitle);
        let footer_width = display_width(&b.footer);
        let content_width = box_width(content_max, header.width(), footer_width, b.width);
        let total_lines =
            total_line_count(!header.is_empty(), content.len(), !b.footer.is_empty());

        Self {
            header,
            footer: &b.footer,
            content,
            content_width,
            total_lines,
        }
    }

    /// Width between the side borders.
    pub fn inner_width(&self) -> usize {
        self.content_width + CONTENT_PADDING * 2
    }
}

/// Wrap every KV value and lay the rows out under their keys.
pub fn content_lines(pairs: &[Kv]) -> Vec<ContentLine<'_>> {
    let mut lines = Vec::with_capacity(pairs.len());
    for kv in pairs {
        let prefix_width = display_width(&kv.key) + KEY_SEPARATOR.len();
        let wrapped = wrap(&kv.value, MAX_LINE_WIDTH.saturating_sub(prefix_width));
        let rows = wrapped
            .iter()
            .flat_map(|piece| piece.split('\n'))
            .map(row_text);
        for (i, text) in rows.enumerate() {
            let width = prefix_width + display_width(&text);
            let (key, indent) = if i == 0 {
                (Some(kv.key.as_str()), 0)
            } else {
                (None, prefix_width)
            };
            lines.push(ContentLine {
                key,
                indent,
                text,
                width,
            });
        }
    }
    lines
}

/// One physical row: drops `\r`, other control characters become spaces.
fn row_text(piece: &str) -> String {
    piece
        .chars()
        .filter(|&c| c != '\r')
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

/// Widest of content, header and (capped) footer; a larger request wins.
pub fn box_width(content: usize, header: usize, footer: usize, requested: i64) -> usize {
    let measured = content.max(header).max(footer.min(MAX_LINE_WIDTH));
    match usize::try_from(requested) {
        Ok(requested) if requested > measured => requested,
        _ => measured,
    }
}

/// Lines a box emits: borders, optional header/footer, and the body block.
///
/// A box without content rows still gets one blank body line; otherwise
/// the rows are framed by a blank line above and below.
pub fn total_line_count(has_header: bool, content_rows: usize, has_footer: bool) -> usize {
    let body = if content_rows == 0 {
        1
    } else {
        content_rows + 2
    };
    2 + usize::from(has_header) + body + usize::from(has_footer)
}
