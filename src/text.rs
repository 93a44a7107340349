//! Width-aware text layout: word wrapping, long-token breaking, truncation.
//!
//! All widths are terminal display cells, measured per grapheme cluster so
//! CJK, emoji, and combining sequences count the way a terminal draws them.
//! Every function here is total: any string and any width produce a result.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Appended by [`truncate`] when text is cut.
pub const ELLIPSIS: &str = "...";

/// Characters a long token prefers to break after.
const BREAK_SEPARATORS: [char; 4] = ['/', '_', '-', '.'];

/// Calculate display width excluding ANSI escape codes.
pub fn display_width(s: &str) -> usize {
    if !s.contains('\x1b') {
        return UnicodeWidthStr::width(s);
    }
    UnicodeWidthStr::width(strip_ansi_escapes::strip_str(s).as_str())
}

#[inline]
fn grapheme_width(grapheme: &str) -> usize {
    UnicodeWidthStr::width(grapheme)
}

/// Wrap `text` at word boundaries so each line fits `max_width` cells.
///
/// Words wider than `max_width` are split with [`break_long_word`]; the
/// trailing fragment stays open so following words can join it.
/// A zero width or whitespace-only input comes back as a single untouched
/// line.
pub fn wrap(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return vec![text.to_string()];
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return vec![text.to_string()];
    }

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0usize;
    let last = words.len() - 1;

    for (i, word) in words.iter().enumerate() {
        let word_width = display_width(word);

        if word_width > max_width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let mut fragments = break_long_word(word, max_width);
            if i < last {
                if let Some(tail) = fragments.pop() {
                    current_width = display_width(&tail);
                    current = tail;
                }
            }
            lines.extend(fragments);
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            current_width = word_width;
        } else if current_width + 1 + word_width <= max_width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut current, (*word).to_string()));
            current_width = word_width;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Split a single token into fragments of roughly `max_width` cells.
///
/// Graphemes accumulate into a chunk until it reaches `max_width`. The chunk
/// is then cut just after its last separator (`/ _ - .`) when that
/// separator is neither the first nor the final character, carrying the
/// remainder forward; otherwise the whole chunk is emitted. Concatenating
/// the fragments always reproduces `word`.
pub fn break_long_word(word: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 || display_width(word) <= max_width {
        return vec![word.to_string()];
    }

    let mut fragments = Vec::new();
    let mut chunk = String::new();
    let mut chunk_width = 0usize;

    for grapheme in word.graphemes(true) {
        chunk.push_str(grapheme);
        chunk_width += grapheme_width(grapheme);

        if chunk_width < max_width {
            continue;
        }

        match separator_split(&chunk) {
            Some(at) => {
                let rest = chunk.split_off(at);
                fragments.push(std::mem::replace(&mut chunk, rest));
                chunk_width = display_width(&chunk);
            }
            None => {
                fragments.push(std::mem::take(&mut chunk));
                chunk_width = 0;
            }
        }
    }

    if !chunk.is_empty() {
        fragments.push(chunk);
    }
    fragments
}

/// Byte offset just past the last usable separator in `chunk`.
fn separator_split(chunk: &str) -> Option<usize> {
    let (pos, sep) = chunk
        .char_indices()
        .filter(|(_, c)| BREAK_SEPARATORS.contains(c))
        .last()?;
    let end = pos + sep.len_utf8();
    (pos > 0 && end < chunk.len()).then_some(end)
}

/// Cut `text` to at most `max_width` cells, ending in [`ELLIPSIS`] when cut.
///
/// Widths of 3 or less always yield the bare ellipsis.
pub fn truncate(text: &str, max_width: usize) -> String {
    if max_width <= ELLIPSIS.len() {
        return ELLIPSIS.to_string();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }

    let budget = max_width - ELLIPSIS.len();
    let mut kept = String::new();
    let mut width = 0usize;
    for grapheme in text.graphemes(true) {
        let w = grapheme_width(grapheme);
        if width + w > budget {
            break;
        }
        kept.push_str(grapheme);
        width += w;
    }

    kept.push_str(ELLIPSIS);
    kept
}
