use super::BoxOptions;
use crate::model::{BoxKind, Kv, StatusBox};
use crate::theme::BorderStyle;
use anyhow::{bail, Result};

/// How far past a comma to look for the `=` of a following pair.
const KV_LOOKAHEAD_BYTES: usize = 50;

/// Turn raw options into a box the renderer can trust.
///
/// Every check runs before the box is built, so a returned box always
/// has a known border style, well-formed pairs, content, and a
/// non-negative width.
pub fn parse_box(kind: BoxKind, opts: BoxOptions) -> Result<StatusBox> {
    validate_border_style(&opts.border_style)?;

    let mut kv_pairs = parse_kv_pairs(&opts.kv_flags)?;
    for kv in opts.extra_pairs {
        if kv.key.is_empty() {
            bail!("invalid key-value pair {kv:?}: key cannot be empty");
        }
        kv_pairs.push(kv);
    }

    let b = StatusBox {
        kind,
        title: opts.title,
        subtitle: opts.subtitle,
        kv_pairs,
        footer: opts.footer,
        width: opts.width,
        border_style: opts.border_style,
    };
    validate_box(&b)?;
    Ok(b)
}

/// Reject border style names the renderer would silently replace.
pub fn validate_border_style(style: &str) -> Result<()> {
    if BorderStyle::from_name(style).is_none() {
        bail!(
            "invalid border style {style:?}, must be one of: {}",
            BorderStyle::names().join(", ")
        );
    }
    Ok(())
}

/// A pair needs an `=` and a non-empty key. Values may be empty.
pub fn validate_kv_pair(kv: &str) -> Result<()> {
    match kv.split_once('=') {
        None => bail!("invalid key-value pair {kv:?}: must be in format key=value"),
        Some(("", _)) => bail!("invalid key-value pair {kv:?}: key cannot be empty"),
        Some(_) => Ok(()),
    }
}

/// Validate and split at the first `=`; later `=` stay in the value.
pub fn parse_kv_pair(kv: &str) -> Result<Kv> {
    validate_kv_pair(kv)?;
    let (key, value) = kv.split_once('=').unwrap_or((kv, ""));
    Ok(Kv::new(key, value))
}

/// Parse `--kv` flags, expanding comma-separated pairs in order.
pub fn parse_kv_pairs(flags: &[String]) -> Result<Vec<Kv>> {
    let mut pairs = Vec::with_capacity(flags.len());
    for flag in flags {
        for part in smart_split_kv(flag) {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            pairs.push(parse_kv_pair(part)?);
        }
    }
    Ok(pairs)
}

/// Split on commas that start a new `key=value`, keeping other commas.
///
/// `"A=1,B=2"` gives two parts while `"Status=1 staged, 2 modified"`
/// stays whole: a comma only splits when, after optional spaces or tabs,
/// an `=` shows up within the lookahead window before any other comma.
pub fn smart_split_kv(s: &str) -> Vec<String> {
    let bytes = s.as_bytes();
    let mut parts = Vec::new();
    let mut start = 0;

    for (i, &b) in bytes.iter().enumerate() {
        if b != b',' {
            continue;
        }
        let mut j = i + 1;
        while j < bytes.len() && (bytes[j] == b' ' || bytes[j] == b'\t') {
            j += 1;
        }
        let window_end = bytes.len().min(j + KV_LOOKAHEAD_BYTES);
        let starts_pair = j < bytes.len()
            && bytes[j..window_end]
                .iter()
                .take_while(|&&c| c != b',')
                .any(|&c| c == b'=');
        if starts_pair {
            parts.push(s[start..i].to_string());
            start = i + 1;
        }
    }

    if start < s.len() {
        parts.push(s[start..].to_string());
    }
    parts
}

/// Whole-box checks that single fields cannot catch.
pub fn validate_box(b: &StatusBox) -> Result<()> {
    if !b.has_content() {
        bail!("box has no content: provide at least one of --title, --subtitle, --kv, or --footer");
    }
    if b.width < 0 {
        bail!("width must be non-negative, got {}", b.width);
    }
    Ok(())
}
