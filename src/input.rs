//! Readers for box content that arrives on stdin or from a file.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::io::{BufRead, BufReader, Read};

use crate::config::{parse_kv_pair, BoxOptions};
use crate::model::Kv;

/// Reads `key=value` pairs, one per line.
pub struct StdinKvReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> StdinKvReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Blank lines are skipped. The first malformed line aborts the read.
    pub fn read_kv_pairs(self) -> Result<Vec<Kv>> {
        let mut pairs = Vec::new();
        for (idx, line) in self.reader.lines().enumerate() {
            let line = line.with_context(|| format!("failed to read stdin line {}", idx + 1))?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let kv = parse_kv_pair(line)
                .with_context(|| format!("invalid key-value pair on stdin line {}", idx + 1))?;
            pairs.push(kv);
        }
        Ok(pairs)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct JsonBox {
    title: String,
    subtitle: String,
    kv: Map<String, Value>,
    footer: String,
    width: i64,
    border_style: String,
}

/// Reads a single JSON box definition. Every field is optional.
pub struct JsonBoxReader<R: Read> {
    reader: R,
}

impl<R: Read> JsonBoxReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Decode into raw options. `kv` object order becomes row order.
    pub fn read_box(self) -> Result<BoxOptions> {
        let raw: JsonBox = serde_json::from_reader(BufReader::new(self.reader))
            .context("failed to decode JSON box definition")?;

        let mut extra_pairs = Vec::with_capacity(raw.kv.len());
        for (key, value) in raw.kv {
            let value = scalar_to_string(&key, value)?;
            extra_pairs.push(Kv::new(key, value));
        }

        Ok(BoxOptions {
            title: raw.title,
            subtitle: raw.subtitle,
            kv_flags: Vec::new(),
            extra_pairs,
            footer: raw.footer,
            width: raw.width,
            border_style: raw.border_style,
        })
    }
}

fn scalar_to_string(key: &str, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        Value::Null => Ok(String::new()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) | Value::Object(_) => {
            bail!("JSON kv value for {key:?} must be a string, got a nested structure")
        }
    }
}
