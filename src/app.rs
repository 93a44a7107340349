//! Request execution: gather input, validate, render, write.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{Read, Write};

use crate::config::{parse_box, InputSource, Invocation};
use crate::input::{JsonBoxReader, StdinKvReader};
use crate::model::BoxKind;
use crate::render::Renderer;

/// What happened after a box was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub kind: BoxKind,
    pub exit_on_error: bool,
    pub exit_on_warning: bool,
}

impl Outcome {
    /// Process status requested by the invocation's exit flags.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            BoxKind::Error if self.exit_on_error => 1,
            BoxKind::Warning if self.exit_on_warning => 2,
            _ => 0,
        }
    }
}

/// Runs invocations against one renderer and one output sink.
pub struct Executor<R: Renderer, W: Write> {
    renderer: R,
    out: W,
}

impl<R: Renderer, W: Write> Executor<R, W> {
    pub fn new(renderer: R, out: W) -> Self {
        Self { renderer, out }
    }

    /// Nothing is written unless the whole box validates.
    pub fn execute(&mut self, inv: Invocation, stdin: impl Read) -> Result<Outcome> {
        let mut options = inv.options;
        match &inv.source {
            InputSource::Flags => {}
            InputSource::StdinKv => {
                let pairs = StdinKvReader::new(stdin).read_kv_pairs()?;
                tracing::debug!(pairs = pairs.len(), "read stdin pairs");
                options.extra_pairs.extend(pairs);
            }
            InputSource::JsonStdin => {
                let from_json = JsonBoxReader::new(stdin).read_box()?;
                options.merge_missing(from_json);
            }
            InputSource::JsonFile(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open JSON file {}", path.display()))?;
                let from_json = JsonBoxReader::new(file)
                    .read_box()
                    .with_context(|| format!("in JSON file {}", path.display()))?;
                options.merge_missing(from_json);
            }
        }

        let b = parse_box(inv.kind, options)?;
        let rendered = self.renderer.render_box(&b);
        writeln!(self.out, "{rendered}").context("failed to write box")?;
        self.out.flush().context("failed to flush output")?;

        let outcome = Outcome {
            kind: inv.kind,
            exit_on_error: inv.exit_on_error,
            exit_on_warning: inv.exit_on_warning,
        };
        tracing::debug!(
            kind = %inv.kind,
            exit_code = outcome.exit_code(),
            "box written"
        );
        Ok(outcome)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BoxOptions;
    use crate::model::{Kv, StatusBox};
    use std::cell::RefCell;
    use std::io::{self, Cursor};
    use std::path::PathBuf;

    /// Records every box it is asked to draw.
    #[derive(Default)]
    struct RecordingRenderer {
        seen: RefCell<Vec<StatusBox>>,
    }

    impl Renderer for &RecordingRenderer {
        fn render_box(&self, b: &StatusBox) -> String {
            self.seen.borrow_mut().push(b.clone());
            format!("<{}:{}>", b.kind, b.title)
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn invocation(kind: BoxKind, source: InputSource) -> Invocation {
        Invocation {
            kind,
            options: BoxOptions {
                title: "Title".into(),
                kv_flags: vec!["A=1".into()],
                ..BoxOptions::default()
            },
            source,
            exit_on_error: false,
            exit_on_warning: false,
        }
    }

    fn empty_stdin() -> Cursor<&'static [u8]> {
        Cursor::new(&[][..])
    }

    #[test]
    fn writes_rendered_box_with_newline() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, Vec::new());
        let outcome = exec
            .execute(invocation(BoxKind::Info, InputSource::Flags), empty_stdin())
            .unwrap();
        assert_eq!(outcome.exit_code(), 0);
        assert_eq!(exec.into_inner(), b"<info:Title>\n");
        assert_eq!(renderer.seen.borrow()[0].kv_pairs, vec![Kv::new("A", "1")]);
    }

    #[test]
    fn stdin_pairs_follow_flag_pairs() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, Vec::new());
        exec.execute(
            invocation(BoxKind::Success, InputSource::StdinKv),
            Cursor::new(&b"B=2\nC=3, still C\n"[..]),
        )
        .unwrap();
        assert_eq!(
            renderer.seen.borrow()[0].kv_pairs,
            vec![Kv::new("A", "1"), Kv::new("B", "2"), Kv::new("C", "3, still C")]
        );
    }

    #[test]
    fn json_stdin_fills_only_missing_fields() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, Vec::new());
        exec.execute(
            invocation(BoxKind::Warning, InputSource::JsonStdin),
            Cursor::new(&br#"{"title":"ignored","footer":"from json","kv":{"B":"2"}}"#[..]),
        )
        .unwrap();
        let seen = renderer.seen.borrow();
        assert_eq!(seen[0].title, "Title");
        assert_eq!(seen[0].footer, "from json");
        assert_eq!(seen[0].kv_pairs, vec![Kv::new("A", "1"), Kv::new("B", "2")]);
    }

    #[test]
    fn missing_json_file_names_the_path() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, Vec::new());
        let path = PathBuf::from("/nonexistent/boxed/box.json");
        let err = exec
            .execute(
                invocation(BoxKind::Info, InputSource::JsonFile(path)),
                empty_stdin(),
            )
            .unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/boxed/box.json"));
        assert!(exec.into_inner().is_empty());
    }

    #[test]
    fn invalid_box_writes_nothing() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, Vec::new());
        let mut inv = invocation(BoxKind::Info, InputSource::Flags);
        inv.options.border_style = "fancy".into();
        assert!(exec.execute(inv, empty_stdin()).is_err());
        assert!(renderer.seen.borrow().is_empty());
        assert!(exec.into_inner().is_empty());
    }

    #[test]
    fn bad_stdin_line_is_an_error() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, Vec::new());
        let result = exec.execute(
            invocation(BoxKind::Info, InputSource::StdinKv),
            Cursor::new(&b"no equals here\n"[..]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn write_failures_surface() {
        let renderer = RecordingRenderer::default();
        let mut exec = Executor::new(&renderer, FailingWriter);
        let err = exec
            .execute(invocation(BoxKind::Info, InputSource::Flags), empty_stdin())
            .unwrap_err();
        assert!(err.to_string().contains("failed to write box"));
    }

    #[test]
    fn exit_codes_follow_flags() {
        let outcome = |kind, exit_on_error, exit_on_warning| Outcome {
            kind,
            exit_on_error,
            exit_on_warning,
        };
        assert_eq!(outcome(BoxKind::Error, true, false).exit_code(), 1);
        assert_eq!(outcome(BoxKind::Error, false, true).exit_code(), 0);
        assert_eq!(outcome(BoxKind::Warning, false, true).exit_code(), 2);
        assert_eq!(outcome(BoxKind::Warning, true, false).exit_code(), 0);
        assert_eq!(outcome(BoxKind::Success, true, true).exit_code(), 0);
        assert_eq!(outcome(BoxKind::Info, true, true).exit_code(), 0);
    }
}
