//! Opt-in structured trace logging for `boxed`.

use std::env;
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::OnceLock;
use tracing_subscriber::fmt::time::UtcTime;

static TRACING_INIT: OnceLock<()> = OnceLock::new();

/// `BOXED_TRACE_LOG`, or `boxed_trace.jsonl` in the temp directory.
pub fn tracing_log_path() -> PathBuf {
    env::var("BOXED_TRACE_LOG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| env::temp_dir().join("boxed_trace.jsonl"))
}

/// Install the JSON trace subscriber once, appending to [`tracing_log_path`].
///
/// Stdout stays reserved for boxes. A log file that cannot be opened
/// leaves tracing off rather than failing the render.
pub fn init_tracing(enabled: bool) {
    if !enabled {
        return;
    }

    let _ = TRACING_INIT.get_or_init(|| {
        let path = tracing_log_path();
        let file = match OpenOptions::new().create(true).append(true).open(&path) {
            Ok(file) => file,
            Err(_) => return,
        };
        let subscriber = tracing_subscriber::fmt()
            .json()
            .with_timer(UtcTime::rfc_3339())
            .with_writer(file)
            // Composer and executor events are debug/trace, below the INFO default.
            .with_max_level(tracing::Level::TRACE)
            .with_current_span(false)
            .with_span_list(false)
            .finish();
        let _ = tracing::subscriber::set_global_default(subscriber);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tracing_is_a_no_op() {
        init_tracing(false);
        assert!(TRACING_INIT.get().is_none());
    }

    #[test]
    fn log_path_defaults_to_temp_dir() {
        if env::var_os("BOXED_TRACE_LOG").is_none() {
            assert_eq!(tracing_log_path(), env::temp_dir().join("boxed_trace.jsonl"));
        }
    }
}
