//! `boxed` entrypoint: parse flags, pick a color mode, render one box.

use anyhow::Result;
use clap::Parser;
use crossterm::tty::IsTty;
use std::io;
use std::process::ExitCode;

use boxed::config::AppConfig;
use boxed::{init_tracing, ColorMode, Executor, GradientRenderer, Painter};

fn main() -> Result<ExitCode> {
    let cli = AppConfig::parse();
    init_tracing(cli.logging_enabled());

    let stdout = io::stdout();
    let mode = ColorMode::resolve(cli.color, stdout.is_tty());
    tracing::debug!(%mode, kind = %cli.command.kind(), "starting");

    let renderer = GradientRenderer::new(Painter::new(mode));
    let mut executor = Executor::new(renderer, stdout.lock());
    let outcome = executor.execute(cli.command.into_invocation(), io::stdin().lock())?;
    Ok(ExitCode::from(outcome.exit_code()))
}
