//! CLI entry point for umbrella-gen.
//!
//! Ignores its arguments: the header tree is located from the executable's own
//! path. Intended to run once as a pre-build step.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

/// umbrella-gen — write include/RE/Skyrim.h including every header under include/RE.
#[derive(Parser, Debug)]
#[command(name = "umbrella-gen", version, about)]
struct Cli {
    /// Ignored. Build steps may pass arguments; only the program path is used.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    _rest: Vec<OsString>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("umbrella_gen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let invocation = std::env::args_os()
        .next()
        .map(PathBuf::from)
        .ok_or(umbrella_gen::Error::MissingInvocation)?;

    umbrella_gen::run(&invocation)
        .with_context(|| format!("generating umbrella header for {}", invocation.display()))?;
    Ok(())
}
