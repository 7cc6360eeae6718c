//! Brace command-line driver.
//!
//! Hosts the debug commands built on `brace_lexer`. The binary in
//! `main.rs` only parses the command name and dispatches here.

pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=brace_lexer=trace`
/// or `RUST_LOG=bracec=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}

/// Errors surfaced by the driver itself (not lexical errors, which are
/// reported as tokens).
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("missing argument\n\nUsage: {0}")]
    Usage(&'static str),
    #[error("unknown command '{0}' (run `bracec help` for a list)")]
    UnknownCommand(String),
    #[error("unknown option '{0}'")]
    UnknownOption(String),
    #[error("{}", read_error_message(.path, .source))]
    ReadFile {
        path: String,
        source: std::io::Error,
    },
}

fn read_error_message(path: &str, err: &std::io::Error) -> String {
    match err.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {err}"),
    }
}
