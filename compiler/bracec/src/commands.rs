//! Command handlers for the `bracec` CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

mod lex;

pub use lex::{lex_file, parse_lex_options, render_tokens, LexOptions, LexReport};

use crate::CliError;

/// Read a source file, mapping I/O failures to [`CliError::ReadFile`].
pub(crate) fn read_file(path: &str) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::ReadFile {
        path: path.to_owned(),
        source,
    })
}
