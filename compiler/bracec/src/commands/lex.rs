//! `lex` command: tokenize a file and print the token stream.

use std::fmt::Write as _;

use brace_lexer::{CompoundOperators, Tokenizer, TokenizerConfig};
use tracing::debug;

use super::read_file;
use crate::CliError;

/// Options for `bracec lex <file> [options]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LexOptions {
    pub config: TokenizerConfig,
    /// Stop after the first error token instead of dumping the whole stream.
    pub stop_on_error: bool,
}

/// Rendered output of a `lex` run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexReport {
    pub output: String,
    pub token_count: usize,
    pub error_count: usize,
}

impl LexReport {
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

/// Parse `lex` options from command line arguments (after the file path).
pub fn parse_lex_options(args: &[String]) -> Result<LexOptions, CliError> {
    let mut options = LexOptions::default();

    for arg in args {
        match arg.as_str() {
            "--legacy-operators" => {
                options.config = options
                    .config
                    .with_compound_operators(CompoundOperators::PeekOnly);
            }
            "--stop-on-error" => options.stop_on_error = true,
            other => return Err(CliError::UnknownOption(other.to_owned())),
        }
    }

    Ok(options)
}

/// Lex a file and render its token stream.
pub fn lex_file(path: &str, options: &LexOptions) -> Result<LexReport, CliError> {
    let content = read_file(path)?;
    debug!(path, bytes = content.len(), "lexing file");
    Ok(render_tokens(path, &content, options))
}

/// Tokenize `source` and render one token per line under a header.
pub fn render_tokens(path: &str, source: &str, options: &LexOptions) -> LexReport {
    let mut lines = Vec::new();
    let mut error_count = 0;

    for token in Tokenizer::with_config(source, options.config) {
        let is_error = token.is_error();
        lines.push(token.to_string());
        if is_error {
            error_count += 1;
            if options.stop_on_error {
                break;
            }
        }
    }

    let mut output = String::new();
    let _ = writeln!(output, "Tokens for '{path}' ({} tokens):", lines.len());
    for line in &lines {
        let _ = writeln!(output, "  {line}");
    }

    LexReport {
        output,
        token_count: lines.len(),
        error_count,
    }
}
