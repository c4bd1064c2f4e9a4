//! # Tiny Compiler
//!
//! Compiles prefix call source into C-like call statements.
//!
//! ```text
//! (add 2 (subtract 4 2))  →  add(2, subtract(4, 2));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Source → Lexer → Parser → Transformer (Traverser) → Code Generator → Output
//! ```
//!
//! Every call owns its tokens, cursor and trees; nothing is shared between
//! calls, so independent sources can be compiled in parallel.
//!
//! ## Example
//!
//! ```rust
//! let output = tiny_compiler::compile("(add 2 (subtract 4 2))").unwrap();
//! assert_eq!(output, "add(2, subtract(4, 2));");
//! ```

pub mod error;

pub use config::constants::{CompilerConfig, UnclosedCallPolicy};
pub use error::CompileError;

use log::debug;
use rayon::prelude::*;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Compile source text with the default configuration.
///
/// ## Errors
///
/// The first failure from any stage, unchanged. No partial output.
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with(source, &CompilerConfig::default())
}

/// Compile source text with an explicit configuration.
///
/// ## Example
///
/// ```rust
/// use tiny_compiler::{compile_with, CompilerConfig, UnclosedCallPolicy};
///
/// let config = CompilerConfig::new(UnclosedCallPolicy::Truncate);
/// assert_eq!(compile_with("(add 2", &config).unwrap(), "add(2);");
/// ```
pub fn compile_with(source: &str, config: &CompilerConfig) -> Result<String, CompileError> {
    let tokens = tiny_parser::tokenize(source);
    debug!("lexed {} tokens", tokens.len());

    let program = tiny_parser::parse_tokens(&tokens, config.unclosed_calls)?;
    debug!("parsed {} top-level forms", program.body.len());

    let target = tiny_transform::transform(&program)?;
    drop(program);

    let output = tiny_codegen::generate(&target)?;
    debug!("generated {} bytes", output.len());
    Ok(output)
}

/// Compile independent sources in parallel.
///
/// Results are returned in input order; one failing source does not
/// affect the others.
///
/// ## Example
///
/// ```rust
/// let results = tiny_compiler::compile_all(&["(a 1)", "(b"]);
/// assert_eq!(results[0].as_deref(), Ok("a(1);"));
/// assert!(results[1].is_err());
/// ```
pub fn compile_all<S>(sources: &[S]) -> Vec<Result<String, CompileError>>
where
    S: AsRef<str> + Sync,
{
    let config = CompilerConfig::default();
    sources
        .par_iter()
        .map(|source| compile_with(source.as_ref(), &config))
        .collect()
}

// =============================================================================
// TESTS
// =============================================================================
