#![forbid(unsafe_code)]
//! Skive compiler: lowers Skive source text to a single C translation unit.
//!
//! The pipeline has three stages, each fail-fast:
//!
//! 1. [`lexer::lex`] turns source text into typed tokens;
//! 2. [`parser::parse`] builds the [`ast::Program`];
//! 3. [`Emitter::emit_program`] lowers it to C text that includes the bundled runtime header.
//!
//! Reading files, writing output and invoking a C compiler are left to the caller.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The first error of any stage is
//!   returned to the caller as a [`CompileError`].
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! ## Examples
//! ```rust
//! let c = skive::compile("let x: int = 1 + 2").unwrap();
//! assert!(c.contains("int x;"));
//! assert!(c.contains("    x = (1 + 2);"));
//! ```

pub mod backend;
pub mod config;
pub mod version;

pub use skive_syntax::{ast, diagnostics, lexer, parser};

pub use backend::{EmitError, Emitter};
pub use config::EmitConfig;

use miette::Diagnostic;
use skive_syntax::diagnostics::{LexError, ParseError};
use thiserror::Error;

/// Any error raised by the compilation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CompileError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lex(#[from] LexError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Emit(#[from] EmitError),
}

/// Compile `source` with the default [`EmitConfig`].
pub fn compile(source: &str) -> Result<String, CompileError> {
    compile_with_config(source, &EmitConfig::default())
}

/// Compile `source` to C using `config` for layout.
///
/// ## Errors
/// Returns the first lexing, parsing or lowering error.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn compile_with_config(source: &str, config: &EmitConfig) -> Result<String, CompileError> {
    let tokens = lexer::lex(source)?;
    let program = parser::parse(&tokens)?;
    let output = Emitter::new(config.clone()).emit_program(&program)?;
    Ok(output)
}
