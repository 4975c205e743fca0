//! Define error types for AST → C emission.
//!
//! These errors represent *lowering* failures (as opposed to lexing or parsing). The AST carries no
//! source positions, so they name the offending construct instead of pointing at it.

use miette::Diagnostic;
use thiserror::Error;

/// Error during C emission.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum EmitError {
    /// A `struct` or `fn` definition nested inside a function or control-flow body.
    #[error("{construct} definitions are only allowed at top level")]
    #[diagnostic(code(skive::emit::top_level_only))]
    TopLevelOnly { construct: &'static str },

    /// The construct parses but has no C lowering.
    #[error("not implemented: {what}")]
    #[diagnostic(code(skive::emit::unsupported))]
    UnsupportedConstruct { what: String },

    /// A generic type whose name is neither a known struct nor an ownership wrapper.
    #[error("unknown generic type '{name}'")]
    #[diagnostic(
        code(skive::emit::unregistered_symbol),
        help("only `Own<T>`, `Ref<T>` and declared struct names take type parameters")
    )]
    UnregisteredSymbol { name: String },

    /// A struct or function name that is already taken.
    #[error("'{name}' is already defined")]
    #[diagnostic(code(skive::emit::duplicate_definition))]
    DuplicateDefinition { name: String },

    /// A numeric literal that does not fit the target's 64-bit representation.
    #[error("numeric literal '{text}' is out of range")]
    #[diagnostic(code(skive::emit::invalid_literal))]
    InvalidLiteral { text: String },
}

impl EmitError {
    pub(crate) fn unsupported(what: impl Into<String>) -> Self {
        EmitError::UnsupportedConstruct { what: what.into() }
    }
}
