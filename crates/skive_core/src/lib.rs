//! Provide the canonical language vocabulary for the Skive compiler.
//!
//! This crate is intentionally small and dependency-free. It holds the registries that the lexer, parser and
//! emitter agree on: reserved words, operators and their binding strength, punctuation, builtin type names and
//! the symbol names exported by the C runtime that generated code links against.
//!
//! ## Notes
//!
//! - This is a "vocabulary core" crate: **no IO**, no global state, and no compiler-specific types.

pub mod lang;
