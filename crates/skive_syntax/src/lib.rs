//! Syntax frontend for the Skive language: tokenizer, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is intentionally "syntax-only": it does not register types, erase generics or emit code.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `skive_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use skive_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let x: int = 1 + 2").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 1);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
