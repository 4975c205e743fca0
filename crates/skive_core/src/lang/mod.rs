//! Skive language vocabulary registries.
//!
//! The design goal is to avoid stringly-typed checks scattered across the compiler. Callers work with
//! **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via registry tables.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - Each table is ordered by its id's declaration order, so `info_for` is a direct index. The unit tests in each
//!   module keep that ordering honest.
//!
//! ## Examples
//! ```rust
//! use skive_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("then"), Some(KeywordId::Then));
//! assert_eq!(keywords::as_str(KeywordId::Then), "then");
//! ```

pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod runtime;
pub mod types;
