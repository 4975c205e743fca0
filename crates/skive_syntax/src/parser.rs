//! Parser for the Skive programming language
//!
//! Converts a token stream into an AST: a recursive-descent statement parser that hands every expression
//! position to a two-stack operator-precedence parser.
//!
//! ## Examples
//!
//! ```rust
//! use skive_syntax::ast::{BinaryOp, Expr, Statement};
//! use skive_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("a + b * c").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! match &program.statements[0] {
//!     Statement::Expr(Expr::Binary(_, op, right)) => {
//!         assert_eq!(*op, BinaryOp::Add);
//!         assert!(matches!(**right, Expr::Binary(_, BinaryOp::Mul, _)));
//!     }
//!     other => panic!("unexpected statement {other:?}"),
//! }
//! ```

use crate::ast::*;
use crate::diagnostics::ParseError;
use crate::lexer::{Token, TokenKind};
use skive_core::lang::keywords::{self, KeywordId};
use skive_core::lang::operators::{self, OperatorId};
use skive_core::lang::punctuation::{self, PunctuationId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/util.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
