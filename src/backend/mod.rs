//! Skive Compiler Backend
//!
//! This module lowers the parsed AST to C source text.
//!
//! The pipeline is:
//! 1. AST from `skive_syntax` → [`Emitter`] → C translation unit (a `String`)
//! 2. The C runtime ([`runtime`]) is shipped next to the output by the caller
//!
//! ## Module Organization
//!
//! - `emit/` - AST → C lowering
//!   - `mod.rs` - [`Emitter`] state: region stack and the struct / function / global tables
//!   - `program.rs` - Program entry point and final document assembly
//!   - `decls.rs` - `struct` / `fn` registration
//!   - `statements.rs` - Statement lowering
//!   - `expressions.rs` - Expression and literal lowering
//!   - `types.rs` - Type lowering (pointer-ization, ownership wrapper erasure)
//!   - `errors.rs` - [`EmitError`]
//! - `writer.rs` - Indentation-aware code buffer
//! - `runtime.rs` - Bundled C runtime text

pub mod emit;
pub mod runtime;
pub mod writer;

pub use emit::{EmitError, Emitter};
pub use writer::CodeWriter;
