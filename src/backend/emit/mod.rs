//! Emit C source code from the Skive AST.
//!
//! This module defines [`Emitter`] and wires together the focused submodules that implement AST → C lowering.
//! The heavy lifting lives in those submodules; `mod.rs` holds the emitter state.
//!
//! ## Notes
//! - Statement lowering writes lines into the *current region*. Function bodies get their own region, pushed on
//!   entry and popped on exit, so their code never lands in the entry-point body.
//! - Structs, functions and globals are collected on the side in first-seen order and only rendered when the
//!   document is assembled.
//!
//! ## See also
//! - [`program`]: program-level entry point and document assembly
//! - [`decls`]: struct and function registration
//! - [`statements`]: statement lowering
//! - [`expressions`]: expression lowering
//! - [`types`]: type lowering

mod decls;
mod errors;
mod expressions;
mod program;
mod statements;
mod types;

pub use errors::EmitError;

use std::collections::HashSet;

use super::writer::CodeWriter;
use crate::config::EmitConfig;
use skive_core::lang::types as builtin_types;

type EmitResult<T> = Result<T, EmitError>;

/// A registered struct: its name and its fields rendered as `type name`.
#[derive(Debug, Clone)]
struct StructDef {
    name: String,
    fields: Vec<String>,
}

/// A registered function: the shared signature and the lowered body text.
#[derive(Debug, Clone)]
struct FuncDef {
    signature: String,
    body: String,
}

/// Stack of output regions; the root is the entry-point body.
#[derive(Debug)]
struct RegionStack {
    root: CodeWriter,
    nested: Vec<CodeWriter>,
}

impl RegionStack {
    fn current(&mut self) -> &mut CodeWriter {
        self.nested.last_mut().unwrap_or(&mut self.root)
    }
}

/// Lower a parsed Skive program to a C translation unit.
///
/// An emitter is single-use: [`Emitter::emit_program`] consumes it, so every compilation starts from a fresh
/// set of tables.
#[derive(Debug)]
pub struct Emitter {
    config: EmitConfig,
    regions: RegionStack,
    structs: Vec<StructDef>,
    funcs: Vec<FuncDef>,
    /// Global declarations rendered as `type name`
    globals: Vec<String>,
    /// Names that lower to pointer types (builtin runtime structs plus user structs)
    known_types: HashSet<String>,
    /// Every struct and function name defined so far
    defined: HashSet<String>,
    /// Block nesting depth; 0 means top level
    depth: usize,
}

impl Emitter {
    pub fn new(config: EmitConfig) -> Self {
        let indent_width = config.indent_width;
        Self {
            config,
            regions: RegionStack {
                root: CodeWriter::indented(indent_width, 1),
                nested: Vec::new(),
            },
            structs: Vec::new(),
            funcs: Vec::new(),
            globals: Vec::new(),
            known_types: builtin_types::runtime_struct_names().map(str::to_string).collect(),
            defined: HashSet::new(),
            depth: 0,
        }
    }

    /// Return `true` while lowering top-level statements.
    fn at_top_level(&self) -> bool {
        self.depth == 0
    }

    /// Write one line into the current region.
    fn line(&mut self, text: &str) {
        self.regions.current().line(text);
    }

    /// Lower `body` one level deeper in the current region.
    fn block<T>(&mut self, body: impl FnOnce(&mut Self) -> EmitResult<T>) -> EmitResult<T> {
        self.depth += 1;
        self.regions.current().indent();
        let result = body(self);
        self.regions.current().dedent();
        self.depth -= 1;
        result
    }

    /// Lower `body` into a fresh region and return the region's text.
    fn in_region(&mut self, body: impl FnOnce(&mut Self) -> EmitResult<()>) -> EmitResult<String> {
        tracing::trace!(depth = self.regions.nested.len() + 1, "push region");
        self.regions
            .nested
            .push(CodeWriter::indented(self.config.indent_width, 0));
        let result = body(self);
        let region = self.regions.nested.pop().map(CodeWriter::finish).unwrap_or_default();
        tracing::trace!(depth = self.regions.nested.len(), "pop region");
        result.map(|()| region)
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new(EmitConfig::default())
    }
}
