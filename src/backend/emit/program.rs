//! Emit a full program and assemble the output document.
//!
//! Layout, in order: include line, struct forward declarations, struct definitions, function forward
//! declarations, function definitions, global declarations, then the entry-point wrapper holding the
//! top-level statements. Sections without entries are left out.
//!
//! ## Notes
//!
//! - Assembly only reads the tables; identical input and config always give byte-identical output.

use skive_syntax::ast::Program;

use super::{EmitResult, Emitter};
use crate::backend::writer::CodeWriter;
use crate::version::SKIVE_VERSION;

impl Emitter {
    /// Lower `program` and return the complete C translation unit.
    ///
    /// ## Errors
    /// Returns the first [`super::EmitError`] raised while lowering; no partial output is produced.
    #[tracing::instrument(skip_all, fields(statement_count = program.statements.len()))]
    pub fn emit_program(mut self, program: &Program) -> EmitResult<String> {
        self.lower_statements(&program.statements)?;
        let output = self.assemble();
        tracing::debug!(
            structs = self.structs.len(),
            funcs = self.funcs.len(),
            globals = self.globals.len(),
            output_len = output.len(),
            "emitted program"
        );
        Ok(output)
    }

    fn assemble(&self) -> String {
        let mut out = CodeWriter::new(self.config.indent_width);

        if self.config.banner {
            out.line(&format!("// Generated by skive v{SKIVE_VERSION}"));
        }
        out.line(&format!("#include \"{}\"", self.config.runtime_header));

        if !self.structs.is_empty() {
            self.section(&mut out, "struct forward declarations");
            for def in &self.structs {
                out.line(&format!("typedef struct {0} {0};", def.name));
            }

            self.section(&mut out, "struct definitions");
            for def in &self.structs {
                out.open(&format!("typedef struct {}", def.name));
                for field in &def.fields {
                    out.line(&format!("{field};"));
                }
                out.close(&format!(" {};", def.name));
            }
        }

        if !self.funcs.is_empty() {
            self.section(&mut out, "func forward declarations");
            for def in &self.funcs {
                out.line(&format!("{};", def.signature));
            }

            self.section(&mut out, "func definitions");
            for def in &self.funcs {
                out.line(&def.signature);
                out.line("{");
                out.append(&def.body);
                out.line("}");
            }
        }

        if !self.globals.is_empty() {
            self.section(&mut out, "global declarations");
            for global in &self.globals {
                out.line(&format!("{global};"));
            }
        }

        out.blank();
        out.line(&self.config.entry_point);
        out.line("{");
        out.append(self.regions.root.as_str());
        out.line("}");
        out.finish()
    }

    /// Blank separator line plus the optional section header comment.
    fn section(&self, out: &mut CodeWriter, title: &str) {
        out.blank();
        if self.config.section_comments {
            out.line(&format!("// {title}"));
        }
    }
}
