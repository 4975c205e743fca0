//! Struct and function registration.
//!
//! Both forms are only legal at top level. Each name is registered exactly once; redefining a struct,
//! function, builtin type or runtime function is an error.

use skive_core::lang::{runtime, types as builtin_types};
use skive_syntax::ast::{FuncDecl, Param, StructDecl};

use super::{EmitError, EmitResult, Emitter, FuncDef, StructDef};

impl Emitter {
    pub(super) fn lower_struct(&mut self, decl: &StructDecl) -> EmitResult<()> {
        if !self.at_top_level() {
            return Err(EmitError::TopLevelOnly { construct: "struct" });
        }
        self.claim_name(&decl.name)?;

        // Registered before the fields so a struct can point to itself.
        self.known_types.insert(decl.name.clone());
        let fields = decl
            .fields
            .iter()
            .map(|field| self.lower_param(field))
            .collect::<EmitResult<Vec<_>>>()?;

        tracing::debug!(name = %decl.name, field_count = fields.len(), "registered struct");
        self.structs.push(StructDef {
            name: decl.name.clone(),
            fields,
        });
        Ok(())
    }

    pub(super) fn lower_func(&mut self, decl: &FuncDecl) -> EmitResult<()> {
        if !self.at_top_level() {
            return Err(EmitError::TopLevelOnly { construct: "function" });
        }
        self.claim_name(&decl.name)?;

        let params = decl
            .params
            .iter()
            .map(|param| self.lower_param(param))
            .collect::<EmitResult<Vec<_>>>()?
            .join(", ");
        let return_type = self.lower_type(decl.return_type.as_ref())?;
        let signature = format!("{return_type} {}({params})", decl.name);

        let body = self.in_region(|e| e.block(|e| e.lower_statements(&decl.body)))?;

        tracing::debug!(name = %decl.name, "registered function");
        self.funcs.push(FuncDef { signature, body });
        Ok(())
    }

    /// `type name`, shared by struct fields and parameters.
    fn lower_param(&self, param: &Param) -> EmitResult<String> {
        Ok(format!("{} {}", self.lower_type(param.ty.as_ref())?, param.name))
    }

    fn claim_name(&mut self, name: &str) -> EmitResult<()> {
        let taken = self.defined.contains(name)
            || self.known_types.contains(name)
            || builtin_types::from_str(name).is_some()
            || runtime::is_runtime_function(name);
        if taken {
            return Err(EmitError::DuplicateDefinition { name: name.to_string() });
        }
        self.defined.insert(name.to_string());
        Ok(())
    }
}
