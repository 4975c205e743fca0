//! Type lowering.
//!
//! - no annotation → `void*`
//! - a known struct name (builtin or declared), bare or generic → pointer to it
//! - `Own<T>` / `Ref<T>` → the lowering of `T` (the wrapper is erased)
//! - any other bare name → passed through unchanged (`int`, `char`, ...)
//! - any other generic name → [`EmitError::UnregisteredSymbol`]

use skive_core::lang::types as builtin_types;
use skive_syntax::ast::Type;

use super::{EmitError, EmitResult, Emitter};

/// Opaque pointer used where a type annotation is absent.
const OPAQUE_POINTER: &str = "void*";

impl Emitter {
    /// Lower an optional type annotation to its C spelling.
    pub(super) fn lower_type(&self, ty: Option<&Type>) -> EmitResult<String> {
        let Some(ty) = ty else {
            return Ok(OPAQUE_POINTER.to_string());
        };

        let name = ty.name();
        if self.known_types.contains(name) {
            return Ok(format!("{name}*"));
        }

        if builtin_types::is_ownership_wrapper(name) {
            return match ty {
                Type::Generic(_, params) if !params.is_empty() => self.lower_type(params.first()),
                _ => Err(EmitError::unsupported(format!("`{name}` without a type parameter"))),
            };
        }

        match ty {
            Type::Simple(name) => Ok(name.clone()),
            Type::Generic(name, _) => Err(EmitError::UnregisteredSymbol { name: name.clone() }),
        }
    }
}
