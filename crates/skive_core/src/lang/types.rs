//! Builtin type vocabulary.
//!
//! Two families of names are known before any user code is seen:
//! - **runtime structs** (`Vec`, `String`) provided by the C runtime and always handled by pointer;
//! - **ownership wrappers** (`Own<T>`, `Ref<T>`) which annotate ownership in source and are erased on lowering.
//!
//! ## Examples
//! ```rust
//! use skive_core::lang::types::{self, BuiltinTypeId, BuiltinTypeKind};
//!
//! assert_eq!(types::from_str("Own"), Some(BuiltinTypeId::Own));
//! assert_eq!(types::kind(BuiltinTypeId::Vec), BuiltinTypeKind::RuntimeStruct);
//! assert!(types::is_ownership_wrapper("Ref"));
//! ```

/// Stable identifier for builtin types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTypeId {
    Vec,
    String,
    Own,
    Ref,
}

/// How a builtin type lowers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTypeKind {
    /// A struct defined by the runtime header; lowered to a pointer like user structs.
    RuntimeStruct,
    /// A single-parameter ownership annotation that disappears on lowering.
    OwnershipWrapper,
}

/// Metadata for a builtin type.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinTypeInfo {
    pub id: BuiltinTypeId,
    pub canonical: &'static str,
    pub kind: BuiltinTypeKind,
}

/// Registry of builtin types, in [`BuiltinTypeId`] declaration order.
pub const BUILTIN_TYPES: &[BuiltinTypeInfo] = &[
    info(BuiltinTypeId::Vec, "Vec", BuiltinTypeKind::RuntimeStruct),
    info(BuiltinTypeId::String, "String", BuiltinTypeKind::RuntimeStruct),
    info(BuiltinTypeId::Own, "Own", BuiltinTypeKind::OwnershipWrapper),
    info(BuiltinTypeId::Ref, "Ref", BuiltinTypeKind::OwnershipWrapper),
];

/// Return the full metadata entry for a builtin type.
pub fn info_for(id: BuiltinTypeId) -> &'static BuiltinTypeInfo {
    &BUILTIN_TYPES[id as usize]
}

/// Return how a builtin type lowers.
pub fn kind(id: BuiltinTypeId) -> BuiltinTypeKind {
    info_for(id).kind
}

/// Resolve a type name to a builtin id.
pub fn from_str(s: &str) -> Option<BuiltinTypeId> {
    BUILTIN_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}

/// Iterate over the names of runtime structs (the seed of the emitter's known-type set).
pub fn runtime_struct_names() -> impl Iterator<Item = &'static str> {
    BUILTIN_TYPES
        .iter()
        .filter(|t| t.kind == BuiltinTypeKind::RuntimeStruct)
        .map(|t| t.canonical)
}

/// Return `true` if `name` is an ownership wrapper (`Own` / `Ref`).
pub fn is_ownership_wrapper(name: &str) -> bool {
    from_str(name).is_some_and(|id| kind(id) == BuiltinTypeKind::OwnershipWrapper)
}

const fn info(id: BuiltinTypeId, canonical: &'static str, kind: BuiltinTypeKind) -> BuiltinTypeInfo {
    BuiltinTypeInfo { id, canonical, kind }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_in_id_order() {
        for (index, t) in BUILTIN_TYPES.iter().enumerate() {
            assert_eq!(t.id as usize, index, "BUILTIN_TYPES entry {:?} is out of order", t.id);
        }
    }

    #[test]
    fn test_runtime_struct_names_are_the_two_seeds() {
        let names: Vec<&str> = runtime_struct_names().collect();
        assert_eq!(names, vec!["Vec", "String"]);
    }

    #[test]
    fn test_wrappers() {
        assert!(is_ownership_wrapper("Own"));
        assert!(is_ownership_wrapper("Ref"));
        assert!(!is_ownership_wrapper("Vec"));
        assert!(!is_ownership_wrapper("Box"));
    }
}
