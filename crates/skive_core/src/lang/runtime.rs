//! Symbols exported by the C runtime that generated code links against.
//!
//! The emitter never spells these names inline; it asks this module so the runtime header and the code
//! generator cannot drift apart.

/// Header included at the top of every generated translation unit.
pub const HEADER_NAME: &str = "lib.h";

/// `uint64_t vec_get(Vec* v, size_t i)`: element access. Source subscripts lower to calls of this.
pub const VEC_GET: &str = "vec_get";

/// `Vec* vec_from_string(const char* s)`: builds a runtime `String` from a C string literal.
pub const VEC_FROM_STRING: &str = "vec_from_string";

/// Every function the runtime header declares, in header order.
pub const EXPORTED_FUNCTIONS: &[&str] = &[
    "print_int",
    "vec_push",
    "vec_reserve",
    "vec_pop",
    VEC_GET,
    "vec_length",
    VEC_FROM_STRING,
    "string_match",
    "print",
];

/// Return `true` if `name` is provided by the runtime.
pub fn is_runtime_function(name: &str) -> bool {
    EXPORTED_FUNCTIONS.contains(&name)
}
