//! Bundled C runtime.
//!
//! Generated code includes the runtime header and calls into it for vectors and strings. The compiler
//! does no file I/O, so callers that want a buildable tree write these two texts out themselves.

/// Contents of the runtime header (`lib.h`).
pub const RUNTIME_HEADER: &str = include_str!("../../runtime/lib.h");

/// Contents of the runtime implementation (`lib.c`).
pub const RUNTIME_SOURCE: &str = include_str!("../../runtime/lib.c");
