//! Emission configuration for Skive
//!
//! `EmitConfig::default()` produces the standard layout: 4-space indentation, `lib.h` runtime header,
//! section comments and a conventional C `main` wrapper.

use skive_core::lang::runtime;

/// Emission configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitConfig {
    /// Number of spaces per indentation level
    pub indent_width: usize,
    /// Header named in the `#include` line
    pub runtime_header: String,
    /// Signature of the function wrapping top-level statements
    pub entry_point: String,
    /// Whether to emit `// struct definitions` style section headers
    pub section_comments: bool,
    /// Whether to start the output with a `// Generated by skive v...` line
    pub banner: bool,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            runtime_header: runtime::HEADER_NAME.to_string(),
            entry_point: "int main(int argc, char** argv)".to_string(),
            section_comments: true,
            banner: false,
        }
    }
}

impl EmitConfig {
    /// Create a new config with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the indentation width
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Set the header named in the `#include` line
    pub fn with_runtime_header(mut self, header: impl Into<String>) -> Self {
        self.runtime_header = header.into();
        self
    }

    /// Set the signature of the entry-point wrapper
    pub fn with_entry_point(mut self, signature: impl Into<String>) -> Self {
        self.entry_point = signature.into();
        self
    }

    /// Enable or disable section header comments
    pub fn with_section_comments(mut self, enabled: bool) -> Self {
        self.section_comments = enabled;
        self
    }

    /// Enable or disable the version banner
    pub fn with_banner(mut self, enabled: bool) -> Self {
        self.banner = enabled;
        self
    }
}
