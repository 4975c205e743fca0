//! Line-oriented C text buffer.
//!
//! Each emission region (a function body, the entry-point body, the final document) is built in its own
//! writer. Output is only ever produced in whole lines; pre-rendered regions are spliced in with
//! [`CodeWriter::append`].

/// Indentation-aware buffer of C source lines.
#[derive(Debug, Clone, Default)]
pub struct CodeWriter {
    output: String,
    level: usize,
    /// Spaces per level
    width: usize,
}

impl CodeWriter {
    pub fn new(width: usize) -> Self {
        Self::indented(width, 0)
    }

    /// A writer whose first line is already `level` levels deep (used for block bodies).
    pub fn indented(width: usize, level: usize) -> Self {
        Self {
            output: String::new(),
            level,
            width,
        }
    }

    pub fn finish(self) -> String {
        self.output
    }

    pub fn as_str(&self) -> &str {
        &self.output
    }

    pub fn indent(&mut self) {
        self.level += 1;
    }

    /// Saturates at zero.
    pub fn dedent(&mut self) {
        self.level = self.level.saturating_sub(1);
    }

    /// Write `text` as one indented line. An empty `text` gives a blank line with no trailing spaces.
    pub fn line(&mut self, text: &str) {
        if !text.is_empty() {
            self.output.extend(std::iter::repeat_n(' ', self.level * self.width));
            self.output.push_str(text);
        }
        self.output.push('\n');
    }

    pub fn blank(&mut self) {
        self.output.push('\n');
    }

    /// `head {` followed by one level of indentation.
    pub fn open(&mut self, head: &str) {
        self.line(&format!("{head} {{"));
        self.indent();
    }

    /// Drop one level and write `}` directly followed by `tail` (e.g. ` Point;`).
    pub fn close(&mut self, tail: &str) {
        self.dedent();
        self.line(&format!("}}{tail}"));
    }

    /// Splice in text that is already indented and newline-terminated.
    pub fn append(&mut self, text: &str) {
        self.output.push_str(text);
    }
}
