//! Numeric literal scanning.

use super::{Lexer, TokenKind};

impl<'a> Lexer<'a> {
    /// Scan a numeric literal whose first digit has already been consumed.
    ///
    /// - `0x` / `0X` followed by a hex digit starts a hex literal.
    /// - A `.` joins the number only when a digit follows it, so `3.` is `3` then `.`.
    /// - At most one `.` is taken: `1.2.3` is `1.2`, `.`, `3`.
    pub(super) fn scan_number(&mut self, start: usize, first: char) {
        if first == '0'
            && matches!(self.peek(), Some('x' | 'X'))
            && self.peek_second().is_some_and(|c| c.is_ascii_hexdigit())
        {
            self.bump(); // x
            self.eat_while(|c| c.is_ascii_hexdigit());
            let text = self.text_from(start).to_string();
            self.push(TokenKind::Hex(text), start);
            return;
        }

        self.eat_while(|c| c.is_ascii_digit());

        let is_float = self.peek() == Some('.') && self.peek_second().is_some_and(|c| c.is_ascii_digit());
        if is_float {
            self.bump(); // .
            self.eat_while(|c| c.is_ascii_digit());
            let text = self.text_from(start).to_string();
            self.push(TokenKind::Float(text), start);
        } else {
            let text = self.text_from(start).to_string();
            self.push(TokenKind::Int(text), start);
        }
    }
}
