//! Regular expression literal copying.
//!
//! Whether a `/` opens a regex at all is decided by the caller from the
//! last-significant-token class; this module only scans the literal once
//! that decision is made. Content is copied byte-for-byte, flags included.

use crate::chars::is_ident_char;
use crate::token::TokenClass;
use crate::Minifier;

impl<'a> Minifier<'a> {
    /// Copies a regex literal verbatim, including trailing flags.
    ///
    /// Inside a `[...]` character class a `/` loses its closing meaning; a
    /// backslash escapes the next character everywhere. An unterminated
    /// literal runs to the end of input and is flushed as-is.
    pub(crate) fn copy_regex(&mut self) {
        let start = self.cursor.position();
        self.cursor.advance();
        let mut in_class = false;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '\\' {
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            } else if in_class {
                if c == ']' {
                    in_class = false;
                }
            } else if c == '[' {
                in_class = true;
            } else if c == '/' {
                // Closing delimiter; the flags ride along with the literal.
                while is_ident_char(self.cursor.current_char()) && !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
                break;
            }
        }
        let text = self.cursor.slice_from(start);
        self.out.push_str(text);
        let last_char = text.chars().next_back().unwrap_or('/');
        self.finish_literal(TokenClass::Regex, last_char);
    }
}
