//! Whitespace and comment skipping.
//!
//! Nothing here reaches the output. Skipped runs leave their mark on the
//! pending separator instead: any line terminator in the run (including one
//! inside a block comment) upgrades it to `Newline`.

use crate::chars::{is_line_terminator, is_space_like};
use crate::minifier::core::Separator;
use crate::Minifier;

impl<'a> Minifier<'a> {
    /// Skips whitespace and comments, accumulating the pending separator.
    ///
    /// This is called before dispatching each token. On return the cursor
    /// sits on a significant character or at the end of input.
    pub(crate) fn skip_insignificant(&mut self) {
        loop {
            if self.cursor.is_at_end() {
                return;
            }
            let c = self.cursor.current_char();
            if is_line_terminator(c) {
                self.sep = Separator::Newline;
                self.cursor.advance();
            } else if is_space_like(c) {
                if self.sep == Separator::None {
                    self.sep = Separator::Space;
                }
                self.cursor.advance();
            } else if c == '/' && self.cursor.peek_char(1) == '/' {
                self.skip_line_comment();
            } else if c == '/' && self.cursor.peek_char(1) == '*' {
                self.skip_block_comment();
            } else {
                return;
            }
        }
    }

    /// Skips a `//` comment up to (not including) the line terminator.
    ///
    /// The terminator itself is handled by the caller's loop, which is what
    /// upgrades the separator to a newline.
    fn skip_line_comment(&mut self) {
        if self.sep == Separator::None {
            self.sep = Separator::Space;
        }
        while !self.cursor.is_at_end() && !is_line_terminator(self.cursor.current_char()) {
            self.cursor.advance();
        }
    }

    /// Skips a `/* ... */` comment.
    ///
    /// A comment spanning a line break contributes a newline to the pending
    /// separator, so statements on either side stay separated. Unterminated
    /// comments swallow the rest of the input.
    fn skip_block_comment(&mut self) {
        self.cursor.advance();
        self.cursor.advance();
        let mut saw_newline = false;
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            if is_line_terminator(c) {
                saw_newline = true;
            }
            if c == '*' && self.cursor.peek_char(1) == '/' {
                self.cursor.advance();
                self.cursor.advance();
                break;
            }
            self.cursor.advance();
        }
        if saw_newline {
            self.sep = Separator::Newline;
        } else if self.sep == Separator::None {
            self.sep = Separator::Space;
        }
    }
}
