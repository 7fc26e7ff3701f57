//! String and template literal copying.
//!
//! Literal content is the one region the minifier must never touch: every
//! byte between the delimiters is copied as-is, escapes included. Template
//! literals additionally hand `${ ... }` interpolations back to the normal
//! rewriting loop.

use crate::token::TokenClass;
use crate::minifier::core::Separator;
use crate::Minifier;

impl<'a> Minifier<'a> {
    /// Copies a single- or double-quoted string literal verbatim.
    ///
    /// A backslash always escapes the following character, so an escaped
    /// quote never terminates the literal. An unterminated string runs to
    /// the end of input and is flushed as-is.
    pub(crate) fn copy_string(&mut self, quote: char) {
        let start = self.cursor.position();
        self.cursor.advance();
        while !self.cursor.is_at_end() {
            let c = self.cursor.current_char();
            self.cursor.advance();
            if c == '\\' {
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            } else if c == quote {
                break;
            }
        }
        self.out.push_str(self.cursor.slice_from(start));
        self.finish_literal(TokenClass::StringLike, quote);
    }

    /// Copies template literal text until the closing backtick or the next
    /// `${` interpolation.
    ///
    /// Called with the cursor just past the opening backtick, and again
    /// just past the `}` that closes each interpolation. On `${` the
    /// marker is copied, a depth counter is pushed, and control returns to
    /// the main loop, which minifies the embedded expression like any
    /// other code until the matching `}`.
    pub(crate) fn copy_template_body(&mut self) {
        let start = self.cursor.position();
        loop {
            if self.cursor.is_at_end() {
                // Unterminated template: flush what was scanned.
                self.out.push_str(self.cursor.slice_from(start));
                self.finish_literal(TokenClass::StringLike, '`');
                return;
            }
            let c = self.cursor.current_char();
            if c == '\\' {
                self.cursor.advance();
                if !self.cursor.is_at_end() {
                    self.cursor.advance();
                }
            } else if c == '`' {
                self.cursor.advance();
                self.out.push_str(self.cursor.slice_from(start));
                self.finish_literal(TokenClass::StringLike, '`');
                return;
            } else if c == '$' && self.cursor.peek_char(1) == '{' {
                self.cursor.advance();
                self.cursor.advance();
                self.out.push_str(self.cursor.slice_from(start));
                self.interp_braces.push(0);
                // The embedded expression starts fresh after the `${`.
                self.last = TokenClass::Punct;
                self.last_char = '{';
                self.last_word = "";
                self.sep = Separator::None;
                return;
            } else {
                self.cursor.advance();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::minify;

    #[test]
    fn test_escaped_quotes() {
        assert_eq!(minify(r#"s = "a\"b""#), r#"s="a\"b""#);
        assert_eq!(minify(r"s = 'a\'b'"), r"s='a\'b'");
    }

    #[test]
    fn test_backslash_at_eof() {
        assert_eq!(minify("s = \"abc\\"), "s=\"abc\\");
    }

    #[test]
    fn test_string_keeps_raw_newline() {
        // Malformed but tolerated: the literal swallows the line break.
        assert_eq!(minify("s = \"a\nb\""), "s=\"a\nb\"");
    }

    #[test]
    fn test_template_with_raw_newlines() {
        assert_eq!(minify("t = `line1\nline2`"), "t=`line1\nline2`");
    }

    #[test]
    fn test_unterminated_template() {
        assert_eq!(minify("t = `abc"), "t=`abc");
    }

    #[test]
    fn test_unterminated_interpolation() {
        assert_eq!(minify("t = `a${ b + c"), "t=`a${b+c");
    }

    #[test]
    fn test_dollar_without_brace() {
        assert_eq!(minify("t = `cost: $5`"), "t=`cost: $5`");
    }

    #[test]
    fn test_regex_inside_interpolation() {
        assert_eq!(minify("t = `m: ${ /a b/.test(s) }`"), "t=`m: ${/a b/.test(s)}`");
    }

    #[test]
    fn test_string_inside_interpolation() {
        assert_eq!(minify("t = `q: ${ \"x  y\" }`"), "t=`q: ${\"x  y\"}`");
    }
}
