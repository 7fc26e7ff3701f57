//! Core minifier implementation.
//!
//! This module contains the main Minifier struct, the dispatch loop, and
//! the separator policy that decides which whitespace survives.

use crate::chars::{
    can_begin_statement, can_end_statement, is_fusible_operator, is_ident_char,
};
use crate::cursor::Cursor;
use crate::token::TokenClass;

/// The separator pending between the last emitted token and the next one.
///
/// Whitespace and comment runs are never copied; they collapse into one of
/// these values, resolved once the first character of the next token is
/// known. A run containing a line terminator is `Newline`, which outranks
/// `Space`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Separator {
    /// No whitespace seen since the last token.
    None,
    /// Whitespace seen, no line terminator in it.
    Space,
    /// Whitespace seen, at least one line terminator in it.
    Newline,
}

/// Single-pass minifier for JavaScript source text.
///
/// The minifier walks the input once, copying significant tokens verbatim
/// and collapsing everything between them to the smallest separator that
/// keeps the token stream intact. It is created fresh per input and
/// consumed by [`run`].
///
/// [`run`]: Minifier::run
///
/// # Example
///
/// ```
/// use jsmin_lex::Minifier;
///
/// let out = Minifier::new("a  +  b").run();
/// assert_eq!(out, "a+b");
/// ```
pub struct Minifier<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Output buffer, append-only.
    pub(crate) out: String,

    /// Class of the last significant token emitted.
    pub(crate) last: TokenClass,

    /// Final character of the last significant token emitted.
    pub(crate) last_char: char,

    /// Text of the last token when it was a word, `""` otherwise.
    pub(crate) last_word: &'a str,

    /// Separator pending between the last token and the next.
    pub(crate) sep: Separator,

    /// A scanned `;` held back until the next significant character is
    /// known; dropped when that character is `}`.
    holding_semicolon: bool,

    /// Brace depth per open `${` interpolation, innermost last. Empty when
    /// not inside a template literal.
    pub(crate) interp_braces: Vec<u32>,
}

impl<'a> Minifier<'a> {
    /// Creates a new minifier over the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            out: String::with_capacity(source.len()),
            last: TokenClass::None,
            last_char: '\0',
            last_word: "",
            sep: Separator::None,
            holding_semicolon: false,
            interp_braces: Vec::new(),
        }
    }

    /// Runs the minifier to completion and returns the output.
    ///
    /// Total for any input: malformed or truncated JavaScript produces
    /// best-effort output rather than an error.
    pub fn run(mut self) -> String {
        // Leading BOM carries no meaning for the token stream.
        if self.cursor.remaining().starts_with('\u{feff}') {
            self.cursor.advance();
        }

        loop {
            self.skip_insignificant();

            if self.cursor.is_at_end() {
                if self.holding_semicolon {
                    self.out.push(';');
                }
                return self.out;
            }

            let c = self.cursor.current_char();

            if c == ';' {
                self.hold_semicolon();
                continue;
            }
            if self.holding_semicolon {
                self.holding_semicolon = false;
                // Optional before a closing brace, mandatory elsewhere.
                if c != '}' {
                    self.out.push(';');
                }
            }

            self.flush_separator(c);

            match c {
                '"' | '\'' => self.copy_string(c),
                '`' => {
                    self.out.push('`');
                    self.cursor.advance();
                    self.copy_template_body();
                }
                '/' if self.last.regex_can_follow(self.last_word) => self.copy_regex(),
                '{' => {
                    if let Some(depth) = self.interp_braces.last_mut() {
                        *depth += 1;
                    }
                    self.emit_punct('{', TokenClass::Punct);
                }
                '}' => self.close_brace(),
                c if is_ident_char(c) => self.copy_word(),
                ')' | ']' => self.emit_punct(c, TokenClass::CloseBracket),
                _ => self.emit_punct(c, TokenClass::Punct),
            }
        }
    }

    /// Consumes a `;` without emitting it yet.
    ///
    /// Whatever whitespace preceded the semicolon is never needed, and the
    /// semicolon itself is only emitted once the next significant
    /// character proves it isn't directly before a `}`.
    fn hold_semicolon(&mut self) {
        if self.holding_semicolon {
            self.out.push(';');
        }
        self.holding_semicolon = true;
        self.sep = Separator::None;
        self.last = TokenClass::Punct;
        self.last_char = ';';
        self.last_word = "";
        self.cursor.advance();
    }

    /// Handles a `}`: either the end of a template interpolation or an
    /// ordinary closing brace.
    fn close_brace(&mut self) {
        match self.interp_braces.last().copied() {
            Some(0) => {
                // Matching close of a `${`; the literal text resumes.
                self.interp_braces.pop();
                self.out.push('}');
                self.cursor.advance();
                self.copy_template_body();
            }
            Some(_) => {
                if let Some(depth) = self.interp_braces.last_mut() {
                    *depth -= 1;
                }
                self.emit_punct('}', TokenClass::CloseBracket);
            }
            None => self.emit_punct('}', TokenClass::CloseBracket),
        }
    }

    /// Resolves the pending separator against the first character of the
    /// next token.
    ///
    /// A pending newline survives only across a plausible statement
    /// boundary; anything else degrades to the space rule, which emits a
    /// space only where dropping it would fuse two tokens.
    pub(crate) fn flush_separator(&mut self, next: char) {
        let sep = std::mem::replace(&mut self.sep, Separator::None);
        if self.last == TokenClass::None {
            // Nothing emitted yet; leading whitespace is dropped whole.
            return;
        }
        match sep {
            Separator::None => {}
            Separator::Newline
                if can_end_statement(self.last_char) && can_begin_statement(next) =>
            {
                self.out.push('\n');
            }
            Separator::Newline | Separator::Space => {
                if self.space_needed(next) {
                    self.out.push(' ');
                }
            }
        }
    }

    /// Decides whether dropping the pending space would fuse the last
    /// token with the next one.
    fn space_needed(&self, next: char) -> bool {
        (is_ident_char(self.last_char) && is_ident_char(next))
            || (is_fusible_operator(self.last_char) && is_fusible_operator(next))
            || (self.last == TokenClass::Number && next == '.')
            || (self.last == TokenClass::Regex && is_ident_char(next))
    }

    /// Copies a run of identifier/keyword/number characters verbatim.
    pub(crate) fn copy_word(&mut self) {
        let start = self.cursor.position();
        let first = self.cursor.current_char();
        while !self.cursor.is_at_end() && is_ident_char(self.cursor.current_char()) {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        self.out.push_str(text);
        self.last = if first.is_ascii_digit() {
            TokenClass::Number
        } else {
            TokenClass::Word
        };
        self.last_word = text;
        self.last_char = text.chars().next_back().unwrap_or(first);
    }

    /// Emits a single punctuator character.
    pub(crate) fn emit_punct(&mut self, c: char, class: TokenClass) {
        self.out.push(c);
        self.cursor.advance();
        self.last = class;
        self.last_char = c;
        self.last_word = "";
    }

    /// Records that the token just copied was a literal.
    ///
    /// `last_char` drives the separator decisions on the literal's right
    /// edge: the closing quote for strings and templates, the final flag
    /// (or the closing slash) for regexes.
    pub(crate) fn finish_literal(&mut self, class: TokenClass, last_char: char) {
        self.last = class;
        self.last_char = last_char;
        self.last_word = "";
    }
}
