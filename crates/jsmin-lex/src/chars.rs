//! Character classifiers for the minifier.
//!
//! These are pure functions over single characters (plus one keyword
//! table), shared by the scanning and separator logic. There is no mutable
//! state anywhere in this module.

/// Checks if a character can appear in an identifier, keyword, or numeric
/// literal.
///
/// Letters, digits, `_`, and `$` are the usual JavaScript identifier
/// alphabet. A backslash is included because identifiers may contain
/// Unicode escapes (`\u0061bc`), and every non-ASCII character is included
/// so that multi-byte content is treated as opaque word material rather
/// than punctuation.
///
/// # Example
///
/// ```
/// use jsmin_lex::chars::is_ident_char;
///
/// assert!(is_ident_char('a'));
/// assert!(is_ident_char('0'));
/// assert!(is_ident_char('$'));
/// assert!(is_ident_char('é'));
/// assert!(!is_ident_char('+'));
/// assert!(!is_ident_char(' '));
/// ```
pub fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$' || c == '\\' || !c.is_ascii()
}

/// Checks if a character is a line terminator (`\n` or `\r`).
///
/// Carriage returns are normalized to `\n` on output, so both count as the
/// same thing here.
pub fn is_line_terminator(c: char) -> bool {
    c == '\n' || c == '\r'
}

/// Checks if a character is droppable horizontal whitespace.
///
/// Covers the space character and every other C0 control except the line
/// terminators, which carry statement-boundary meaning and are classified
/// separately. Only consulted outside string/template/regex literals;
/// literal content is copied byte-for-byte.
///
/// # Example
///
/// ```
/// use jsmin_lex::chars::is_space_like;
///
/// assert!(is_space_like(' '));
/// assert!(is_space_like('\t'));
/// assert!(!is_space_like('\n'));
/// assert!(!is_space_like('a'));
/// ```
pub fn is_space_like(c: char) -> bool {
    c == ' ' || ((c as u32) < 0x20 && !is_line_terminator(c))
}

/// Checks if a character belongs to the operator set whose members must
/// never be written adjacent across a dropped separator.
///
/// `++`/`--` fusion is the obvious hazard; `/` next to `/` or `*` would
/// fuse into a comment marker, so the whole arithmetic set is kept apart
/// whenever the source separated two of them.
pub fn is_fusible_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Checks if a token ending in `c` can end a statement.
///
/// Used by the newline-preservation policy: a line break is only
/// significant when the text before it could have ended a statement and
/// the text after it could begin one.
pub fn can_end_statement(c: char) -> bool {
    is_ident_char(c) || matches!(c, '}' | ')' | ']' | '+' | '-' | '"' | '\'' | '`')
}

/// Checks if a token starting with `c` can begin a statement.
///
/// Counterpart of [`can_end_statement`] on the other side of a line break.
pub fn can_begin_statement(c: char) -> bool {
    is_ident_char(c) || matches!(c, '{' | '[' | '(' | '+' | '-' | '!' | '~')
}

/// Checks if `word` is a keyword after which a `/` starts a regular
/// expression literal rather than a division.
///
/// After `return`, `typeof`, `case` and friends no value expression has
/// just ended, so a following `/` can only open a regex.
///
/// # Example
///
/// ```
/// use jsmin_lex::chars::is_regex_preceding_keyword;
///
/// assert!(is_regex_preceding_keyword("return"));
/// assert!(is_regex_preceding_keyword("typeof"));
/// assert!(!is_regex_preceding_keyword("foo"));
/// ```
pub fn is_regex_preceding_keyword(word: &str) -> bool {
    matches!(
        word,
        "await"
            | "case"
            | "delete"
            | "do"
            | "else"
            | "in"
            | "instanceof"
            | "new"
            | "of"
            | "return"
            | "throw"
            | "typeof"
            | "void"
            | "yield"
    )
}
