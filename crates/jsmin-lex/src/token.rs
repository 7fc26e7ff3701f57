//! Last-significant-token classification.
//!
//! The minifier never builds a token stream; all it carries between tokens
//! is the class of the most recent significant one. That single enum value
//! is enough lookback to tell a division from a regex literal and to decide
//! which separators survive.

use crate::chars::is_regex_preceding_keyword;

/// The class of the most recently emitted significant token.
///
/// Retained across whitespace and comment runs. `Word` keeps the token text
/// alongside it (in the minifier state) so keywords like `return` can be
/// told apart from plain identifiers when a `/` follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Nothing significant has been emitted yet.
    None,
    /// An identifier, keyword, or anything else spelled in the identifier
    /// alphabet.
    Word,
    /// A numeric literal (first character was a digit).
    Number,
    /// A string or template literal.
    StringLike,
    /// A regular expression literal.
    Regex,
    /// A punctuator other than `)`, `]`, `}`.
    Punct,
    /// `)`, `]`, or `}` — a value expression may just have ended.
    CloseBracket,
}

impl TokenClass {
    /// Decides whether a `/` seen now starts a regular expression literal.
    ///
    /// `word` is the text of the last token when `self` is [`Word`], and is
    /// ignored otherwise. A regex can start at the beginning of input,
    /// after an ordinary punctuator, or after a keyword like `return`
    /// where no value expression can just have ended. After identifiers,
    /// literals, and closing brackets the `/` is a division operator.
    ///
    /// [`Word`]: TokenClass::Word
    ///
    /// # Example
    ///
    /// ```
    /// use jsmin_lex::TokenClass;
    ///
    /// assert!(TokenClass::None.regex_can_follow(""));
    /// assert!(TokenClass::Punct.regex_can_follow(""));
    /// assert!(TokenClass::Word.regex_can_follow("return"));
    /// assert!(!TokenClass::Word.regex_can_follow("x"));
    /// assert!(!TokenClass::Number.regex_can_follow(""));
    /// assert!(!TokenClass::CloseBracket.regex_can_follow(""));
    /// ```
    pub fn regex_can_follow(self, word: &str) -> bool {
        match self {
            TokenClass::None | TokenClass::Punct => true,
            TokenClass::Word => is_regex_preceding_keyword(word),
            TokenClass::Number
            | TokenClass::StringLike
            | TokenClass::Regex
            | TokenClass::CloseBracket => false,
        }
    }
}
