//! Token vocabulary shared by the tokenizer and the parser.
//!
//! A [`Token`] is a classified, line-tagged lexical unit. Tokens are built
//! once by [`crate::tokenizer::tokenize`] and read once by the parser.

use std::fmt;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Text,
    Number,
    Identifier,
    Boolean,
    Null,
    At,
    Equals,
    LBrace,
    RBrace,
    LParen,
    RParen,
    EndOfInput,
}

impl TokenKind {
    /// Human-readable name used in error messages.
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            TokenKind::Text => "string",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Boolean => "boolean",
            TokenKind::Null => "null",
            TokenKind::At => "'@'",
            TokenKind::Equals => "'='",
            TokenKind::LBrace => "'{'",
            TokenKind::RBrace => "'}'",
            TokenKind::LParen => "'('",
            TokenKind::RParen => "')'",
            TokenKind::EndOfInput => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Payload carried by a token.
#[derive(Clone, Debug, PartialEq)]
pub enum Lexeme {
    /// String contents, identifier/keyword spelling, or punctuation character.
    Text(String),
    /// Already-converted numeric literal.
    Number(f64),
    /// Used by [`TokenKind::EndOfInput`].
    Absent,
}

/// A single lexical unit with the 1-based line its first character appeared on.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: Lexeme,
    pub line: usize,
}

impl Token {
    #[must_use]
    pub fn new(kind: TokenKind, lexeme: Lexeme, line: usize) -> Self {
        Token { kind, lexeme, line }
    }

    pub(crate) fn punct(kind: TokenKind, ch: char, line: usize) -> Self {
        Token::new(kind, Lexeme::Text(ch.to_string()), line)
    }

    pub(crate) fn end(line: usize) -> Self {
        Token::new(TokenKind::EndOfInput, Lexeme::Absent, line)
    }

    /// Returns the text lexeme, if this token carries one.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match &self.lexeme {
            Lexeme::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric lexeme, if this token carries one.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self.lexeme {
            Lexeme::Number(n) => Some(n),
            _ => None,
        }
    }
}

/// Reserved spellings. Only these exact, case-sensitive words are special;
/// every other `$`-prefixed word is an ordinary identifier.
pub(crate) static KEYWORDS: [(&str, TokenKind); 3] = [
    ("$true", TokenKind::Boolean),
    ("$false", TokenKind::Boolean),
    ("$null", TokenKind::Null),
];

/// Looks up a word in the reserved-word table.
pub(crate) fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(spelling, _)| *spelling == word)
        .map(|(_, kind)| *kind)
}
