//! Error types for tokenizing, parsing and writing PowerShell data text.
//!
//! Every failure is terminal for the call that produced it: no partial value
//! is returned and nothing is logged. Errors raised while reading text carry
//! the 1-based line of the offending token.
//!
//! ## Error Categories
//!
//! - **Lexical errors**: a character the tokenizer cannot classify, or a
//!   string literal that never closes
//! - **Syntax errors**: the token stream does not follow the grammar, see
//!   [`SyntaxError`]
//! - **Write errors**: data that has no spelling in the notation (quotes
//!   inside strings, negative numbers, non-identifier keys)
//! - **I/O errors**: reader/writer failures
//!
//! ## Examples
//!
//! ```rust
//! use serde_psdata::{parse, Error};
//!
//! let err = parse("@{ a 1 }").unwrap_err();
//! assert_eq!(err.line(), Some(1));
//! assert!(err.to_string().contains("expected '='"));
//! ```

use crate::token::TokenKind;
use std::fmt;
use thiserror::Error;

/// Grammar violations reported by the parser.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyntaxError {
    #[error("expected identifier but got {got} at line {line}")]
    ExpectedIdentifier { got: TokenKind, line: usize },

    #[error("expected value but got {got} at line {line}")]
    ExpectedValue { got: TokenKind, line: usize },

    #[error("expected string but got {got} at line {line}")]
    ExpectedString { got: TokenKind, line: usize },

    #[error("expected number but got {got} at line {line}")]
    ExpectedNumber { got: TokenKind, line: usize },

    #[error("expected boolean but got {got} at line {line}")]
    ExpectedBoolean { got: TokenKind, line: usize },

    #[error("expected '=' but got {got} at line {line}")]
    ExpectedEquals { got: TokenKind, line: usize },

    /// `found` is a description rather than a [`TokenKind`] because the
    /// offender may not be a token at all: it names the token kind, or the raw
    /// character when one that cannot be tokenized sits directly after `@`
    /// (as in `@[`).
    #[error("expected '(' or '{{' after '@' but got {found} at line {line}")]
    ExpectedCollectionOpener { found: String, line: usize },

    #[error("collection opened at line {line} is never closed")]
    UnterminatedCollection { line: usize },

    /// A Boolean token whose spelling is neither `$true` nor `$false`.
    /// Unreachable through [`crate::tokenize`].
    #[error("invalid boolean spelling {lexeme:?} at line {line}")]
    InvalidBoolean { lexeme: String, line: usize },

    #[error("unexpected {got} after value at line {line}")]
    TrailingTokens { got: TokenKind, line: usize },

    #[error("nesting deeper than {limit} levels at line {line}")]
    DepthLimitExceeded { limit: usize, line: usize },
}

impl SyntaxError {
    /// Line of the token that triggered the error.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            SyntaxError::ExpectedIdentifier { line, .. }
            | SyntaxError::ExpectedValue { line, .. }
            | SyntaxError::ExpectedString { line, .. }
            | SyntaxError::ExpectedNumber { line, .. }
            | SyntaxError::ExpectedBoolean { line, .. }
            | SyntaxError::ExpectedEquals { line, .. }
            | SyntaxError::ExpectedCollectionOpener { line, .. }
            | SyntaxError::UnterminatedCollection { line }
            | SyntaxError::InvalidBoolean { line, .. }
            | SyntaxError::TrailingTokens { line, .. }
            | SyntaxError::DepthLimitExceeded { line, .. } => *line,
        }
    }
}

/// Represents all possible errors raised by this crate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// The tokenizer met a character it cannot classify
    #[error("unexpected character {ch:?} at line {line}")]
    UnexpectedCharacter { ch: char, line: usize },

    /// A string literal was opened but input ended before the closing quote
    #[error("unterminated string starting at line {line}")]
    UnterminatedString { line: usize },

    /// A numeric lexeme could not be converted
    #[error("invalid number {text:?} at line {line}")]
    InvalidNumber { text: String, line: usize },

    #[error("syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    /// A string that cannot be written because literals have no escapes
    #[error("string {0:?} contains a double quote and cannot be written")]
    UnrepresentableString(String),

    /// A number outside the non-negative decimal literal range
    #[error("number {0} cannot be written as a decimal literal")]
    UnrepresentableNumber(f64),

    /// An object key that does not lex back as an identifier
    #[error("key {0:?} is not a valid identifier")]
    InvalidKey(String),

    /// Custom error
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a custom error with a display message.
    ///
    /// ```rust
    /// use serde_psdata::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for reader/writer failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Source line attached to the error, for errors raised while reading text.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::UnexpectedCharacter { line, .. }
            | Error::UnterminatedString { line }
            | Error::InvalidNumber { line, .. } => Some(*line),
            Error::Syntax(err) => Some(err.line()),
            _ => None,
        }
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
