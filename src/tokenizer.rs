//! Single-pass tokenizer for PowerShell data text.
//!
//! Walks the source left to right with one character of lookahead and a line
//! counter, producing a flat [`Token`] vector that always ends with one
//! [`TokenKind::EndOfInput`] token.

use crate::token::{keyword, Lexeme, Token, TokenKind};
use crate::{Error, Result, SyntaxError};
use std::iter::Peekable;
use std::str::Chars;

/// Converts source text into a token sequence.
///
/// # Examples
///
/// ```rust
/// use serde_psdata::{tokenize, TokenKind};
///
/// let tokens = tokenize("@{ a = 1 }").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         TokenKind::At,
///         TokenKind::LBrace,
///         TokenKind::Identifier,
///         TokenKind::Equals,
///         TokenKind::Number,
///         TokenKind::RBrace,
///         TokenKind::EndOfInput,
///     ]
/// );
/// ```
///
/// # Errors
///
/// Fails with [`Error::UnexpectedCharacter`] on an unclassifiable character
/// and [`Error::UnterminatedString`] when input ends inside a string literal.
/// A number too large for `f64` is [`Error::InvalidNumber`].
/// An unclassifiable character directly after `@` is reported as
/// [`SyntaxError::ExpectedCollectionOpener`].
pub fn tokenize(source: &str) -> Result<Vec<Token>> {
    Tokenizer::new(source).run()
}

struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    line: usize,
    tokens: Vec<Token>,
}

#[inline]
fn is_word_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

#[inline]
fn is_word_char(c: char) -> bool {
    is_word_start(c) || c.is_numeric()
}

impl<'a> Tokenizer<'a> {
    fn new(source: &'a str) -> Self {
        Tokenizer {
            chars: source.chars().peekable(),
            line: 1,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>> {
        let mut prev = None;
        while let Some(c) = self.chars.next() {
            let c = if c == '\t' { ' ' } else { c };
            let after_at = prev == Some('@');
            prev = Some(c);
            match c {
                // CR is skipped so CRLF input behaves like LF input.
                ' ' | '\r' | ';' => {}
                '\n' => self.line += 1,
                '@' => self.push_punct(TokenKind::At, c),
                '=' => self.push_punct(TokenKind::Equals, c),
                '{' => self.push_punct(TokenKind::LBrace, c),
                '}' => self.push_punct(TokenKind::RBrace, c),
                '(' => self.push_punct(TokenKind::LParen, c),
                ')' => self.push_punct(TokenKind::RParen, c),
                '"' => self.string()?,
                c if is_word_start(c) => self.word(c),
                c if c.is_ascii_digit() => self.number(c)?,
                ch => return Err(self.unexpected(ch, after_at)),
            }
        }
        self.tokens.push(Token::end(self.line));
        Ok(self.tokens)
    }

    /// `after_at` is set only when `ch` immediately follows `@` with nothing
    /// in between.
    fn unexpected(&self, ch: char, after_at: bool) -> Error {
        if after_at {
            SyntaxError::ExpectedCollectionOpener {
                found: format!("{ch:?}"),
                line: self.line,
            }
            .into()
        } else {
            Error::UnexpectedCharacter {
                ch,
                line: self.line,
            }
        }
    }

    fn push_punct(&mut self, kind: TokenKind, ch: char) {
        self.tokens.push(Token::punct(kind, ch, self.line));
    }

    /// Consumes a string body verbatim up to the closing quote. The token is
    /// tagged with the opening line; embedded newlines still advance the counter.
    fn string(&mut self) -> Result<()> {
        let line = self.line;
        let mut text = String::new();
        loop {
            match self.chars.next() {
                Some('"') => break,
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    text.push(ch);
                }
                None => return Err(Error::UnterminatedString { line }),
            }
        }
        self.tokens
            .push(Token::new(TokenKind::Text, Lexeme::Text(text), line));
        Ok(())
    }

    fn word(&mut self, first: char) {
        let mut text = String::from(first);
        while let Some(&ch) = self.chars.peek() {
            if !is_word_char(ch) {
                break;
            }
            text.push(ch);
            self.chars.next();
        }
        let kind = keyword(&text).unwrap_or(TokenKind::Identifier);
        self.tokens
            .push(Token::new(kind, Lexeme::Text(text), self.line));
    }

    fn number(&mut self, first: char) -> Result<()> {
        let mut text = String::from(first);
        self.digits(&mut text);
        if self.chars.peek() == Some(&'.') {
            text.push('.');
            self.chars.next();
            // A trailing '.' with no fraction digits is accepted.
            self.digits(&mut text);
        }
        // A digit run past f64::MAX parses as infinity instead of failing.
        let value = match text.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                return Err(Error::InvalidNumber {
                    text,
                    line: self.line,
                })
            }
        };
        self.tokens
            .push(Token::new(TokenKind::Number, Lexeme::Number(value), self.line));
        Ok(())
    }

    fn digits(&mut self, text: &mut String) {
        while let Some(&ch) = self.chars.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            text.push(ch);
            self.chars.next();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).unwrap().iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_input_yields_end_only() {
        let tokens = tokenize("").unwrap();
        assert_eq!(tokens, vec![Token::end(1)]);
    }

    #[test]
    fn test_punctuation_and_separators() {
        assert_eq!(
            kinds("@ = { } ( ) ;"),
            vec![
                TokenKind::At,
                TokenKind::Equals,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::EndOfInput,
            ]
        );
        let tokens = tokenize("=").unwrap();
        assert_eq!(tokens[0].as_text(), Some("="));
    }

    #[test]
    fn test_string_is_verbatim() {
        let tokens = tokenize(r#""a\nb""#).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Text);
        assert_eq!(tokens[0].as_text(), Some("a\\nb"));
        assert_eq!(tokens[0].as_text().map(str::len), Some(4));
    }

    #[test]
    fn test_unterminated_string_reports_start_line() {
        let err = tokenize("\n\"abc\n\ndef").unwrap_err();
        assert_eq!(err, Error::UnterminatedString { line: 2 });
    }

    #[test]
    fn test_keywords_and_identifiers() {
        let tokens = tokenize("$true $false $null $nope name_1").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Boolean);
        assert_eq!(tokens[0].as_text(), Some("$true"));
        assert_eq!(tokens[1].kind, TokenKind::Boolean);
        assert_eq!(tokens[2].kind, TokenKind::Null);
        assert_eq!(tokens[3].kind, TokenKind::Identifier);
        assert_eq!(tokens[3].as_text(), Some("$nope"));
        assert_eq!(tokens[4].as_text(), Some("name_1"));
    }

    #[test]
    fn test_numbers() {
        let tokens = tokenize("42 2.75 7.").unwrap();
        assert_eq!(tokens[0].as_number(), Some(42.0));
        assert_eq!(tokens[1].as_number(), Some(2.75));
        assert_eq!(tokens[2].as_number(), Some(7.0));
        assert_eq!(tokens[3].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_number_followed_by_word() {
        assert_eq!(
            kinds("12abc"),
            vec![TokenKind::Number, TokenKind::Identifier, TokenKind::EndOfInput]
        );
    }

    #[test]
    fn test_line_counting() {
        let tokens = tokenize("@{\n\t a = 1\r\n  b = \"x\"\n}").unwrap();
        let lines: Vec<_> = tokens.iter().map(|t| t.line).collect();
        assert_eq!(lines, vec![1, 1, 2, 2, 2, 3, 3, 3, 4, 4]);
    }

    #[test]
    fn test_newline_inside_string_advances_line() {
        let tokens = tokenize("\"a\nb\" x").unwrap();
        assert_eq!(tokens[0].line, 1);
        assert_eq!(tokens[0].as_text(), Some("a\nb"));
        assert_eq!(tokens[1].line, 2);
    }

    #[test]
    fn test_unexpected_character() {
        let err = tokenize("@{\n a = -1 }").unwrap_err();
        assert_eq!(err, Error::UnexpectedCharacter { ch: '-', line: 2 });

        let err = tokenize("[").unwrap_err();
        assert_eq!(err, Error::UnexpectedCharacter { ch: '[', line: 1 });
    }

    #[test]
    fn test_overflowing_number_is_rejected() {
        let digits = "1".repeat(400);
        let err = tokenize(&format!("\n{}", digits)).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidNumber {
                text: digits,
                line: 2
            }
        );

        let max = format!("{}", f64::MAX);
        assert_eq!(tokenize(&max).unwrap()[0].as_number(), Some(f64::MAX));
    }

    #[test]
    fn test_separated_character_after_at_is_unexpected() {
        let err = tokenize("@\n#").unwrap_err();
        assert_eq!(err, Error::UnexpectedCharacter { ch: '#', line: 2 });

        let err = tokenize("@ [").unwrap_err();
        assert_eq!(err, Error::UnexpectedCharacter { ch: '[', line: 1 });
    }

    #[test]
    fn test_bad_character_after_at() {
        let err = tokenize("@[").unwrap_err();
        assert!(matches!(
            err,
            Error::Syntax(SyntaxError::ExpectedCollectionOpener { line: 1, .. })
        ));
    }
}
