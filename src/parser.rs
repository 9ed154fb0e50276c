//! Recursive-descent parser from tokens to a [`PsValue`] tree.
//!
//! Grammar:
//!
//! ```text
//! value       := string | number | boolean | null | collection
//! collection  := '@' ( '(' array_body ')' | '{' object_body '}' )
//! array_body  := value*
//! object_body := ( identifier '=' value )*
//! ```
//!
//! Bodies have no separators; elements are read until the closing bracket.
//! The first violation aborts the parse.

use crate::options::ParseOptions;
use crate::token::{Token, TokenKind};
use crate::{PsMap, PsValue, Result, SyntaxError};

/// Parses a complete token sequence into a single value.
///
/// The sequence must hold exactly one value; anything after it other than
/// [`TokenKind::EndOfInput`] is rejected with [`SyntaxError::TrailingTokens`].
///
/// # Examples
///
/// ```rust
/// use serde_psdata::{parse_value, tokenize, PsValue};
///
/// let tokens = tokenize("@(1 2)").unwrap();
/// let value = parse_value(&tokens).unwrap();
/// assert_eq!(value, PsValue::Array(vec![PsValue::from(1.0), PsValue::from(2.0)]));
/// ```
///
/// # Errors
///
/// Returns [`crate::Error::Syntax`] at the first grammar violation.
pub fn parse_value(tokens: &[Token]) -> Result<PsValue> {
    parse_value_with_options(tokens, ParseOptions::default())
}

/// Like [`parse_value`] with explicit [`ParseOptions`].
///
/// # Errors
///
/// Returns [`crate::Error::Syntax`] at the first grammar violation.
pub fn parse_value_with_options(tokens: &[Token], options: ParseOptions) -> Result<PsValue> {
    let mut parser = Parser::with_options(tokens, options);
    let value = parser.value()?;
    parser.finish()?;
    Ok(value)
}

/// Cursor over a token slice with one token of lookahead.
///
/// Reading past the last token behaves as if an [`TokenKind::EndOfInput`]
/// token were present, so hand-built sequences without one are accepted.
pub struct Parser<'t> {
    tokens: &'t [Token],
    pos: usize,
    depth: usize,
    options: ParseOptions,
    eof: Token,
}

impl<'t> Parser<'t> {
    #[must_use]
    pub fn new(tokens: &'t [Token]) -> Self {
        Self::with_options(tokens, ParseOptions::default())
    }

    #[must_use]
    pub fn with_options(tokens: &'t [Token], options: ParseOptions) -> Self {
        let last_line = tokens.last().map_or(1, |t| t.line);
        Parser {
            tokens,
            pos: 0,
            depth: 0,
            options,
            eof: Token::end(last_line),
        }
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    fn next(&mut self) -> &Token {
        let index = self.pos;
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        self.tokens.get(index).unwrap_or(&self.eof)
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.peek().kind == kind
    }

    fn match_kind(&mut self, kinds: &[TokenKind]) -> Option<TokenKind> {
        let kind = self.peek().kind;
        if kinds.contains(&kind) {
            self.next();
            Some(kind)
        } else {
            None
        }
    }

    /// Returns `true` once every real token has been consumed.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::EndOfInput)
    }

    /// Fails unless the cursor sits on end of input.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::TrailingTokens`] naming the first leftover token.
    pub fn finish(&self) -> Result<()> {
        if self.is_at_end() {
            return Ok(());
        }
        let token = self.peek();
        Err(SyntaxError::TrailingTokens {
            got: token.kind,
            line: token.line,
        }
        .into())
    }

    /// Parses any value.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedValue`] when the next token cannot start a
    /// value, plus any error from the nested productions.
    pub fn value(&mut self) -> Result<PsValue> {
        match self.peek().kind {
            TokenKind::Text => self.string().map(PsValue::String),
            TokenKind::Number => self.number().map(PsValue::Number),
            TokenKind::Boolean => self.boolean().map(PsValue::Bool),
            TokenKind::Null => {
                self.next();
                Ok(PsValue::Null)
            }
            TokenKind::At => self.collection(),
            got => Err(SyntaxError::ExpectedValue {
                got,
                line: self.peek().line,
            }
            .into()),
        }
    }

    fn collection(&mut self) -> Result<PsValue> {
        let at_line = self.next().line;
        match self.match_kind(&[TokenKind::LParen, TokenKind::LBrace]) {
            Some(TokenKind::LParen) => self.nested(at_line, |p| p.array().map(PsValue::Array)),
            Some(_) => self.nested(at_line, |p| p.object().map(PsValue::Object)),
            None => {
                let token = self.peek();
                Err(SyntaxError::ExpectedCollectionOpener {
                    found: token.kind.to_string(),
                    line: token.line,
                }
                .into())
            }
        }
    }

    fn nested<F>(&mut self, line: usize, body: F) -> Result<PsValue>
    where
        F: FnOnce(&mut Self) -> Result<PsValue>,
    {
        if let Some(limit) = self.options.max_depth {
            if self.depth >= limit {
                return Err(SyntaxError::DepthLimitExceeded { limit, line }.into());
            }
        }
        self.depth += 1;
        let result = body(self);
        self.depth -= 1;
        result
    }

    /// Parses a string literal.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedString`] if the next token is not a string.
    pub fn string(&mut self) -> Result<String> {
        let token = self.next();
        match (token.kind, token.as_text()) {
            (TokenKind::Text, Some(text)) => Ok(text.to_string()),
            _ => Err(SyntaxError::ExpectedString {
                got: token.kind,
                line: token.line,
            }
            .into()),
        }
    }

    /// Parses a numeric literal.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedNumber`] if the next token is not a number.
    pub fn number(&mut self) -> Result<f64> {
        let token = self.next();
        match (token.kind, token.as_number()) {
            (TokenKind::Number, Some(n)) => Ok(n),
            _ => Err(SyntaxError::ExpectedNumber {
                got: token.kind,
                line: token.line,
            }
            .into()),
        }
    }

    /// Parses `$true` or `$false`, resolving the spelling carried on the token.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedBoolean`] for a non-boolean token and
    /// [`SyntaxError::InvalidBoolean`] for an unknown spelling.
    pub fn boolean(&mut self) -> Result<bool> {
        let token = self.next();
        if token.kind != TokenKind::Boolean {
            return Err(SyntaxError::ExpectedBoolean {
                got: token.kind,
                line: token.line,
            }
            .into());
        }
        match token.as_text() {
            Some("$true") => Ok(true),
            Some("$false") => Ok(false),
            other => Err(SyntaxError::InvalidBoolean {
                lexeme: other.unwrap_or_default().to_string(),
                line: token.line,
            }
            .into()),
        }
    }

    /// Parses a bare identifier (object key).
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedIdentifier`] if the next token is not an identifier.
    pub fn identifier(&mut self) -> Result<String> {
        let token = self.next();
        match (token.kind, token.as_text()) {
            (TokenKind::Identifier, Some(name)) => Ok(name.to_string()),
            _ => Err(SyntaxError::ExpectedIdentifier {
                got: token.kind,
                line: token.line,
            }
            .into()),
        }
    }

    /// Consumes the `=` between a key and its value.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::ExpectedEquals`] if the next token is not `=`.
    pub fn equals(&mut self) -> Result<()> {
        let token = self.next();
        if token.kind == TokenKind::Equals {
            Ok(())
        } else {
            Err(SyntaxError::ExpectedEquals {
                got: token.kind,
                line: token.line,
            }
            .into())
        }
    }

    /// Parses an array body after `@(`, consuming the closing `)`.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::UnterminatedCollection`] if input ends before `)`.
    pub fn array(&mut self) -> Result<Vec<PsValue>> {
        let open_line = self.opener_line();
        let mut items = Vec::new();
        loop {
            match self.peek().kind {
                TokenKind::RParen => {
                    self.next();
                    return Ok(items);
                }
                TokenKind::EndOfInput => {
                    return Err(SyntaxError::UnterminatedCollection { line: open_line }.into())
                }
                _ => items.push(self.value()?),
            }
        }
    }

    /// Parses an object body after `@{`, consuming the closing `}`.
    /// A repeated key overwrites the earlier value.
    ///
    /// # Errors
    ///
    /// [`SyntaxError::UnterminatedCollection`] if input ends before `}`, or
    /// the key, `=` and value errors of each entry.
    pub fn object(&mut self) -> Result<PsMap> {
        let open_line = self.opener_line();
        let mut map = PsMap::new();
        loop {
            match self.peek().kind {
                TokenKind::RBrace => {
                    self.next();
                    return Ok(map);
                }
                TokenKind::EndOfInput => {
                    return Err(SyntaxError::UnterminatedCollection { line: open_line }.into())
                }
                _ => {
                    let key = self.identifier()?;
                    self.equals()?;
                    let value = self.value()?;
                    map.insert(key, value);
                }
            }
        }
    }

    /// Line of the `@` that opened the current body.
    fn opener_line(&self) -> usize {
        self.pos
            .checked_sub(2)
            .and_then(|i| self.tokens.get(i))
            .filter(|t| t.kind == TokenKind::At)
            .map_or_else(|| self.peek().line, |t| t.line)
    }
}
