//! Grammar productions driven through the public token and parser API,
//! including token sequences the tokenizer itself never emits.

use serde_psdata::{
    parse_value, tokenize, Error, Lexeme, Parser, PsValue, SyntaxError, Token, TokenKind,
};

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, Lexeme::Text(text.to_string()), 1)
}

fn num(n: f64) -> Token {
    Token::new(TokenKind::Number, Lexeme::Number(n), 1)
}

fn syntax(result: serde_psdata::Result<impl std::fmt::Debug>) -> SyntaxError {
    match result {
        Err(Error::Syntax(err)) => err,
        other => panic!("expected a syntax error, got {:?}", other),
    }
}

#[test]
fn test_token_stream_shape() {
    let tokens = tokenize("@{ key = @(\"v\" 1 $true $null) }").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::At,
            TokenKind::LBrace,
            TokenKind::Identifier,
            TokenKind::Equals,
            TokenKind::At,
            TokenKind::LParen,
            TokenKind::Text,
            TokenKind::Number,
            TokenKind::Boolean,
            TokenKind::Null,
            TokenKind::RParen,
            TokenKind::RBrace,
            TokenKind::EndOfInput,
        ]
    );
    assert_eq!(tokens[2].as_text(), Some("key"));
    assert_eq!(tokens[6].as_text(), Some("v"));
    assert_eq!(tokens[7].as_number(), Some(1.0));
    assert_eq!(tokens[8].as_text(), Some("$true"));
}

#[test]
fn test_reserved_spellings_are_exact() {
    let kinds: Vec<TokenKind> = tokenize("$True $nulls $false_ null true")
        .unwrap()
        .iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(kinds[..5], [TokenKind::Identifier; 5]);
}

#[test]
fn test_parse_without_end_token() {
    let tokens = vec![
        tok(TokenKind::At, "@"),
        tok(TokenKind::LParen, "("),
        num(1.0),
        tok(TokenKind::RParen, ")"),
    ];
    assert_eq!(
        parse_value(&tokens).unwrap(),
        PsValue::Array(vec![PsValue::Number(1.0)])
    );

    let unterminated = &tokens[..3];
    assert_eq!(
        syntax(parse_value(unterminated)),
        SyntaxError::UnterminatedCollection { line: 1 }
    );
    assert_eq!(
        syntax(parse_value(&[])),
        SyntaxError::ExpectedValue {
            got: TokenKind::EndOfInput,
            line: 1
        }
    );
}

#[test]
fn test_invalid_boolean_spelling() {
    let tokens = vec![tok(TokenKind::Boolean, "$maybe")];
    assert_eq!(
        syntax(parse_value(&tokens)),
        SyntaxError::InvalidBoolean {
            lexeme: "$maybe".to_string(),
            line: 1
        }
    );
}

#[test]
fn test_individual_productions() {
    let tokens = tokenize("\"s\" 5 $false name = @( ) @{ k = 1 }").unwrap();
    let mut parser = Parser::new(&tokens);

    assert_eq!(parser.string().unwrap(), "s");
    assert_eq!(parser.number().unwrap(), 5.0);
    assert!(!parser.boolean().unwrap());
    assert_eq!(parser.identifier().unwrap(), "name");
    parser.equals().unwrap();
    assert_eq!(parser.value().unwrap(), PsValue::Array(vec![]));
    assert!(!parser.is_at_end());
    assert_eq!(parser.value().unwrap().get("k"), Some(&PsValue::Number(1.0)));
    assert!(parser.is_at_end());
    parser.finish().unwrap();
}

#[test]
fn test_production_mismatches() {
    let tokens = tokenize("5").unwrap();

    assert_eq!(
        syntax(Parser::new(&tokens).string()),
        SyntaxError::ExpectedString {
            got: TokenKind::Number,
            line: 1
        }
    );
    assert_eq!(
        syntax(Parser::new(&tokens).boolean()),
        SyntaxError::ExpectedBoolean {
            got: TokenKind::Number,
            line: 1
        }
    );
    assert_eq!(
        syntax(Parser::new(&tokens).identifier()),
        SyntaxError::ExpectedIdentifier {
            got: TokenKind::Number,
            line: 1
        }
    );
    assert_eq!(
        syntax(Parser::new(&tokens).equals()),
        SyntaxError::ExpectedEquals {
            got: TokenKind::Number,
            line: 1
        }
    );

    let text = tokenize("\"5\"").unwrap();
    assert_eq!(
        syntax(Parser::new(&text).number()),
        SyntaxError::ExpectedNumber {
            got: TokenKind::Text,
            line: 1
        }
    );
}

#[test]
fn test_object_key_must_be_identifier() {
    assert_eq!(
        syntax(serde_psdata::parse("@{ \"quoted\" = 1 }")),
        SyntaxError::ExpectedIdentifier {
            got: TokenKind::Text,
            line: 1
        }
    );
    assert_eq!(
        syntax(serde_psdata::parse("@{ $true = 1 }")),
        SyntaxError::ExpectedIdentifier {
            got: TokenKind::Boolean,
            line: 1
        }
    );
}

#[test]
fn test_missing_value_after_equals() {
    assert_eq!(
        syntax(serde_psdata::parse("@{\n a =\n}")),
        SyntaxError::ExpectedValue {
            got: TokenKind::RBrace,
            line: 3
        }
    );
}

#[test]
fn test_error_messages() {
    let err = serde_psdata::parse("@{\n a = 1\n b 2\n}").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: expected '=' but got number at line 3"
    );

    let err = serde_psdata::parse("@{").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: collection opened at line 1 is never closed"
    );

    let err = serde_psdata::parse("@(1 -2)").unwrap_err();
    assert_eq!(err.to_string(), "unexpected character '-' at line 1");
}
