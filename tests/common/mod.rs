#![allow(dead_code)]

use simpl::{LexErrorKind, Lexeme, TokenKind, Value, tokenize};

/// Token kinds of a successful scan.
pub fn kinds(input: &str) -> Vec<TokenKind> {
    tokenize(input)
        .unwrap_or_else(|e| panic!("tokenize failed: {e}\n--- input ---\n{input}"))
        .iter()
        .map(|l| l.kind)
        .collect()
}

/// Error kind of a scan that must fail.
pub fn error_kind(input: &str) -> LexErrorKind {
    match tokenize(input) {
        Ok(tokens) => panic!("expected scan to fail, got {tokens:?}\n--- input ---\n{input}"),
        Err(e) => e.kind,
    }
}

/// Value of the last lexeme, which must be an array literal.
pub fn last_array(input: &str) -> Vec<Value> {
    let tokens = tokenize(input).expect("tokenize failed");
    match tokens.last() {
        Some(Lexeme {
            kind: TokenKind::Array,
            value: Some(Value::Array(items)),
            ..
        }) => items.clone(),
        other => panic!("expected trailing array literal, got {other:?}"),
    }
}

pub fn ints(values: &[i64]) -> Vec<Value> {
    values.iter().copied().map(Value::Int).collect()
}
