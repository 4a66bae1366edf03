use std::fmt;

use tracing::{debug, trace};

use crate::cursor::{Cursor, DelimiterNotFound};
use crate::keywords::{self, is_word_char};
use crate::literal::{self, CoerceError};
use crate::symbols::SymbolTable;
use crate::token::{Lexeme, TokenKind, Value};
use crate::types::{PrimitiveType, TypeAnnotation};

/// Classifies a scan error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// String literal without a closing `"`.
    UnterminatedString,
    /// Array literal without a closing `]`.
    UnterminatedArrayLiteral,
    /// A bracket of an `array[...]` annotation is missing.
    MissingAnnotationBracket { expected: char, found: Option<char> },
    /// Input ended inside an `array[...]` annotation.
    UnterminatedAnnotation,
    /// `array[...]` names something that is not a type.
    UnknownElementType(String),
    /// Character that cannot start any token.
    UnexpectedCharacter(char),
    /// Array literal assigned to a name that was never declared.
    UndeclaredIdentifier(String),
    /// Array literal assigned to a name declared with a non-array type.
    NotAnArray(String),
    /// Array literal outside an assignment, so its element type is unknown.
    UntypedArrayLiteral,
    /// Array literal item that does not parse as the element type.
    InvalidElement(CoerceError),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnterminatedString => write!(f, "unterminated string literal"),
            Self::UnterminatedArrayLiteral => write!(f, "unterminated array literal"),
            Self::MissingAnnotationBracket {
                expected,
                found: None,
            } => {
                write!(f, "expected '{expected}' in array type annotation")
            }
            Self::MissingAnnotationBracket {
                expected,
                found: Some(ch),
            } => {
                write!(
                    f,
                    "expected '{expected}' in array type annotation, got '{ch}'"
                )
            }
            Self::UnterminatedAnnotation => {
                write!(f, "unterminated array type annotation")
            }
            Self::UnknownElementType(name) => {
                write!(f, "unknown array element type: `{name}`")
            }
            Self::UnexpectedCharacter(ch) => write!(f, "unexpected character: {ch}"),
            Self::UndeclaredIdentifier(name) => {
                write!(f, "could not find type for identifier: {name}")
            }
            Self::NotAnArray(name) => write!(f, "{name} is not declared as an array"),
            Self::UntypedArrayLiteral => {
                write!(f, "cannot determine element type of array literal")
            }
            Self::InvalidElement(err) => write!(f, "invalid array element: {err}"),
        }
    }
}

/// Error produced during scanning. `line` is zero-based.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {line}")]
pub struct LexError {
    pub kind: LexErrorKind,
    pub line: usize,
}

/// Completed result of one scan.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    pub lexemes: Vec<Lexeme>,
    /// Final value of the line counter (number of newlines consumed).
    pub lines: usize,
}

/// Scan a source string into a sequence of lexemes.
///
/// # Errors
///
/// Returns `LexError` on the first malformed construct; no partial
/// sequence is produced.
pub fn tokenize(input: &str) -> Result<Vec<Lexeme>, LexError> {
    Scanner::new(input).scan().map(|output| output.lexemes)
}

/// Single-pass scanner bound to one source string.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    lexemes: Vec<Lexeme>,
    symbols: SymbolTable,
    last_annotation: Option<TypeAnnotation>,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            lexemes: Vec::new(),
            symbols: SymbolTable::new(),
            last_annotation: None,
        }
    }

    /// Run the scan to completion.
    pub fn scan(mut self) -> Result<ScanOutput, LexError> {
        self.run()?;

        debug!(
            tokens = self.lexemes.len(),
            lines = self.cursor.line(),
            "scan complete"
        );

        Ok(ScanOutput {
            lexemes: self.lexemes,
            lines: self.cursor.line(),
        })
    }

    fn run(&mut self) -> Result<(), LexError> {
        while !self.cursor.is_at_end() {
            self.cursor.mark_start();
            let Some(ch) = self.cursor.advance() else {
                break;
            };

            match ch {
                ' ' | '\t' | '\r' | '\n' => {}
                '"' => self.scan_string()?,
                '[' => self.scan_array_literal()?,
                '{' => self.push(TokenKind::BraceOpen),
                '}' => self.push(TokenKind::BraceClose),
                '(' => self.push(TokenKind::ParenOpen),
                ')' => self.push(TokenKind::ParenClose),
                '=' => self.push(TokenKind::Assign),
                '+' => self.push(TokenKind::Add),
                '-' => self.push(TokenKind::Sub),
                '*' => self.push(TokenKind::Mul),
                '/' => self.push(TokenKind::Div),
                '%' => self.push(TokenKind::Mod),
                '>' => self.push_either("=", TokenKind::GtEq, TokenKind::Gt),
                '<' => self.push_either("=", TokenKind::LtEq, TokenKind::Lt),
                '!' => self.push_either("=", TokenKind::NotEq, TokenKind::Not),
                _ => self.scan_word(ch)?,
            }
        }
        Ok(())
    }

    fn push(&mut self, kind: TokenKind) {
        self.lexemes.push(Lexeme::new(kind, self.cursor.line()));
    }

    fn push_value(&mut self, kind: TokenKind, value: Value) {
        self.lexemes
            .push(Lexeme::with_value(kind, value, self.cursor.line()));
    }

    /// Push `long` if the next character is `next` (consuming it), else `short`.
    fn push_either(&mut self, next: &str, long: TokenKind, short: TokenKind) {
        if self.cursor.peek(next) {
            self.cursor.skip(next.len());
            self.push(long);
        } else {
            self.push(short);
        }
    }

    const fn error(&self, kind: LexErrorKind) -> LexError {
        LexError {
            kind,
            line: self.cursor.line(),
        }
    }

    fn scan_string(&mut self) -> Result<(), LexError> {
        let line = self.cursor.line();
        let start = self.cursor.start();
        let unterminated = LexError {
            kind: LexErrorKind::UnterminatedString,
            line,
        };

        let (raw, _) = self
            .cursor
            .match_until("\"", start)
            .map_err(|DelimiterNotFound| unterminated.clone())?;
        let text = literal::parse_string(raw).map_err(|_| unterminated)?;

        self.lexemes
            .push(Lexeme::with_value(TokenKind::Str, Value::Str(text), line));
        Ok(())
    }

    fn scan_word(&mut self, first: char) -> Result<(), LexError> {
        if !is_word_char(first) {
            return Err(self.error(LexErrorKind::UnexpectedCharacter(first)));
        }

        if let Some((text, kind)) = keywords::match_control_keyword(self.cursor.from_start()) {
            self.cursor.skip(text.len() - first.len_utf8());
            self.push(kind);
            return Ok(());
        }

        self.cursor.eat_while(is_word_char);
        let word = self.cursor.lexeme();

        if let Some((kind, value)) = literal::sniff(word) {
            self.push_value(kind, value);
        } else if let Some(kind) = keywords::keyword(word) {
            self.push_keyword(kind)?;
        } else {
            self.push_value(TokenKind::Identifier, Value::Name(word.to_string()));
        }
        Ok(())
    }

    fn push_keyword(&mut self, kind: TokenKind) -> Result<(), LexError> {
        let Some(name) = keywords::type_name(kind) else {
            self.push(kind);
            return Ok(());
        };

        let index = self.lexemes.len();
        self.push_value(kind, Value::Name(name.to_string()));

        let ty = match PrimitiveType::from_kind(kind) {
            Some(primitive) => TypeAnnotation::Primitive(primitive),
            None => {
                let ty = TypeAnnotation::array_of(self.scan_annotation()?);
                self.last_annotation = Some(ty.clone());
                ty
            }
        };
        self.record_declaration(index, ty);
        Ok(())
    }

    /// Parse `[elementType]` after an `array` keyword, emitting bracket and
    /// element-type tokens. Recurses for nested arrays.
    fn scan_annotation(&mut self) -> Result<TypeAnnotation, LexError> {
        match self.cursor.advance() {
            Some('[') => self.push(TokenKind::BracketOpen),
            found => {
                return Err(self.error(LexErrorKind::MissingAnnotationBracket {
                    expected: '[',
                    found,
                }));
            }
        }

        self.cursor.mark_start();
        self.cursor.eat_while(|c| c != ']' && c != '[');
        if self.cursor.is_at_end() {
            return Err(self.error(LexErrorKind::UnterminatedAnnotation));
        }

        let name = self.cursor.lexeme().trim();
        let element = if name == "array" {
            self.push_value(TokenKind::ArrayType, Value::Name(name.to_string()));
            TypeAnnotation::array_of(self.scan_annotation()?)
        } else if let Some(primitive) = PrimitiveType::from_name(name) {
            self.push_value(primitive.keyword(), Value::Name(name.to_string()));
            TypeAnnotation::Primitive(primitive)
        } else {
            return Err(self.error(LexErrorKind::UnknownElementType(name.to_string())));
        };

        self.cursor.eat_while(|c| c == ' ' || c == '\t');
        match self.cursor.advance() {
            Some(']') => {
                self.push(TokenKind::BracketClose);
                Ok(element)
            }
            None => Err(self.error(LexErrorKind::UnterminatedAnnotation)),
            found => Err(self.error(LexErrorKind::MissingAnnotationBracket {
                expected: ']',
                found,
            })),
        }
    }

    /// Remember the type of `var|const <name> <type>` once its type keyword
    /// (at `type_index`) is complete.
    fn record_declaration(&mut self, type_index: usize, ty: TypeAnnotation) {
        let Some(decl_index) = type_index.checked_sub(2) else {
            return;
        };
        let [decl, ident] = &self.lexemes[decl_index..type_index] else {
            return;
        };
        if !matches!(decl.kind, TokenKind::Var | TokenKind::Const)
            || ident.kind != TokenKind::Identifier
        {
            return;
        }
        let Some(name) = ident.name() else {
            return;
        };

        let shown = ty.to_string();
        if self.symbols.declare(name, ty) {
            trace!(identifier = name, ty = %shown, "declaration");
        } else {
            trace!(identifier = name, ty = %shown, "redeclaration ignored");
        }
    }

    fn scan_array_literal(&mut self) -> Result<(), LexError> {
        let line = self.cursor.line();

        let items = self.collect_items().map_err(|DelimiterNotFound| LexError {
            kind: LexErrorKind::UnterminatedArrayLiteral,
            line,
        })?;
        let element = self
            .resolve_element_type()
            .map_err(|kind| LexError { kind, line })?;

        let values = match &element {
            TypeAnnotation::Primitive(primitive) => items
                .iter()
                .map(|item| literal::coerce(item, *primitive))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|err| LexError {
                    kind: LexErrorKind::InvalidElement(err),
                    line,
                })?,
            // Nested literals keep their raw text.
            TypeAnnotation::Array(_) => items
                .iter()
                .map(|item| Value::Raw((*item).to_string()))
                .collect(),
        };

        trace!(element = %element, items = values.len(), "array literal");
        self.lexemes.push(Lexeme::with_value(
            TokenKind::Array,
            Value::Array(values),
            line,
        ));
        Ok(())
    }

    /// Collect the raw, trimmed items of an array literal whose `[` has
    /// already been consumed. Commas and brackets inside nested literals or
    /// string items do not split.
    fn collect_items(&mut self) -> Result<Vec<&'a str>, DelimiterNotFound> {
        let mut items = Vec::new();
        loop {
            let from = self.cursor.current();
            let (mut raw, mut delimiter) = self.cursor.match_until(",]", from)?;
            while !is_balanced(&raw[..raw.len() - 1]) {
                (raw, delimiter) = self.cursor.match_until(",]", from)?;
            }

            let item = raw[..raw.len() - 1].trim();
            let closed = delimiter == ']';
            if !(closed && items.is_empty() && item.is_empty()) {
                items.push(item);
            }
            if closed {
                return Ok(items);
            }
        }
    }

    /// Element type of the array literal about to be emitted, taken from the
    /// annotation that just closed (`var v array[int] = [..]`) or from the
    /// declaration of the assigned identifier (`v = [..]`).
    fn resolve_element_type(&self) -> Result<TypeAnnotation, LexErrorKind> {
        let [.., before, last] = self.lexemes.as_slice() else {
            return Err(LexErrorKind::UntypedArrayLiteral);
        };
        if last.kind != TokenKind::Assign {
            return Err(LexErrorKind::UntypedArrayLiteral);
        }

        match before.kind {
            TokenKind::BracketClose => self
                .last_annotation
                .as_ref()
                .and_then(TypeAnnotation::element)
                .cloned()
                .ok_or(LexErrorKind::UntypedArrayLiteral),
            TokenKind::Identifier => {
                let name = before.name().unwrap_or_default();
                let declared = self
                    .symbols
                    .lookup(name)
                    .ok_or_else(|| LexErrorKind::UndeclaredIdentifier(name.to_string()))?;
                declared
                    .element()
                    .cloned()
                    .ok_or_else(|| LexErrorKind::NotAnArray(name.to_string()))
            }
            _ => Err(LexErrorKind::UntypedArrayLiteral),
        }
    }
}

/// Whether `text` closes every bracket and quote it opens.
fn is_balanced(text: &str) -> bool {
    let mut depth = 0usize;
    let mut quoted = false;
    for ch in text.chars() {
        match ch {
            '"' => quoted = !quoted,
            '[' if !quoted => depth += 1,
            ']' if !quoted => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    depth == 0 && !quoted
}
