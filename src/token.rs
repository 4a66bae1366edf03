use std::fmt;

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Not-found marker. Never emitted by a successful scan.
    Unknown,

    Var,
    Const,

    If,
    For,
    While,
    From,
    To,
    Step,

    IntType,
    FloatType,
    BoolType,
    StrType,
    ArrayType,

    /// Integer literal (`i64`).
    Int,
    /// Float literal (`f64`).
    Float,
    /// `true` or `false`.
    Bool,
    /// Double-quoted string literal, quotes stripped.
    Str,
    /// Array literal (`[1, 2]`) coerced to its declared element type.
    Array,

    ParenOpen,
    ParenClose,
    BraceOpen,
    BraceClose,
    BracketOpen,
    BracketClose,
    /// `=`.
    Assign,
    /// `==`. Reserved; `=` always lexes as [`TokenKind::Assign`].
    Eq,

    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Gt,
    Lt,
    GtEq,
    LtEq,
    NotEq,
    Not,

    Identifier,
}

impl TokenKind {
    /// Upper-case name used in token listings and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Var => "VAR",
            Self::Const => "CONST",
            Self::If => "IF",
            Self::For => "FOR",
            Self::While => "WHILE",
            Self::From => "FROM",
            Self::To => "TO",
            Self::Step => "STEP",
            Self::IntType => "INT_TYPE",
            Self::FloatType => "FLOAT_TYPE",
            Self::BoolType => "BOOL_TYPE",
            Self::StrType => "STR_TYPE",
            Self::ArrayType => "ARRAY_TYPE",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::Bool => "BOOL",
            Self::Str => "STR",
            Self::Array => "ARRAY",
            Self::ParenOpen => "PAREN_OPEN",
            Self::ParenClose => "PAREN_CLOSE",
            Self::BraceOpen => "BRACE_OPEN",
            Self::BraceClose => "BRACE_CLOSE",
            Self::BracketOpen => "BRACKET_OPEN",
            Self::BracketClose => "BRACKET_CLOSE",
            Self::Assign => "ASSIGNMENT",
            Self::Eq => "EQ",
            Self::Add => "ADD",
            Self::Sub => "SUB",
            Self::Mul => "MUL",
            Self::Div => "DIV",
            Self::Mod => "MOD",
            Self::Gt => "GT",
            Self::Lt => "LT",
            Self::GtEq => "GTEQ",
            Self::LtEq => "LTEQ",
            Self::NotEq => "NEQ",
            Self::Not => "NOT",
            Self::Identifier => "IDENTIFIER",
        }
    }

    /// Whether this kind is one of the five type keywords.
    #[must_use]
    pub const fn is_type_keyword(self) -> bool {
        matches!(
            self,
            Self::IntType | Self::FloatType | Self::BoolType | Self::StrType | Self::ArrayType
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed payload carried by a lexeme.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Bool(bool),
    Str(String),
    /// Identifier name, or the canonical name of a type keyword.
    Name(String),
    /// Coerced array literal items.
    Array(Vec<Self>),
    /// Un-coerced item text of a nested array literal.
    Raw(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Bool(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s:?}"),
            Self::Name(s) | Self::Raw(s) => f.write_str(s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
        }
    }
}

/// A single scanned token with its kind, optional value, and zero-based line.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub kind: TokenKind,
    pub value: Option<Value>,
    pub line: usize,
}

impl Lexeme {
    #[must_use]
    pub const fn new(kind: TokenKind, line: usize) -> Self {
        Self {
            kind,
            value: None,
            line,
        }
    }

    #[must_use]
    pub const fn with_value(kind: TokenKind, value: Value, line: usize) -> Self {
        Self {
            kind,
            value: Some(value),
            line,
        }
    }

    /// Identifier or type name carried by this lexeme, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match &self.value {
            Some(Value::Name(name)) => Some(name),
            _ => None,
        }
    }
}
