//! Declared types as written in type annotations.

use std::fmt;

use crate::token::TokenKind;

/// Element types an array literal item can be coerced to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Int,
    Float,
    Bool,
    Str,
}

impl PrimitiveType {
    /// Canonical source spelling (`int`, `float`, `bool`, `string`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
            Self::Str => "string",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            "string" => Some(Self::Str),
            _ => None,
        }
    }

    #[must_use]
    pub const fn from_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::IntType => Some(Self::Int),
            TokenKind::FloatType => Some(Self::Float),
            TokenKind::BoolType => Some(Self::Bool),
            TokenKind::StrType => Some(Self::Str),
            _ => None,
        }
    }

    /// The type keyword token for this primitive.
    #[must_use]
    pub const fn keyword(self) -> TokenKind {
        match self {
            Self::Int => TokenKind::IntType,
            Self::Float => TokenKind::FloatType,
            Self::Bool => TokenKind::BoolType,
            Self::Str => TokenKind::StrType,
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A variable's declared type: a primitive or an (arbitrarily nested) array.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeAnnotation {
    Primitive(PrimitiveType),
    Array(Box<Self>),
}

impl TypeAnnotation {
    #[must_use]
    pub fn array_of(element: Self) -> Self {
        Self::Array(Box::new(element))
    }

    /// Element type if this is an array annotation.
    #[must_use]
    pub fn element(&self) -> Option<&Self> {
        match self {
            Self::Array(element) => Some(element),
            Self::Primitive(_) => None,
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Primitive(p) => write!(f, "{p}"),
            Self::Array(element) => write!(f, "array[{element}]"),
        }
    }
}
