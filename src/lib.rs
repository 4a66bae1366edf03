//! Lexical scanner for the simpl scripting language.
//!
//! Converts source text into an ordered sequence of typed lexemes. Array
//! literals are coerced to their declared element type while scanning,
//! either from the annotation they are assigned in or from the earlier
//! declaration of the variable they are assigned to.
//!
//! # Quick start
//!
//! ```
//! use simpl::{TokenKind, Value, tokenize};
//!
//! let tokens = tokenize("var v3 array[int] = [1, 20]").unwrap();
//! assert_eq!(tokens[2].kind, TokenKind::ArrayType);
//! assert_eq!(
//!     tokens[7].value,
//!     Some(Value::Array(vec![Value::Int(1), Value::Int(20)]))
//! );
//! ```
//!
//! Declare first, assign later:
//!
//! ```
//! use simpl::{Value, tokenize};
//!
//! let tokens = tokenize("var v array[bool]\nv = [true, false]").unwrap();
//! let last = tokens.last().unwrap();
//! assert_eq!(last.line, 1);
//! assert_eq!(
//!     last.value,
//!     Some(Value::Array(vec![Value::Bool(true), Value::Bool(false)]))
//! );
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod cursor;
pub mod formatter;
pub mod keywords;
pub mod lexer;
pub mod literal;
pub mod symbols;
pub mod token;
pub mod types;

pub use cursor::{Cursor, DelimiterNotFound};
pub use formatter::format_tokens;
pub use lexer::{LexError, LexErrorKind, ScanOutput, Scanner, tokenize};
pub use literal::CoerceError;
pub use symbols::SymbolTable;
pub use token::{Lexeme, TokenKind, Value};
pub use types::{PrimitiveType, TypeAnnotation};
