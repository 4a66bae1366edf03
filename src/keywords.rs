//! Reserved words.

use crate::token::TokenKind;

/// Declaration and type keywords, matched against a whole word.
const KEYWORDS: &[(&str, TokenKind)] = &[
    ("var", TokenKind::Var),
    ("const", TokenKind::Const),
    ("int", TokenKind::IntType),
    ("float", TokenKind::FloatType),
    ("bool", TokenKind::BoolType),
    ("string", TokenKind::StrType),
    ("array", TokenKind::ArrayType),
];

/// Control-flow keywords, matched by prefix before a word is scanned.
/// Ordered longest first so the longest candidate wins.
const CONTROL_KEYWORDS: &[(&str, TokenKind)] = &[
    ("while", TokenKind::While),
    ("from", TokenKind::From),
    ("step", TokenKind::Step),
    ("for", TokenKind::For),
    ("if", TokenKind::If),
    ("to", TokenKind::To),
];

/// Characters that may continue a word. `.` is included so that
/// `2.156` scans as a single run.
#[must_use]
pub const fn is_word_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '.'
}

#[must_use]
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(text, _)| *text == word)
        .map(|&(_, kind)| kind)
}

/// Canonical name carried by a type keyword token.
#[must_use]
pub fn type_name(kind: TokenKind) -> Option<&'static str> {
    KEYWORDS
        .iter()
        .find(|&&(_, k)| k == kind && kind.is_type_keyword())
        .map(|&(text, _)| text)
}

/// Longest control keyword that `input` starts with, as long as it is not
/// immediately followed by another word character.
#[must_use]
pub fn match_control_keyword(input: &str) -> Option<(&'static str, TokenKind)> {
    CONTROL_KEYWORDS.iter().copied().find(|(text, _)| {
        input.starts_with(text) && !input[text.len()..].starts_with(is_word_char)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_lookup() {
        assert_eq!(keyword("var"), Some(TokenKind::Var));
        assert_eq!(keyword("array"), Some(TokenKind::ArrayType));
        assert_eq!(keyword("variable"), None);
        assert_eq!(keyword("while"), None);
    }

    #[test]
    fn type_names() {
        assert_eq!(type_name(TokenKind::StrType), Some("string"));
        assert_eq!(type_name(TokenKind::ArrayType), Some("array"));
        assert_eq!(type_name(TokenKind::Var), None);
    }

    #[test]
    fn control_keywords_match_at_word_boundary() {
        assert_eq!(match_control_keyword("for i"), Some(("for", TokenKind::For)));
        assert_eq!(match_control_keyword("from 0"), Some(("from", TokenKind::From)));
        assert_eq!(match_control_keyword("if("), Some(("if", TokenKind::If)));
        assert_eq!(match_control_keyword("to"), Some(("to", TokenKind::To)));
        assert_eq!(match_control_keyword("step 2"), Some(("step", TokenKind::Step)));
        assert_eq!(match_control_keyword("while{"), Some(("while", TokenKind::While)));
    }

    #[test]
    fn identifiers_sharing_a_prefix_are_not_keywords() {
        assert_eq!(match_control_keyword("format"), None);
        assert_eq!(match_control_keyword("total"), None);
        assert_eq!(match_control_keyword("iffy"), None);
        assert_eq!(match_control_keyword("steps"), None);
        assert_eq!(match_control_keyword("int"), None);
    }

    #[test]
    fn word_chars() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('9'));
        assert!(is_word_char('_'));
        assert!(is_word_char('.'));
        assert!(!is_word_char('['));
        assert!(!is_word_char('é'));
    }
}
