//! Line-oriented listing of a scanned token sequence.
//!
//! One lexeme per line: `<line>\t<KIND>` followed by `\t<value>` when the
//! lexeme carries one.

use std::fmt::Write;

use crate::token::Lexeme;

/// Render lexemes as a tab-separated listing.
#[must_use]
pub fn format_tokens(lexemes: &[Lexeme]) -> String {
    let mut out = String::new();
    for lexeme in lexemes {
        format_lexeme(&mut out, lexeme);
    }
    out
}

fn format_lexeme(out: &mut String, lexeme: &Lexeme) {
    // Writing to a String cannot fail.
    let _ = write!(out, "{}\t{}", lexeme.line, lexeme.kind);
    if let Some(value) = &lexeme.value {
        let _ = write!(out, "\t{value}");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;

    #[test]
    fn empty_listing() {
        assert_eq!(format_tokens(&[]), "");
    }

    #[test]
    fn declaration_listing() {
        let tokens = tokenize("var v3 array[int] = [1, 20]").expect("should tokenize");
        assert_eq!(
            format_tokens(&tokens),
            "0\tVAR\n\
             0\tIDENTIFIER\tv3\n\
             0\tARRAY_TYPE\tarray\n\
             0\tBRACKET_OPEN\n\
             0\tINT_TYPE\tint\n\
             0\tBRACKET_CLOSE\n\
             0\tASSIGNMENT\n\
             0\tARRAY\t[1, 20]\n"
        );
    }

    #[test]
    fn values_and_lines() {
        let tokens = tokenize("x = 2.5\ny = \"hi\"").expect("should tokenize");
        assert_eq!(
            format_tokens(&tokens),
            "0\tIDENTIFIER\tx\n\
             0\tASSIGNMENT\n\
             0\tFLOAT\t2.5\n\
             1\tIDENTIFIER\ty\n\
             1\tASSIGNMENT\n\
             1\tSTR\t\"hi\"\n"
        );
    }
}
