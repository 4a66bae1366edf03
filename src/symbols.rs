//! Declared types of variables seen so far in the scan.

use std::collections::HashMap;

use crate::types::TypeAnnotation;

/// Maps identifier names to the type they were first declared with.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    declared: HashMap<String, TypeAnnotation>,
}

impl SymbolTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a declaration. Returns `false` and keeps the existing entry
    /// if `name` was already declared.
    pub fn declare(&mut self, name: &str, ty: TypeAnnotation) -> bool {
        if self.declared.contains_key(name) {
            return false;
        }
        self.declared.insert(name.to_string(), ty);
        true
    }

    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&TypeAnnotation> {
        self.declared.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PrimitiveType;

    #[test]
    fn first_declaration_wins() {
        let mut symbols = SymbolTable::new();
        let ints = TypeAnnotation::array_of(TypeAnnotation::Primitive(PrimitiveType::Int));
        let floats = TypeAnnotation::array_of(TypeAnnotation::Primitive(PrimitiveType::Float));

        assert!(symbols.declare("v", ints.clone()));
        assert!(!symbols.declare("v", floats));
        assert_eq!(symbols.lookup("v"), Some(&ints));
    }

    #[test]
    fn unknown_name() {
        let symbols = SymbolTable::new();
        assert_eq!(symbols.lookup("missing"), None);
    }
}
