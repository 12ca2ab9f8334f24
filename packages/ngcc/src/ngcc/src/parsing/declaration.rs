use ts::{Declaration, DeclarationKind, SymbolId, TypeChecker};

/// Finds the declaration that gives a symbol its runtime value.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationExtractor<'a> {
    checker: &'a dyn TypeChecker,
}

impl<'a> DeclarationExtractor<'a> {
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self { checker }
    }

    /// The value declaration of `symbol`. When several declarations are values
    /// the one earliest in source wins, comparing the declaring file first.
    pub fn extract(&self, symbol: SymbolId) -> Option<&'a Declaration> {
        self.checker
            .get_symbol(symbol)?
            .declarations
            .iter()
            .filter_map(|declaration| self.checker.get_declaration(*declaration))
            .filter(|declaration| declaration.is_value_declaration())
            .min_by_key(|declaration| (declaration.file, declaration.span.start))
    }
}

/// A declaration that may define a class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CandidateDeclaration<'a> {
    /// `class X {}`
    Class {
        name: &'a str,
        declaration: &'a Declaration,
    },
    /// `var X = ...`, class-like only if a reflection host says so.
    Variable {
        name: &'a str,
        declaration: &'a Declaration,
    },
}

impl<'a> CandidateDeclaration<'a> {
    /// Accepts classes and variables bound to a plain identifier.
    pub fn classify(declaration: &'a Declaration) -> Option<Self> {
        match &declaration.kind {
            DeclarationKind::Class(class) => class.name.as_deref().map(|name| CandidateDeclaration::Class {
                name,
                declaration,
            }),
            DeclarationKind::Variable(variable) => {
                variable
                    .name
                    .as_identifier()
                    .map(|name| CandidateDeclaration::Variable { name, declaration })
            }
            _ => None,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            CandidateDeclaration::Class { name, .. } | CandidateDeclaration::Variable { name, .. } => *name,
        }
    }

    pub fn declaration(&self) -> &'a Declaration {
        match self {
            CandidateDeclaration::Class { declaration, .. }
            | CandidateDeclaration::Variable { declaration, .. } => *declaration,
        }
    }
}
