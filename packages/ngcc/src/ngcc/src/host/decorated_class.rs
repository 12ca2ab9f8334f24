use ts::Declaration;

use crate::ngtsc::reflection::Decorator;

/// A class that has been found to carry decorators.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedClass<'a> {
    /// The class' own binding name, not the name it was exported under.
    pub name: String,
    pub declaration: &'a Declaration,
    pub decorators: Vec<Decorator<'a>>,
}

impl<'a> DecoratedClass<'a> {
    pub fn new(name: impl Into<String>, declaration: &'a Declaration, decorators: Vec<Decorator<'a>>) -> Self {
        Self {
            name: name.into(),
            declaration,
            decorators,
        }
    }
}
