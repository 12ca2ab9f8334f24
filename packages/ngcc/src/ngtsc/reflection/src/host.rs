use ts::{Declaration, Expression, SourceFile};

/// Metadata extracted from an instance of a decorator on another declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct Decorator<'a> {
    /// Name by which the decorator was invoked in the user's code.
    pub name: String,

    /// Identifier which refers to the decorator in the user's code.
    pub identifier: Option<DecoratorIdentifier>,

    /// `Import` by which the decorator was brought into the module in which it was invoked.
    pub import: Option<Import>,

    /// The expression the decorator was read from: the `@` expression, an element of a
    /// `__decorate` array, or a `{ type, args }` metadata literal.
    pub node: &'a Expression,

    /// Arguments of the invocation of the decorator; `None` when it was not called.
    pub args: Option<Vec<&'a Expression>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoratorIdentifier {
    pub name: String,
    /// Namespace the decorator was read from, as in `core.Component`.
    pub module_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    /// Name exported by the module.
    pub name: String,
    /// Module specifier as written in the import.
    pub from: String,
}

/// Abstracts reflection operations on the program model.
pub trait ReflectionHost<'a> {
    /// Decorators attached to `declaration`. `None` when there are none, never an
    /// empty vector.
    fn get_decorators_of_declaration(
        &self,
        declaration: &'a Declaration,
    ) -> Option<Vec<Decorator<'a>>>;

    /// The import that brought `name` into `source_file`, if it was imported.
    fn get_import_of_identifier(&self, name: &str, source_file: &'a SourceFile) -> Option<Import>;

    fn is_class(&self, declaration: &'a Declaration) -> bool;
}
