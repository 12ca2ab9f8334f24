//! Owned node model.
//!
//! The binder lowers the oxc AST of each source file into these nodes so that
//! declarations can outlive the parser arena and be shared by every consumer of
//! the program.

use indexmap::IndexMap;

use crate::symbol::{ModuleReference, SymbolId};

/// Identity of a source file inside a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(u32);

impl FileId {
    pub fn new(index: usize) -> Self {
        FileId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Identity of a declaration node inside a program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DeclarationId(u32);

impl DeclarationId {
    pub fn new(index: usize) -> Self {
        DeclarationId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Byte range of a node in its source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<oxc_span::Span> for Span {
    fn from(span: oxc_span::Span) -> Self {
        Span::new(span.start, span.end)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SourceFile {
    pub id: FileId,
    pub file_name: String,
    pub text: String,
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
    pub is_declaration_file: bool,
    pub(crate) module_symbol: Option<SymbolId>,
    pub(crate) locals: IndexMap<String, SymbolId>,
    pub(crate) exports: IndexMap<String, SymbolId>,
    pub(crate) export_stars: Vec<ModuleReference>,
}

impl SourceFile {
    pub fn new(id: FileId, file_name: impl Into<String>, text: impl Into<String>) -> Self {
        let file_name = file_name.into();
        let is_declaration_file = file_name.ends_with(".d.ts");
        Self {
            id,
            file_name,
            text: text.into(),
            statements: Vec::new(),
            is_declaration_file,
            module_symbol: None,
            locals: IndexMap::new(),
            exports: IndexMap::new(),
            export_stars: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// A file with at least one import or export statement.
    pub fn is_external_module(&self) -> bool {
        self.module_symbol.is_some()
    }

    pub fn module_symbol(&self) -> Option<SymbolId> {
        self.module_symbol
    }

    /// Symbol bound to `name` at the top level of this file.
    pub fn local(&self, name: &str) -> Option<SymbolId> {
        self.locals.get(name).copied()
    }

    /// Names exported directly by this file, in source order.
    pub fn export_names(&self) -> impl Iterator<Item = &str> {
        self.exports.keys().map(|name| name.as_str())
    }

    pub fn text_of(&self, span: Span) -> &str {
        self.text
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A top-level declaration bound into the program.
    Declaration(DeclarationId),
    Expression(Expression),
    Return(Option<Expression>),
    /// A function declaration nested inside another function body.
    Function(FunctionNode),
    /// A class declaration nested inside a function body.
    Class(ClassNode),
    /// A variable statement nested inside a function body.
    Variable(Vec<VariableDeclarationNode>),
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub id: DeclarationId,
    /// The file that physically contains the node.
    pub file: FileId,
    pub span: Span,
    pub kind: DeclarationKind,
    /// Declared with `declare` or inside a declaration file.
    pub is_ambient: bool,
}

impl Declaration {
    /// Whether the node introduces a runtime value.
    ///
    /// Interfaces, type aliases, ambient declarations and body-less function
    /// signatures only exist at the type level.
    pub fn is_value_declaration(&self) -> bool {
        if self.is_ambient {
            return false;
        }
        match &self.kind {
            DeclarationKind::Class(_)
            | DeclarationKind::Variable(_)
            | DeclarationKind::Enum { .. }
            | DeclarationKind::Namespace { .. }
            | DeclarationKind::ExportAssignment { .. } => true,
            DeclarationKind::Function(function) => function.body.is_some(),
            DeclarationKind::Interface { .. } | DeclarationKind::TypeAlias { .. } => false,
        }
    }

    /// The simple name the declaration binds, if it has one.
    pub fn name(&self) -> Option<&str> {
        match &self.kind {
            DeclarationKind::Class(class) => class.name.as_deref(),
            DeclarationKind::Variable(variable) => variable.name.as_identifier(),
            DeclarationKind::Function(function) => function.name.as_deref(),
            DeclarationKind::Enum { name }
            | DeclarationKind::Namespace { name }
            | DeclarationKind::Interface { name }
            | DeclarationKind::TypeAlias { name } => Some(name),
            DeclarationKind::ExportAssignment { .. } => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match &self.kind {
            DeclarationKind::Class(_) => "class",
            DeclarationKind::Variable(_) => "variable",
            DeclarationKind::Function(_) => "function",
            DeclarationKind::Enum { .. } => "enum",
            DeclarationKind::Namespace { .. } => "namespace",
            DeclarationKind::Interface { .. } => "interface",
            DeclarationKind::TypeAlias { .. } => "type alias",
            DeclarationKind::ExportAssignment { .. } => "export assignment",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    Class(ClassNode),
    Variable(VariableDeclarationNode),
    Function(FunctionNode),
    Enum { name: String },
    Namespace { name: String },
    Interface { name: String },
    TypeAlias { name: String },
    /// `export default <expression>`
    ExportAssignment { expression: Expression },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariableKeyword {
    Var,
    Let,
    Const,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarationNode {
    pub name: BindingName,
    pub keyword: VariableKeyword,
    pub initializer: Option<Expression>,
}

/// The binding target of a variable declarator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingName {
    Identifier(String),
    /// `{ a, b: c }` with the identifiers it binds.
    ObjectPattern(Vec<String>),
    /// `[a, b]` with the identifiers it binds.
    ArrayPattern(Vec<String>),
}

impl BindingName {
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            BindingName::Identifier(name) => Some(name),
            _ => None,
        }
    }

    pub fn bound_names(&self) -> Vec<&str> {
        match self {
            BindingName::Identifier(name) => vec![name.as_str()],
            BindingName::ObjectPattern(names) | BindingName::ArrayPattern(names) => {
                names.iter().map(|name| name.as_str()).collect()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    pub name: Option<String>,
    pub span: Span,
    pub decorators: Vec<DecoratorNode>,
    pub heritage: Option<Box<Expression>>,
    pub members: Vec<ClassElement>,
}

impl ClassNode {
    pub fn static_property(&self, name: &str) -> Option<&ClassElement> {
        self.members.iter().find(|member| {
            member.is_static && member.kind == ClassElementKind::Property && member.name == name
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassElementKind {
    Constructor,
    Method,
    Getter,
    Setter,
    Property,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassElement {
    pub name: String,
    pub kind: ClassElementKind,
    pub is_static: bool,
    pub value: Option<Expression>,
    pub decorators: Vec<DecoratorNode>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionNode {
    pub name: Option<String>,
    pub span: Span,
    /// `None` for overload signatures and ambient functions.
    pub body: Option<Vec<Statement>>,
    pub is_arrow: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DecoratorNode {
    pub expression: Expression,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectProperty {
    pub key: String,
    pub value: Expression,
}

/// Expression subset needed to read decorator metadata. Parentheses are
/// dropped during lowering; anything else is kept as source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(String),
    StringLiteral(String),
    NumericLiteral(f64),
    BooleanLiteral(bool),
    Null,
    Array(Vec<Expression>),
    Object(Vec<ObjectProperty>),
    Call {
        callee: Box<Expression>,
        arguments: Vec<Expression>,
    },
    PropertyAccess {
        object: Box<Expression>,
        name: String,
    },
    Assignment {
        target: Box<Expression>,
        value: Box<Expression>,
    },
    Sequence(Vec<Expression>),
    Class(Box<ClassNode>),
    Function(Box<FunctionNode>),
    Other(String),
}

impl Expression {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(name.into())
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call {
            callee: Box::new(callee),
            arguments,
        }
    }

    pub fn property_access(object: Expression, name: impl Into<String>) -> Self {
        Expression::PropertyAccess {
            object: Box::new(object),
            name: name.into(),
        }
    }

    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expression::Identifier(name) => Some(name),
            _ => None,
        }
    }

    /// Looks through chained assignments such as `X = X_1 = class X {}`.
    pub fn skip_assignments(&self) -> &Expression {
        let mut current = self;
        while let Expression::Assignment { value, .. } = current {
            current = value;
        }
        current
    }

    pub fn property(&self, key: &str) -> Option<&Expression> {
        match self {
            Expression::Object(properties) => properties
                .iter()
                .find(|property| property.key == key)
                .map(|property| &property.value),
            _ => None,
        }
    }
}
