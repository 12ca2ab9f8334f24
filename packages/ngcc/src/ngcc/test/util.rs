// Test Utilities
//
// A hand-built symbol database and reflection host, plus helpers for
// programs parsed from in-memory sources.

use std::collections::{HashMap, HashSet};

use ts::testing::InMemoryCompilerHost;
use ts::{
    BindingName, ClassNode, Declaration, DeclarationId, DeclarationKind, Expression, FileId,
    FunctionNode, Program, SourceFile, Span, Symbol, SymbolFlags, SymbolId, TypeChecker,
    VariableDeclarationNode, VariableKeyword,
};

use crate::ngcc::host::{ClassLike, DecoratedFile, NgccReflectionHost};
use crate::ngtsc::reflection::{Decorator, Import, ReflectionHost};

pub fn make_program(files: &[(&str, &str)], root: &str) -> Program {
    let host = InMemoryCompilerHost::with_files(files.iter().copied());
    host.create_program(&[root]).unwrap()
}

/// The first declaration of the top-level symbol `name` in `file_name`.
pub fn get_declaration<'a>(program: &'a Program, file_name: &str, name: &str) -> &'a Declaration {
    let source_file = program.get_source_file(file_name).unwrap();
    let symbol = program.symbol(source_file.local(name).unwrap()).unwrap();
    program.declaration(symbol.declarations[0]).unwrap()
}

/// `[(file name, [class names])]` of a parse result.
pub fn summarize(decorated_files: &[DecoratedFile<'_>]) -> Vec<(String, Vec<String>)> {
    decorated_files
        .iter()
        .map(|decorated_file| {
            (
                decorated_file.file_name().to_string(),
                decorated_file
                    .decorated_classes
                    .iter()
                    .map(|decorated_class| decorated_class.name.clone())
                    .collect(),
            )
        })
        .collect()
}

pub fn decorator_names(decorators: &[Decorator<'_>]) -> Vec<String> {
    decorators.iter().map(|decorator| decorator.name.clone()).collect()
}

/// A symbol database assembled by hand.
#[derive(Debug, Default)]
pub struct FakeChecker {
    files: Vec<SourceFile>,
    declarations: Vec<Declaration>,
    symbols: Vec<Symbol>,
    module_symbols: HashMap<FileId, SymbolId>,
    exports: HashMap<SymbolId, Vec<SymbolId>>,
    aliases: HashMap<SymbolId, SymbolId>,
}

impl FakeChecker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&mut self, file_name: &str) -> FileId {
        let id = FileId::new(self.files.len());
        self.files.push(SourceFile::new(id, file_name, ""));
        id
    }

    /// Gives `file` module semantics, with no exports yet.
    pub fn add_module(&mut self, file: FileId) -> SymbolId {
        let name = format!("\"{}\"", self.files[file.index()].file_name);
        let mut symbol = Symbol::new(SymbolId::new(self.symbols.len()), name, SymbolFlags::VALUE_MODULE);
        symbol.module = Some(file);
        let id = self.push_symbol(symbol);
        self.module_symbols.insert(file, id);
        self.exports.insert(id, Vec::new());
        id
    }

    pub fn add_declaration(&mut self, file: FileId, start: u32, kind: DeclarationKind) -> DeclarationId {
        let id = DeclarationId::new(self.declarations.len());
        self.declarations.push(Declaration {
            id,
            file,
            span: Span::new(start, start + 10),
            kind,
            is_ambient: false,
        });
        id
    }

    pub fn set_ambient(&mut self, declaration: DeclarationId) {
        self.declarations[declaration.index()].is_ambient = true;
    }

    pub fn add_symbol(&mut self, name: &str, flags: SymbolFlags, declarations: Vec<DeclarationId>) -> SymbolId {
        let mut symbol = Symbol::new(SymbolId::new(self.symbols.len()), name, flags);
        symbol.declarations = declarations;
        self.push_symbol(symbol)
    }

    pub fn add_class(&mut self, file: FileId, start: u32, name: &str) -> (SymbolId, DeclarationId) {
        let declaration = self.add_declaration(file, start, class_kind(name));
        (self.add_symbol(name, SymbolFlags::CLASS, vec![declaration]), declaration)
    }

    pub fn add_variable(&mut self, file: FileId, start: u32, name: BindingName) -> (SymbolId, DeclarationId) {
        let symbol_name = name.bound_names().first().map(|name| name.to_string()).unwrap_or_default();
        let declaration = self.add_declaration(
            file,
            start,
            DeclarationKind::Variable(VariableDeclarationNode {
                name,
                keyword: VariableKeyword::Let,
                initializer: Some(Expression::Class(Box::new(class_node(None)))),
            }),
        );
        (
            self.add_symbol(&symbol_name, SymbolFlags::BLOCK_SCOPED_VARIABLE, vec![declaration]),
            declaration,
        )
    }

    /// An alias symbol; `target` of `None` leaves it unresolvable.
    pub fn add_alias(&mut self, name: &str, target: Option<SymbolId>) -> SymbolId {
        let alias = self.add_symbol(name, SymbolFlags::ALIAS, Vec::new());
        if let Some(target) = target {
            self.aliases.insert(alias, target);
        }
        alias
    }

    pub fn set_alias_target(&mut self, alias: SymbolId, target: SymbolId) {
        self.aliases.insert(alias, target);
    }

    pub fn export(&mut self, module: SymbolId, symbol: SymbolId) {
        self.exports.entry(module).or_default().push(symbol);
    }

    pub fn file(&self, file: FileId) -> &SourceFile {
        &self.files[file.index()]
    }

    fn push_symbol(&mut self, symbol: Symbol) -> SymbolId {
        let id = symbol.id;
        self.symbols.push(symbol);
        id
    }
}

impl TypeChecker for FakeChecker {
    fn get_symbol_at_location(&self, source_file: &SourceFile) -> Option<SymbolId> {
        self.module_symbols.get(&source_file.id).copied()
    }

    fn get_exports_of_module(&self, module_symbol: SymbolId) -> Vec<SymbolId> {
        self.exports.get(&module_symbol).cloned().unwrap_or_default()
    }

    fn get_symbol(&self, symbol: SymbolId) -> Option<&Symbol> {
        self.symbols.get(symbol.index())
    }

    fn get_immediate_aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        self.aliases.get(&symbol).copied()
    }

    fn get_declaration(&self, declaration: DeclarationId) -> Option<&Declaration> {
        self.declarations.get(declaration.index())
    }

    fn get_source_file_by_id(&self, file: FileId) -> Option<&SourceFile> {
        self.files.get(file.index())
    }
}

pub fn class_node(name: Option<&str>) -> ClassNode {
    ClassNode {
        name: name.map(str::to_string),
        span: Span::default(),
        decorators: Vec::new(),
        heritage: None,
        members: Vec::new(),
    }
}

pub fn class_kind(name: &str) -> DeclarationKind {
    DeclarationKind::Class(class_node(Some(name)))
}

pub fn function_kind(name: &str) -> DeclarationKind {
    DeclarationKind::Function(FunctionNode {
        name: Some(name.to_string()),
        span: Span::default(),
        body: Some(Vec::new()),
        is_arrow: false,
    })
}

/// Reports a fixed decorator set per declaration; anything unlisted is undecorated.
#[derive(Debug)]
pub struct FakeReflectionHost {
    decorators: HashMap<DeclarationId, Vec<String>>,
    class_like_variables: HashSet<DeclarationId>,
    node: Expression,
}

impl FakeReflectionHost {
    pub fn new() -> Self {
        Self {
            decorators: HashMap::new(),
            class_like_variables: HashSet::new(),
            node: Expression::identifier("Decorator"),
        }
    }

    pub fn decorate(mut self, declaration: DeclarationId, names: &[&str]) -> Self {
        self.decorators
            .insert(declaration, names.iter().map(|name| name.to_string()).collect());
        self
    }

    pub fn class_like(mut self, declaration: DeclarationId) -> Self {
        self.class_like_variables.insert(declaration);
        self
    }
}

impl<'a> ReflectionHost<'a> for &'a FakeReflectionHost {
    fn get_decorators_of_declaration(&self, declaration: &'a Declaration) -> Option<Vec<Decorator<'a>>> {
        let host: &'a FakeReflectionHost = *self;
        if !self.is_class(declaration) {
            return None;
        }
        let names = host.decorators.get(&declaration.id)?;
        Some(
            names
                .iter()
                .map(|name| Decorator {
                    name: name.clone(),
                    identifier: None,
                    import: None,
                    node: &host.node,
                    args: None,
                })
                .collect(),
        )
    }

    fn get_import_of_identifier(&self, _name: &str, _source_file: &'a SourceFile) -> Option<Import> {
        None
    }

    fn is_class(&self, declaration: &'a Declaration) -> bool {
        self.get_class_declaration(declaration).is_some()
    }
}

impl<'a> NgccReflectionHost<'a> for &'a FakeReflectionHost {
    fn get_class_declaration(&self, declaration: &'a Declaration) -> Option<ClassLike<'a>> {
        match &declaration.kind {
            DeclarationKind::Class(class) => Some(ClassLike::Class(class)),
            DeclarationKind::Variable(variable) if self.class_like_variables.contains(&declaration.id) => {
                match variable.initializer.as_ref()? {
                    Expression::Class(class) => Some(ClassLike::Class(&**class)),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
