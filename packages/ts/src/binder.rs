//! Binds a parsed source file into the program's symbol table.
//!
//! Only the top level of a file is bound: declarations become symbols in the
//! file's locals, import and export clauses become alias symbols, and
//! `export * from` clauses are recorded as star re-exports. Function bodies are
//! lowered (reflection hosts read them) but never bound.

use oxc_allocator::Allocator;
use oxc_ast::ast;
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};

use crate::module_resolution::resolve_module_name;
use crate::node::{
    BindingName, ClassElement, ClassElementKind, ClassNode, Declaration, DeclarationId,
    DeclarationKind, DecoratorNode, Expression, FileId, FunctionNode, ObjectProperty, Span,
    Statement, VariableDeclarationNode, VariableKeyword,
};
use crate::program::{CompilerHost, Program};
use crate::symbol::{AliasTarget, ModuleReference, Symbol, SymbolFlags, SymbolId};
use crate::DiagnosticWithLocation;

/// Parses and binds one file. Returns the resolved file names it depends on.
pub(crate) fn bind_source_file(
    program: &mut Program,
    file_name: String,
    text: String,
    host: &dyn CompilerHost,
) -> Vec<String> {
    let file = program.add_source_file(file_name.clone());
    let is_declaration_file = program
        .source_file(file)
        .is_some_and(|source_file| source_file.is_declaration_file);

    let (statements, has_module_syntax, dependencies) = {
        let allocator = Allocator::default();
        let source_type = SourceType::from_path(&file_name)
            .unwrap_or_else(|_| SourceType::default().with_typescript(true))
            .with_module(true);
        let ret = Parser::new(&allocator, &text, source_type).parse();
        for error in &ret.errors {
            program.add_diagnostic(DiagnosticWithLocation::error(
                file_name.as_str(),
                Span::default(),
                error.to_string(),
            ));
        }

        let mut binder = Binder {
            program: &mut *program,
            host,
            source: &text,
            file,
            file_name: file_name.clone(),
            is_declaration_file,
            has_module_syntax: false,
            dependencies: Vec::new(),
        };
        let statements = binder.bind_statements(&ret.program.body);
        (statements, binder.has_module_syntax, binder.dependencies)
    };

    if has_module_syntax {
        let mut module_symbol = Symbol::new(
            SymbolId::new(0),
            format!("\"{}\"", strip_extension(&file_name)),
            SymbolFlags::VALUE_MODULE,
        );
        module_symbol.module = Some(file);
        let module_symbol = program.add_symbol(module_symbol);
        program.source_file_mut(file).module_symbol = Some(module_symbol);
    }

    let source_file = program.source_file_mut(file);
    source_file.statements = statements;
    source_file.text = text;
    dependencies
}

fn strip_extension(file_name: &str) -> &str {
    [".d.ts", ".ts", ".tsx", ".mjs", ".js"]
        .iter()
        .find_map(|ext| file_name.strip_suffix(ext))
        .unwrap_or(file_name)
}

/// A declaration just added to the program and the local names it binds.
type Bound = (DeclarationId, Vec<String>);

struct Binder<'b> {
    program: &'b mut Program,
    host: &'b dyn CompilerHost,
    source: &'b str,
    file: FileId,
    file_name: String,
    is_declaration_file: bool,
    has_module_syntax: bool,
    dependencies: Vec<String>,
}

impl<'b> Binder<'b> {
    fn bind_statements(&mut self, statements: &[ast::Statement<'_>]) -> Vec<Statement> {
        let mut out = Vec::new();
        for statement in statements {
            self.bind_statement(statement, &mut out);
        }
        out
    }

    fn bind_statement(&mut self, statement: &ast::Statement<'_>, out: &mut Vec<Statement>) {
        let bound = match statement {
            ast::Statement::ClassDeclaration(class) => vec![self.bind_class(class)],
            ast::Statement::FunctionDeclaration(function) => vec![self.bind_function(function)],
            ast::Statement::VariableDeclaration(variables) => self.bind_variables(variables),
            ast::Statement::TSInterfaceDeclaration(interface) => vec![self.bind_interface(interface)],
            ast::Statement::TSTypeAliasDeclaration(alias) => vec![self.bind_type_alias(alias)],
            ast::Statement::TSEnumDeclaration(enumeration) => vec![self.bind_enum(enumeration)],
            ast::Statement::TSModuleDeclaration(module) => vec![self.bind_namespace(module)],
            ast::Statement::ImportDeclaration(import) => {
                self.bind_import(import);
                Vec::new()
            }
            ast::Statement::ExportNamedDeclaration(export) => self.bind_export_named(export),
            ast::Statement::ExportDefaultDeclaration(export) => self.bind_export_default(export),
            ast::Statement::ExportAllDeclaration(export) => {
                self.bind_export_all(export);
                Vec::new()
            }
            ast::Statement::ExpressionStatement(expression) => {
                out.push(Statement::Expression(self.lower_expression(&expression.expression)));
                return;
            }
            _ => {
                out.push(Statement::Other);
                return;
            }
        };
        out.extend(bound.into_iter().map(|(id, _)| Statement::Declaration(id)));
    }

    fn bind_declaration(&mut self, declaration: &ast::Declaration<'_>) -> Vec<Bound> {
        match declaration {
            ast::Declaration::ClassDeclaration(class) => vec![self.bind_class(class)],
            ast::Declaration::FunctionDeclaration(function) => vec![self.bind_function(function)],
            ast::Declaration::VariableDeclaration(variables) => self.bind_variables(variables),
            ast::Declaration::TSInterfaceDeclaration(interface) => vec![self.bind_interface(interface)],
            ast::Declaration::TSTypeAliasDeclaration(alias) => vec![self.bind_type_alias(alias)],
            ast::Declaration::TSEnumDeclaration(enumeration) => vec![self.bind_enum(enumeration)],
            ast::Declaration::TSModuleDeclaration(module) => vec![self.bind_namespace(module)],
            _ => Vec::new(),
        }
    }

    fn bind_class(&mut self, class: &ast::Class<'_>) -> Bound {
        let node = self.lower_class(class);
        let name = node.name.clone();
        let id = self.add_declaration(class.span, DeclarationKind::Class(node), class.declare);
        self.bind_named(id, name, SymbolFlags::CLASS)
    }

    fn bind_function(&mut self, function: &ast::Function<'_>) -> Bound {
        let node = self.lower_function(function);
        let name = node.name.clone();
        let id = self.add_declaration(function.span, DeclarationKind::Function(node), function.declare);
        self.bind_named(id, name, SymbolFlags::FUNCTION)
    }

    fn bind_variables(&mut self, variables: &ast::VariableDeclaration<'_>) -> Vec<Bound> {
        let keyword = variable_keyword(variables.kind);
        let flags = match keyword {
            VariableKeyword::Var => SymbolFlags::FUNCTION_SCOPED_VARIABLE,
            VariableKeyword::Let | VariableKeyword::Const => SymbolFlags::BLOCK_SCOPED_VARIABLE,
        };
        let mut bound = Vec::new();
        for declarator in &variables.declarations {
            let node = self.lower_variable_declarator(declarator, keyword);
            let names: Vec<String> = node.name.bound_names().into_iter().map(String::from).collect();
            let id = self.add_declaration(
                declarator.span,
                DeclarationKind::Variable(node),
                variables.declare,
            );
            for name in &names {
                self.declare_local(name, id, flags);
            }
            bound.push((id, names));
        }
        bound
    }

    fn bind_interface(&mut self, interface: &ast::TSInterfaceDeclaration<'_>) -> Bound {
        let name = interface.id.name.to_string();
        let id = self.add_declaration(
            interface.span,
            DeclarationKind::Interface { name: name.clone() },
            interface.declare,
        );
        self.bind_named(id, Some(name), SymbolFlags::INTERFACE)
    }

    fn bind_type_alias(&mut self, alias: &ast::TSTypeAliasDeclaration<'_>) -> Bound {
        let name = alias.id.name.to_string();
        let id = self.add_declaration(
            alias.span,
            DeclarationKind::TypeAlias { name: name.clone() },
            alias.declare,
        );
        self.bind_named(id, Some(name), SymbolFlags::TYPE_ALIAS)
    }

    fn bind_enum(&mut self, enumeration: &ast::TSEnumDeclaration<'_>) -> Bound {
        let name = enumeration.id.name.to_string();
        let id = self.add_declaration(
            enumeration.span,
            DeclarationKind::Enum { name: name.clone() },
            enumeration.declare,
        );
        self.bind_named(id, Some(name), SymbolFlags::REGULAR_ENUM)
    }

    fn bind_namespace(&mut self, module: &ast::TSModuleDeclaration<'_>) -> Bound {
        let name = match &module.id {
            ast::TSModuleDeclarationName::Identifier(id) => id.name.to_string(),
            ast::TSModuleDeclarationName::StringLiteral(literal) => literal.value.to_string(),
        };
        let id = self.add_declaration(
            module.span,
            DeclarationKind::Namespace { name: name.clone() },
            module.declare,
        );
        self.bind_named(id, Some(name), SymbolFlags::NAMESPACE_MODULE)
    }

    fn bind_named(&mut self, id: DeclarationId, name: Option<String>, flags: SymbolFlags) -> Bound {
        match name {
            Some(name) => {
                self.declare_local(&name, id, flags);
                (id, vec![name])
            }
            None => (id, Vec::new()),
        }
    }

    fn bind_import(&mut self, import: &ast::ImportDeclaration<'_>) {
        self.has_module_syntax = true;
        let module = self.module_reference(import.source.value.as_str());
        let Some(specifiers) = &import.specifiers else {
            return;
        };
        for specifier in specifiers {
            let (local, target) = match specifier {
                ast::ImportDeclarationSpecifier::ImportSpecifier(specifier) => (
                    specifier.local.name.as_str(),
                    AliasTarget::Export {
                        module: module.clone(),
                        name: module_export_name(&specifier.imported),
                    },
                ),
                ast::ImportDeclarationSpecifier::ImportDefaultSpecifier(specifier) => (
                    specifier.local.name.as_str(),
                    AliasTarget::Export {
                        module: module.clone(),
                        name: "default".to_string(),
                    },
                ),
                ast::ImportDeclarationSpecifier::ImportNamespaceSpecifier(specifier) => (
                    specifier.local.name.as_str(),
                    AliasTarget::Namespace(module.clone()),
                ),
            };
            self.declare_alias(local, target, true);
        }
    }

    fn bind_export_named(&mut self, export: &ast::ExportNamedDeclaration<'_>) -> Vec<Bound> {
        self.has_module_syntax = true;
        let mut bound = Vec::new();
        if let Some(declaration) = &export.declaration {
            for (id, names) in self.bind_declaration(declaration) {
                for name in &names {
                    if let Some(symbol) = self.local(name) {
                        self.export(name, symbol);
                    }
                }
                bound.push((id, names));
            }
        }

        let module = export
            .source
            .as_ref()
            .map(|source| self.module_reference(source.value.as_str()));
        for specifier in &export.specifiers {
            let local = module_export_name(&specifier.local);
            let exported = module_export_name(&specifier.exported);
            let target = match &module {
                Some(module) => AliasTarget::Export {
                    module: module.clone(),
                    name: local,
                },
                None => AliasTarget::Local(local),
            };
            let symbol = self.declare_alias(&exported, target, false);
            self.export(&exported, symbol);
        }
        bound
    }

    fn bind_export_default(&mut self, export: &ast::ExportDefaultDeclaration<'_>) -> Vec<Bound> {
        self.has_module_syntax = true;
        let (bound, flags) = match &export.declaration {
            ast::ExportDefaultDeclarationKind::ClassDeclaration(class) => {
                (self.bind_class(class), SymbolFlags::CLASS)
            }
            ast::ExportDefaultDeclarationKind::FunctionDeclaration(function) => {
                (self.bind_function(function), SymbolFlags::FUNCTION)
            }
            ast::ExportDefaultDeclarationKind::TSInterfaceDeclaration(interface) => {
                (self.bind_interface(interface), SymbolFlags::INTERFACE)
            }
            ast::ExportDefaultDeclarationKind::Identifier(identifier) => {
                let symbol = self.declare_alias(
                    "default",
                    AliasTarget::Local(identifier.name.to_string()),
                    false,
                );
                self.export("default", symbol);
                return Vec::new();
            }
            other => {
                let Some(expression) = other.as_expression() else {
                    return Vec::new();
                };
                let expression = self.lower_expression(expression);
                let id = self.add_declaration(
                    export.span,
                    DeclarationKind::ExportAssignment { expression },
                    false,
                );
                let symbol = self.create_symbol("default", id, SymbolFlags::FUNCTION_SCOPED_VARIABLE);
                self.export("default", symbol);
                return vec![(id, Vec::new())];
            }
        };

        let (id, names) = &bound;
        let symbol = match names.first().and_then(|name| self.local(name)) {
            Some(symbol) => symbol,
            None => self.create_symbol("default", *id, flags),
        };
        self.export("default", symbol);
        vec![bound]
    }

    fn bind_export_all(&mut self, export: &ast::ExportAllDeclaration<'_>) {
        self.has_module_syntax = true;
        let module = self.module_reference(export.source.value.as_str());
        match &export.exported {
            Some(exported) => {
                let name = module_export_name(exported);
                let symbol = self.declare_alias(&name, AliasTarget::Namespace(module), false);
                self.export(&name, symbol);
            }
            None => self.program.source_file_mut(self.file).export_stars.push(module),
        }
    }

    // --- Symbol table ---

    fn local(&self, name: &str) -> Option<SymbolId> {
        self.program
            .source_file(self.file)
            .and_then(|source_file| source_file.local(name))
    }

    fn add_declaration(&mut self, span: oxc_span::Span, kind: DeclarationKind, declare: bool) -> DeclarationId {
        self.program.add_declaration(Declaration {
            id: DeclarationId::new(0),
            file: self.file,
            span: span.into(),
            kind,
            is_ambient: declare || self.is_declaration_file,
        })
    }

    /// Adds a declaration to the local named `name`, merging with an existing
    /// non-alias symbol of the same name.
    fn declare_local(&mut self, name: &str, declaration: DeclarationId, flags: SymbolFlags) -> SymbolId {
        if let Some(existing) = self.local(name) {
            let symbol = self.program.symbol_mut(existing);
            if !symbol.is_alias() {
                symbol.flags |= flags;
                symbol.declarations.push(declaration);
                return existing;
            }
        }
        let symbol = self.create_symbol(name, declaration, flags);
        self.program
            .source_file_mut(self.file)
            .locals
            .insert(name.to_string(), symbol);
        symbol
    }

    fn create_symbol(&mut self, name: &str, declaration: DeclarationId, flags: SymbolFlags) -> SymbolId {
        let mut symbol = Symbol::new(SymbolId::new(0), name, flags);
        symbol.declarations.push(declaration);
        symbol.parent = Some(self.file);
        self.program.add_symbol(symbol)
    }

    fn declare_alias(&mut self, name: &str, target: AliasTarget, is_local: bool) -> SymbolId {
        let mut symbol = Symbol::new(SymbolId::new(0), name, SymbolFlags::ALIAS);
        symbol.alias_target = Some(target);
        symbol.parent = Some(self.file);
        let symbol = self.program.add_symbol(symbol);
        if is_local {
            self.program
                .source_file_mut(self.file)
                .locals
                .insert(name.to_string(), symbol);
        }
        symbol
    }

    fn export(&mut self, name: &str, symbol: SymbolId) {
        self.program
            .source_file_mut(self.file)
            .exports
            .entry(name.to_string())
            .or_insert(symbol);
    }

    fn module_reference(&mut self, specifier: &str) -> ModuleReference {
        let resolved = resolve_module_name(specifier, &self.file_name, self.host);
        if let Some(file_name) = &resolved {
            if !self.dependencies.contains(file_name) {
                self.dependencies.push(file_name.clone());
            }
        }
        ModuleReference::new(specifier, resolved)
    }

    // --- Lowering ---

    fn text(&self, span: oxc_span::Span) -> &str {
        self.source
            .get(span.start as usize..span.end as usize)
            .unwrap_or_default()
    }

    fn lower_statements(&self, statements: &[ast::Statement<'_>]) -> Vec<Statement> {
        statements
            .iter()
            .map(|statement| match statement {
                ast::Statement::ExpressionStatement(expression) => {
                    Statement::Expression(self.lower_expression(&expression.expression))
                }
                ast::Statement::ReturnStatement(ret) => Statement::Return(
                    ret.argument
                        .as_ref()
                        .map(|argument| self.lower_expression(argument)),
                ),
                ast::Statement::FunctionDeclaration(function) => {
                    Statement::Function(self.lower_function(function))
                }
                ast::Statement::ClassDeclaration(class) => Statement::Class(self.lower_class(class)),
                ast::Statement::VariableDeclaration(variables) => {
                    let keyword = variable_keyword(variables.kind);
                    Statement::Variable(
                        variables
                            .declarations
                            .iter()
                            .map(|declarator| self.lower_variable_declarator(declarator, keyword))
                            .collect(),
                    )
                }
                _ => Statement::Other,
            })
            .collect()
    }

    fn lower_class(&self, class: &ast::Class<'_>) -> ClassNode {
        ClassNode {
            name: class.id.as_ref().map(|id| id.name.to_string()),
            span: class.span.into(),
            decorators: self.lower_decorators(&class.decorators),
            heritage: class
                .super_class
                .as_ref()
                .map(|heritage| Box::new(self.lower_expression(heritage))),
            members: class
                .body
                .body
                .iter()
                .filter_map(|element| self.lower_class_element(element))
                .collect(),
        }
    }

    fn lower_class_element(&self, element: &ast::ClassElement<'_>) -> Option<ClassElement> {
        match element {
            ast::ClassElement::MethodDefinition(method) => {
                let kind = match method.kind {
                    ast::MethodDefinitionKind::Constructor => ClassElementKind::Constructor,
                    ast::MethodDefinitionKind::Method => ClassElementKind::Method,
                    ast::MethodDefinitionKind::Get => ClassElementKind::Getter,
                    ast::MethodDefinitionKind::Set => ClassElementKind::Setter,
                };
                Some(ClassElement {
                    name: self.property_key_name(&method.key),
                    kind,
                    is_static: method.r#static,
                    value: None,
                    decorators: self.lower_decorators(&method.decorators),
                })
            }
            ast::ClassElement::PropertyDefinition(property) => Some(ClassElement {
                name: self.property_key_name(&property.key),
                kind: ClassElementKind::Property,
                is_static: property.r#static,
                value: property
                    .value
                    .as_ref()
                    .map(|value| self.lower_expression(value)),
                decorators: self.lower_decorators(&property.decorators),
            }),
            _ => None,
        }
    }

    fn lower_decorators(&self, decorators: &[ast::Decorator<'_>]) -> Vec<DecoratorNode> {
        decorators
            .iter()
            .map(|decorator| DecoratorNode {
                expression: self.lower_expression(&decorator.expression),
                span: decorator.span.into(),
            })
            .collect()
    }

    fn lower_function(&self, function: &ast::Function<'_>) -> FunctionNode {
        FunctionNode {
            name: function.id.as_ref().map(|id| id.name.to_string()),
            span: function.span.into(),
            body: function
                .body
                .as_ref()
                .map(|body| self.lower_statements(&body.statements)),
            is_arrow: false,
        }
    }

    fn lower_variable_declarator(
        &self,
        declarator: &ast::VariableDeclarator<'_>,
        keyword: VariableKeyword,
    ) -> VariableDeclarationNode {
        VariableDeclarationNode {
            name: binding_name(&declarator.id),
            keyword,
            initializer: declarator
                .init
                .as_ref()
                .map(|init| self.lower_expression(init)),
        }
    }

    fn property_key_name(&self, key: &ast::PropertyKey<'_>) -> String {
        match key {
            ast::PropertyKey::StaticIdentifier(id) => id.name.to_string(),
            ast::PropertyKey::PrivateIdentifier(id) => id.name.to_string(),
            ast::PropertyKey::StringLiteral(literal) => literal.value.to_string(),
            other => self.text(other.span()).to_string(),
        }
    }

    fn lower_expression(&self, expression: &ast::Expression<'_>) -> Expression {
        match expression {
            ast::Expression::Identifier(identifier) => Expression::Identifier(identifier.name.to_string()),
            ast::Expression::StringLiteral(literal) => Expression::StringLiteral(literal.value.to_string()),
            ast::Expression::NumericLiteral(literal) => Expression::NumericLiteral(literal.value),
            ast::Expression::BooleanLiteral(literal) => Expression::BooleanLiteral(literal.value),
            ast::Expression::NullLiteral(_) => Expression::Null,
            ast::Expression::ParenthesizedExpression(paren) => self.lower_expression(&paren.expression),
            ast::Expression::TSAsExpression(cast) => self.lower_expression(&cast.expression),
            ast::Expression::ArrayExpression(array) => Expression::Array(
                array
                    .elements
                    .iter()
                    .map(|element| match element.as_expression() {
                        Some(element) => self.lower_expression(element),
                        None => Expression::Other(self.text(element.span()).to_string()),
                    })
                    .collect(),
            ),
            ast::Expression::ObjectExpression(object) => Expression::Object(
                object
                    .properties
                    .iter()
                    .filter_map(|property| match property {
                        ast::ObjectPropertyKind::ObjectProperty(property) => Some(ObjectProperty {
                            key: self.property_key_name(&property.key),
                            value: self.lower_expression(&property.value),
                        }),
                        ast::ObjectPropertyKind::SpreadProperty(_) => None,
                    })
                    .collect(),
            ),
            ast::Expression::CallExpression(call) => Expression::Call {
                callee: Box::new(self.lower_expression(&call.callee)),
                arguments: call
                    .arguments
                    .iter()
                    .map(|argument| match argument.as_expression() {
                        Some(argument) => self.lower_expression(argument),
                        None => Expression::Other(self.text(argument.span()).to_string()),
                    })
                    .collect(),
            },
            ast::Expression::StaticMemberExpression(member) => Expression::PropertyAccess {
                object: Box::new(self.lower_expression(&member.object)),
                name: member.property.name.to_string(),
            },
            ast::Expression::AssignmentExpression(assignment) => Expression::Assignment {
                target: Box::new(self.lower_assignment_target(&assignment.left)),
                value: Box::new(self.lower_expression(&assignment.right)),
            },
            ast::Expression::SequenceExpression(sequence) => Expression::Sequence(
                sequence
                    .expressions
                    .iter()
                    .map(|expression| self.lower_expression(expression))
                    .collect(),
            ),
            ast::Expression::ClassExpression(class) => Expression::Class(Box::new(self.lower_class(class))),
            ast::Expression::FunctionExpression(function) => {
                Expression::Function(Box::new(self.lower_function(function)))
            }
            ast::Expression::ArrowFunctionExpression(arrow) => Expression::Function(Box::new(FunctionNode {
                name: None,
                span: arrow.span.into(),
                body: Some(self.lower_statements(&arrow.body.statements)),
                is_arrow: true,
            })),
            other => Expression::Other(self.text(other.span()).to_string()),
        }
    }

    fn lower_assignment_target(&self, target: &ast::AssignmentTarget<'_>) -> Expression {
        match target {
            ast::AssignmentTarget::AssignmentTargetIdentifier(identifier) => {
                Expression::Identifier(identifier.name.to_string())
            }
            ast::AssignmentTarget::StaticMemberExpression(member) => Expression::PropertyAccess {
                object: Box::new(self.lower_expression(&member.object)),
                name: member.property.name.to_string(),
            },
            other => Expression::Other(self.text(other.span()).to_string()),
        }
    }
}

fn variable_keyword(kind: ast::VariableDeclarationKind) -> VariableKeyword {
    match kind {
        ast::VariableDeclarationKind::Var => VariableKeyword::Var,
        ast::VariableDeclarationKind::Let => VariableKeyword::Let,
        _ => VariableKeyword::Const,
    }
}

fn module_export_name(name: &ast::ModuleExportName<'_>) -> String {
    match name {
        ast::ModuleExportName::IdentifierName(id) => id.name.to_string(),
        ast::ModuleExportName::IdentifierReference(id) => id.name.to_string(),
        ast::ModuleExportName::StringLiteral(literal) => literal.value.to_string(),
    }
}

fn binding_name(pattern: &ast::BindingPattern<'_>) -> BindingName {
    match &pattern.kind {
        ast::BindingPatternKind::BindingIdentifier(id) => BindingName::Identifier(id.name.to_string()),
        ast::BindingPatternKind::AssignmentPattern(assignment) => binding_name(&assignment.left),
        ast::BindingPatternKind::ObjectPattern(_) => {
            let mut names = Vec::new();
            collect_bound_names(pattern, &mut names);
            BindingName::ObjectPattern(names)
        }
        ast::BindingPatternKind::ArrayPattern(_) => {
            let mut names = Vec::new();
            collect_bound_names(pattern, &mut names);
            BindingName::ArrayPattern(names)
        }
    }
}

fn collect_bound_names(pattern: &ast::BindingPattern<'_>, names: &mut Vec<String>) {
    match &pattern.kind {
        ast::BindingPatternKind::BindingIdentifier(id) => names.push(id.name.to_string()),
        ast::BindingPatternKind::AssignmentPattern(assignment) => {
            collect_bound_names(&assignment.left, names)
        }
        ast::BindingPatternKind::ObjectPattern(object) => {
            for property in &object.properties {
                collect_bound_names(&property.value, names);
            }
            if let Some(rest) = &object.rest {
                collect_bound_names(&rest.argument, names);
            }
        }
        ast::BindingPatternKind::ArrayPattern(array) => {
            for element in array.elements.iter().flatten() {
                collect_bound_names(element, names);
            }
            if let Some(rest) = &array.rest {
                collect_bound_names(&rest.argument, names);
            }
        }
    }
}
