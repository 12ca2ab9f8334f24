use ts::{AliasTarget, Declaration, DeclarationKind, DecoratorNode, Expression, SourceFile, TypeChecker};

use super::host::*;
use super::util::{decorator_identifier, split_decorator_call};

/// Reflects over TypeScript sources, where decorators are written with `@` syntax.
#[derive(Debug, Clone, Copy)]
pub struct TypeScriptReflectionHost<'a> {
    checker: &'a dyn TypeChecker,
}

impl<'a> TypeScriptReflectionHost<'a> {
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self { checker }
    }

    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.checker
    }

    /// Converts `@` decorators, skipping any whose expression does not name a decorator.
    pub fn reflect_decorators(
        &self,
        decorators: &'a [DecoratorNode],
        source_file: &'a SourceFile,
    ) -> Vec<Decorator<'a>> {
        decorators
            .iter()
            .filter_map(|decorator| self.decorator_from_expression(&decorator.expression, source_file))
            .collect()
    }

    /// Builds a decorator from `Dec`, `Dec(...)`, `ns.Dec` or `ns.Dec(...)`.
    pub fn decorator_from_expression(
        &self,
        expression: &'a Expression,
        source_file: &'a SourceFile,
    ) -> Option<Decorator<'a>> {
        let (callee, args) = split_decorator_call(expression);
        let identifier = decorator_identifier(callee)?;
        Some(Decorator {
            name: identifier.name.clone(),
            import: self.get_import_of_decorator(&identifier, source_file),
            identifier: Some(identifier),
            node: expression,
            args,
        })
    }

    /// Resolves `Dec` through named imports and `ns.Dec` through namespace imports.
    pub fn get_import_of_decorator(
        &self,
        identifier: &DecoratorIdentifier,
        source_file: &'a SourceFile,
    ) -> Option<Import> {
        match &identifier.module_name {
            Some(namespace) => self
                .get_namespace_import(namespace, source_file)
                .map(|from| Import {
                    name: identifier.name.clone(),
                    from,
                }),
            None => self.get_import_of_identifier(&identifier.name, source_file),
        }
    }

    /// Module specifier of `import * as <namespace>` in `source_file`.
    fn get_namespace_import(&self, namespace: &str, source_file: &SourceFile) -> Option<String> {
        let symbol = self.checker.get_symbol(source_file.local(namespace)?)?;
        match symbol.alias_target.as_ref()? {
            AliasTarget::Namespace(module) => Some(module.specifier.clone()),
            _ => None,
        }
    }
}

impl<'a> ReflectionHost<'a> for TypeScriptReflectionHost<'a> {
    fn get_decorators_of_declaration(
        &self,
        declaration: &'a Declaration,
    ) -> Option<Vec<Decorator<'a>>> {
        let DeclarationKind::Class(class) = &declaration.kind else {
            return None;
        };
        let source_file = self.checker.get_source_file_of_declaration(declaration)?;
        let decorators = self.reflect_decorators(&class.decorators, source_file);
        (!decorators.is_empty()).then_some(decorators)
    }

    fn get_import_of_identifier(&self, name: &str, source_file: &'a SourceFile) -> Option<Import> {
        let symbol = self.checker.get_symbol(source_file.local(name)?)?;
        match symbol.alias_target.as_ref()? {
            AliasTarget::Export { module, name } => Some(Import {
                name: name.clone(),
                from: module.specifier.clone(),
            }),
            _ => None,
        }
    }

    fn is_class(&self, declaration: &'a Declaration) -> bool {
        matches!(declaration.kind, DeclarationKind::Class(_))
    }
}
