use ts::{Declaration, DeclarationKind, Expression, SourceFile, Statement, TypeChecker};

use super::esm2015_host::Esm2015ReflectionHost;
use super::ngcc_host::{ClassLike, NgccReflectionHost};
use crate::ngtsc::reflection::{Decorator, Import, ReflectionHost};

/// Reflects over ES5 bundles, where classes are downleveled into an IIFE:
///
/// ```js
/// var CommonModule = (function () {
///   function CommonModule() {}
///   CommonModule.decorators = [{ type: NgModule, args: [{}] }];
///   return CommonModule;
/// }());
/// ```
///
/// Anything the ES2015 host recognises is recognised here too.
#[derive(Debug, Clone, Copy)]
pub struct Esm5ReflectionHost<'a> {
    esm2015_host: Esm2015ReflectionHost<'a>,
}

impl<'a> Esm5ReflectionHost<'a> {
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self {
            esm2015_host: Esm2015ReflectionHost::new(checker),
        }
    }
}

/// Statements of `(function () { ... }())` or `(function (_super) { ... }(Base))`.
fn get_iife_body(expression: &Expression) -> Option<&[Statement]> {
    let Expression::Call { callee, .. } = expression else {
        return None;
    };
    let Expression::Function(function) = callee.as_ref() else {
        return None;
    };
    if function.is_arrow {
        return None;
    }
    function.body.as_deref()
}

impl<'a> ReflectionHost<'a> for Esm5ReflectionHost<'a> {
    fn get_decorators_of_declaration(
        &self,
        declaration: &'a Declaration,
    ) -> Option<Vec<Decorator<'a>>> {
        let class = self.get_class_declaration(declaration)?;
        match class {
            ClassLike::Class(_) => self.esm2015_host.get_decorators_of_declaration(declaration),
            ClassLike::Downleveled { body, .. } => {
                let name = declaration.name()?;
                let source_file: &'a SourceFile = self
                    .esm2015_host
                    .checker()
                    .get_source_file_of_declaration(declaration)?;
                self.esm2015_host.find_decorators(
                    name,
                    class,
                    &[body, source_file.statements.as_slice()],
                    source_file,
                )
            }
        }
    }

    fn get_import_of_identifier(&self, name: &str, source_file: &'a SourceFile) -> Option<Import> {
        self.esm2015_host.get_import_of_identifier(name, source_file)
    }

    fn is_class(&self, declaration: &'a Declaration) -> bool {
        self.get_class_declaration(declaration).is_some()
    }
}

impl<'a> NgccReflectionHost<'a> for Esm5ReflectionHost<'a> {
    fn get_class_declaration(&self, declaration: &'a Declaration) -> Option<ClassLike<'a>> {
        if let Some(class) = self.esm2015_host.get_class_declaration(declaration) {
            return Some(class);
        }
        let DeclarationKind::Variable(variable) = &declaration.kind else {
            return None;
        };
        let name = variable.name.as_identifier()?;
        let body = get_iife_body(variable.initializer.as_ref()?.skip_assignments())?;
        let constructor = body.iter().find_map(|statement| match statement {
            Statement::Function(function) if function.name.as_deref() == Some(name) => Some(function),
            _ => None,
        })?;
        Some(ClassLike::Downleveled { constructor, body })
    }
}
