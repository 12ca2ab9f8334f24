use ts::{Declaration, DeclarationKind, Expression, SourceFile, Statement, TypeChecker};

use super::ngcc_host::{ClassLike, NgccReflectionHost};
use crate::ngtsc::reflection::src::util::{
    decorator_identifier, expression_statements, split_decorator_call,
};
use crate::ngtsc::reflection::{Decorator, Import, ReflectionHost, TypeScriptReflectionHost};

/// Name of the static property holding decorator metadata.
pub const DECORATORS: &str = "decorators";

const DECORATE_HELPERS: &[&str] = &["__decorate", "_ts_decorate"];
const METADATA_HELPERS: &[&str] = &["__metadata", "__param"];

/// Reflects over ES2015 bundles.
///
/// Classes are declared natively or as class expressions assigned to a variable
/// (`let X = class X {}`). Their decorators are found, in order of preference, as
/// `@` decorators, in a static `decorators` property, in an `X.decorators = [...]`
/// assignment, or in a `X = __decorate([...], X)` helper call.
#[derive(Debug, Clone, Copy)]
pub struct Esm2015ReflectionHost<'a> {
    ts_host: TypeScriptReflectionHost<'a>,
}

impl<'a> Esm2015ReflectionHost<'a> {
    pub fn new(checker: &'a dyn TypeChecker) -> Self {
        Self {
            ts_host: TypeScriptReflectionHost::new(checker),
        }
    }

    pub fn checker(&self) -> &'a dyn TypeChecker {
        self.ts_host.checker()
    }

    /// Searches every place decorators of `class_name` may be recorded.
    /// `statement_lists` are the scopes holding statements that follow the class.
    pub(crate) fn find_decorators(
        &self,
        class_name: &str,
        class: ClassLike<'a>,
        statement_lists: &[&'a [Statement]],
        source_file: &'a SourceFile,
    ) -> Option<Vec<Decorator<'a>>> {
        if let ClassLike::Class(class) = class {
            let decorators = self.ts_host.reflect_decorators(&class.decorators, source_file);
            if !decorators.is_empty() {
                return Some(decorators);
            }
            if let Some(metadata) = class
                .static_property(DECORATORS)
                .and_then(|property| property.value.as_ref())
            {
                let decorators = self.reflect_decorator_metadata(metadata, source_file);
                if !decorators.is_empty() {
                    return Some(decorators);
                }
            }
        }

        let expressions: Vec<&'a Expression> = statement_lists
            .iter()
            .flat_map(|statements| expression_statements(*statements))
            .collect();
        expressions
            .iter()
            .copied()
            .find_map(|expression| {
                self.get_decorators_property_assignment(class_name, expression, source_file)
            })
            .or_else(|| {
                expressions.iter().copied().find_map(|expression| {
                    self.get_decorate_helper_call(class_name, expression, source_file)
                })
            })
    }

    /// `X.decorators = [{ type: Dec, args: [...] }]`
    fn get_decorators_property_assignment(
        &self,
        class_name: &str,
        expression: &'a Expression,
        source_file: &'a SourceFile,
    ) -> Option<Vec<Decorator<'a>>> {
        let Expression::Assignment { target, value } = expression else {
            return None;
        };
        let Expression::PropertyAccess { object, name } = target.as_ref() else {
            return None;
        };
        if name != DECORATORS || object.as_identifier() != Some(class_name) {
            return None;
        }
        let decorators = self.reflect_decorator_metadata(value, source_file);
        (!decorators.is_empty()).then_some(decorators)
    }

    /// `X = __decorate([Dec(...)], X)`, possibly through an alias (`X = X_1 = __decorate(...)`).
    fn get_decorate_helper_call(
        &self,
        class_name: &str,
        expression: &'a Expression,
        source_file: &'a SourceFile,
    ) -> Option<Vec<Decorator<'a>>> {
        let Expression::Assignment { target, value } = expression else {
            return None;
        };
        if target.as_identifier() != Some(class_name) {
            return None;
        }
        let Expression::Call { callee, arguments } = value.skip_assignments() else {
            return None;
        };
        if !is_helper(callee, DECORATE_HELPERS) || arguments.len() != 2 {
            return None;
        }
        let (Expression::Array(elements), Some(target)) = (&arguments[0], arguments[1].as_identifier())
        else {
            return None;
        };
        if target != class_name {
            return None;
        }

        let decorators: Vec<Decorator<'a>> = elements
            .iter()
            .filter(|element| {
                let (callee, _) = split_decorator_call(element);
                !is_helper(callee, METADATA_HELPERS)
            })
            .filter_map(|element| self.ts_host.decorator_from_expression(element, source_file))
            .collect();
        (!decorators.is_empty()).then_some(decorators)
    }

    /// Reads `[{ type: Dec, args: [...] }, ...]` metadata literals.
    fn reflect_decorator_metadata(
        &self,
        metadata: &'a Expression,
        source_file: &'a SourceFile,
    ) -> Vec<Decorator<'a>> {
        let Expression::Array(elements) = metadata else {
            return Vec::new();
        };
        elements
            .iter()
            .filter_map(|element| {
                let identifier = decorator_identifier(element.property("type")?)?;
                let args = match element.property("args") {
                    Some(Expression::Array(args)) => Some(args.iter().collect()),
                    _ => None,
                };
                Some(Decorator {
                    name: identifier.name.clone(),
                    import: self.ts_host.get_import_of_decorator(&identifier, source_file),
                    identifier: Some(identifier),
                    node: element,
                    args,
                })
            })
            .collect()
    }
}

fn is_helper(callee: &Expression, helpers: &[&str]) -> bool {
    decorator_identifier(callee).is_some_and(|identifier| helpers.contains(&identifier.name.as_str()))
}

impl<'a> ReflectionHost<'a> for Esm2015ReflectionHost<'a> {
    fn get_decorators_of_declaration(
        &self,
        declaration: &'a Declaration,
    ) -> Option<Vec<Decorator<'a>>> {
        let class = self.get_class_declaration(declaration)?;
        let name = declaration.name()?;
        let source_file = self.checker().get_source_file_of_declaration(declaration)?;
        self.find_decorators(name, class, &[source_file.statements.as_slice()], source_file)
    }

    fn get_import_of_identifier(&self, name: &str, source_file: &'a SourceFile) -> Option<Import> {
        self.ts_host.get_import_of_identifier(name, source_file)
    }

    fn is_class(&self, declaration: &'a Declaration) -> bool {
        self.get_class_declaration(declaration).is_some()
    }
}

impl<'a> NgccReflectionHost<'a> for Esm2015ReflectionHost<'a> {
    fn get_class_declaration(&self, declaration: &'a Declaration) -> Option<ClassLike<'a>> {
        match &declaration.kind {
            DeclarationKind::Class(class) => Some(ClassLike::Class(class)),
            DeclarationKind::Variable(variable) => {
                match variable.initializer.as_ref()?.skip_assignments() {
                    Expression::Class(class) => Some(ClassLike::Class(&**class)),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}
