use ts::{Expression, Statement};

use super::host::DecoratorIdentifier;

/// Splits a decorator expression into the invoked expression and its arguments.
pub fn split_decorator_call(expression: &Expression) -> (&Expression, Option<Vec<&Expression>>) {
    match expression {
        Expression::Call { callee, arguments } => (callee, Some(arguments.iter().collect())),
        other => (other, None),
    }
}

/// `Dec` or `ns.Dec`; anything else cannot name a decorator.
pub fn decorator_identifier(expression: &Expression) -> Option<DecoratorIdentifier> {
    match expression {
        Expression::Identifier(name) => Some(DecoratorIdentifier {
            name: name.clone(),
            module_name: None,
        }),
        Expression::PropertyAccess { object, name } => {
            object.as_identifier().map(|namespace| DecoratorIdentifier {
                name: name.clone(),
                module_name: Some(namespace.to_string()),
            })
        }
        _ => None,
    }
}

/// Expression statements of a statement list, in order.
pub fn expression_statements(statements: &[Statement]) -> impl Iterator<Item = &Expression> {
    statements.iter().filter_map(|statement| match statement {
        Statement::Expression(expression) => Some(expression),
        _ => None,
    })
}
