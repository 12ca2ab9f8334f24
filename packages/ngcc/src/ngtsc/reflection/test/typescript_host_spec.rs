use ts::testing::InMemoryCompilerHost;
use ts::{Declaration, Expression, Program};

use crate::ngtsc::reflection::{DecoratorIdentifier, Import, ReflectionHost, TypeScriptReflectionHost};

const SOURCE: &str = r#"
import { Component, Input as In } from '@angular/core';
import * as core from '@angular/core';
import { Local } from './local';

@Component({ selector: 'test-cmp', template: '' })
export class TestCmp {
    @In() value: string;
}

@core.Directive()
@Local
export class Namespaced {}

@notImported()
export class Unknown {}

export class Plain {}

export function helper() {}
"#;

struct TestProgram {
    program: Program,
}

impl TestProgram {
    fn new(source: &str) -> Self {
        let host = InMemoryCompilerHost::with_files([("/test.ts", source), ("/local.ts", "export function Local() {}")]);
        let program = host.create_program(&["/test.ts"]).unwrap();
        assert!(
            program.get_syntactic_diagnostics().is_empty(),
            "Parse errors: {:?}",
            program.get_syntactic_diagnostics()
        );
        Self { program }
    }

    fn host(&self) -> TypeScriptReflectionHost<'_> {
        TypeScriptReflectionHost::new(self.program.get_type_checker())
    }

    fn find_declaration(&self, name: &str) -> &Declaration {
        let source_file = self.program.get_source_file("/test.ts").unwrap();
        let symbol = self.program.symbol(source_file.local(name).unwrap()).unwrap();
        self.program.declaration(symbol.declarations[0]).unwrap()
    }
}

mod get_decorators_of_declaration {
    use super::*;

    #[test]
    fn should_read_decorator_calls_and_their_imports() {
        let test = TestProgram::new(SOURCE);
        let decorators = test
            .host()
            .get_decorators_of_declaration(test.find_declaration("TestCmp"))
            .unwrap();

        assert_eq!(decorators.len(), 1);
        let decorator = &decorators[0];
        assert_eq!(decorator.name, "Component");
        assert_eq!(
            decorator.identifier,
            Some(DecoratorIdentifier {
                name: "Component".to_string(),
                module_name: None
            })
        );
        assert_eq!(
            decorator.import,
            Some(Import {
                name: "Component".to_string(),
                from: "@angular/core".to_string()
            })
        );
        let args = decorator.args.as_ref().unwrap();
        assert_eq!(
            args[0].property("selector"),
            Some(&Expression::StringLiteral("test-cmp".to_string()))
        );
    }

    #[test]
    fn should_resolve_namespaced_and_bare_decorators() {
        let test = TestProgram::new(SOURCE);
        let decorators = test
            .host()
            .get_decorators_of_declaration(test.find_declaration("Namespaced"))
            .unwrap();

        assert_eq!(decorators.len(), 2);
        assert_eq!(decorators[0].name, "Directive");
        assert_eq!(
            decorators[0].import,
            Some(Import {
                name: "Directive".to_string(),
                from: "@angular/core".to_string()
            })
        );
        assert_eq!(decorators[0].args, Some(Vec::new()));

        assert_eq!(decorators[1].name, "Local");
        assert_eq!(decorators[1].args, None);
        assert_eq!(
            decorators[1].import,
            Some(Import {
                name: "Local".to_string(),
                from: "./local".to_string()
            })
        );
    }

    #[test]
    fn should_keep_decorators_that_are_not_imported() {
        let test = TestProgram::new(SOURCE);
        let decorators = test
            .host()
            .get_decorators_of_declaration(test.find_declaration("Unknown"))
            .unwrap();

        assert_eq!(decorators[0].name, "notImported");
        assert_eq!(decorators[0].import, None);
    }

    #[test]
    fn should_return_none_without_decorators() {
        let test = TestProgram::new(SOURCE);
        let host = test.host();

        assert_eq!(host.get_decorators_of_declaration(test.find_declaration("Plain")), None);
        assert_eq!(host.get_decorators_of_declaration(test.find_declaration("helper")), None);
    }
}

mod get_import_of_identifier {
    use super::*;

    #[test]
    fn should_report_the_exported_name_of_renamed_imports() {
        let test = TestProgram::new(SOURCE);
        let source_file = test.program.get_source_file("/test.ts").unwrap();

        assert_eq!(
            test.host().get_import_of_identifier("In", source_file),
            Some(Import {
                name: "Input".to_string(),
                from: "@angular/core".to_string()
            })
        );
        assert_eq!(test.host().get_import_of_identifier("core", source_file), None);
        assert_eq!(test.host().get_import_of_identifier("TestCmp", source_file), None);
    }
}

mod is_class {
    use super::*;

    #[test]
    fn should_only_accept_class_declarations() {
        let test = TestProgram::new(SOURCE);
        let host = test.host();

        assert!(host.is_class(test.find_declaration("Plain")));
        assert!(!host.is_class(test.find_declaration("helper")));
    }
}
