use crate::testing::InMemoryCompilerHost;
use crate::{Program, SymbolId, TypeChecker};

fn program(files: &[(&str, &str)], root: &str) -> Program {
    let host = InMemoryCompilerHost::with_files(files.iter().copied());
    host.create_program(&[root]).unwrap()
}

fn export_names(program: &Program, file_name: &str) -> Vec<String> {
    let checker = program.get_type_checker();
    let source_file = program.get_source_file(file_name).unwrap();
    let module = checker.get_symbol_at_location(source_file).unwrap();
    checker
        .get_exports_of_module(module)
        .into_iter()
        .map(|symbol| checker.get_symbol(symbol).unwrap().name.clone())
        .collect()
}

fn resolve(checker: &dyn TypeChecker, mut symbol: SymbolId) -> SymbolId {
    while let Some(next) = checker.get_immediate_aliased_symbol(symbol) {
        symbol = next;
    }
    symbol
}

#[test]
fn should_enumerate_own_exports_before_star_re_exports() {
    let program = program(
        &[
            ("/index.ts", "export * from './a';\nexport class Own {}"),
            ("/a.ts", "export class A {}\nexport class Own {}\nexport default class Def {}"),
        ],
        "/index.ts",
    );
    assert_eq!(export_names(&program, "/index.ts"), vec!["Own", "A"]);
}

#[test]
fn should_terminate_on_circular_star_re_exports() {
    let program = program(
        &[
            ("/a.ts", "export * from './b';\nexport class A {}"),
            ("/b.ts", "export * from './a';\nexport class B {}"),
        ],
        "/a.ts",
    );
    assert_eq!(export_names(&program, "/a.ts"), vec!["A", "B"]);
}

#[test]
fn should_follow_alias_chains_one_hop_at_a_time() {
    let program = program(
        &[
            ("/index.ts", "export { B as C } from './b';"),
            ("/b.ts", "import { A } from './a';\nexport { A as B };"),
            ("/a.ts", "export class A {}"),
        ],
        "/index.ts",
    );
    let checker = program.get_type_checker();
    let index = program.get_source_file("/index.ts").unwrap();
    let module = checker.get_symbol_at_location(index).unwrap();
    let exports = checker.get_exports_of_module(module);
    assert_eq!(exports.len(), 1);

    let c = exports[0];
    assert!(checker.is_alias(c));
    let b = checker.get_immediate_aliased_symbol(c).unwrap();
    assert_eq!(checker.get_symbol(b).unwrap().name, "B");
    let import = checker.get_immediate_aliased_symbol(b).unwrap();
    assert_eq!(checker.get_symbol(import).unwrap().name, "A");
    assert!(checker.is_alias(import));

    let original = resolve(checker, c);
    let symbol = checker.get_symbol(original).unwrap();
    assert!(!symbol.is_alias());
    let declaration = checker.get_declaration(symbol.declarations[0]).unwrap();
    let source_file = checker.get_source_file_of_declaration(declaration).unwrap();
    assert_eq!(source_file.file_name(), "/a.ts");
}

#[test]
fn should_resolve_names_through_star_re_exports() {
    let program = program(
        &[
            ("/index.ts", "import { A } from './barrel';\nexport { A };"),
            ("/barrel.ts", "export * from './a';"),
            ("/a.ts", "export class A {}"),
        ],
        "/index.ts",
    );
    let checker = program.get_type_checker();
    let index = program.get_source_file("/index.ts").unwrap();
    let a = index.local("A").unwrap();
    let target = checker.get_immediate_aliased_symbol(a).unwrap();
    assert!(!checker.is_alias(target));
    assert_eq!(checker.get_symbol(target).unwrap().name, "A");
}

#[test]
fn should_not_resolve_aliases_to_unresolved_modules() {
    let program = program(
        &[("/index.ts", "import { Component } from '@angular/core';\nexport { Component };")],
        "/index.ts",
    );
    let checker = program.get_type_checker();
    let index = program.get_source_file("/index.ts").unwrap();
    let component = index.local("Component").unwrap();
    assert!(checker.is_alias(component));
    assert_eq!(checker.get_immediate_aliased_symbol(component), None);
}

#[test]
fn should_resolve_namespace_imports_to_module_symbols() {
    let program = program(
        &[
            ("/index.ts", "import * as a from './a';\nexport { a };"),
            ("/a.ts", "export class A {}"),
        ],
        "/index.ts",
    );
    let checker = program.get_type_checker();
    let index = program.get_source_file("/index.ts").unwrap();
    let a_file = program.get_source_file("/a.ts").unwrap();
    let ns = index.local("a").unwrap();
    assert_eq!(
        checker.get_immediate_aliased_symbol(ns),
        checker.get_symbol_at_location(a_file)
    );
}
