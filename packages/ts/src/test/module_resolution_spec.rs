use crate::module_resolution::{dirname, is_relative_specifier, normalize_path, resolve_module_name};
use crate::testing::InMemoryCompilerHost;

#[test]
fn should_recognise_relative_specifiers() {
    assert!(is_relative_specifier("./a"));
    assert!(is_relative_specifier("../a"));
    assert!(is_relative_specifier("."));
    assert!(!is_relative_specifier("@angular/core"));
    assert!(!is_relative_specifier("tslib"));
}

#[test]
fn should_normalize_paths() {
    assert_eq!(normalize_path("/a/./b/../c"), "/a/c");
    assert_eq!(normalize_path("/a//b/"), "/a/b");
    assert_eq!(normalize_path("../x"), "../x");
    assert_eq!(dirname("/src/index.js"), "/src");
    assert_eq!(dirname("/index.js"), "/");
}

#[test]
fn should_try_extensions_then_index_files() {
    let host = InMemoryCompilerHost::with_files([
        ("/src/a.ts", ""),
        ("/src/b.js", ""),
        ("/src/lib/index.d.ts", ""),
    ]);
    assert_eq!(
        resolve_module_name("./a", "/src/main.ts", &host).as_deref(),
        Some("/src/a.ts")
    );
    assert_eq!(
        resolve_module_name("./b.js", "/src/main.ts", &host).as_deref(),
        Some("/src/b.js")
    );
    assert_eq!(
        resolve_module_name("../src/lib", "/src/main.ts", &host).as_deref(),
        Some("/src/lib/index.d.ts")
    );
    assert_eq!(resolve_module_name("./missing", "/src/main.ts", &host), None);
}

#[test]
fn should_leave_package_specifiers_unresolved() {
    let host = InMemoryCompilerHost::with_files([("/node_modules/tslib/index.js", "")]);
    assert_eq!(resolve_module_name("tslib", "/main.js", &host), None);
}
