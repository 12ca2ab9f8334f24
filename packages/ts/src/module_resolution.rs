//! Relative module resolution over a `CompilerHost`.
//!
//! Only relative specifiers (`./x`, `../x`) are resolved. Package imports stay
//! unresolved, which makes any alias pointing at them resolve to nothing.

use crate::program::CompilerHost;

const EXTENSIONS: &[&str] = &[".ts", ".d.ts", ".tsx", ".js", ".mjs"];
const INDEX_FILES: &[&str] = &["index.ts", "index.d.ts", "index.js", "index.mjs"];

pub fn is_relative_specifier(specifier: &str) -> bool {
    specifier == "."
        || specifier == ".."
        || specifier.starts_with("./")
        || specifier.starts_with("../")
}

/// Resolves `specifier` as imported from `containing_file` to a canonical file name.
pub fn resolve_module_name(
    specifier: &str,
    containing_file: &str,
    host: &dyn CompilerHost,
) -> Option<String> {
    if !is_relative_specifier(specifier) {
        return None;
    }
    let base = normalize_path(&join(dirname(containing_file), specifier));

    let has_known_extension = EXTENSIONS.iter().any(|ext| base.ends_with(ext));
    let candidates = has_known_extension
        .then(|| base.clone())
        .into_iter()
        .chain(EXTENSIONS.iter().map(|ext| format!("{}{}", base, ext)))
        .chain(INDEX_FILES.iter().map(|index| join(&base, index)));

    for candidate in candidates {
        if host.file_exists(&candidate) {
            return Some(host.get_canonical_file_name(&candidate));
        }
    }
    None
}

pub fn dirname(path: &str) -> &str {
    match path.rfind('/') {
        Some(0) => "/",
        Some(index) => &path[..index],
        None => ".",
    }
}

pub fn join(base: &str, relative: &str) -> String {
    if relative.starts_with('/') {
        return relative.to_string();
    }
    if base.ends_with('/') {
        format!("{}{}", base, relative)
    } else {
        format!("{}/{}", base, relative)
    }
}

/// Collapses `.` and `..` segments and duplicate separators.
pub fn normalize_path(path: &str) -> String {
    let is_absolute = path.starts_with('/');
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                if matches!(segments.last(), Some(last) if *last != "..") {
                    segments.pop();
                } else if !is_absolute {
                    segments.push("..");
                }
            }
            other => segments.push(other),
        }
    }
    let joined = segments.join("/");
    if is_absolute {
        format!("/{}", joined)
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
