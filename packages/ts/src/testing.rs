//! In-memory compiler host for tests.

use std::collections::BTreeMap;

use crate::module_resolution::{join, normalize_path};
use crate::program::{CompilerHost, CompilerOptions, Program, ProgramError};

#[derive(Debug, Clone, Default)]
pub struct InMemoryCompilerHost {
    files: BTreeMap<String, String>,
}

impl InMemoryCompilerHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a host from `(path, contents)` pairs. Relative paths are rooted at `/`.
    pub fn with_files<'f>(files: impl IntoIterator<Item = (&'f str, &'f str)>) -> Self {
        let mut host = Self::new();
        for (file_name, contents) in files {
            host.write_file(file_name, contents);
        }
        host
    }

    pub fn write_file(&mut self, file_name: &str, contents: &str) {
        let file_name = normalize_path(&join("/", file_name));
        self.files.insert(file_name, contents.to_string());
    }

    /// Creates a program rooted at `root_names` with default options.
    pub fn create_program(&self, root_names: &[&str]) -> Result<Program, ProgramError> {
        Program::create(root_names, CompilerOptions::default(), self)
    }
}

impl CompilerHost for InMemoryCompilerHost {
    fn get_current_directory(&self) -> String {
        "/".to_string()
    }

    fn get_canonical_file_name(&self, file_name: &str) -> String {
        file_name.to_string()
    }

    fn use_case_sensitive_file_names(&self) -> bool {
        true
    }

    fn file_exists(&self, file_name: &str) -> bool {
        self.files.contains_key(file_name)
    }

    fn read_file(&self, file_name: &str) -> Option<String> {
        self.files.get(file_name).cloned()
    }
}
