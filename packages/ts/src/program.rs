use std::collections::{HashMap, VecDeque};
use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;

use crate::binder::bind_source_file;
use crate::module_resolution::{join, normalize_path};
use crate::node::{Declaration, DeclarationId, FileId, SourceFile};
use crate::symbol::{Symbol, SymbolId};
use crate::type_checker::TypeChecker;
use crate::DiagnosticWithLocation;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    pub allow_js: Option<bool>,
    pub base_url: Option<String>,
    pub root_dir: Option<String>,
}

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("no root files were given")]
    NoRootFiles,
    #[error("file '{file_name}' not found")]
    FileNotFound { file_name: String },
}

/// File access used while building a program.
pub trait CompilerHost {
    fn get_current_directory(&self) -> String;
    fn get_canonical_file_name(&self, file_name: &str) -> String;
    fn use_case_sensitive_file_names(&self) -> bool;
    fn file_exists(&self, file_name: &str) -> bool;
    fn read_file(&self, file_name: &str) -> Option<String>;
}

/// Host backed by the real file system.
#[derive(Debug, Clone)]
pub struct SystemCompilerHost {
    current_directory: PathBuf,
}

impl SystemCompilerHost {
    pub fn new(current_directory: impl Into<PathBuf>) -> Self {
        Self {
            current_directory: current_directory.into(),
        }
    }
}

impl CompilerHost for SystemCompilerHost {
    fn get_current_directory(&self) -> String {
        self.current_directory.to_string_lossy().replace('\\', "/")
    }

    fn get_canonical_file_name(&self, file_name: &str) -> String {
        file_name.replace('\\', "/")
    }

    fn use_case_sensitive_file_names(&self) -> bool {
        !cfg!(any(windows, target_os = "macos"))
    }

    fn file_exists(&self, file_name: &str) -> bool {
        std::fs::metadata(file_name).is_ok_and(|metadata| metadata.is_file())
    }

    fn read_file(&self, file_name: &str) -> Option<String> {
        std::fs::read_to_string(file_name).ok()
    }
}

/// A set of bound source files sharing one symbol table.
#[derive(Debug, Default)]
pub struct Program {
    options: CompilerOptions,
    root_names: Vec<String>,
    source_files: Vec<SourceFile>,
    files_by_name: HashMap<String, FileId>,
    declarations: Vec<Declaration>,
    symbols: Vec<Symbol>,
    diagnostics: Vec<DiagnosticWithLocation>,
}

impl Program {
    /// Loads, parses and binds `root_names` and every file they reach through
    /// relative imports and re-exports.
    pub fn create(
        root_names: &[&str],
        options: CompilerOptions,
        host: &dyn CompilerHost,
    ) -> Result<Program, ProgramError> {
        if root_names.is_empty() {
            return Err(ProgramError::NoRootFiles);
        }
        let mut program = Program {
            options,
            ..Program::default()
        };
        let current_directory = host.get_current_directory();

        let mut queue = VecDeque::new();
        for root in root_names {
            let file_name = host.get_canonical_file_name(&normalize_path(&join(&current_directory, root)));
            if !host.file_exists(&file_name) {
                return Err(ProgramError::FileNotFound { file_name });
            }
            program.root_names.push(file_name.clone());
            queue.push_back(file_name);
        }

        while let Some(file_name) = queue.pop_front() {
            if program.files_by_name.contains_key(&file_name) {
                continue;
            }
            let Some(text) = host.read_file(&file_name) else {
                if program.root_names.contains(&file_name) {
                    return Err(ProgramError::FileNotFound { file_name });
                }
                continue;
            };
            let dependencies = bind_source_file(&mut program, file_name, text, host);
            queue.extend(
                dependencies
                    .into_iter()
                    .filter(|dependency| !program.files_by_name.contains_key(dependency)),
            );
        }

        Ok(program)
    }

    pub fn options(&self) -> &CompilerOptions {
        &self.options
    }

    pub fn get_root_file_names(&self) -> &[String] {
        &self.root_names
    }

    pub fn get_source_files(&self) -> &[SourceFile] {
        &self.source_files
    }

    pub fn get_source_file(&self, file_name: &str) -> Option<&SourceFile> {
        self.files_by_name
            .get(file_name)
            .and_then(|id| self.source_file(*id))
    }

    pub fn source_file(&self, id: FileId) -> Option<&SourceFile> {
        self.source_files.get(id.index())
    }

    pub fn declaration(&self, id: DeclarationId) -> Option<&Declaration> {
        self.declarations.get(id.index())
    }

    pub fn symbol(&self, id: SymbolId) -> Option<&Symbol> {
        self.symbols.get(id.index())
    }

    pub fn get_syntactic_diagnostics(&self) -> &[DiagnosticWithLocation] {
        &self.diagnostics
    }

    pub fn get_type_checker(&self) -> &dyn TypeChecker {
        self
    }

    // --- Binder support ---

    pub(crate) fn add_source_file(&mut self, file_name: String) -> FileId {
        let id = FileId::new(self.source_files.len());
        self.files_by_name.insert(file_name.clone(), id);
        self.source_files.push(SourceFile::new(id, file_name, String::new()));
        id
    }

    pub(crate) fn source_file_mut(&mut self, id: FileId) -> &mut SourceFile {
        &mut self.source_files[id.index()]
    }

    pub(crate) fn add_declaration(&mut self, mut declaration: Declaration) -> DeclarationId {
        let id = DeclarationId::new(self.declarations.len());
        declaration.id = id;
        self.declarations.push(declaration);
        id
    }

    pub(crate) fn add_symbol(&mut self, mut symbol: Symbol) -> SymbolId {
        let id = SymbolId::new(self.symbols.len());
        symbol.id = id;
        self.symbols.push(symbol);
        id
    }

    pub(crate) fn symbol_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.index()]
    }

    pub(crate) fn add_diagnostic(&mut self, diagnostic: DiagnosticWithLocation) {
        self.diagnostics.push(diagnostic);
    }
}
