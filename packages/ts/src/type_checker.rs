use std::collections::HashSet;
use std::fmt::Debug;

use indexmap::IndexMap;

use crate::node::{Declaration, DeclarationId, FileId, SourceFile};
use crate::program::Program;
use crate::symbol::{AliasTarget, ModuleReference, Symbol, SymbolId};

/// Read-only view of the whole-program symbol database.
///
/// Consumers receive it explicitly instead of reaching for a global checker,
/// which lets tests substitute a hand-built database.
pub trait TypeChecker: Debug {
    /// The module symbol of a source file; `None` for scripts without module semantics.
    fn get_symbol_at_location(&self, source_file: &SourceFile) -> Option<SymbolId>;

    /// Exported symbols of a module in export enumeration order, star re-exports included.
    fn get_exports_of_module(&self, module_symbol: SymbolId) -> Vec<SymbolId>;

    fn get_symbol(&self, symbol: SymbolId) -> Option<&Symbol>;

    /// Follows a single alias hop. `None` for non-aliases and for aliases whose
    /// target cannot be found.
    fn get_immediate_aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId>;

    fn get_declaration(&self, declaration: DeclarationId) -> Option<&Declaration>;

    fn get_source_file_by_id(&self, file: FileId) -> Option<&SourceFile>;

    fn get_source_file_of_declaration(&self, declaration: &Declaration) -> Option<&SourceFile> {
        self.get_source_file_by_id(declaration.file)
    }

    fn is_alias(&self, symbol: SymbolId) -> bool {
        self.get_symbol(symbol).is_some_and(Symbol::is_alias)
    }
}

impl Program {
    fn resolve_module_reference(&self, module: &ModuleReference) -> Option<FileId> {
        module
            .resolved_file_name
            .as_deref()
            .and_then(|file_name| self.get_source_file(file_name))
            .map(|source_file| source_file.id)
    }

    /// Looks up `name` among the exports of `file`, searching star re-exports
    /// when the file does not export the name itself.
    pub(crate) fn get_export_of_file(&self, file: FileId, name: &str) -> Option<SymbolId> {
        let mut visited = HashSet::new();
        self.find_export(file, name, &mut visited)
    }

    fn find_export(&self, file: FileId, name: &str, visited: &mut HashSet<FileId>) -> Option<SymbolId> {
        if !visited.insert(file) {
            return None;
        }
        let source_file = self.source_file(file)?;
        if let Some(symbol) = source_file.exports.get(name) {
            return Some(*symbol);
        }
        if name == "default" {
            return None;
        }
        source_file
            .export_stars
            .iter()
            .filter_map(|module| self.resolve_module_reference(module))
            .find_map(|target| self.find_export(target, name, visited))
    }

    fn collect_exports(
        &self,
        file: FileId,
        is_root: bool,
        exports: &mut IndexMap<String, SymbolId>,
        visited: &mut HashSet<FileId>,
    ) {
        if !visited.insert(file) {
            return;
        }
        let Some(source_file) = self.source_file(file) else {
            return;
        };
        for (name, symbol) in &source_file.exports {
            if !is_root && name == "default" {
                continue;
            }
            exports.entry(name.clone()).or_insert(*symbol);
        }
        for module in &source_file.export_stars {
            if let Some(target) = self.resolve_module_reference(module) {
                self.collect_exports(target, false, exports, visited);
            }
        }
    }
}

impl TypeChecker for Program {
    fn get_symbol_at_location(&self, source_file: &SourceFile) -> Option<SymbolId> {
        self.source_file(source_file.id)
            .filter(|own| own.file_name == source_file.file_name)?
            .module_symbol
    }

    fn get_exports_of_module(&self, module_symbol: SymbolId) -> Vec<SymbolId> {
        let Some(file) = self.symbol(module_symbol).and_then(|symbol| symbol.module) else {
            return Vec::new();
        };
        let mut exports = IndexMap::new();
        let mut visited = HashSet::new();
        self.collect_exports(file, true, &mut exports, &mut visited);
        exports.into_values().collect()
    }

    fn get_symbol(&self, symbol: SymbolId) -> Option<&Symbol> {
        self.symbol(symbol)
    }

    fn get_immediate_aliased_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        let symbol = self.symbol(symbol)?;
        match symbol.alias_target.as_ref()? {
            AliasTarget::Local(name) => self.source_file(symbol.parent?)?.local(name),
            AliasTarget::Export { module, name } => {
                let file = self.resolve_module_reference(module)?;
                self.get_export_of_file(file, name)
            }
            AliasTarget::Namespace(module) => {
                let file = self.resolve_module_reference(module)?;
                self.source_file(file)?.module_symbol
            }
        }
    }

    fn get_declaration(&self, declaration: DeclarationId) -> Option<&Declaration> {
        self.declaration(declaration)
    }

    fn get_source_file_by_id(&self, file: FileId) -> Option<&SourceFile> {
        self.source_file(file)
    }
}
