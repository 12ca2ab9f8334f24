use std::collections::HashSet;

use ts::{SourceFile, SymbolId, TypeChecker};

use crate::ngtsc::logging::Logger;

/// Resolves the exports of a module to the symbols that own their declarations.
pub struct SymbolResolver<'a> {
    checker: &'a dyn TypeChecker,
    max_alias_hops: usize,
    logger: &'a dyn Logger,
}

impl<'a> SymbolResolver<'a> {
    pub fn new(checker: &'a dyn TypeChecker, max_alias_hops: usize, logger: &'a dyn Logger) -> Self {
        Self {
            checker,
            max_alias_hops,
            logger,
        }
    }

    /// One entry per exported name, in export order. Unresolvable exports are
    /// dropped; a file without a module symbol yields nothing.
    pub fn resolve(&self, file: &SourceFile) -> Vec<SymbolId> {
        let Some(module_symbol) = self.checker.get_symbol_at_location(file) else {
            self.logger
                .debug(&format!("{} has no module symbol", file.file_name()));
            return Vec::new();
        };
        self.checker
            .get_exports_of_module(module_symbol)
            .into_iter()
            .filter_map(|symbol| self.get_original_symbol(symbol))
            .collect()
    }

    /// Follows `symbol` through alias hops to the first symbol that is not an alias.
    pub fn get_original_symbol(&self, symbol: SymbolId) -> Option<SymbolId> {
        let mut visited = HashSet::new();
        let mut current = symbol;
        while self.checker.is_alias(current) {
            if !visited.insert(current) {
                self.logger.debug(&format!(
                    "Skipping export '{}': alias cycle",
                    self.symbol_name(symbol)
                ));
                return None;
            }
            if visited.len() > self.max_alias_hops {
                self.logger.debug(&format!(
                    "Skipping export '{}': more than {} alias hops",
                    self.symbol_name(symbol),
                    self.max_alias_hops
                ));
                return None;
            }
            let Some(next) = self.checker.get_immediate_aliased_symbol(current) else {
                self.logger.debug(&format!(
                    "Skipping export '{}': alias '{}' does not resolve",
                    self.symbol_name(symbol),
                    self.symbol_name(current)
                ));
                return None;
            };
            current = next;
        }
        Some(current)
    }

    fn symbol_name(&self, symbol: SymbolId) -> &'a str {
        self.checker
            .get_symbol(symbol)
            .map_or("<unknown>", |symbol| symbol.name.as_str())
    }
}
