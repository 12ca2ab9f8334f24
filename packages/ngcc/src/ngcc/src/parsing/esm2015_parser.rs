use ts::{SourceFile, TypeChecker};

use super::declaration::{CandidateDeclaration, DeclarationExtractor};
use super::file_grouping::FileGroupingIndex;
use super::file_parser::FileParser;
use super::symbol_resolver::SymbolResolver;
use crate::ngcc::host::{DecoratedClass, DecoratedFile, Esm5ReflectionHost, NgccReflectionHost};
use crate::ngtsc::logging::Logger;
use crate::ngtsc::reflection::ReflectionHost;

/// Parses ES2015 entry points. The reflection host decides which declarations
/// are classes and where their decorators live.
pub struct Esm2015FileParser<'a, H> {
    checker: &'a dyn TypeChecker,
    host: H,
    max_alias_hops: usize,
    logger: &'a dyn Logger,
}

/// ES5 bundles export the same way; only class emit differs.
pub type Esm5FileParser<'a> = Esm2015FileParser<'a, Esm5ReflectionHost<'a>>;

impl<'a, H: NgccReflectionHost<'a>> Esm2015FileParser<'a, H> {
    pub fn new(
        checker: &'a dyn TypeChecker,
        host: H,
        max_alias_hops: usize,
        logger: &'a dyn Logger,
    ) -> Self {
        Self {
            checker,
            host,
            max_alias_hops,
            logger,
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    fn decorated_class(&self, candidate: CandidateDeclaration<'a>) -> Option<DecoratedClass<'a>> {
        let decorators = self
            .host
            .get_decorators_of_declaration(candidate.declaration())
            .filter(|decorators| !decorators.is_empty());
        let Some(decorators) = decorators else {
            self.logger.debug(&format!(
                "Skipping '{}': no decorators",
                candidate.name()
            ));
            return None;
        };
        Some(DecoratedClass::new(
            candidate.name(),
            candidate.declaration(),
            decorators,
        ))
    }
}

impl<'a, H: NgccReflectionHost<'a>> FileParser<'a> for Esm2015FileParser<'a, H> {
    fn parse_file(&self, file: &'a SourceFile) -> Vec<DecoratedFile<'a>> {
        let resolver = SymbolResolver::new(self.checker, self.max_alias_hops, self.logger);
        let extractor = DeclarationExtractor::new(self.checker);
        let mut index = FileGroupingIndex::new();

        for symbol in resolver.resolve(file) {
            let Some(declaration) = extractor.extract(symbol) else {
                self.logger.debug(&format!(
                    "Skipping '{}': no value declaration",
                    self.checker
                        .get_symbol(symbol)
                        .map_or("<unknown>", |symbol| symbol.name.as_str())
                ));
                continue;
            };
            let Some(candidate) = CandidateDeclaration::classify(declaration) else {
                self.logger.debug(&format!(
                    "Skipping {} '{}': not a class or a variable bound to an identifier",
                    declaration.kind_name(),
                    declaration.name().unwrap_or("<anonymous>")
                ));
                continue;
            };
            let Some(decorated_class) = self.decorated_class(candidate) else {
                continue;
            };
            let Some(declaring_file) = self.checker.get_source_file_of_declaration(declaration) else {
                continue;
            };
            index.accept(declaring_file, decorated_class);
        }

        let decorated_files = index.materialize();
        self.logger.info(&format!(
            "Found {} decorated classes in {} files exported from {}",
            decorated_files
                .iter()
                .map(|decorated_file| decorated_file.decorated_classes.len())
                .sum::<usize>(),
            decorated_files.len(),
            file.file_name()
        ));
        decorated_files
    }
}
