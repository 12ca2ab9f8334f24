pub mod declaration;
pub mod esm2015_parser;
pub mod file_grouping;
pub mod file_parser;
pub mod symbol_resolver;

use ts::{Program, SourceFile};

use super::config::{BundleFormat, NgccParsingOptions};
use super::host::{DecoratedFile, Esm2015ReflectionHost, Esm5ReflectionHost};
use crate::ngtsc::logging::Logger;

pub use declaration::{CandidateDeclaration, DeclarationExtractor};
pub use esm2015_parser::{Esm2015FileParser, Esm5FileParser};
pub use file_grouping::FileGroupingIndex;
pub use file_parser::FileParser;
pub use symbol_resolver::SymbolResolver;

/// Creates the parser for bundles of `options.format`.
pub fn create_file_parser<'a>(
    program: &'a Program,
    options: &NgccParsingOptions,
    logger: &'a dyn Logger,
) -> Box<dyn FileParser<'a> + 'a> {
    let checker = program.get_type_checker();
    match options.format {
        BundleFormat::Esm2015 => Box::new(Esm2015FileParser::new(
            checker,
            Esm2015ReflectionHost::new(checker),
            options.max_alias_hops,
            logger,
        )),
        BundleFormat::Esm5 => Box::new(Esm5FileParser::new(
            checker,
            Esm5ReflectionHost::new(checker),
            options.max_alias_hops,
            logger,
        )),
    }
}

/// Parses each entry point in turn, concatenating the results in entry order.
pub fn parse_entry_points<'a>(
    parser: &dyn FileParser<'a>,
    entry_points: &[&'a SourceFile],
) -> Vec<DecoratedFile<'a>> {
    entry_points
        .iter()
        .copied()
        .flat_map(|entry_point| parser.parse_file(entry_point))
        .collect()
}
