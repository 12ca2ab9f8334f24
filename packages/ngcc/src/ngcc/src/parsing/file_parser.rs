use ts::SourceFile;

use crate::ngcc::host::DecoratedFile;

/// Finds the decorated classes exported by a file of a bundle.
pub trait FileParser<'a> {
    /// Decorated classes reachable from the exports of `file`, grouped by the file
    /// that declares them.
    fn parse_file(&self, file: &'a SourceFile) -> Vec<DecoratedFile<'a>>;
}
