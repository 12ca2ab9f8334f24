use ts::SourceFile;

use super::decorated_class::DecoratedClass;

/// The decorated classes physically declared in one source file.
#[derive(Debug, Clone, PartialEq)]
pub struct DecoratedFile<'a> {
    pub source_file: &'a SourceFile,
    /// In the order they were accepted.
    pub decorated_classes: Vec<DecoratedClass<'a>>,
}

impl<'a> DecoratedFile<'a> {
    pub fn new(source_file: &'a SourceFile) -> Self {
        Self {
            source_file,
            decorated_classes: Vec::new(),
        }
    }

    pub fn file_name(&self) -> &'a str {
        self.source_file.file_name()
    }
}
