use std::collections::HashMap;

use ts::{FileId, SourceFile};

use crate::ngcc::host::{DecoratedClass, DecoratedFile};

/// Groups decorated classes by declaring file.
///
/// Files come out in the order their first class was accepted; classes keep
/// their acceptance order within a file.
#[derive(Debug, Default)]
pub struct FileGroupingIndex<'a> {
    order: Vec<FileId>,
    files: HashMap<FileId, DecoratedFile<'a>>,
}

impl<'a> FileGroupingIndex<'a> {
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            files: HashMap::new(),
        }
    }

    pub fn accept(&mut self, source_file: &'a SourceFile, decorated_class: DecoratedClass<'a>) {
        let file = self.files.entry(source_file.id).or_insert_with(|| {
            self.order.push(source_file.id);
            DecoratedFile::new(source_file)
        });
        file.decorated_classes.push(decorated_class);
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn materialize(mut self) -> Vec<DecoratedFile<'a>> {
        self.order
            .iter()
            .filter_map(|file| self.files.remove(file))
            .collect()
    }
}
