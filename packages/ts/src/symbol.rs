use bitflags::bitflags;

use crate::node::{DeclarationId, FileId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SymbolId(u32);

impl SymbolId {
    pub fn new(index: usize) -> Self {
        SymbolId(index as u32)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags! {
    /// Subset of the TypeScript symbol flags, keeping the TypeScript bit values.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolFlags: u32 {
        const FUNCTION_SCOPED_VARIABLE = 1;
        const BLOCK_SCOPED_VARIABLE = 1 << 1;
        const FUNCTION = 1 << 4;
        const CLASS = 1 << 5;
        const INTERFACE = 1 << 6;
        const REGULAR_ENUM = 1 << 8;
        const VALUE_MODULE = 1 << 9;
        const NAMESPACE_MODULE = 1 << 10;
        const TYPE_ALIAS = 1 << 19;
        const ALIAS = 1 << 21;

        const VARIABLE = Self::FUNCTION_SCOPED_VARIABLE.bits() | Self::BLOCK_SCOPED_VARIABLE.bits();
        const TYPE = Self::CLASS.bits() | Self::INTERFACE.bits() | Self::REGULAR_ENUM.bits() | Self::TYPE_ALIAS.bits();
    }
}

/// A module specifier as written, plus the file it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ModuleReference {
    pub specifier: String,
    pub resolved_file_name: Option<String>,
}

impl ModuleReference {
    pub fn new(specifier: impl Into<String>, resolved_file_name: Option<String>) -> Self {
        Self {
            specifier: specifier.into(),
            resolved_file_name,
        }
    }
}

/// What an alias symbol stands for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasTarget {
    /// A symbol declared at the top level of the alias' own file (`export { a as b }`).
    Local(String),
    /// A named export of another module (`import { x } from`, `export { x } from`).
    Export {
        module: ModuleReference,
        name: String,
    },
    /// The module object itself (`import * as ns`, `export * as ns from`).
    Namespace(ModuleReference),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub id: SymbolId,
    pub name: String,
    pub flags: SymbolFlags,
    /// Declarations merged into this symbol, in binding order.
    pub declarations: Vec<DeclarationId>,
    pub alias_target: Option<AliasTarget>,
    /// File whose top-level scope declares the symbol.
    pub parent: Option<FileId>,
    /// Set on module symbols: the source file the symbol represents.
    pub module: Option<FileId>,
}

impl Symbol {
    pub fn new(id: SymbolId, name: impl Into<String>, flags: SymbolFlags) -> Self {
        Self {
            id,
            name: name.into(),
            flags,
            declarations: Vec::new(),
            alias_target: None,
            parent: None,
            module: None,
        }
    }

    pub fn is_alias(&self) -> bool {
        self.flags.contains(SymbolFlags::ALIAS)
    }
}
