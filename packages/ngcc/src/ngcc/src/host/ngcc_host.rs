use ts::{ClassNode, Declaration, FunctionNode, Statement};

use crate::ngtsc::reflection::ReflectionHost;

/// The class a declaration stands for, in one of the shapes bundles emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClassLike<'a> {
    /// `class X {}`, or a class expression assigned to a variable.
    Class(&'a ClassNode),
    /// ES5 class: the IIFE wrapping the constructor function and its static setup.
    Downleveled {
        constructor: &'a FunctionNode,
        body: &'a [Statement],
    },
}

/// Reflection over the formats packages are distributed in.
pub trait NgccReflectionHost<'a>: ReflectionHost<'a> {
    /// Looks through the format's class emit to the class a declaration defines.
    fn get_class_declaration(&self, declaration: &'a Declaration) -> Option<ClassLike<'a>>;
}
