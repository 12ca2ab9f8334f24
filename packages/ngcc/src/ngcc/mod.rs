//! Angular Compatibility Compiler (ngcc)
//!
//! Corresponds to packages/compiler-cli/src/ngcc

pub mod src;

pub use src::{config, host, parsing};

#[cfg(test)]
mod test;
