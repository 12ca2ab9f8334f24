#![deny(clippy::all)]

/**
 * Angular Compatibility Compiler (ngcc) - Rust Implementation
 *
 * Finds the decorated classes exported by Angular package bundles
 */
pub mod ngcc;
pub mod ngtsc;

/// Crate version
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
