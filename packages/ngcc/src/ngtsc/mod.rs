//! Pieces of the Angular TypeScript compiler (ngtsc) shared with ngcc.

pub mod logging;
pub mod reflection;
