pub mod host;
pub mod typescript;
pub mod util;
