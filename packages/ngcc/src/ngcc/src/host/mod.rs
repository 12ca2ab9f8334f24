pub mod decorated_class;
pub mod decorated_file;
pub mod esm2015_host;
pub mod esm5_host;
pub mod ngcc_host;

pub use decorated_class::DecoratedClass;
pub use decorated_file::DecoratedFile;
pub use esm2015_host::Esm2015ReflectionHost;
pub use esm5_host::Esm5ReflectionHost;
pub use ngcc_host::{ClassLike, NgccReflectionHost};
