pub mod src;

pub use src::host::{Decorator, DecoratorIdentifier, Import, ReflectionHost};
pub use src::typescript::TypeScriptReflectionHost;

#[cfg(test)]
mod test;
