mod arguments;
mod core;
mod declaration;

pub use self::arguments::*;
pub use self::core::*;
pub use self::declaration::*;
