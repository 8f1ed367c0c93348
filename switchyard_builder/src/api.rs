mod convert;
mod core;
mod option;
mod provider;

pub use self::core::*;
pub use convert::*;
pub use option::*;
pub use provider::*;
