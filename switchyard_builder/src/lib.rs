//! Builder module for `switchyard`.
//! See the `switchyard` crate root for full details.
#![deny(missing_docs)]
mod api;
mod error;
mod model;
mod parser;
pub mod prelude;

pub use api::*;
pub use error::*;
pub use model::*;
pub use parser::*;

#[cfg(test)]
#[macro_use]
extern crate assert_matches;
