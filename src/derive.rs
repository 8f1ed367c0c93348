//! Derive Api for `switchyard` enums.
//!
//! Use `#[derive(ArgEnum)]` on a fieldless enum to select its members by name on the Cli, via [`Accepts::accept_enum`](crate::prelude::Accepts::accept_enum).
//! Names are matched ignoring case.
//! Each name defaults to the member's identifier, and may be overridden via `#[switchyard(name = "...")]`.
//!
//! ```
//! use switchyard::{derive::*, prelude::*, ArgumentsBuilder};
//!
//! #[derive(Debug, Default, PartialEq, ArgEnum)]
//! enum Colour {
//!     #[default]
//!     Red,
//!     #[switchyard(name = "sky-blue")]
//!     Blue,
//! }
//!
//! let mut builder = ArgumentsBuilder::new();
//! builder.set_arguments(&["--colour", "SKY-BLUE"]);
//! builder.add("colour", None).unwrap().accept_enum(Some(Colour::Red));
//! let handler = builder.build().unwrap();
//!
//! assert_eq!(handler.get_value::<Colour>("colour"), Colour::Blue);
//! assert_eq!(Colour::members(), &["Red", "sky-blue"]);
//! ```
//!
//! The derive also implements [`FromValue`](crate::FromValue), so the member is retrievable via `get_value`.
pub use switchyard_derive::ArgEnum;
