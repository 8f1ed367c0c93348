//! `switchyard` is a command line option parser for Rust.
//!
//! A program declares its options up front, attaches a *value provider* to each, and then queries the parsed values.
//! `switchyard` deliberately keeps the Cli grammar small:
//! * *Declare, parse, query*:
//! Options are declared on an [`ArgumentsBuilder`], which parses the Cli exactly once when built.
//! The resulting [`ArgumentsHandler`] answers typed value lookups via [`ArgumentsHandler::get_value`].
//! * *Validation is collected, not thrown*:
//! Problems with the Cli input (bad numbers, missing files, unknown flags, missing required options) never abort the parse.
//! They are gathered into a single [`ValidationResult`], which the program may inspect or print.
//! * *Configuration mistakes fail fast*:
//! Problems with the declarations themselves (a repeated flag, two default options, an option without a provider) are a [`ConfigError`].
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/launcher.rs")]
//! ```
//!
//! Which generates the following Cli program:
//! ```console
//! $ launcher -v --bogus
//! launcher
//! 0.3.1
//! ---------
//! --command, -c	string	The command to launch.
//! --directory, -d	directory (required)	The directory to launch from.
//! --retries, -r	integer	How many times to retry the launch.
//! --mode, -m	Debug, Release, rel-debug	No description provided.
//! --verbose, -v	true, false	No description provided.
//! --help, -h	true, false	Show this usage and exit.
//!
//! Errors:
//!  * --bogus is not a valid option.
//!  * The option command is a required option.
//!
//! $ launcher build -v -m RELEASE
//! Launching 'build' from './' (Release, 3 retries).
//! ```
//!
//! # Options
//! Declare options via [`ArgumentsBuilder::add`], which returns the [`ArgumentOption`] for fluent configuration.
//! Every option has a long flag `--NAME`, and optionally a short flag `-N`.
//! The long and short flags must be unique across all options.
//!
//! At most one option may be declared via [`ArgumentsBuilder::add_default`].
//! The value of this *default* option may be given as the very first token, without its flag (ex: `launcher build`).
//!
//! ### Value providers
//! Each option needs precisely one [`ValueProvider`].
//! The built-in providers are attached with the `accept_*` methods of [`prelude::Accepts`]:
//! ```console
//! Method            | Provider            | Usage hint       | Invalid input
//! ------------------------------------------------------------------------------------------------------
//! accept_string     | StringProvider      | string           | never
//! accept_integer    | IntegerProvider     | integer          | not a whole number
//! accept_decimal    | DecimalProvider     | decimal          | not a number
//! accept_flag(_or)  | FlagProvider        | true, false      | anything but true/false
//! accept_filename   | FilenameProvider    | filename         | a missing file (when it must exist)
//! accept_directory  | DirectoryProvider   | directory        | a missing directory (when it must exist)
//! accept_enum       | EnumProvider<E>     | the member names | not a member name
//! ```
//!
//! Custom providers implement [`ValueProvider`] and are attached via [`ArgumentOption::add_provider`].
//!
//! ### Defaults
//! Each provider may carry a default.
//! The default is used when the option is absent from the Cli, or when its flag is given without a value.
//! Defaults also steer the parse: when the token after a flag starts with `-` and the provider has a default, that token is left for the next flag.
//! Otherwise, the next token is always taken as the value.
//!
//! ```console
//! Declaration                            | Cli                    | Outcome
//! ------------------------------------------------------------------------------------------------------
//! --flag (accept_flag)                   | --flag --other         | flag = true
//! --flag (accept_flag)                   | --flag false           | flag = false
//! --count (accept_integer(Some(1)))      | --count --other        | count = 1
//! --count (accept_integer(None))         | --count --other        | invalid; --other is taken as the value
//! ```
//!
//! # Cli Semantics
//! * The first token is captured by the default option when it matches no flag, even when it starts with `-`.
//! * Every other token must match a flag; anything else is reported as `TOKEN is not a valid option.`.
//! * Combined short flags (`-abc`), `--key=value`, and repeated options are not supported.
//! A repeated option simply overwrites the earlier value.
//!
//! # Features
//! * `unit_test`: For features that help with unit testing (ex: an in-memory `FileSystem`).
//! * `tracing_debug`: Emit `tracing` debug events while declaring options and parsing.
pub mod derive;
pub use switchyard_builder::*;
