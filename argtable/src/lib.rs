#![deny(
    unsafe_code,
    unused_must_use,
    unreachable_pub,
    rust_2018_idioms,
    missing_docs,
    clippy::pedantic
)]

//! Command-Line Argument Table
//!
//! This crate turns a raw `argv`-style token list into a queryable table of
//! flags, with typed accessors for booleans, strings and integers.
//!
//! # Features
//!
//! - **Single or double dash**: `-FOO` and `--FOO` name the same flag
//! - **Inline values**: `-FOO=value`, split on the first `=`
//! - **Negation**: `-noFOO` resolves `-FOO` to false, `-noFOO=0` to true
//! - **Last wins**: repeated flags keep their full history, the last value resolves
//! - **Typed defaults**: absent flags fall back to the caller's default
//! - **Soft defaults**: install values only where the command line gave none
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use argtable::ArgTable;
//!
//! let table = ArgTable::from_args(["-datadir=/tmp/node", "--port=8333", "-nolisten"]);
//!
//! assert_eq!(table.get_arg("-datadir", "~/.node"), "/tmp/node");
//! assert_eq!(table.get_int_arg("-port", 18333), 8333);
//! assert!(!table.get_bool_arg("-listen", true));
//! assert!(!table.get_bool_arg("-testnet", false));
//! ```
//!
//! ## Negation Precedence
//!
//! A literal flag always beats its `-no` spelling, whichever comes first.
//!
//! ```
//! use argtable::ArgTable;
//!
//! let table = ArgTable::from_args(["-noBEA", "-BEA"]);
//! assert!(table.get_bool_arg("-BEA", false));
//!
//! let table = ArgTable::from_args(["-noBEA=0"]);
//! assert!(table.get_bool_arg("-BEA", false));
//! ```
//!
//! ## Repeated Flags and Soft Defaults
//!
//! ```
//! use argtable::ArgTable;
//!
//! let mut table = ArgTable::from_args(["-connect=10.0.0.1", "-connect=10.0.0.2"]);
//!
//! assert_eq!(table.get_args("-connect"), vec!["10.0.0.1", "10.0.0.2"]);
//! assert_eq!(table.get_arg("-connect", ""), "10.0.0.2");
//!
//! // -connect implies -nolisten unless the user said otherwise
//! if table.has("-connect") {
//!     table.soft_set_bool_arg("-listen", false);
//! }
//! assert!(!table.get_bool_arg("-listen", true));
//! ```
//!
//! ## Telling Invalid Numbers Apart
//!
//! ```
//! use argtable::{ArgTable, ArgsError};
//!
//! let table = ArgTable::from_args(["-maxconnections=lots"]);
//!
//! // Lenient access reads garbage as zero
//! assert_eq!(table.get_int_arg("-maxconnections", 125), 0);
//!
//! // Strict access reports it
//! assert!(matches!(
//!     table.try_get_int_arg("-maxconnections"),
//!     Err(ArgsError::InvalidInteger { .. })
//! ));
//! ```

mod errors;
mod parser;
mod types;
mod value;

pub use errors::{ArgsError, ArgsResult};
pub use parser::parse_args;
pub use types::{ArgEntry, ArgTable, EntrySource};
