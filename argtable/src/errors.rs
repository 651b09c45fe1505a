//! Error types for argument table operations

use std::ffi::OsString;
use thiserror::Error;

/// Errors returned by the fallible argument table operations
///
/// Building a table and the lenient accessors never fail; only the strict
/// accessors and the process entry point report errors.
#[derive(Debug, Error)]
pub enum ArgsError {
    /// A process argument was not valid UTF-8
    #[error("Argument {0:?} is not valid UTF-8")]
    NonUtf8Argument(OsString),

    /// A flag value could not be read as a base-10 integer
    #[error("Invalid integer value '{value}' for argument '{key}'")]
    InvalidInteger {
        /// The canonical key that was queried
        key: String,
        /// The offending value text
        value: String,
    },
}

/// Result type for argument table operations
pub type ArgsResult<T> = Result<T, ArgsError>;
