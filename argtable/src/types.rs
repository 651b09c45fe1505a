//! Type definitions for the argument table and its entries

use std::collections::BTreeMap;
use std::ffi::OsString;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{ArgsError, ArgsResult},
    value::{is_truthy, parse_int_lenient, parse_int_strict},
};

/// Where an entry in the table came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntrySource {
    /// A literal flag on the command line
    CommandLine,
    /// Synthesized for `-X` from a `-noX` flag
    Negation,
    /// Installed by [`ArgTable::soft_set_arg`]
    SoftSet,
}

/// One observed occurrence of a flag
///
/// # Examples
///
/// - `-BEA` gives an empty value with `has_value == false`
/// - `-BEA=` gives an empty value with `has_value == true`
/// - `-BEA=11` gives the value `11`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArgEntry {
    /// Value text after the first `=`, empty when none was given
    pub value: String,
    /// Whether the token carried an explicit `=`
    pub has_value: bool,
    /// Index of the originating token in the input, `None` for soft-set entries
    pub position: Option<usize>,
    /// How the entry was produced
    pub source: EntrySource,
}

impl ArgEntry {
    /// Create an entry for a literal command-line flag
    #[must_use]
    pub fn new_command_line(value: Option<&str>, position: usize) -> Self {
        Self {
            value: value.unwrap_or_default().to_string(),
            has_value: value.is_some(),
            position: Some(position),
            source: EntrySource::CommandLine,
        }
    }

    /// Create the entry a `-noX` flag contributes to `-X`
    #[must_use]
    pub fn new_negation(negated: &ArgEntry) -> Self {
        let value = if negated.as_bool() { "0" } else { "1" };
        Self {
            value: value.to_string(),
            has_value: true,
            position: negated.position,
            source: EntrySource::Negation,
        }
    }

    /// Create a programmatic default entry
    #[must_use]
    pub fn new_soft_set(value: &str) -> Self {
        Self {
            value: value.to_string(),
            has_value: true,
            position: None,
            source: EntrySource::SoftSet,
        }
    }

    /// Get the value as a boolean
    ///
    /// Empty values are `true`; otherwise anything not starting with `'0'`.
    #[must_use]
    pub fn as_bool(&self) -> bool {
        is_truthy(&self.value)
    }

    /// Get the value as an integer, reading invalid text as `0`
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        parse_int_lenient(&self.value)
    }

    /// Get the value text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

/// Parsed command-line flags, keyed by canonical name
///
/// Keys are stored with a single leading dash (`-BEA`). Every occurrence of
/// a key is kept in order; scalar accessors resolve to the last one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ArgTable {
    pub(crate) entries: BTreeMap<String, Vec<ArgEntry>>,
}

impl ArgTable {
    /// Create a new empty `ArgTable`
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from command-line arguments, program name excluded
    ///
    /// This is a convenience method that forwards to [`crate::parse_args`].
    ///
    /// # Examples
    ///
    /// ```
    /// use argtable::ArgTable;
    ///
    /// let table = ArgTable::from_args(["-BEA=11", "--bar", "-noquiet"]);
    /// assert_eq!(table.get_int_arg("-BEA", 0), 11);
    /// assert!(table.get_bool_arg("-bar", false));
    /// assert!(!table.get_bool_arg("-quiet", true));
    /// ```
    #[must_use]
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();
        crate::parse_args(&args_vec)
    }

    /// Build a table from the current process's command-line arguments
    ///
    /// The program name is dropped before parsing.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::NonUtf8Argument`] if any argument is not valid UTF-8.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use argtable::ArgTable;
    ///
    /// let table = ArgTable::from_env()?;
    /// let verbose = table.get_bool_arg("-verbose", false);
    /// # Ok::<(), argtable::ArgsError>(())
    /// ```
    pub fn from_env() -> ArgsResult<Self> {
        Self::from_os_args(std::env::args_os().skip(1))
    }

    /// Build a table from OS-encoded arguments, program name excluded
    pub(crate) fn from_os_args<I>(args: I) -> ArgsResult<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let args = args
            .into_iter()
            .map(|arg| arg.into_string().map_err(ArgsError::NonUtf8Argument))
            .collect::<ArgsResult<Vec<String>>>()?;
        Ok(crate::parse_args(&args))
    }

    /// Get a flag as a boolean
    ///
    /// Returns `default` when the flag is absent, `true` when it was given
    /// without a value, and otherwise `true` unless the value starts with `'0'`.
    #[must_use]
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        self.get_entry(key).map_or(default, ArgEntry::as_bool)
    }

    /// Get a flag as a string
    ///
    /// Returns `default` when the flag is absent, else the last value given
    /// (empty for a bare flag).
    #[must_use]
    pub fn get_arg(&self, key: &str, default: &str) -> String {
        self.get_entry(key)
            .map_or(default, ArgEntry::as_str)
            .to_string()
    }

    /// Get a flag as an integer
    ///
    /// Returns `default` when the flag is absent. A present value that is not
    /// a number reads as `0`, not as `default`; use
    /// [`try_get_int_arg`](Self::try_get_int_arg) to tell the two apart.
    #[must_use]
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        self.get_entry(key).map_or(default, ArgEntry::as_i64)
    }

    /// Get a flag as an integer, rejecting malformed values
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::InvalidInteger`] if the last value for `key` is
    /// not a base-10 integer.
    pub fn try_get_int_arg(&self, key: &str) -> ArgsResult<Option<i64>> {
        let Some(entry) = self.get_entry(key) else {
            return Ok(None);
        };
        parse_int_strict(&entry.value)
            .map(Some)
            .ok_or_else(|| ArgsError::InvalidInteger {
                key: key.to_string(),
                value: entry.value.clone(),
            })
    }

    /// Check whether any entry exists for `key`
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.entries.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Get the entry that resolves `key`, i.e. the last one recorded
    #[must_use]
    pub fn get_entry(&self, key: &str) -> Option<&ArgEntry> {
        self.entries.get(key).and_then(|v| v.last())
    }

    /// Get every value recorded for `key`, in order
    #[must_use]
    pub fn get_args(&self, key: &str) -> Vec<&str> {
        self.entries
            .get(key)
            .map(|v| v.iter().map(ArgEntry::as_str).collect())
            .unwrap_or_default()
    }

    /// Install `value` for `key` unless the key is already present
    ///
    /// Returns `true` if the value was installed.
    pub fn soft_set_arg(&mut self, key: &str, value: &str) -> bool {
        if self.has(key) {
            tracing::debug!(key, "soft set skipped, argument already present");
            return false;
        }
        tracing::debug!(key, value, "soft set argument");
        self.entries
            .entry(key.to_string())
            .or_default()
            .push(ArgEntry::new_soft_set(value));
        true
    }

    /// Install a boolean for `key` unless the key is already present
    ///
    /// Returns `true` if the value was installed.
    pub fn soft_set_bool_arg(&mut self, key: &str, value: bool) -> bool {
        self.soft_set_arg(key, if value { "1" } else { "0" })
    }

    /// Iterate over the canonical keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of distinct keys
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no flags were recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn push(&mut self, key: String, entry: ArgEntry) {
        self.entries.entry(key).or_default().push(entry);
    }
}
