//! Parser turning raw command-line tokens into an [`ArgTable`]

use crate::types::{ArgEntry, ArgTable};

/// Prefix marking a negated flag name (`-noFOO`)
const NEGATION_PREFIX: &str = "no";

/// Build an argument table from command-line arguments
///
/// The program name must already be stripped. Every token starting with
/// `-` or `--` is recorded under its canonical single-dash key, split on the
/// first `=` into name and value. Tokens without a leading dash are
/// positional and ignored; `-FOO value` is a bare `-FOO` followed by an
/// ignored `value`.
///
/// After all tokens are recorded, each `-noX` flag makes `-X` resolvable
/// with the inverted boolean, unless `-X` itself was given, in which case
/// the literal `-X` wins regardless of order.
///
/// Parsing never fails.
///
/// # Examples
///
/// ```
/// use argtable::parse_args;
///
/// let args = vec![
///     "--BEA=verbose".to_string(),
///     "-bar=1".to_string(),
///     "positional".to_string(),
///     "-nodaemon".to_string(),
/// ];
///
/// let table = parse_args(&args);
/// assert_eq!(table.get_arg("-BEA", ""), "verbose");
/// assert_eq!(table.get_int_arg("-bar", 0), 1);
/// assert!(!table.get_bool_arg("-daemon", true));
/// assert!(!table.has("positional"));
/// ```
#[must_use]
pub fn parse_args(args: &[String]) -> ArgTable {
    let mut table = ArgTable::new();

    for (position, arg) in args.iter().enumerate() {
        let Some((key, value)) = split_flag(arg) else {
            tracing::debug!(position, arg = %arg, "skipping positional argument");
            continue;
        };
        tracing::trace!(position, key = %key, value = ?value, "recording argument");
        table.push(key, ArgEntry::new_command_line(value, position));
    }

    fold_negations(&mut table);
    table
}

/// Split a flag token into its canonical key and optional value
///
/// Returns `None` for tokens not starting with a dash.
fn split_flag(arg: &str) -> Option<(String, Option<&str>)> {
    let body = arg.strip_prefix('-')?;
    let body = body.strip_prefix('-').unwrap_or(body);

    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };
    Some((format!("-{name}"), value))
}

/// Fold every `-noX` history into `-X`
///
/// Negations only populate `-X` when no literal `-X` exists, so a literal
/// flag always takes precedence. Among negations, order is preserved and the
/// last one resolves. Only one level is folded: `-nonoX` yields `-noX` but
/// never reaches `-X`.
fn fold_negations(table: &mut ArgTable) {
    let folded: Vec<(String, Vec<ArgEntry>)> = table
        .entries
        .iter()
        .filter_map(|(key, history)| {
            let name = key.strip_prefix('-')?.strip_prefix(NEGATION_PREFIX)?;
            if name.is_empty() {
                return None;
            }
            let target = format!("-{name}");
            if table.has(&target) {
                tracing::debug!(key = %key, target = %target, "negation overridden by literal flag");
                return None;
            }
            Some((target, history.iter().map(ArgEntry::new_negation).collect()))
        })
        .collect();

    for (target, history) in folded {
        tracing::debug!(target = %target, count = history.len(), "folding negated argument");
        for entry in history {
            table.push(target.clone(), entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntrySource;

    fn args(line: &str) -> Vec<String> {
        line.split_whitespace().map(str::to_string).collect()
    }

    #[test]
    fn test_split_single_dash() {
        assert_eq!(split_flag("-BEA"), Some(("-BEA".to_string(), None)));
        assert_eq!(
            split_flag("-BEA=11"),
            Some(("-BEA".to_string(), Some("11")))
        );
    }

    #[test]
    fn test_split_double_dash() {
        assert_eq!(split_flag("--BEA"), Some(("-BEA".to_string(), None)));
        assert_eq!(
            split_flag("--BEA=verbose"),
            Some(("-BEA".to_string(), Some("verbose")))
        );
    }

    #[test]
    fn test_split_empty_value() {
        assert_eq!(split_flag("-BEA="), Some(("-BEA".to_string(), Some(""))));
    }

    #[test]
    fn test_split_value_containing_equals() {
        assert_eq!(
            split_flag("-rpcauth=user=pass"),
            Some(("-rpcauth".to_string(), Some("user=pass")))
        );
    }

    #[test]
    fn test_split_edge_tokens() {
        assert_eq!(split_flag("positional"), None);
        assert_eq!(split_flag(""), None);
        assert_eq!(split_flag("-"), Some(("-".to_string(), None)));
        assert_eq!(split_flag("--"), Some(("-".to_string(), None)));
        assert_eq!(split_flag("---x"), Some(("--x".to_string(), None)));
        assert_eq!(split_flag("-=1"), Some(("-".to_string(), Some("1"))));
    }

    #[test]
    fn test_positions_recorded() {
        let table = parse_args(&args("pos -a -b=2"));
        assert_eq!(table.get_entry("-a").and_then(|e| e.position), Some(1));
        assert_eq!(table.get_entry("-b").and_then(|e| e.position), Some(2));
    }

    #[test]
    fn test_negation_fold() {
        let table = parse_args(&args("-noBEA"));
        let entry = table.get_entry("-BEA").unwrap();
        assert_eq!(entry.source, EntrySource::Negation);
        assert_eq!(entry.value, "0");
        assert!(table.has("-noBEA"));
    }

    #[test]
    fn test_negation_history_last_wins() {
        let table = parse_args(&args("-noBEA=0 -noBEA"));
        assert_eq!(table.get_args("-BEA"), vec!["1", "0"]);
        assert!(!table.get_bool_arg("-BEA", true));
    }

    #[test]
    fn test_literal_beats_negation() {
        let table = parse_args(&args("-noBEA -BEA=0"));
        assert_eq!(table.get_args("-BEA"), vec!["0"]);
        assert_eq!(
            table.get_entry("-BEA").map(|e| e.source),
            Some(EntrySource::CommandLine)
        );
    }

    #[test]
    fn test_double_negation_folds_one_level() {
        let table = parse_args(&args("-nonoZ"));
        assert_eq!(table.get_args("-noZ"), vec!["0"]);
        assert!(!table.has("-Z"));
        assert!(table.get_bool_arg("-Z", true));
        assert!(!table.get_bool_arg("-Z", false));
    }

    #[test]
    fn test_bare_no_is_not_a_negation() {
        let table = parse_args(&args("-no"));
        assert!(table.has("-no"));
        assert_eq!(table.len(), 1);
    }
}
