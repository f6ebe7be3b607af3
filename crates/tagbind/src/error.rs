//! Error types for field tree construction, resolution and validation.

use std::io;
use std::path::PathBuf;

use strsim::levenshtein;
use thiserror::Error;

use crate::types::Kind;

/// A candidate value could not be converted to a field's kind.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    /// The value's type has no conversion to the target kind.
    #[error("cannot convert {found} to {expected}")]
    Mismatch { expected: Kind, found: &'static str },

    /// A string could not be parsed as the target kind.
    #[error("invalid {expected} literal '{input}'")]
    Parse { expected: Kind, input: String },

    /// An integer does not fit the target width.
    #[error("{value} is out of range for {target}")]
    OutOfRange { value: i64, target: &'static str },

    /// The slot has no setting strategy at all.
    #[error("{kind} fields cannot be assigned")]
    Unsupported { kind: Kind },
}

/// Errors that abort a tree build, a resolution, or a validation pass.
///
/// Rule violations are not errors: validation reports them as data.
#[derive(Debug, Error)]
pub enum BindError {
    /// The target was borrowed immutably, so it cannot be bound.
    #[error("input should be a mutable reference to a record")]
    NotAPointer,

    /// The target is mutable but is not a record.
    #[error("input should reference a record, found a {kind} value")]
    NotAStruct { kind: Kind },

    /// A field declares a rule with no registered function.
    #[error("field '{field}' declares unknown rule '{rule}'{}", did_you_mean(suggestions))]
    UnknownRule {
        field: String,
        rule: String,
        suggestions: Vec<String>,
    },

    /// A resolved input could not be converted to the field's kind.
    #[error("cannot set field '{field}' ({kind}): {source}")]
    TypeCoercion {
        field: String,
        kind: Kind,
        #[source]
        source: CoercionError,
    },

    /// The field's kind has no setting strategy.
    #[error("cannot set field '{field}': unsupported kind {kind}")]
    UnsupportedKind { field: String, kind: Kind },

    /// The field tree was built from a record of a different shape.
    #[error("field '{field}' has no slot at path {path}")]
    ShapeMismatch { field: String, path: String },
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("; did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions for `name` among `available`.
///
/// - distance <= 1 for names of 3 chars or fewer
/// - distance <= 2 for longer names
/// - at most 3 suggestions, closest first
pub fn compute_suggestions<'a>(
    name: &str,
    available: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .into_iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, candidate.to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort();
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}

/// Errors raised while harvesting raw inputs.
#[derive(Debug, Error)]
pub enum InputError {
    /// No input group holds the requested name.
    #[error("no input named '{name}'")]
    NotFound { name: String },

    /// The input exists but is not an integer.
    #[error("input '{name}' is not an integer: '{value}'")]
    NotInteger { name: String, value: String },

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
