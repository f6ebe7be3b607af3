//! Shared tag grammar used by both the runtime binder and the derive macro.
//!
//! This crate owns the tag string scanner and the `rules` grammar so that
//! `#[derive(Record)]` and the runtime field tree agree on what a tag string
//! means.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use winnow::combinator::{alt, delimited, repeat};
use winnow::prelude::*;
use winnow::token::{none_of, take_till};

/// Tag namespace holding a field's fallback literal.
pub const DEFAULT_TAG: &str = "default";

/// Tag namespace holding a field's pipe-separated rule list.
pub const RULES_TAG: &str = "rules";

/// Tag namespace holding an environment-style key.
pub const ENV_TAG: &str = "env";

/// Parsed tags, keyed by namespace.
pub type TagMap = BTreeMap<String, String>;

/// Result of scanning a raw tag string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagScan {
    /// Every complete `name:"value"` pair, later duplicates overwriting earlier ones.
    pub tags: TagMap,
    /// Trailing text that never formed a complete pair, such as an
    /// unterminated quoted value.
    pub dropped: Option<String>,
}

/// Scan a tag string such as `arg:"cwd" short:"c" help:"Current directory"`.
///
/// A `\"` inside a value is a literal quote. A `:` inside a value is kept
/// verbatim, so URLs survive. Scanning stops at the first incomplete pair and
/// reports the remainder in [`TagScan::dropped`].
pub fn scan_tags(input: &str) -> TagScan {
    let mut scan = TagScan::default();
    let mut rest = input;

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        let before = rest;
        match tag_pair.parse_next(&mut rest) {
            Ok((name, value)) => {
                scan.tags.insert(name, value);
            }
            Err(_) => {
                scan.dropped = Some(before.trim().to_string());
                break;
            }
        }
    }

    scan
}

/// Parse a tag string into a map, silently dropping an incomplete trailing pair.
pub fn parse_tags(input: &str) -> TagMap {
    scan_tags(input).tags
}

/// Parse a single `name:"value"` pair.
fn tag_pair(input: &mut &str) -> ModalResult<(String, String)> {
    let name = take_till(0.., ':').parse_next(input)?;
    ':'.parse_next(input)?;
    // Anything between the colon and the opening quote is ignored.
    take_till(0.., '"').void().parse_next(input)?;
    let value = quoted_value.parse_next(input)?;
    Ok((name.trim().to_string(), value.trim().to_string()))
}

/// Parse a double-quoted value, unescaping `\"`.
fn quoted_value(input: &mut &str) -> ModalResult<String> {
    delimited('"', repeat(0.., value_char), '"').parse_next(input)
}

fn value_char(input: &mut &str) -> ModalResult<char> {
    alt(("\\\"".value('"'), none_of('"'))).parse_next(input)
}

/// A single validation rule invocation, e.g. `oneof:debug,info`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rule {
    pub name: String,
    pub args: Vec<String>,
}

impl Rule {
    /// Create a rule with no arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// Create a rule with arguments.
    pub fn with_args<I, S>(name: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if self.args.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}:{}", self.name, self.args.join(","))
        }
    }
}

/// Parse a `rules` tag value: `required|oneof:a,b|min:3`.
///
/// Rules are separated by `|`, the name is split from its arguments at the
/// first `:`, and arguments are separated by `,`. Empty segments are skipped.
pub fn parse_rules(value: &str) -> Vec<Rule> {
    value
        .split('|')
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .map(|raw| match raw.split_once(':') {
            Some((name, args)) => Rule {
                name: name.trim().to_string(),
                args: args.split(',').map(|a| a.trim().to_string()).collect(),
            },
            None => Rule::new(raw),
        })
        .collect()
}

/// Separator used when joining a namespace's values across nesting levels.
///
/// Environment keys join with `_` (`INNER_COMPLEX_FLAG`), every other
/// namespace joins with `.` (`inner.complex-flag`).
pub fn join_separator(namespace: &str) -> &'static str {
    if namespace == ENV_TAG { "_" } else { "." }
}

/// Returns true for namespaces that are hoisted out of a field's tag map.
pub fn is_reserved(namespace: &str) -> bool {
    namespace == DEFAULT_TAG || namespace == RULES_TAG
}
