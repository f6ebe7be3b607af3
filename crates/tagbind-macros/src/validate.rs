//! Compile-time checks on `#[tag]` strings.
//!
//! Performs 3 checks per tagged field:
//! 1. Every pair is complete (`name:"value"` with a closing quote)
//! 2. Every rule in a `rules` value has a name
//! 3. Namespaces one edit away from a reserved namespace are flagged
//!
//! Errors are reported against the tag literal.

use strsim::levenshtein;
use tagbind_semantics::{DEFAULT_TAG, RULES_TAG, is_reserved, parse_rules, scan_tags};

use crate::input::{FieldInput, RecordInput};

const RESERVED: &[&str] = &[DEFAULT_TAG, RULES_TAG];

/// Check every tagged field of `input`, combining all errors.
pub fn validate(input: &RecordInput) -> syn::Result<()> {
    let mut errors: Option<syn::Error> = None;

    for field in input.fields.iter().filter(|f| f.tag.is_some()) {
        if let Err(e) = validate_field(field) {
            match &mut errors {
                Some(existing) => existing.combine(e),
                None => errors = Some(e),
            }
        }
    }

    errors.map_or(Ok(()), Err)
}

fn validate_field(field: &FieldInput) -> syn::Result<()> {
    let span = field.tag_span();
    let scan = scan_tags(&field.tag_value());

    if let Some(dropped) = &scan.dropped {
        return Err(syn::Error::new(
            span,
            format!(
                "incomplete tag pair `{dropped}` on field '{}'; tag values must be double-quoted",
                field.name
            ),
        ));
    }

    for namespace in scan.tags.keys() {
        if namespace.is_empty() {
            return Err(syn::Error::new(
                span,
                format!("tag pair without a namespace on field '{}'", field.name),
            ));
        }
        if let Some(reserved) = misspelled_reserved(namespace) {
            return Err(syn::Error::new(
                span,
                format!(
                    "unknown tag namespace '{namespace}' on field '{}'; did you mean '{reserved}'?",
                    field.name
                ),
            ));
        }
    }

    if let Some(rules) = scan.tags.get(RULES_TAG) {
        for rule in parse_rules(rules) {
            if rule.name.is_empty() {
                return Err(syn::Error::new(
                    span,
                    format!("empty rule name in '{rules}' on field '{}'", field.name),
                ));
            }
        }
    }

    Ok(())
}

/// The reserved namespace `namespace` is one edit away from, if any.
fn misspelled_reserved(namespace: &str) -> Option<&'static str> {
    if is_reserved(namespace) {
        return None;
    }
    RESERVED
        .iter()
        .copied()
        .find(|reserved| levenshtein(namespace, reserved) == 1)
}
