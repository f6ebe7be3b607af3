//! Validation of a field tree against declared rules.

use tracing::debug;

use super::{RuleRegistry, Violations};
use crate::error::compute_suggestions;
use crate::record::{Record, slot_at};
use crate::tree::FieldTree;
use crate::types::Inputs;
use crate::BindError;

/// Run every declared rule of every field and collect the violations.
///
/// Each field is looked up under the value of the first namespace of
/// `tag_priority` it declares, falling back to its own name. Violations are
/// re-keyed to the field's `message_tag` value when it declares one, and codes
/// for the same key accumulate in rule order.
///
/// Violations are data: only an unregistered rule or a tree that does not
/// match `record` fails the call.
pub fn validate<S: AsRef<str>>(
    registry: &RuleRegistry,
    tree: &FieldTree,
    record: &dyn Record,
    inputs: &Inputs,
    message_tag: &str,
    tag_priority: &[S],
) -> Result<Violations, BindError> {
    let mut violations = Violations::new();

    for field in tree.iter().filter(|field| !field.rules.is_empty()) {
        let name = field.tag_by_priority(tag_priority).unwrap_or(&field.name);
        let value = slot_at(record, field.path.as_slice()).ok_or_else(|| {
            BindError::ShapeMismatch {
                field: field.qualified_name().to_string(),
                path: field.path.to_string(),
            }
        })?;

        for rule in &field.rules {
            let check = registry.get(&rule.name).ok_or_else(|| BindError::UnknownRule {
                field: name.to_string(),
                rule: rule.name.clone(),
                suggestions: compute_suggestions(&rule.name, registry.names()),
            })?;

            for (key, codes) in check(name, inputs, &field.default, value, &rule.args) {
                let key = field.tags.get(message_tag).cloned().unwrap_or(key);
                violations.entry(key).or_default().extend(codes);
            }
        }
    }

    debug!(fields = violations.len(), "validated record");
    Ok(violations)
}
