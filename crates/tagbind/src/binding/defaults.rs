use tracing::trace;

use crate::tree::FieldTree;
use crate::types::{Inputs, Kind, Value};

/// Project field defaults into a copy of `inputs`.
///
/// For every field that has a default and no usable input under its exact
/// name, each namespace of `tag_priority` the field declares receives the
/// default under its tag-derived key, unless that key already holds a value.
/// Nested fields use their FQN name and tags. Struct fields are skipped.
///
/// The result lets consumers that only see the input map, such as validation
/// rules or request handlers, observe the same defaults the resolver applies.
pub fn apply_defaults<S: AsRef<str>>(
    tree: &FieldTree,
    inputs: &Inputs,
    tag_priority: &[S],
) -> Inputs {
    let mut projected = inputs.clone();

    for namespace in tag_priority {
        let namespace = namespace.as_ref().to_ascii_lowercase();
        for field in tree.iter() {
            if field.kind == Kind::Struct || !field.has_default() {
                continue;
            }
            let (name, tags) = field.lookup_keys();
            if inputs.get(name).is_some_and(|value| !is_blank(value)) {
                continue;
            }
            let Some(key) = tags.get(&namespace) else {
                continue;
            };
            if projected.get(key).is_some_and(|value| !is_blank(value)) {
                continue;
            }
            trace!(field = name, key = %key, value = %field.default, "projecting default");
            projected.insert(key.clone(), Value::String(field.default.clone()));
        }
    }

    projected
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}
