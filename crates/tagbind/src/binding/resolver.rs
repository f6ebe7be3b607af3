//! Precedence-based value resolution.

use tagbind_semantics::ENV_TAG;
use tracing::{debug, trace};

use super::Settings;
use crate::record::{Record, Slot, Target, slot_at_mut};
use crate::tree::{Field, FieldId, FieldTree};
use crate::types::{Inputs, Kind, Value};
use crate::{BindError, CoercionError};

/// Build the field tree of `target` and resolve it against `inputs`.
pub fn set_fields<'a>(
    target: impl Into<Target<'a>>,
    settings: &Settings,
    inputs: &Inputs,
) -> Result<(), BindError> {
    match target.into() {
        Target::Shared(_) => Err(BindError::NotAPointer),
        Target::Exclusive(slot) => {
            let kind = slot.kind();
            let record = slot.as_record_mut().ok_or(BindError::NotAStruct { kind })?;
            let tree = FieldTree::from_record(record)?;
            resolve(&tree, record, settings, inputs)
        }
    }
}

/// Assign every field of `record` from `inputs`, following `settings`.
///
/// Per field, depth-first:
/// 1. a zero-valued field takes its `default`;
/// 2. an `env` key match is applied and, unless `allow_env_override`, ends
///    the field;
/// 3. the exact field name (the FQN for nested fields) is applied;
/// 4. each namespace of `tag_order` the field declares is tried in order,
///    stopping at the first match unless `allow_tag_override`.
///
/// Struct fields are expanded in place. Missing keys are not errors; the first
/// coercion failure aborts the walk.
pub fn resolve(
    tree: &FieldTree,
    record: &mut dyn Record,
    settings: &Settings,
    inputs: &Inputs,
) -> Result<(), BindError> {
    for &id in tree.roots() {
        resolve_field(tree, id, record, settings, inputs)?;
    }
    debug!(fields = tree.len(), inputs = inputs.len(), "resolved record");
    Ok(())
}

fn resolve_field(
    tree: &FieldTree,
    id: FieldId,
    record: &mut dyn Record,
    settings: &Settings,
    inputs: &Inputs,
) -> Result<(), BindError> {
    let field = tree.get(id);

    if field.kind == Kind::Struct {
        // Records are never assigned wholesale; only their leaves are.
        if let Some(key) = matched_key(field, settings, inputs) {
            trace!(field = field.qualified_name(), key, "ignoring input for struct field");
        }
        for &child in &field.fields {
            resolve_field(tree, child, record, settings, inputs)?;
        }
        return Ok(());
    }

    let mut binding = FieldBinding::open(field, record)?;

    if field.has_default() && binding.is_zero() {
        binding.assign("default", Value::String(field.default.clone()))?;
    }

    let (name, tags) = field.lookup_keys();

    if let Some(key) = tags.get(ENV_TAG)
        && let Some(value) = lookup(inputs, key)
    {
        binding.assign(key, value.clone())?;
        if !settings.allow_env_override {
            return Ok(());
        }
    }

    if let Some(value) = lookup(inputs, name) {
        binding.assign(name, value.clone())?;
    }

    for namespace in &settings.tag_order {
        let Some(key) = tags.get(namespace) else {
            continue;
        };
        if let Some(value) = lookup(inputs, key) {
            binding.assign(key, value.clone())?;
            if !settings.allow_tag_override {
                break;
            }
        }
    }

    Ok(())
}

/// The first input key that would have matched a field, in resolution order.
fn matched_key<'f>(field: &'f Field, settings: &Settings, inputs: &Inputs) -> Option<&'f str> {
    let (name, tags) = field.lookup_keys();
    tags.get(ENV_TAG)
        .map(String::as_str)
        .into_iter()
        .chain(Some(name))
        .chain(
            settings
                .tag_order
                .iter()
                .filter_map(|namespace| tags.get(namespace).map(String::as_str)),
        )
        .find(|key| lookup(inputs, key).is_some())
}

/// A field's slot, opened for assignment.
struct FieldBinding<'f, 'r> {
    field: &'f Field,
    slot: &'r mut dyn Slot,
}

impl<'f, 'r> FieldBinding<'f, 'r> {
    fn open(field: &'f Field, record: &'r mut dyn Record) -> Result<Self, BindError> {
        let slot = slot_at_mut(record, field.path.as_slice()).ok_or_else(|| {
            BindError::ShapeMismatch {
                field: field.qualified_name().to_string(),
                path: field.path.to_string(),
            }
        })?;
        Ok(Self { field, slot })
    }

    fn is_zero(&self) -> bool {
        self.slot.is_zero()
    }

    fn assign(&mut self, source: &str, value: Value) -> Result<(), BindError> {
        trace!(field = self.field.qualified_name(), source, %value, "setting field");
        self.slot.set(value).map_err(|error| match error {
            CoercionError::Unsupported { kind } => BindError::UnsupportedKind {
                field: self.field.qualified_name().to_string(),
                kind,
            },
            other => BindError::TypeCoercion {
                field: self.field.qualified_name().to_string(),
                kind: self.field.kind,
                source: other,
            },
        })
    }
}

/// Look `key` up in `inputs`.
///
/// The key is tried verbatim first. A dotted key that is not present verbatim
/// is followed segment by segment through nested maps, so `server.port`
/// finds `{"server": {"port": 8080}}`.
pub fn lookup<'i>(inputs: &'i Inputs, key: &str) -> Option<&'i Value> {
    if let Some(value) = inputs.get(key) {
        return Some(value);
    }
    if !key.contains('.') {
        return None;
    }

    let mut segments = key.split('.');
    let mut current = inputs.get(segments.next()?)?;
    for segment in segments {
        current = current.as_map()?.get(segment)?;
    }
    Some(current)
}
