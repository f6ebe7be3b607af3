//! Built-in validation rules.

use super::Violations;
use crate::binding::lookup;
use crate::record::Slot;
use crate::types::{Inputs, Value};

/// Name and violation code of the `required` rule.
pub const REQUIRED: &str = "required";

/// Fails when the field has no usable input, no default and a zero value.
///
/// A string input that trims to empty only counts when a default fills it.
pub fn required(
    field: &str,
    inputs: &Inputs,
    default: &str,
    value: &dyn Slot,
    _args: &[String],
) -> Violations {
    let missing = match lookup(inputs, field) {
        None | Some(Value::Null) => default.is_empty() && value.is_zero(),
        Some(Value::String(s)) => s.trim().is_empty() && default.is_empty(),
        Some(_) => false,
    };

    if missing {
        Violations::from([(field.to_string(), vec![REQUIRED.to_string()])])
    } else {
        Violations::new()
    }
}
