mod kind;
mod value;

use std::collections::BTreeMap;

pub use kind::Kind;
pub use value::Value;

/// Flat map of candidate inputs, keyed by field name, tag value, FQN or
/// environment-style key.
pub type Inputs = BTreeMap<String, Value>;
