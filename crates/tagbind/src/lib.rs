extern crate self as tagbind;

pub mod binder;
pub mod binding;
pub mod error;
pub mod input;
pub mod record;
pub mod tree;
pub mod types;
pub mod validation;

pub use binder::{Binder, DEFAULT_TAGS};
pub use binding::{Settings, apply_defaults, lookup, resolve, set_fields};
pub use error::{BindError, CoercionError, InputError, compute_suggestions};
pub use record::{FieldDecl, FromValue, Record, Slot, Target};
pub use tree::{Field, FieldId, FieldPath, FieldTree, Fqn, build_tree};
pub use types::{Inputs, Kind, Value};
pub use validation::{RuleFn, RuleRegistry, Violations, validate};

pub use tagbind_semantics::{
    DEFAULT_TAG, ENV_TAG, RULES_TAG, Rule, TagMap, TagScan, parse_rules, parse_tags, scan_tags,
};

// Re-export the Record derive macro
pub use tagbind_macros::Record;

/// Creates an [`Inputs`] map from key-value pairs.
///
/// Values are converted via `Into<Value>`, so strings, numbers, booleans,
/// vectors and nested maps can be passed directly.
///
/// # Example
///
/// ```
/// use tagbind::{Value, inputs};
///
/// let inputs = inputs! { "port" => 8080, "host" => "localhost" };
/// assert_eq!(inputs.len(), 2);
/// assert_eq!(inputs["port"], Value::Int(8080));
/// assert_eq!(inputs["host"].as_str(), Some("localhost"));
/// ```
#[macro_export]
macro_rules! inputs {
    {} => {
        $crate::Inputs::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::Inputs::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::Value>::into($value));
            )+
            map
        }
    };
}
