use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

/// Semantic type of a record field.
///
/// The kind decides how a candidate input is coerced when assigned and what
/// counts as the field's zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    String,
    Int,
    Float,
    Bool,
    Slice,
    Map,
    /// A nested record; expanded into a subtree rather than assigned.
    Struct,
    /// A dynamically typed slot that accepts any [`Value`](crate::Value).
    Any,
    /// A kind with no setting strategy.
    Other,
}

impl Kind {
    /// Lowercase name used in diagnostics and tree dumps.
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::String => "string",
            Kind::Int => "int",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Slice => "slice",
            Kind::Map => "map",
            Kind::Struct => "struct",
            Kind::Any => "any",
            Kind::Other => "other",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}
