use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::Serialize;
use tagbind_semantics::{Rule, TagMap};

use crate::types::Kind;

/// Index of a node inside a [`FieldTree`](super::FieldTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FieldId(pub(crate) usize);

impl FieldId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Field offsets from the record root down to a field's storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
pub struct FieldPath(Vec<usize>);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// This path extended by one more field offset.
    pub fn child(&self, index: usize) -> Self {
        let mut offsets = self.0.clone();
        offsets.push(index);
        Self(offsets)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let parts: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", parts.join("."))
    }
}

/// Fully qualified name and tags of a nested field.
///
/// `name` is dot-joined from the outermost ancestor (`Inner.ComplexFlag`).
/// Each tag value is prefixed with the values ancestors declare for the same
/// namespace, joined by `_` for `env` and `.` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Fqn {
    pub name: String,
    pub tags: TagMap,
}

/// One node of an introspected record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Declared identifier (a single segment).
    pub name: String,
    pub kind: Kind,
    /// Parsed tags without the `default` and `rules` namespaces.
    pub tags: TagMap,
    /// Fallback literal; empty when the field declares none.
    pub default: String,
    #[serde(serialize_with = "serialize_rules")]
    pub rules: Vec<Rule>,
    /// Handle to the field's storage inside the record.
    pub path: FieldPath,
    #[serde(skip)]
    pub parent: Option<FieldId>,
    /// Present for nested fields only.
    pub fqn: Option<Fqn>,
    #[serde(skip)]
    pub fields: Vec<FieldId>,
}

impl Field {
    /// Whether the field sits below at least one struct field.
    pub fn is_nested(&self) -> bool {
        self.parent.is_some()
    }

    pub fn has_default(&self) -> bool {
        !self.default.is_empty()
    }

    /// The dotted name for nested fields, the plain name otherwise.
    pub fn qualified_name(&self) -> &str {
        self.fqn.as_ref().map_or(&self.name, |fqn| &fqn.name)
    }

    /// Name and tags used to look the field up in an input map.
    pub fn lookup_keys(&self) -> (&str, &TagMap) {
        match &self.fqn {
            Some(fqn) => (&fqn.name, &fqn.tags),
            None => (&self.name, &self.tags),
        }
    }

    /// Value of the first namespace in `priority` this field declares.
    pub fn tag_by_priority<S: AsRef<str>>(&self, priority: &[S]) -> Option<&str> {
        priority
            .iter()
            .find_map(|namespace| self.tags.get(namespace.as_ref()))
            .map(String::as_str)
    }
}

fn serialize_rules<S: serde::Serializer>(rules: &[Rule], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(rules.iter().map(ToString::to_string))
}
