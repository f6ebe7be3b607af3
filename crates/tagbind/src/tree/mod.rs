//! Field tree introspection.
//!
//! A [`FieldTree`] mirrors a record's declared shape: one node per declared
//! field, in declaration order, with struct-typed fields expanded into
//! subtrees. Nodes live in an arena in pre-order, so parent links and child
//! lists are plain indices and a linear walk visits fields depth-first.

mod field;
mod render;

pub use field::{Field, FieldId, FieldPath, Fqn};

use tagbind_semantics::{DEFAULT_TAG, RULES_TAG, TagMap, join_separator, parse_rules, parse_tags};
use tracing::{debug, warn};

use crate::BindError;
use crate::record::{Record, Target};
use crate::types::Kind;

/// An introspected record: an arena of [`Field`] nodes plus the top-level ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldTree {
    nodes: Vec<Field>,
    roots: Vec<FieldId>,
}

/// Build the field tree of the record behind `target`.
///
/// Fails with [`BindError::NotAPointer`] for shared borrows and
/// [`BindError::NotAStruct`] when the target is not a record.
///
/// # Example
///
/// ```
/// use tagbind::{Record, build_tree};
///
/// #[derive(Default, Record)]
/// struct Server {
///     #[tag(r#"env:"HOST" default:"localhost""#)]
///     host: String,
///     port: u16,
/// }
///
/// let mut server = Server::default();
/// let tree = build_tree(&mut server).unwrap();
/// let names: Vec<&str> = tree.iter().map(|f| f.name.as_str()).collect();
/// assert_eq!(names, ["host", "port"]);
/// assert_eq!(tree.iter().next().unwrap().default, "localhost");
/// ```
pub fn build_tree<'a>(target: impl Into<Target<'a>>) -> Result<FieldTree, BindError> {
    match target.into() {
        Target::Shared(_) => Err(BindError::NotAPointer),
        Target::Exclusive(slot) => {
            let kind = slot.kind();
            let record = slot.as_record().ok_or(BindError::NotAStruct { kind })?;
            FieldTree::from_record(record)
        }
    }
}

impl FieldTree {
    /// Introspect a record that is already known to be one.
    ///
    /// Fails with [`BindError::ShapeMismatch`] when the record declares a
    /// field it does not expose through [`Record::field`].
    pub fn from_record(record: &dyn Record) -> Result<Self, BindError> {
        let mut tree = FieldTree::default();
        tree.roots = tree.build_level(record, None, &FieldPath::root())?;
        debug!(fields = tree.nodes.len(), "built field tree");
        Ok(tree)
    }

    fn build_level(
        &mut self,
        record: &dyn Record,
        parent: Option<FieldId>,
        prefix: &FieldPath,
    ) -> Result<Vec<FieldId>, BindError> {
        let mut ids = Vec::new();

        for (index, decl) in record.declared_fields().iter().enumerate() {
            let path = prefix.child(index);
            let slot = record.field(index).ok_or_else(|| BindError::ShapeMismatch {
                field: decl.name.to_string(),
                path: path.to_string(),
            })?;

            let mut tags = parse_tags(decl.tag);
            let default = tags.remove(DEFAULT_TAG).unwrap_or_default();
            let rules = tags
                .remove(RULES_TAG)
                .map(|value| parse_rules(&value))
                .unwrap_or_default();
            let kind = slot.kind();
            if kind == Kind::Struct && !default.is_empty() {
                warn!(field = decl.name, "defaults on struct fields are ignored");
            }

            let fqn = parent.map(|parent| self.qualify(decl.name, &tags, parent));
            let id = FieldId(self.nodes.len());

            self.nodes.push(Field {
                name: decl.name.to_string(),
                kind,
                tags,
                default,
                rules,
                path: path.clone(),
                parent,
                fqn,
                fields: Vec::new(),
            });

            if let Some(nested) = slot.as_record() {
                let children = self.build_level(nested, Some(id), &path)?;
                self.nodes[id.0].fields = children;
            }

            ids.push(id);
        }

        Ok(ids)
    }

    /// Compute the FQN of a field about to be placed under `parent`.
    ///
    /// Walks every ancestor: each contributes its name, and its value for any
    /// namespace the field itself declares. Ancestors never add namespaces.
    fn qualify(&self, name: &str, tags: &TagMap, parent: FieldId) -> Fqn {
        let mut fqn = Fqn {
            name: name.to_string(),
            tags: tags.clone(),
        };

        let mut ancestor = Some(parent);
        while let Some(id) = ancestor {
            let node = &self.nodes[id.0];
            fqn.name = format!("{}.{}", node.name, fqn.name);
            for (namespace, value) in &mut fqn.tags {
                if let Some(outer) = node.tags.get(namespace) {
                    *value = format!("{outer}{}{value}", join_separator(namespace));
                }
            }
            ancestor = node.parent;
        }

        fqn
    }

    /// Top-level field ids, in declaration order.
    pub fn roots(&self) -> &[FieldId] {
        &self.roots
    }

    /// Top-level fields, in declaration order.
    pub fn top_level(&self) -> impl Iterator<Item = &Field> {
        self.roots.iter().map(|id| &self.nodes[id.0])
    }

    pub fn get(&self, id: FieldId) -> &Field {
        &self.nodes[id.0]
    }

    /// Children of a struct field, in declaration order.
    pub fn children(&self, id: FieldId) -> impl Iterator<Item = &Field> {
        self.nodes[id.0].fields.iter().map(|child| &self.nodes[child.0])
    }

    /// Every field, depth-first in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.nodes.iter()
    }

    /// Every field id paired with its node, depth-first.
    pub fn entries(&self) -> impl Iterator<Item = (FieldId, &Field)> {
        self.nodes.iter().enumerate().map(|(i, f)| (FieldId(i), f))
    }

    /// Find a field by its qualified name (`Inner.ComplexFlag`).
    pub fn find(&self, qualified_name: &str) -> Option<&Field> {
        self.nodes
            .iter()
            .find(|field| field.qualified_name() == qualified_name)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
