//! One-stop validation and binding with a fixed tag policy.

use bon::Builder;

use crate::binding::{Settings, set_fields};
use crate::record::{Record, Target};
use crate::tree::FieldTree;
use crate::types::Inputs;
use crate::validation::{RuleRegistry, Violations, validate};
use crate::BindError;

/// Tag namespaces consulted by default, in priority order.
pub const DEFAULT_TAGS: &[&str] = &["arg", "short", "env", "json", "yaml"];

/// Validates and binds records against a rule registry and tag order.
///
/// # Example
///
/// ```
/// use tagbind::{Binder, Record, inputs};
///
/// #[derive(Debug, Default, Record)]
/// struct Example {
///     #[tag(r#"json:"name" rules:"required""#)]
///     name: String,
///     #[tag(r#"json:"age" rules:"required""#)]
///     age: i64,
/// }
///
/// let binder = Binder::default();
/// let mut example = Example::default();
///
/// let violations = binder
///     .bind(&mut example, &inputs! { "name" => "Jane Doe", "age" => "25" })
///     .unwrap();
/// assert!(violations.is_empty());
/// assert_eq!(example.name, "Jane Doe");
/// assert_eq!(example.age, 25);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Binder {
    /// Rules available to `rules` tags.
    #[builder(default)]
    rules: RuleRegistry,

    /// Namespace whose value violations are reported under.
    #[builder(default = "json".to_string(), into)]
    message_tag: String,

    /// Tag namespaces, in priority order, for both lookup and validation.
    #[builder(default = DEFAULT_TAGS.iter().map(ToString::to_string).collect())]
    tags: Vec<String>,
}

impl Default for Binder {
    fn default() -> Self {
        Binder::builder().build()
    }
}

impl Binder {
    /// Resolution settings: this binder's tag order, both overrides off.
    pub fn settings(&self) -> Settings {
        Settings::builder().tag_order(self.tags.clone()).build()
    }

    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Validate the record behind `target` against `inputs`.
    pub fn validate<'a>(
        &self,
        target: impl Into<Target<'a>>,
        inputs: &Inputs,
    ) -> Result<Violations, BindError> {
        let Target::Exclusive(slot) = target.into() else {
            return Err(BindError::NotAPointer);
        };
        let kind = slot.kind();
        let record = slot.as_record().ok_or(BindError::NotAStruct { kind })?;
        let tree = FieldTree::from_record(record)?;
        validate(
            &self.rules,
            &tree,
            record,
            inputs,
            &self.message_tag,
            &self.tags,
        )
    }

    /// Resolve the record behind `target` from `inputs`.
    pub fn set<'a>(&self, target: impl Into<Target<'a>>, inputs: &Inputs) -> Result<(), BindError> {
        set_fields(target, &self.settings(), inputs)
    }

    /// Validate `record`, then resolve it when there are no violations.
    ///
    /// Returns the violations; the record is untouched unless they are empty.
    pub fn bind<R: Record>(&self, record: &mut R, inputs: &Inputs) -> Result<Violations, BindError> {
        let violations = self.validate(&mut *record, inputs)?;
        if violations.is_empty() {
            self.set(record, inputs)?;
        }
        Ok(violations)
    }
}
