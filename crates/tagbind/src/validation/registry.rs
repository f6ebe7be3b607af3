//! Registry of named validation rule functions.

use std::collections::BTreeMap;

use super::rules;
use crate::record::Slot;
use crate::types::Inputs;

/// Rule violations keyed by the name they are reported against.
pub type Violations = BTreeMap<String, Vec<String>>;

/// Rule function signature.
///
/// Takes:
/// - `field`: the field's externally visible name (resolved by tag priority)
/// - `inputs`: the full flat input map
/// - `default`: the field's default literal, empty when it has none
/// - `value`: the field's live value
/// - `args`: the rule's arguments from the `rules` tag
///
/// Returns violation codes keyed by field name; an empty map means the rule
/// passed. A rule may report against keys other than `field`.
pub type RuleFn = fn(&str, &Inputs, &str, &dyn Slot, &[String]) -> Violations;

/// Registry for validation rule functions, open for caller-supplied rules.
///
/// [`RuleRegistry::default`] carries the built-in `required` rule;
/// [`RuleRegistry::new`] starts empty.
#[derive(Debug, Clone)]
pub struct RuleRegistry {
    rules: BTreeMap<String, RuleFn>,
}

impl RuleRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            rules: BTreeMap::new(),
        }
    }

    /// Create a registry holding the built-in rules.
    pub fn with_builtins() -> Self {
        Self::new().with(rules::REQUIRED, rules::required)
    }

    /// Register `rule` under `name`, returning the function it replaced.
    pub fn register(&mut self, name: impl Into<String>, rule: RuleFn) -> Option<RuleFn> {
        self.rules.insert(name.into(), rule)
    }

    /// Builder-style [`register`](Self::register).
    pub fn with(mut self, name: impl Into<String>, rule: RuleFn) -> Self {
        self.register(name, rule);
        self
    }

    /// Get a rule function by name.
    pub fn get(&self, name: &str) -> Option<RuleFn> {
        self.rules.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.rules.contains_key(name)
    }

    /// Registered rule names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
