//! Declarative field validation.
//!
//! Fields declare rules in their `rules` tag (`rules:"required|oneof:a,b"`).
//! Each rule name is looked up in a [`RuleRegistry`] and evaluated against
//! the flat input map and the field's live value.

mod engine;
mod registry;
pub mod rules;

pub use engine::validate;
pub use registry::{RuleFn, RuleRegistry, Violations};
