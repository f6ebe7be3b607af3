//! CLI command implementations.

mod bind;
mod rules;
mod tags;

pub use bind::{run_bind, BindArgs};
pub use rules::{run_rules, RulesArgs};
pub use tags::{run_tags, TagsArgs};
