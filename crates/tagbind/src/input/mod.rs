//! Harvesting of raw inputs into a flat input map.
//!
//! These helpers feed the binder: they turn the process environment,
//! command-line arguments and JSON documents into [`Inputs`](crate::Inputs).

mod args;
mod bag;
mod env;
mod file;

pub use args::args_to_map;
pub use bag::Bag;
pub use env::env_to_map;
pub use file::read_json;
