//! Resolution of field values from a flat input map.

mod defaults;
mod resolver;
mod settings;

pub use defaults::apply_defaults;
pub use resolver::{lookup, resolve, set_fields};
pub use settings::Settings;
