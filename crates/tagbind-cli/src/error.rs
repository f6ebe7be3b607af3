//! Errors surfaced by CLI commands.

use std::path::PathBuf;

use miette::Diagnostic;
use tagbind::{BindError, InputError};
use thiserror::Error;

/// A command failure, rendered through miette.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(code(tagbind::bind))]
    Bind(#[from] BindError),

    #[error(transparent)]
    #[diagnostic(code(tagbind::input))]
    Input(#[from] InputError),

    #[error("cannot read settings from {}: {message}", path.display())]
    #[diagnostic(
        code(tagbind::settings),
        help("settings are a JSON object with tag_order, allow_env_override and allow_tag_override")
    )]
    Settings { path: PathBuf, message: String },

    #[error("cannot serialize output: {0}")]
    #[diagnostic(code(tagbind::output))]
    Output(#[from] serde_json::Error),
}
