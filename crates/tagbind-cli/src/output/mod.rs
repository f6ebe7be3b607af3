//! Output formatting for CLI commands.

pub mod diagnostic;
pub mod table;

pub use diagnostic::TagDiagnostic;
