use std::fs;
use std::path::Path;

use crate::InputError;
use crate::types::Inputs;

/// Read a JSON object from `path` as an input map.
///
/// Nested objects are kept as nested maps, so dotted tag values such as
/// `server.port` resolve through them.
pub fn read_json(path: impl AsRef<Path>) -> Result<Inputs, InputError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })
}
