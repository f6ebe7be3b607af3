use std::collections::BTreeMap;
use std::env;

/// Capture the process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn env_to_map() -> BTreeMap<String, String> {
    env::vars_os()
        .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
