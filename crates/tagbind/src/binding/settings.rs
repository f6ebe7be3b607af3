use bon::Builder;
use serde::{Deserialize, Serialize};

/// Precedence policy for the value resolver.
///
/// Settings deserialize from JSON or YAML with every field optional:
///
/// ```
/// use tagbind::Settings;
///
/// let settings: Settings =
///     serde_json::from_str(r#"{ "tag_order": ["arg", "short"], "allow_env_override": true }"#)
///         .unwrap();
/// assert_eq!(settings.tag_order, ["arg", "short"]);
/// assert!(settings.allow_env_override);
/// assert!(!settings.allow_tag_override);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Tag namespaces consulted after the exact field name, in priority order.
    #[builder(default)]
    pub tag_order: Vec<String>,

    /// Keep consulting field names and tags after an `env` key matched.
    #[builder(default)]
    pub allow_env_override: bool,

    /// Let every matching tag in `tag_order` overwrite earlier matches
    /// instead of stopping at the first one.
    #[builder(default)]
    pub allow_tag_override: bool,
}
