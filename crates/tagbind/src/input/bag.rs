use std::collections::BTreeMap;
use std::env;

use super::{args_to_map, env_to_map};
use crate::InputError;
use crate::record::parse_bool;
use crate::types::{Inputs, Value};

/// Raw string inputs grouped by the surface they were harvested from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bag {
    pub data: BTreeMap<String, String>,
    pub env: BTreeMap<String, String>,
    pub args: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub request: BTreeMap<String, String>,
}

impl Bag {
    /// A bag holding the process environment and command-line arguments.
    pub fn from_process() -> Self {
        Self {
            env: env_to_map(),
            args: args_to_map(env::args().skip(1)),
            ..Self::default()
        }
    }

    /// Flatten every group into one input map.
    ///
    /// Environment variables appear verbatim and again as `env.<lowercase>`;
    /// data entries appear as `data.<key>`. Arguments, headers and request
    /// parameters appear verbatim, in that order, later groups overwriting
    /// earlier ones.
    pub fn collect(&self) -> Inputs {
        let mut inputs = Inputs::new();
        for (key, value) in &self.env {
            inputs.insert(key.clone(), Value::from(value.as_str()));
            inputs.insert(
                format!("env.{}", key.to_lowercase()),
                Value::from(value.as_str()),
            );
        }
        for (key, value) in &self.data {
            inputs.insert(format!("data.{key}"), Value::from(value.as_str()));
        }
        for group in [&self.args, &self.headers, &self.request] {
            for (key, value) in group {
                inputs.insert(key.clone(), Value::from(value.as_str()));
            }
        }
        inputs
    }

    /// Look up a raw value by name.
    pub fn get_string(&self, name: &str) -> Result<String, InputError> {
        self.lookup_value(name)
            .map(ToString::to_string)
            .ok_or_else(|| InputError::NotFound {
                name: name.to_string(),
            })
    }

    /// Look up a value by name and parse it as an integer.
    pub fn get_int(&self, name: &str) -> Result<i64, InputError> {
        let value = self.get_string(name)?;
        value.trim().parse().map_err(|_| InputError::NotInteger {
            name: name.to_string(),
            value,
        })
    }

    /// Look up a value by name and read it as a boolean (`true`, `yes`, `1`).
    pub fn get_bool(&self, name: &str) -> Result<bool, InputError> {
        self.get_string(name).map(|value| parse_bool(&value))
    }

    /// Exact lookup, then lowercased.
    fn lookup_value(&self, name: &str) -> Option<&str> {
        self.lookup(name)
            .or_else(|| self.lookup(&name.to_lowercase()))
    }

    fn lookup(&self, name: &str) -> Option<&str> {
        [
            &self.args,
            &self.data,
            &self.env,
            &self.headers,
            &self.request,
        ]
        .into_iter()
        .find_map(|group| group.get(name))
        .map(String::as_str)
    }
}
