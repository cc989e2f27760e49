//! # Configuration Parameters
//!
//! Commands read application metadata (`app.name`, `app.version`) through
//! the [`ConfigProvider`] trait. [`ParameterBag`] is the stock provider: a
//! flat map of dotted keys assembled from three layers, lowest priority
//! first:
//!
//! 1. In-code defaults ([`ParameterBag::with`]).
//! 2. A YAML parameter file ([`ParameterBag::merge_file`]). Nested mappings
//!    are flattened into dotted keys:
//!
//!    ```yaml
//!    app:
//!      name: my-tool
//!      version: 1.2.0
//!    ```
//!
//!    yields `app.name` and `app.version`.
//! 3. Environment overrides ([`ParameterBag::apply_env_overrides`]): for a
//!    prefix `COMMAND_KIT`, the variable `COMMAND_KIT_APP_NAME` overrides
//!    `app.name`. Only keys that already exist can be overridden.

use serde_yaml::Value as YamlValue;
use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::error::{Error, Result};

/// Key of the application name parameter.
pub const APP_NAME: &str = "app.name";

/// Key of the application version parameter.
pub const APP_VERSION: &str = "app.version";

/// Read-only access to configuration parameters.
pub trait ConfigProvider {
    /// Look up a parameter, failing with [`Error::KeyNotFound`] when absent.
    fn get(&self, key: &str) -> Result<String>;
}

/// A flat map of configuration parameters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterBag {
    parameters: BTreeMap<String, String>,
}

impl ParameterBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.parameters.insert(key.into(), value.into());
    }

    pub fn contains(&self, key: &str) -> bool {
        self.parameters.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }

    /// Parse a YAML document into a bag.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let document: YamlValue = serde_yaml::from_str(yaml)?;
        let mut bag = Self::new();
        match document {
            YamlValue::Null => {}
            YamlValue::Mapping(_) => flatten(&mut bag.parameters, "", &document)?,
            _ => {
                return Err(Error::ConfigParse {
                    message: "Parameter file must contain a mapping at the top level".to_string(),
                    hint: Some("Write parameters as `key: value` pairs".to_string()),
                })
            }
        }
        Ok(bag)
    }

    /// Load a YAML parameter file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Merge a YAML parameter file over the current values.
    pub fn merge_file(&mut self, path: &Path) -> Result<()> {
        let loaded = Self::from_file(path)?;
        log::debug!("Loaded {} parameters from {}", loaded.parameters.len(), path.display());
        self.parameters.extend(loaded.parameters);
        Ok(())
    }

    /// Override existing keys from `{PREFIX}_{KEY}` environment variables.
    ///
    /// The key is upper-cased with `.` and `-` replaced by `_`.
    pub fn apply_env_overrides(&mut self, prefix: &str) {
        for (key, value) in self.parameters.iter_mut() {
            if let Ok(overridden) = env::var(env_var_name(prefix, key)) {
                *value = overridden;
            }
        }
    }
}

impl ConfigProvider for ParameterBag {
    fn get(&self, key: &str) -> Result<String> {
        self.parameters
            .get(key)
            .cloned()
            .ok_or_else(|| Error::KeyNotFound {
                key: key.to_string(),
            })
    }
}

fn env_var_name(prefix: &str, key: &str) -> String {
    let suffix: String = key
        .chars()
        .map(|c| match c {
            '.' | '-' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect();
    format!("{}_{}", prefix, suffix)
}

fn flatten(target: &mut BTreeMap<String, String>, prefix: &str, value: &YamlValue) -> Result<()> {
    let scalar = match value {
        YamlValue::Mapping(mapping) => {
            for (key, nested) in mapping {
                let key = scalar_to_string(key).ok_or_else(|| Error::ConfigParse {
                    message: format!("Unsupported key under \"{}\"", prefix),
                    hint: Some("Keys must be strings, numbers or booleans".to_string()),
                })?;
                let full_key = if prefix.is_empty() {
                    key
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten(target, &full_key, nested)?;
            }
            return Ok(());
        }
        YamlValue::Sequence(_) => {
            return Err(Error::ConfigParse {
                message: format!("Parameter \"{}\" is a list", prefix),
                hint: Some("Parameters must be scalar values or nested mappings".to_string()),
            })
        }
        YamlValue::Tagged(tagged) => return flatten(target, prefix, &tagged.value),
        YamlValue::Null => String::new(),
        other => scalar_to_string(other).unwrap_or_default(),
    };
    target.insert(prefix.to_string(), scalar);
    Ok(())
}

fn scalar_to_string(value: &YamlValue) -> Option<String> {
    match value {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
