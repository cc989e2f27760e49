//! # Invocation Input
//!
//! [`Input`] is the invocation context presented to a command at run time:
//! its bound arguments and options, keyed by name. It is read-only from the
//! command's perspective and serializes to the structured payload written by
//! the invocation log entry.
//!
//! [`Parameters`] is the raw, unvalidated map a caller hands to a
//! meta-command when dispatching a sub-command. Keys starting with `--` name
//! options (`--quiet`), any other key names an argument (`target`). The map
//! becomes an [`Input`] once it is bound against the target command's
//! [`InputDefinition`](crate::definition::InputDefinition).

use serde::Serialize;
use serde_json::{json, Value};
use std::collections::BTreeMap;

/// Name-to-value mapping used for arguments and options.
pub type ValueMap = BTreeMap<String, Value>;

/// Bound arguments and options of one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Input {
    arguments: ValueMap,
    options: ValueMap,
}

impl Input {
    pub fn new(arguments: ValueMap, options: ValueMap) -> Self {
        Self { arguments, options }
    }

    pub fn arguments(&self) -> &ValueMap {
        &self.arguments
    }

    pub fn options(&self) -> &ValueMap {
        &self.options
    }

    pub fn argument(&self, name: &str) -> Option<&Value> {
        self.arguments.get(name)
    }

    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    /// String value of an argument, if it is set to a string.
    pub fn argument_str(&self, name: &str) -> Option<&str> {
        self.argument(name).and_then(Value::as_str)
    }

    /// String value of an option, if it is set to a string.
    pub fn option_str(&self, name: &str) -> Option<&str> {
        self.option(name).and_then(Value::as_str)
    }

    /// Whether a boolean option is set. Missing or non-boolean values read
    /// as `false`.
    pub fn flag(&self, name: &str) -> bool {
        self.option(name).and_then(Value::as_bool).unwrap_or(false)
    }

    /// Structured log context: `{"input": {"arguments": .., "options": ..}}`.
    pub fn log_context(&self) -> Value {
        json!({
            "input": {
                "arguments": self.arguments,
                "options": self.options,
            }
        })
    }
}

/// Caller-supplied parameters for a sub-invocation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, replacing any previous value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Parameters
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}
