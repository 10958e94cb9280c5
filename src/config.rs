use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::capability::{Addressable, Connectable};
use crate::error::ConfigError;
use crate::option::{Configure, with_address, with_max_connections};

/// Keyed, loosely sourced server options.
///
/// Every field is optional: `None` means "leave the target alone", which
/// keeps "not given" apart from "given, and equal to the default".
///
/// JSON form: `{"address": "192.168.0.1:8181", "maxConnections": 5}`.
/// Unknown keys are ignored and a `null` value counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionMap {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_connections: Option<i64>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    pub fn max_connections(mut self, max_connections: i64) -> Self {
        self.max_connections = Some(max_connections);
        self
    }
}

/// One option standing in for everything an [`OptionMap`] carries.
///
/// Applying it sets exactly the attributes present in the map, in the
/// order address, then connection limit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FromMap {
    options: OptionMap,
}

impl FromMap {
    pub fn options(&self) -> &OptionMap {
        &self.options
    }
}

impl<T> Configure<T> for FromMap
where
    T: Addressable + Connectable + ?Sized,
{
    fn apply(&self, target: &mut T) {
        if let Some(address) = &self.options.address {
            with_address(address.as_str()).apply(target);
        }
        if let Some(max_connections) = self.options.max_connections {
            with_max_connections(max_connections).apply(target);
        }
    }
}

/// Build a single option from a mapping.
pub fn from_array(options: OptionMap) -> FromMap {
    debug!(
        address = ?options.address,
        max_connections = ?options.max_connections,
        "built option from map"
    );
    FromMap { options }
}

/// Build a single option from an already parsed JSON value.
///
/// The value has to be an object. Known keys with the wrong value type
/// are a parse error; the check happens here, never at apply time.
pub fn from_value(value: Value) -> Result<FromMap, ConfigError> {
    if !value.is_object() {
        return Err(ConfigError::NotAnObject {
            found: json_kind(&value),
        });
    }

    let options: OptionMap = serde_json::from_value(value)?;
    Ok(from_array(options))
}

/// Build a single option from JSON text.
pub fn from_json(raw: &str) -> Result<FromMap, ConfigError> {
    let value: Value = serde_json::from_str(raw)?;
    from_value(value)
}

impl FromStr for FromMap {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        from_json(raw)
    }
}

impl From<OptionMap> for FromMap {
    fn from(options: OptionMap) -> Self {
        from_array(options)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
