// Neuron descriptor types
//
// A descriptor is the JSON file describing one flavor of a neuron. Every field
// is optional here: rendering degrades to fallback text instead of failing.
// Fields the documentation does not use (command, baseConfig, ...) are ignored.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// One neuron flavor as declared in its JSON descriptor
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Descriptor {
    pub name: Option<String>,
    pub author: Option<String>,
    pub license: Option<String>,
    pub version: Option<Value>,
    #[serde(rename = "dataTypeList", deserialize_with = "null_as_default")]
    pub data_types: Vec<String>,
    pub registration_required: Option<Value>,
    pub subscription_required: Option<Value>,
    pub free_subscription: Option<Value>,
    pub service_homepage: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "configurationItems", deserialize_with = "null_as_default")]
    pub configuration_items: Vec<ConfigurationItem>,
    pub service_logo: Option<AssetRef>,
    #[serde(deserialize_with = "null_as_default")]
    pub screenshots: Vec<AssetRef>,
}

/// A user-facing configuration item
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConfigurationItem {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "defaultValue")]
    pub default_value: Option<Value>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub multi: Option<Value>,
    pub required: Option<Value>,
}

/// Image referenced by a descriptor, relative to the neuron directory
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct AssetRef {
    #[serde(deserialize_with = "null_as_default")]
    pub path: String,
    pub caption: Option<String>,
}

impl Descriptor {
    /// Parse a descriptor from JSON text
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a descriptor file. Malformed JSON is fatal for the neuron.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json(&contents).map_err(|e| Error::descriptor(path, e.to_string()))
    }

    /// Logo path, if one is declared and non-empty
    pub fn logo_path(&self) -> Option<&str> {
        self.service_logo
            .as_ref()
            .map(|logo| logo.path.as_str())
            .filter(|p| !p.is_empty())
    }
}

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Render a loosely typed descriptor value as plain text.
///
/// Strings are used as-is, other JSON values use their JSON text, and a
/// missing or null value yields `fallback`.
pub fn value_text(value: Option<&Value>, fallback: &str) -> String {
    match value {
        None | Some(Value::Null) => fallback.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}
