use std::str::FromStr;

use serde_json::Value;

/// The JSON document served by the description endpoint.
///
/// Built once at startup and never mutated afterwards. No schema is imposed:
/// a top-level object is expected, but any JSON value is accepted. Category
/// lookups only match when the root is an object.
#[derive(Debug, Clone, PartialEq)]
pub struct DescriptionDocument {
    root: Value,
}

impl DescriptionDocument {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    pub fn category(&self, name: &str) -> Option<&Value> {
        self.root.as_object()?.get(name)
    }

    /// Top-level keys in file order. Empty for non-object roots.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_object()
            .into_iter()
            .flat_map(|map| map.keys().map(String::as_str))
    }
}

impl FromStr for DescriptionDocument {
    type Err = serde_json::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(raw).map(Self::from_value)
    }
}
