//! Catalog models: categories of tool features, in authoring order.

use crate::view::{ViewRef, serialize_view};
use serde::{Deserialize, Serialize};

/// One selectable tool in the catalog.
#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub name: String,
    pub path: String,
    pub icon: String,
    #[serde(serialize_with = "serialize_view")]
    pub component: ViewRef,
    pub description: String,
}

impl Feature {
    pub fn new(name: impl Into<String>, path: impl Into<String>, component: ViewRef) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            icon: String::new(),
            component,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A named, ordered group of related features.
#[derive(Debug, Clone, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<Feature>,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self { id: id.into(), name: name.into(), description: String::new(), features: Vec::new() }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Appends a feature; insertion order is navigation order.
    #[must_use]
    pub fn feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }
}

/// Authored catalog as read from a document (TOML, JSON, YAML).
///
/// Required fields default to empty strings so that a missing `name` or `path`
/// is reported by registry validation instead of a parser error.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogDocument {
    pub categories: Vec<CategoryDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CategoryDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<FeatureDocument>,
}

/// A feature whose `component` is a key into a view catalog.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FeatureDocument {
    pub name: String,
    pub path: String,
    pub icon: String,
    pub component: String,
    pub description: String,
}
