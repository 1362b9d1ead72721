use super::views::ViewCatalog;
use crate::error::{CatalogError, CatalogErrorExt};
use crate::routing::canonical_path;
use fxhash::{FxHashMap, FxHashSet};
use netkit_domain::catalog::{CatalogDocument, Category, Feature};
use netkit_domain::constants::{HOME_ROUTE, LAYOUT_PATH};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Debug)]
struct RegistryInner {
    categories: Vec<Category>,
    // canonical path -> (category index, feature index)
    by_path: FxHashMap<String, (usize, usize)>,
    features: usize,
}

/// Immutable, validated catalog of tool categories.
///
/// Cloning is cheap; every clone shares the same frozen data.
#[derive(Debug, Clone)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// Validates `categories` and freezes them.
    ///
    /// # Errors
    /// * [`CatalogError::Configuration`] for an empty or duplicate category id, an empty
    ///   feature name, or an empty/malformed feature path.
    /// * [`CatalogError::PathCollision`] when two features address the same location
    ///   (paths compare the way navigation resolves them: percent-decoded, ignoring
    ///   ASCII case and one trailing slash), or a feature claims the root path owned
    ///   by the home route.
    pub fn load(categories: Vec<Category>) -> Result<Self, CatalogError> {
        let mut ids = FxHashSet::default();
        let mut by_path: FxHashMap<String, (usize, usize)> = FxHashMap::default();
        let mut features = 0;

        for (ci, category) in categories.iter().enumerate() {
            if category.id.trim().is_empty() {
                return Err(CatalogError::configuration(format!(
                    "category #{ci} ('{}') has an empty id",
                    category.name
                )));
            }
            if !ids.insert(category.id.as_str()) {
                return Err(CatalogError::configuration(format!(
                    "category id '{}' is declared twice",
                    category.id
                )));
            }

            for (fi, feature) in category.features.iter().enumerate() {
                validate_feature(feature, fi).context(format!("category '{}'", category.id))?;

                let key = canonical_path(&feature.path);
                if key == LAYOUT_PATH {
                    return Err(CatalogError::PathCollision {
                        path: feature.path.clone(),
                        first: HOME_ROUTE.to_owned(),
                        second: feature.name.clone(),
                        context: None,
                    });
                }

                if let Some(&(pc, pf)) = by_path.get(&key) {
                    return Err(CatalogError::PathCollision {
                        path: feature.path.clone(),
                        first: categories[pc].features[pf].name.clone(),
                        second: feature.name.clone(),
                        context: None,
                    });
                }

                debug!(category = %category.id, path = %feature.path, "Feature registered");
                by_path.insert(key, (ci, fi));
                features += 1;
            }
        }

        info!(categories = categories.len(), features, "Feature registry loaded");

        Ok(Self { inner: Arc::new(RegistryInner { categories, by_path, features }) })
    }

    /// Binds an authored document to concrete views and validates the result.
    ///
    /// # Errors
    /// Everything [`Registry::load`] rejects, plus unknown component keys.
    pub fn from_document(
        document: CatalogDocument,
        views: &ViewCatalog,
    ) -> Result<Self, CatalogError> {
        let mut categories = Vec::with_capacity(document.categories.len());

        for doc in document.categories {
            let mut features = Vec::with_capacity(doc.features.len());
            for feature in doc.features {
                let component = views
                    .resolve(&feature.component)
                    .context(format!("feature '{}' in category '{}'", feature.name, doc.id))?;
                features.push(
                    Feature::new(feature.name, feature.path, component)
                        .icon(feature.icon)
                        .description(feature.description),
                );
            }
            categories.push(Category {
                id: doc.id,
                name: doc.name,
                description: doc.description,
                features,
            });
        }

        Self::load(categories)
    }

    /// A registry without categories. Still yields the layout and fallback routes.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                categories: Vec::new(),
                by_path: FxHashMap::default(),
                features: 0,
            }),
        }
    }

    /// Skips validation, for exercising the route generator's own checks.
    #[cfg(test)]
    pub(crate) fn unchecked(categories: Vec<Category>) -> Self {
        let features = categories.iter().map(|c| c.features.len()).sum();
        Self {
            inner: Arc::new(RegistryInner { categories, by_path: FxHashMap::default(), features }),
        }
    }

    /// Categories in authoring order.
    #[must_use]
    pub fn categories(&self) -> &[Category] {
        &self.inner.categories
    }

    #[must_use]
    pub fn category(&self, id: &str) -> Option<&Category> {
        self.inner.categories.iter().find(|c| c.id == id)
    }

    /// All features, category order first, then feature order within each category.
    pub fn features(&self) -> impl Iterator<Item = (&Category, &Feature)> {
        self.inner.categories.iter().flat_map(|c| c.features.iter().map(move |f| (c, f)))
    }

    /// Feature addressed by `path`, matched the same way navigation matches it.
    #[must_use]
    pub fn feature_by_path(&self, path: &str) -> Option<&Feature> {
        let &(ci, fi) = self.inner.by_path.get(&canonical_path(path))?;
        self.inner.categories.get(ci)?.features.get(fi)
    }

    /// Number of features across all categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.features
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.features == 0
    }
}

fn validate_feature(feature: &Feature, index: usize) -> Result<(), CatalogError> {
    if feature.name.trim().is_empty() {
        return Err(CatalogError::configuration(format!(
            "feature #{index} ('{}') has an empty name",
            feature.path
        )));
    }

    let path = feature.path.as_str();
    if path.is_empty() {
        return Err(CatalogError::configuration(format!(
            "feature '{}' has an empty path",
            feature.name
        )));
    }
    if !path.starts_with('/') {
        return Err(CatalogError::configuration(format!(
            "feature '{}' path '{path}' must be root-relative",
            feature.name
        )));
    }
    if path.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        return Err(CatalogError::configuration(format!(
            "feature '{}' path '{path}' contains whitespace, '?' or '#'",
            feature.name
        )));
    }

    Ok(())
}

/// Source-level authoring of a registry.
#[must_use = "builders do nothing unless you call .load()"]
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    categories: Vec<Category>,
}

impl RegistryBuilder {
    pub fn category(mut self, category: Category) -> Self {
        self.categories.push(category);
        self
    }

    /// Consumes the builder. See [`Registry::load`].
    ///
    /// # Errors
    /// See [`Registry::load`].
    pub fn load(self) -> Result<Registry, CatalogError> {
        Registry::load(self.categories)
    }
}
