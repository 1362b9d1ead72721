use crate::error::CatalogError;
use fxhash::FxHashMap;
use netkit_domain::view::ViewRef;
use std::sync::Arc;

/// Key → view lookup used to bind authored component keys to renderable units.
#[derive(Debug, Default, Clone)]
pub struct ViewCatalog {
    views: FxHashMap<String, ViewRef>,
}

impl ViewCatalog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a view under its own key.
    ///
    /// # Errors
    /// Returns [`CatalogError::Configuration`] if the key is empty or already taken.
    pub fn register(&mut self, view: ViewRef) -> Result<(), CatalogError> {
        let key = view.key().to_owned();
        if key.trim().is_empty() {
            return Err(CatalogError::configuration("view key cannot be empty"));
        }
        if self.views.contains_key(&key) {
            return Err(CatalogError::configuration(format!("view '{key}' is registered twice")));
        }
        self.views.insert(key, view);
        Ok(())
    }

    /// Chainable form of [`ViewCatalog::register`].
    ///
    /// # Errors
    /// See [`ViewCatalog::register`].
    pub fn with(mut self, view: ViewRef) -> Result<Self, CatalogError> {
        self.register(view)?;
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ViewRef> {
        self.views.get(key)
    }

    /// Returns a new handle to the view registered under `key`.
    ///
    /// # Errors
    /// Returns [`CatalogError::Configuration`] for unknown keys.
    pub fn resolve(&self, key: &str) -> Result<ViewRef, CatalogError> {
        self.views
            .get(key)
            .map(Arc::clone)
            .ok_or_else(|| CatalogError::configuration(format!("unknown component '{key}'")))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.views.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }
}
