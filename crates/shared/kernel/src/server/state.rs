use crate::catalog::Registry;
use crate::routing::RouteTable;
use axum::extract::FromRef;
use netkit_domain::config::AppConfig;
use std::borrow::Cow;
use std::ops::Deref;
use std::sync::Arc;
use std::time::Instant;

#[derive(Debug, thiserror::Error)]
pub enum AppStateError {
    #[error("State validation error{}: {message}", format_context(.context))]
    Validation { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[derive(Debug)]
pub struct AppStateInner {
    pub config: AppConfig,
    pub registry: Registry,
    pub routes: RouteTable,
    pub started: Instant,
}

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

impl AppState {
    #[must_use]
    pub fn builder() -> AppStateBuilder {
        AppStateBuilder::default()
    }

    #[must_use]
    pub fn routes(&self) -> &RouteTable {
        &self.inner.routes
    }

    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.inner.registry
    }
}

impl Deref for AppState {
    type Target = AppStateInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl FromRef<AppState> for AppConfig {
    fn from_ref(state: &AppState) -> Self {
        state.inner.config.clone()
    }
}

impl FromRef<AppState> for Registry {
    fn from_ref(state: &AppState) -> Self {
        state.inner.registry.clone()
    }
}

#[derive(Debug, Default)]
pub struct AppStateBuilder {
    config: Option<AppConfig>,
    registry: Option<Registry>,
    routes: Option<RouteTable>,
}

impl AppStateBuilder {
    #[must_use]
    pub fn config(mut self, config: AppConfig) -> Self {
        self.config = Some(config);
        self
    }

    #[must_use]
    pub fn registry(mut self, registry: Registry) -> Self {
        self.registry = Some(registry);
        self
    }

    #[must_use]
    pub fn routes(mut self, routes: RouteTable) -> Self {
        self.routes = Some(routes);
        self
    }

    /// Freezes the state. The config falls back to defaults; registry and routes are required.
    ///
    /// # Errors
    /// Returns [`AppStateError::Validation`] if the registry or route table is missing.
    pub fn build(self) -> Result<AppState, AppStateError> {
        let registry = self.registry.ok_or_else(|| AppStateError::Validation {
            message: "Registry not provided".into(),
            context: None,
        })?;
        let routes = self.routes.ok_or_else(|| AppStateError::Validation {
            message: "Route table not provided".into(),
            context: None,
        })?;
        let config = self.config.unwrap_or_default();

        Ok(AppState {
            inner: Arc::new(AppStateInner { config, registry, routes, started: Instant::now() }),
        })
    }
}
