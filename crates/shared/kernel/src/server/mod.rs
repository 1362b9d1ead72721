//! HTTP surface over the catalog: state, OpenAPI-documented handlers and routers.

mod catalog;
mod health;
pub mod router;
mod state;

pub use catalog::{CatalogResponse, CategoryEntry, FeatureEntry, ResolveQuery, ResolveResponse, RouteNode};
pub use health::HealthResponse;
pub use state::{AppState, AppStateBuilder, AppStateError, AppStateInner};
