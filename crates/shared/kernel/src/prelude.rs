pub use crate::catalog::{Registry, RegistryBuilder, ViewCatalog};
pub use crate::error::{CatalogError, CatalogErrorExt};
pub use crate::routing::{Resolution, RouteTable, ShellViews, derive_name, generate};
#[cfg(feature = "server")]
pub use crate::server::{AppState, AppStateError};
pub use netkit_domain::catalog::{Category, Feature};
pub use netkit_domain::config::AppConfig;
pub use netkit_domain::route::{RouteKind, RouteRecord};
pub use netkit_domain::view::{Renderable, StaticView, ViewRef};
