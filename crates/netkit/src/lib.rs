//! Facade crate for `NetKit`.
//! Re-exports domain/kernel primitives and bootstraps the shell: registry first,
//! route table right after, both frozen for the life of the process.
//! Keep this crate thin: it composes other crates, it does not implement routing.
//!
//! ## Usage
//! ```rust
//! let shell = netkit::init(&netkit::domain::config::CatalogConfig::default())?;
//! assert_eq!(shell.routes.resolve("/net/whois").name(), Some("WhoIs"));
//! # Ok::<(), netkit::kernel::error::CatalogError>(())
//! ```

pub mod tools;

pub use netkit_domain as domain;
pub use netkit_kernel as kernel;

use netkit_domain::config::CatalogConfig;
use netkit_kernel::catalog::{Registry, load_catalog_document};
use netkit_kernel::error::{CatalogError, CatalogErrorExt};
use netkit_kernel::routing::{RouteTable, generate};
use tracing::info;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use netkit_kernel::server::router::{catalog_router, system_router};
    }
}

/// Registry plus the route table derived from it.
#[derive(Debug, Clone)]
pub struct Shell {
    pub registry: Registry,
    pub routes: RouteTable,
}

/// Loads the catalog (from `config.path` when set, otherwise the built-in one)
/// and generates the route table.
///
/// # Errors
/// Any [`CatalogError`]: unreadable document, invalid feature, path or route name collision.
pub fn init(config: &CatalogConfig) -> Result<Shell, CatalogError> {
    let views = tools::view_catalog()?;

    let registry = match &config.path {
        Some(path) => {
            let document = load_catalog_document(path)?;
            Registry::from_document(document, &views)
                .context(format!("catalog {}", path.display()))?
        }
        None => tools::builtin(&views)?,
    };

    let routes = generate(&registry, &tools::shell_views(&views)?)?;

    let source =
        config.path.as_ref().map_or_else(|| "builtin".to_owned(), |p| p.display().to_string());
    info!(
        source = %source,
        categories = registry.categories().len(),
        features = registry.len(),
        "Shell initialized"
    );

    Ok(Shell { registry, routes })
}
