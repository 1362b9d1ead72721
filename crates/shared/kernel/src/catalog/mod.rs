//! Feature registry: the canonical, frozen list of tool categories.
//!
//! Authoring happens once, either in source (see [`RegistryBuilder`]) or through a
//! [`CatalogDocument`](netkit_domain::catalog::CatalogDocument) whose component keys
//! are resolved against a [`ViewCatalog`]. Everything is validated before a
//! [`Registry`] exists, so holders of a registry never see malformed entries.

mod document;
mod registry;
mod views;

pub use document::{load_catalog_document, parse_catalog_document};
pub use registry::{Registry, RegistryBuilder};
pub use views::ViewCatalog;
