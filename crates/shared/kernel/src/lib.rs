//! Kernel for the tool shell.
//! Validates the feature catalog, derives the route table from it, and resolves
//! locations against that table. Everything here runs once at startup and then
//! stays read-only.
//!
//! ## Building a route table
//! ```rust
//! use netkit_kernel::prelude::*;
//!
//! let registry = Registry::builder()
//!     .category(
//!         Category::new("net-tools", "Network Tools")
//!             .feature(Feature::new("Port Scanner", "/net/port-scanner", StaticView::shared("PortScanner")))
//!             .feature(Feature::new("WhoIs", "/net/whois", StaticView::shared("WhoIs"))),
//!     )
//!     .load()?;
//!
//! let views = ShellViews {
//!     layout: StaticView::shared("AppLayout"),
//!     home: StaticView::shared("HomeView"),
//!     not_found: StaticView::shared("NotFoundView"),
//! };
//! let routes = generate(&registry, &views)?;
//!
//! assert_eq!(routes.resolve("/net/port-scanner").name(), Some("PortScanner"));
//! assert!(routes.resolve("/does/not/exist").is_fallback());
//! # Ok::<(), netkit_kernel::error::CatalogError>(())
//! ```
pub mod catalog;
pub mod config;
pub mod error;
pub mod prelude;
pub mod routing;
#[cfg(feature = "server")]
pub mod server;

pub use netkit_domain as domain;
