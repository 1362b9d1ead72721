//! Route generation: projects a [`Registry`] into the table consumed by the
//! navigation runtime.
//!
//! The table always has the same shape:
//!
//! ```text
//! [ layout "/" { home "", feature.., feature.. }, fallback "/:pathMatch(.*)*" ]
//! ```
//!
//! Order is significant. Runtimes resolve first-match-wins, so features keep
//! authoring order and the wildcard stays last.

mod resolve;

pub use resolve::Resolution;
pub(crate) use resolve::canonical_path;

use crate::catalog::Registry;
use crate::error::CatalogError;
use fxhash::FxHashMap;
use netkit_domain::constants::{HOME_ROUTE, LAYOUT_PATH, NOT_FOUND_ROUTE, WILDCARD_PATH};
use netkit_domain::route::{RouteKind, RouteRecord};
use netkit_domain::view::ViewRef;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

/// Views attached to the reserved routes.
#[derive(Debug, Clone)]
pub struct ShellViews {
    /// Shared chrome wrapping every feature.
    pub layout: ViewRef,
    pub home: ViewRef,
    /// Rendered for any path no other route claims.
    pub not_found: ViewRef,
}

/// Generated route table. Only [`generate`] can build one, so the
/// `[layout, fallback]` shape always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RouteTable {
    records: [RouteRecord; 2],
}

impl RouteTable {
    /// Top-level records: the layout route, then the wildcard.
    #[must_use]
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    #[must_use]
    pub const fn layout(&self) -> &RouteRecord {
        &self.records[0]
    }

    #[must_use]
    pub const fn fallback(&self) -> &RouteRecord {
        &self.records[1]
    }

    /// Feature routes in registry order (home excluded).
    pub fn feature_routes(&self) -> impl Iterator<Item = &RouteRecord> {
        self.layout().children.iter().filter(|r| r.kind == RouteKind::Feature)
    }

    /// Total number of records, nested ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        fn count(record: &RouteRecord) -> usize {
            1 + record.children.iter().map(count).sum::<usize>()
        }
        self.records.iter().map(count).sum()
    }

    /// Looks up a record by routing identifier.
    #[must_use]
    pub fn by_name(&self, name: &str) -> Option<&RouteRecord> {
        if self.fallback().name() == Some(name) {
            return Some(self.fallback());
        }
        self.layout().children.iter().find(|r| r.name() == Some(name))
    }
}

/// Routing identifier for a feature name: every whitespace character removed.
///
/// Total and deterministic, but not injective (`"A B"` and `"AB"` both give `"AB"`),
/// which is why [`generate`] checks for collisions.
#[must_use]
pub fn derive_name(name: &str) -> String {
    name.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Builds the route table for `registry`.
///
/// # Errors
/// * [`CatalogError::PathCollision`] if two features share a path (or one claims `/`).
/// * [`CatalogError::RouteNameCollision`] if two derived names are equal, or a derived
///   name takes one of the reserved `Home` / `NotFound` identifiers.
pub fn generate(registry: &Registry, views: &ShellViews) -> Result<RouteTable, CatalogError> {
    // Keyed by canonical path: anything the resolver would treat as one location.
    let mut paths: FxHashMap<String, &str> = FxHashMap::default();
    let mut names: FxHashMap<String, &str> = FxHashMap::default();
    paths.insert(canonical_path(LAYOUT_PATH), HOME_ROUTE);
    names.insert(HOME_ROUTE.to_owned(), HOME_ROUTE);
    names.insert(NOT_FOUND_ROUTE.to_owned(), WILDCARD_PATH);

    let mut children = Vec::with_capacity(registry.len() + 1);
    children.push(RouteRecord::home(Arc::clone(&views.home)));

    for (category, feature) in registry.features() {
        if let Some(first) = paths.insert(canonical_path(&feature.path), &feature.name) {
            return Err(CatalogError::PathCollision {
                path: feature.path.clone(),
                first: first.to_owned(),
                second: feature.name.clone(),
                context: Some(format!("category '{}'", category.id).into()),
            });
        }

        let name = derive_name(&feature.name);
        if let Some(first) = names.get(&name) {
            return Err(CatalogError::RouteNameCollision {
                name,
                first: (*first).to_owned(),
                second: feature.name.clone(),
                context: Some(format!("category '{}'", category.id).into()),
            });
        }
        names.insert(name.clone(), &feature.name);

        debug!(path = %feature.path, name = %name, view = feature.component.key(), "Route generated");
        children.push(RouteRecord::feature(&feature.path, name, Arc::clone(&feature.component)));
    }

    let table = RouteTable {
        records: [
            RouteRecord::layout(Arc::clone(&views.layout), children),
            RouteRecord::fallback(Arc::clone(&views.not_found)),
        ],
    };

    info!(routes = table.len(), features = registry.len(), "Route table generated");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use netkit_domain::catalog::{Category, Feature};
    use netkit_domain::view::StaticView;

    fn shell() -> ShellViews {
        ShellViews {
            layout: StaticView::shared("AppLayout"),
            home: StaticView::shared("HomeView"),
            not_found: StaticView::shared("NotFoundView"),
        }
    }

    #[test]
    fn derive_name_strips_all_whitespace() {
        assert_eq!(derive_name("Port Scanner"), "PortScanner");
        assert_eq!(derive_name(" DNS\tRecord\n"), "DNSRecord");
        assert_eq!(derive_name("TLS\u{00A0}Inspector"), "TLSInspector");
        assert_eq!(derive_name("WhoIs"), "WhoIs");
        assert_eq!(derive_name(""), "");
    }

    #[test]
    fn empty_registry_still_has_layout_home_and_fallback() {
        let table = generate(&Registry::empty(), &shell()).unwrap();

        assert_eq!(table.records().len(), 2);
        assert_eq!(table.layout().kind, RouteKind::Layout);
        assert_eq!(table.layout().children.len(), 1);
        assert_eq!(table.layout().children[0].kind, RouteKind::Home);
        assert_eq!(table.fallback().path, WILDCARD_PATH);
        assert_eq!(table.len(), 3);
        assert_eq!(table.feature_routes().count(), 0);
    }

    #[test]
    fn views_are_forwarded_not_copied() {
        let views = shell();
        let scanner = StaticView::shared("PortScanner");
        let registry = Registry::builder()
            .category(Category::new("net", "Net").feature(Feature::new(
                "Port Scanner",
                "/net/port-scanner",
                Arc::clone(&scanner),
            )))
            .load()
            .unwrap();

        let table = generate(&registry, &views).unwrap();
        let route = table.by_name("PortScanner").unwrap();

        assert!(Arc::ptr_eq(&route.view, &scanner));
        assert!(Arc::ptr_eq(&table.layout().view, &views.layout));
        assert!(Arc::ptr_eq(&table.fallback().view, &views.not_found));
    }

    #[test]
    fn reserved_names_collide() {
        let registry = Registry::builder()
            .category(
                Category::new("net", "Net")
                    .feature(Feature::new("Not Found", "/oops", StaticView::shared("X"))),
            )
            .load()
            .unwrap();

        let err = generate(&registry, &shell()).unwrap_err();
        assert!(
            matches!(err, CatalogError::RouteNameCollision { ref name, .. } if name == "NotFound")
        );
    }

    #[test]
    fn paths_collide_the_way_resolution_matches_them() {
        for (one, two) in [("/net/whois", "/net/WHOIS"), ("/net/ping", "/net/ping/")] {
            let registry = Registry::unchecked(vec![
                Category::new("net", "Net")
                    .feature(Feature::new("One", one, StaticView::shared("A")))
                    .feature(Feature::new("Two", two, StaticView::shared("B"))),
            ]);

            let err = generate(&registry, &shell()).unwrap_err();
            assert!(
                matches!(err, CatalogError::PathCollision { ref first, ref second, .. }
                    if first == "One" && second == "Two"),
                "{two}"
            );
        }
    }

    #[test]
    fn root_variant_collides_with_home() {
        let registry = Registry::unchecked(vec![
            Category::new("net", "Net").feature(Feature::new("Root", "//", StaticView::shared("A"))),
        ]);

        let err = generate(&registry, &shell()).unwrap_err();
        assert!(matches!(err, CatalogError::PathCollision { ref first, .. } if first == "Home"));
    }

    #[test]
    fn by_name_finds_home_and_fallback() {
        let table = generate(&Registry::empty(), &shell()).unwrap();
        assert_eq!(table.by_name("Home").map(|r| r.kind), Some(RouteKind::Home));
        assert_eq!(table.by_name("NotFound").map(|r| r.kind), Some(RouteKind::Fallback));
        assert!(table.by_name("Missing").is_none());
    }
}
