use netkit_kernel::prelude::*;
use serde_json::json;
use std::sync::Arc;

fn shell() -> ShellViews {
    ShellViews {
        layout: StaticView::shared("AppLayout"),
        home: StaticView::shared("HomeView"),
        not_found: StaticView::shared("NotFoundView"),
    }
}

fn net_tools() -> Category {
    Category::new("net-tools", "Network Tools")
        .feature(
            Feature::new("Port Scanner", "/net/port-scanner", StaticView::shared("PortScanner"))
                .icon("scan"),
        )
        .feature(Feature::new("WhoIs", "/net/whois", StaticView::shared("WhoIs")))
}

#[test]
fn end_to_end_table_shape() {
    let registry = Registry::builder().category(net_tools()).load().unwrap();
    let table = generate(&registry, &shell()).unwrap();

    let value = serde_json::to_value(&table).unwrap();
    assert_eq!(
        value,
        json!([
            {
                "path": "/",
                "kind": "layout",
                "component": "AppLayout",
                "children": [
                    { "path": "", "name": "Home", "kind": "home", "component": "HomeView" },
                    {
                        "path": "/net/port-scanner",
                        "name": "PortScanner",
                        "kind": "feature",
                        "component": "PortScanner"
                    },
                    { "path": "/net/whois", "name": "WhoIs", "kind": "feature", "component": "WhoIs" }
                ]
            },
            {
                "path": "/:pathMatch(.*)*",
                "name": "NotFound",
                "kind": "fallback",
                "component": "NotFoundView"
            }
        ])
    );
}

#[test]
fn whitespace_only_difference_is_a_route_name_collision() {
    let registry = Registry::builder()
        .category(
            Category::new("letters", "Letters")
                .feature(Feature::new("A B", "/a-b", StaticView::shared("Spaced")))
                .feature(Feature::new("AB", "/ab", StaticView::shared("Joined"))),
        )
        .load()
        .expect("paths differ, so the registry itself is valid");

    let err = generate(&registry, &shell()).unwrap_err();
    let CatalogError::RouteNameCollision { name, first, second, .. } = err else {
        panic!("expected a route name collision, got {err}");
    };
    assert_eq!(name, "AB");
    assert_eq!(first, "A B");
    assert_eq!(second, "AB");
}

#[test]
fn collisions_are_detected_across_categories() {
    let registry = Registry::builder()
        .category(net_tools())
        .category(
            Category::new("legacy", "Legacy")
                .feature(Feature::new("Port  Scanner", "/legacy/scan", StaticView::shared("Old"))),
        )
        .load()
        .unwrap();

    assert!(matches!(
        generate(&registry, &shell()),
        Err(CatalogError::RouteNameCollision { .. })
    ));
}

#[test]
fn duplicate_paths_never_reach_generation() {
    let err = Registry::builder()
        .category(net_tools())
        .category(
            Category::new("mirror", "Mirror")
                .feature(Feature::new("Whois Mirror", "/net/whois", StaticView::shared("WhoIs"))),
        )
        .load()
        .unwrap_err();

    assert!(matches!(err, CatalogError::PathCollision { .. }));
}

#[test]
fn unmatched_navigation_renders_not_found() {
    let views = shell();
    let registry = Registry::builder().category(net_tools()).load().unwrap();
    let table = generate(&registry, &views).unwrap();

    let resolution = table.resolve("/does/not/exist");
    assert!(resolution.is_fallback());
    assert!(Arc::ptr_eq(resolution.view(), &views.not_found));
}

#[test]
fn every_feature_path_resolves_to_its_own_route() {
    let registry = Registry::builder().category(net_tools()).load().unwrap();
    let table = generate(&registry, &shell()).unwrap();

    for (_, feature) in registry.features() {
        let resolution = table.resolve(&feature.path);
        assert!(Arc::ptr_eq(resolution.view(), &feature.component), "{}", feature.path);
        assert_eq!(resolution.name().map(str::to_owned), Some(derive_name(&feature.name)));
    }
}
