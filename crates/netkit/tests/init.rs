use netkit::domain::config::CatalogConfig;
use netkit::kernel::error::CatalogError;
use netkit::tools;
use std::io::Write;

fn catalog_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn builtin_shell_is_navigable() {
    let shell = netkit::init(&CatalogConfig::default()).unwrap();

    assert_eq!(shell.routes.feature_routes().count(), shell.registry.len());
    assert_eq!(shell.routes.resolve("/").leaf().view_key(), tools::HOME_VIEW);
    assert_eq!(shell.routes.resolve("/tls/inspector").name(), Some("TLSInspector"));
    assert_eq!(shell.routes.resolve("/does/not/exist").view().key(), tools::NOT_FOUND_VIEW);
}

#[test]
fn document_catalog_replaces_builtin() {
    let file = catalog_file(
        r#"
[[categories]]
id = "net-tools"
name = "Network Tools"

[[categories.features]]
name = "Port Scanner"
path = "/net/port-scanner"
component = "PortScanner"

[[categories.features]]
name = "WhoIs"
path = "/net/whois"
component = "WhoIs"
"#,
    );

    let shell = netkit::init(&CatalogConfig { path: Some(file.path().to_path_buf()) }).unwrap();

    let routes = serde_json::to_value(&shell.routes).unwrap();
    let children = routes[0]["children"].as_array().unwrap();
    let names: Vec<_> = children.iter().map(|c| c["name"].as_str().unwrap()).collect();
    assert_eq!(names, ["Home", "PortScanner", "WhoIs"]);
    assert_eq!(routes[1]["path"], "/:pathMatch(.*)*");
}

#[test]
fn document_with_missing_name_refuses_to_start() {
    let file = catalog_file(
        r#"
[[categories]]
id = "net-tools"

[[categories.features]]
path = "/net/ping"
component = "Ping"
"#,
    );

    let err = netkit::init(&CatalogConfig { path: Some(file.path().to_path_buf()) }).unwrap_err();
    assert!(matches!(err, CatalogError::Configuration { .. }), "{err}");
}

#[test]
fn document_with_colliding_names_refuses_to_start() {
    let file = catalog_file(
        r#"
[[categories]]
id = "net-tools"

[[categories.features]]
name = "Who Is"
path = "/net/whois"
component = "WhoIs"

[[categories.features]]
name = "WhoIs"
path = "/net/whois-v2"
component = "WhoIs"
"#,
    );

    let err = netkit::init(&CatalogConfig { path: Some(file.path().to_path_buf()) }).unwrap_err();
    assert!(matches!(err, CatalogError::RouteNameCollision { .. }), "{err}");
}
