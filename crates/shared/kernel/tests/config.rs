use netkit_kernel::config::load_config;
use netkit_kernel::domain::config::AppConfig;
use serial_test::serial;
use std::io::Write;

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
#[serial]
fn loads_file_values() {
    let file = write_config(
        r#"
[server]
port = 8080

[catalog]
path = "catalog.toml"
"#,
    );

    let cfg: AppConfig = load_config(Some(file.path())).unwrap();
    assert_eq!(cfg.server.port, 8080);
    assert_eq!(cfg.catalog.path.as_deref(), Some(std::path::Path::new("catalog.toml")));
    assert_eq!(cfg.shell.base_url, "/");
}

#[test]
#[serial]
fn explicit_missing_file_is_an_error() {
    let result = load_config::<AppConfig>(Some("/definitely/not/here.toml"));
    assert!(result.is_err());
}

#[test]
#[serial]
fn default_file_is_optional() {
    let cfg: AppConfig = load_config(None::<&str>).unwrap();
    assert_eq!(cfg.server.port, 4583);
}
