use crate::error::{CatalogError, CatalogErrorExt};
use config::{Config, File, FileFormat};
use netkit_domain::catalog::CatalogDocument;
use std::path::Path;
use tracing::info;

/// Reads a catalog document from disk. The format follows the file extension.
///
/// # Errors
/// Returns [`CatalogError::Document`] if the file is missing or malformed.
pub fn load_catalog_document(path: impl AsRef<Path>) -> Result<CatalogDocument, CatalogError> {
    let path = path.as_ref();
    info!(path = %path.display(), "Loading catalog document");

    Config::builder()
        .add_source(File::from(path).required(true))
        .build()
        .context(format!("Failed to read catalog {}", path.display()))?
        .try_deserialize::<CatalogDocument>()
        .context(format!("Failed to deserialize catalog {}", path.display()))
}

/// Parses an in-memory catalog document.
///
/// # Errors
/// Returns [`CatalogError::Document`] if `raw` is not a valid document in `format`.
pub fn parse_catalog_document(
    raw: &str,
    format: FileFormat,
) -> Result<CatalogDocument, CatalogError> {
    Config::builder()
        .add_source(File::from_str(raw, format))
        .build()
        .context("Failed to parse catalog")?
        .try_deserialize::<CatalogDocument>()
        .context("Failed to deserialize catalog")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const CATALOG: &str = r#"
[[categories]]
id = "net-tools"
name = "Network Tools"

[[categories.features]]
name = "Port Scanner"
path = "/net/port-scanner"
icon = "scan"
component = "PortScanner"

[[categories.features]]
name = "WhoIs"
path = "/net/whois"
component = "WhoIs"
"#;

    #[test]
    fn parses_toml_in_declaration_order() {
        let doc = parse_catalog_document(CATALOG, FileFormat::Toml).unwrap();

        assert_eq!(doc.categories.len(), 1);
        let features = &doc.categories[0].features;
        assert_eq!(features[0].path, "/net/port-scanner");
        assert_eq!(features[0].icon, "scan");
        assert_eq!(features[1].name, "WhoIs");
        assert!(features[1].icon.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let doc = load_catalog_document(file.path()).unwrap();
        assert_eq!(doc.categories[0].id, "net-tools");
    }

    #[test]
    fn missing_file_is_a_document_error() {
        let err = load_catalog_document("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CatalogError::Document { context: Some(_), .. }));
    }
}
