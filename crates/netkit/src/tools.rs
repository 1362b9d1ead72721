//! Built-in tool catalog.
//!
//! The diagnostic tools themselves live elsewhere; here they are only keys
//! that the front end maps to its components.

use netkit_kernel::catalog::{Registry, ViewCatalog};
use netkit_kernel::domain::catalog::{Category, Feature};
use netkit_kernel::domain::view::StaticView;
use netkit_kernel::error::CatalogError;
use netkit_kernel::routing::ShellViews;

pub const APP_LAYOUT: &str = "AppLayout";
pub const HOME_VIEW: &str = "HomeView";
pub const NOT_FOUND_VIEW: &str = "NotFoundView";

pub const PORT_SCANNER: &str = "PortScanner";
pub const WHOIS: &str = "WhoIs";
pub const DNS_RECORD: &str = "DnsRecord";
pub const PING: &str = "Ping";
pub const TRACEROUTE: &str = "Traceroute";
pub const TLS_INSPECTOR: &str = "TlsInspector";

const VIEW_KEYS: &[&str] = &[
    APP_LAYOUT,
    HOME_VIEW,
    NOT_FOUND_VIEW,
    PORT_SCANNER,
    WHOIS,
    DNS_RECORD,
    PING,
    TRACEROUTE,
    TLS_INSPECTOR,
];

/// Every view the shell knows about, shell chrome included.
///
/// # Errors
/// Fails only if a view key is declared twice.
pub fn view_catalog() -> Result<ViewCatalog, CatalogError> {
    let mut views = ViewCatalog::new();
    for &key in VIEW_KEYS {
        views.register(StaticView::shared(key))?;
    }
    Ok(views)
}

/// Layout, home and not-found views taken from `views`.
///
/// # Errors
/// Returns [`CatalogError::Configuration`] if one of them is not registered.
pub fn shell_views(views: &ViewCatalog) -> Result<ShellViews, CatalogError> {
    Ok(ShellViews {
        layout: views.resolve(APP_LAYOUT)?,
        home: views.resolve(HOME_VIEW)?,
        not_found: views.resolve(NOT_FOUND_VIEW)?,
    })
}

/// The source-declared catalog.
///
/// # Errors
/// Propagates registry validation failures.
pub fn builtin(views: &ViewCatalog) -> Result<Registry, CatalogError> {
    let net = Category::new("net-tools", "Network Security Tools")
        .description("Network analysis tools modelled on the classic Kali Linux toolset.")
        .feature(
            Feature::new("Port Scanner", "/net/port-scanner", views.resolve(PORT_SCANNER)?)
                .icon("scan")
                .description("High-throughput TCP/UDP port scanning."),
        )
        .feature(
            Feature::new("WhoIs", "/net/whois", views.resolve(WHOIS)?)
                .icon("globe")
                .description("Domain registration and ownership lookup."),
        )
        .feature(
            Feature::new("DNS Record", "/net/dns-record", views.resolve(DNS_RECORD)?)
                .icon("dns")
                .description("Query A, AAAA, MX, NS and TXT records for a domain."),
        )
        .feature(
            Feature::new("Ping", "/net/ping", views.resolve(PING)?)
                .icon("pulse")
                .description("ICMP reachability and round-trip latency."),
        )
        .feature(
            Feature::new("Traceroute", "/net/traceroute", views.resolve(TRACEROUTE)?)
                .icon("route")
                .description("Hop-by-hop path discovery towards a host."),
        );

    let crypto = Category::new("crypto-tools", "Certificates & TLS")
        .description("Inspect how remote services negotiate encryption.")
        .feature(
            Feature::new("TLS Inspector", "/tls/inspector", views.resolve(TLS_INSPECTOR)?)
                .icon("lock")
                .description("Certificate chain, expiry and negotiated cipher suite."),
        );

    Registry::builder().category(net).category(crypto).load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use netkit_kernel::routing::derive_name;

    #[test]
    fn builtin_catalog_is_valid() {
        let views = view_catalog().unwrap();
        let registry = builtin(&views).unwrap();

        assert_eq!(registry.categories().len(), 2);
        assert_eq!(registry.len(), 6);
        assert_eq!(registry.categories()[0].features[0].path, "/net/port-scanner");
    }

    #[test]
    fn feature_names_derive_to_view_keys() {
        let views = view_catalog().unwrap();
        let registry = builtin(&views).unwrap();

        let names: Vec<_> = registry.features().map(|(_, f)| derive_name(&f.name)).collect();
        assert_eq!(
            names,
            ["PortScanner", "WhoIs", "DNSRecord", "Ping", "Traceroute", "TLSInspector"]
        );
    }
}
