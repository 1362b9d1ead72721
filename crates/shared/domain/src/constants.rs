/// Mount point of the shared layout route.
pub const LAYOUT_PATH: &str = "/";
/// Home route path, relative to the layout.
pub const HOME_PATH: &str = "";
pub const HOME_ROUTE: &str = "Home";
pub const NOT_FOUND_ROUTE: &str = "NotFound";
/// Catch-all pattern; must stay the last route in the table.
pub const WILDCARD_PATH: &str = "/:pathMatch(.*)*";

pub const API_PREFIX: &str = "/api/v1";
pub const SYSTEM_TAG: &str = "System";
pub const CATALOG_TAG: &str = "Catalog";

pub const ROUTE_HEADER: &str = "x-netkit-route";
pub const VIEW_HEADER: &str = "x-netkit-view";

/// Environment prefix for configuration overrides (`NETKIT__SERVER__PORT`).
pub const ENV_PREFIX: &str = "NETKIT";
