use super::{AppState, catalog, health};
use netkit_domain::constants::API_PREFIX;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Health and other operational endpoints.
pub fn system_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(health::health_handler))
}

/// Catalog, route table and resolution endpoints, mounted under [`API_PREFIX`].
pub fn catalog_router() -> OpenApiRouter<AppState> {
    let api = OpenApiRouter::new()
        .routes(routes!(catalog::catalog_handler))
        .routes(routes!(catalog::routes_handler))
        .routes(routes!(catalog::resolve_handler));

    OpenApiRouter::new().nest(API_PREFIX, api)
}
