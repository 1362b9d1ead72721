use crate::shell;
use axum::Router;
use axum::http::{HeaderValue, Method};
use netkit::kernel::server::AppState;
use netkit::server::router::{catalog_router, system_router};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "NetKit", description = "Tool catalog and route table"))]
struct ApiDoc;

/// Assembles the full application: documented API, Scalar UI, static assets
/// and the history-mode shell fallback.
#[allow(unreachable_pub)]
pub fn init(state: AppState) -> Router {
    // Separate the OpenAPI routes and the API documentation object
    let (api_routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(system_router())
        .merge(catalog_router())
        .split_for_parts();

    let assets = ServeDir::new(state.config.shell.static_dir.join("assets"));
    let cors = cors_layer(&state.config.server.cors_origins);

    Router::new()
        .merge(api_routes)
        .merge(Scalar::with_url("/api", api_doc))
        .nest_service("/assets", assets)
        .fallback(shell::history_fallback)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any)
}
