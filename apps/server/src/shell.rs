//! History-mode hosting of the single-page shell.
//!
//! Every location outside the API is answered with the shell document. The
//! route table decides the status: a declared route yields `200`, anything the
//! wildcard catches yields `404` with the not-found view. Both carry headers
//! naming the matched route and view. Locations arrive percent-encoded and are
//! decoded by the route table before matching.

use axum::extract::State;
use axum::http::{HeaderName, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use netkit::domain::config::ShellConfig;
use netkit::domain::constants::{ROUTE_HEADER, VIEW_HEADER};
use netkit::kernel::server::AppState;
use tracing::debug;

const INDEX_FILE: &str = "index.html";

pub(crate) async fn history_fallback(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let routes = state.routes();
    let (status, route, view) = match strip_base(uri.path(), &state.config.shell.base_url) {
        Some(location) => {
            let resolution = routes.resolve(location);
            let status =
                if resolution.is_fallback() { StatusCode::NOT_FOUND } else { StatusCode::OK };
            (status, resolution.name(), resolution.view().key())
        }
        // Outside the mount point nothing but the wildcard can claim the location.
        None => (StatusCode::NOT_FOUND, routes.fallback().name(), routes.fallback().view_key()),
    };

    debug!(path = %uri.path(), route = ?route, view, status = status.as_u16(), "Shell navigation");

    let mut response = (status, Html(document(&state.config.shell).await)).into_response();
    let headers = response.headers_mut();
    // Route names may be non-ASCII; header values carry them percent-encoded.
    if let Some(value) = route.and_then(|r| HeaderValue::from_str(&urlencoding::encode(r)).ok()) {
        headers.insert(HeaderName::from_static(ROUTE_HEADER), value);
    }
    if let Ok(value) = HeaderValue::from_str(view) {
        headers.insert(HeaderName::from_static(VIEW_HEADER), value);
    }
    response
}

/// `index.html` from the static directory, or a minimal built-in document.
async fn document(config: &ShellConfig) -> String {
    let index = config.static_dir.join(INDEX_FILE);
    match tokio::fs::read_to_string(&index).await {
        Ok(html) => html,
        Err(e) => {
            debug!(path = %index.display(), error = %e, "Serving built-in shell document");
            builtin_document(config)
        }
    }
}

fn builtin_document(config: &ShellConfig) -> String {
    format!(
        "<!doctype html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n<base href=\"{base}\">\n</head>\n\
         <body>\n<div id=\"app\"></div>\n</body>\n</html>\n",
        title = escape(&config.title),
        base = escape(&base_href(&config.base_url)),
    )
}

/// Location relative to the mount point, or `None` when `path` lies outside it.
fn strip_base<'a>(path: &'a str, base: &str) -> Option<&'a str> {
    let base = base.trim_end_matches('/');
    if base.is_empty() {
        return Some(path);
    }

    let rest = path.strip_prefix(base)?;
    if rest.is_empty() {
        Some("/")
    } else if rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

fn base_href(base: &str) -> String {
    format!("{}/", base.trim_end_matches('/'))
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
