use super::AppState;
use axum::Json;
use axum::extract::{Query, State};
use netkit_domain::catalog::{Category, Feature};
use netkit_domain::constants::CATALOG_TAG;
use netkit_domain::route::{RouteKind, RouteRecord};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// Tool catalog in authoring order
#[derive(Debug, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub categories: Vec<CategoryEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    pub features: Vec<FeatureEntry>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FeatureEntry {
    pub name: String,
    pub path: String,
    pub icon: String,
    pub description: String,
    /// Key of the renderable unit
    pub component: String,
}

/// One node of the route table
#[derive(Debug, Serialize, ToSchema)]
pub struct RouteNode {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: RouteKind,
    pub component: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[schema(no_recursion)]
    pub children: Vec<RouteNode>,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResolveQuery {
    /// Location to resolve, e.g. `/net/whois?target=example.org`
    pub path: String,
}

/// Result of resolving a location against the route table
#[derive(Debug, Serialize, ToSchema)]
pub struct ResolveResponse {
    /// Normalized path
    pub path: String,
    /// Matched route name
    pub route: Option<String>,
    /// Key of the view to render
    pub view: String,
    /// `true` when only the wildcard matched
    pub fallback: bool,
    /// View keys from the outermost layout to the leaf
    pub chain: Vec<String>,
}

impl From<&Feature> for FeatureEntry {
    fn from(feature: &Feature) -> Self {
        Self {
            name: feature.name.clone(),
            path: feature.path.clone(),
            icon: feature.icon.clone(),
            description: feature.description.clone(),
            component: feature.component.key().to_owned(),
        }
    }
}

impl From<&Category> for CategoryEntry {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            description: category.description.clone(),
            features: category.features.iter().map(FeatureEntry::from).collect(),
        }
    }
}

impl From<&RouteRecord> for RouteNode {
    fn from(record: &RouteRecord) -> Self {
        Self {
            path: record.path.clone(),
            name: record.name.clone(),
            kind: record.kind,
            component: record.view_key().to_owned(),
            children: record.children.iter().map(Self::from).collect(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/catalog",
    responses((status = OK, description = "Registered tool categories", body = CatalogResponse)),
    tag = CATALOG_TAG,
)]
pub(super) async fn catalog_handler(State(state): State<AppState>) -> Json<CatalogResponse> {
    let categories = state.registry().categories().iter().map(CategoryEntry::from).collect();
    Json(CatalogResponse { categories })
}

#[utoipa::path(
    get,
    path = "/routes",
    responses((status = OK, description = "Generated route table", body = [RouteNode])),
    tag = CATALOG_TAG,
)]
pub(super) async fn routes_handler(State(state): State<AppState>) -> Json<Vec<RouteNode>> {
    Json(state.routes().records().iter().map(RouteNode::from).collect())
}

#[utoipa::path(
    get,
    path = "/resolve",
    params(ResolveQuery),
    responses((status = OK, description = "Route matched by the location", body = ResolveResponse)),
    tag = CATALOG_TAG,
)]
pub(super) async fn resolve_handler(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Json<ResolveResponse> {
    let resolution = state.routes().resolve(&query.path);

    Json(ResolveResponse {
        path: resolution.path().to_owned(),
        route: resolution.name().map(str::to_owned),
        view: resolution.view().key().to_owned(),
        fallback: resolution.is_fallback(),
        chain: resolution.chain().map(|r| r.view_key().to_owned()).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Registry;
    use crate::routing::{ShellViews, generate};
    use netkit_domain::view::StaticView;

    #[test]
    fn route_nodes_carry_kind_labels() {
        let views = ShellViews {
            layout: StaticView::shared("AppLayout"),
            home: StaticView::shared("HomeView"),
            not_found: StaticView::shared("NotFoundView"),
        };
        let table = generate(&Registry::empty(), &views).unwrap();
        let nodes: Vec<_> = table.records().iter().map(RouteNode::from).collect();

        let json = serde_json::to_value(&nodes).unwrap();
        assert_eq!(json[0]["kind"], "layout");
        assert_eq!(json[0]["children"][0]["kind"], "home");
        assert_eq!(json[1]["kind"], "fallback");
        assert_eq!(nodes[1].kind, RouteKind::Fallback);
    }
}
