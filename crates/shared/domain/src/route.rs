//! Route records handed to the navigation runtime.

use crate::constants::{HOME_PATH, HOME_ROUTE, LAYOUT_PATH, NOT_FOUND_ROUTE, WILDCARD_PATH};
use crate::view::{ViewRef, serialize_view};
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[cfg_attr(feature = "schema", derive(utoipa::ToSchema))]
#[serde(rename_all = "snake_case")]
pub enum RouteKind {
    Layout,
    Home,
    Feature,
    Fallback,
}

/// A (path, name, view) triple, optionally wrapping nested children.
#[derive(Debug, Clone, Serialize)]
pub struct RouteRecord {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub kind: RouteKind,
    #[serde(rename = "component", serialize_with = "serialize_view")]
    pub view: ViewRef,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Self>,
}

impl RouteRecord {
    #[must_use]
    pub fn layout(view: ViewRef, children: Vec<Self>) -> Self {
        Self { path: LAYOUT_PATH.to_owned(), name: None, kind: RouteKind::Layout, view, children }
    }

    #[must_use]
    pub fn home(view: ViewRef) -> Self {
        Self {
            path: HOME_PATH.to_owned(),
            name: Some(HOME_ROUTE.to_owned()),
            kind: RouteKind::Home,
            view,
            children: Vec::new(),
        }
    }

    pub fn feature(path: impl Into<String>, name: impl Into<String>, view: ViewRef) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            kind: RouteKind::Feature,
            view,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn fallback(view: ViewRef) -> Self {
        Self {
            path: WILDCARD_PATH.to_owned(),
            name: Some(NOT_FOUND_ROUTE.to_owned()),
            kind: RouteKind::Fallback,
            view,
            children: Vec::new(),
        }
    }

    /// Routing identifier, if the record has one.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Key of the attached view.
    #[must_use]
    pub fn view_key(&self) -> &str {
        self.view.key()
    }
}

/// Views compare by identity: two records are equal only when they forward the same handle.
impl PartialEq for RouteRecord {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
            && self.name == other.name
            && self.kind == other.kind
            && Arc::ptr_eq(&self.view, &other.view)
            && self.children == other.children
    }
}

impl Eq for RouteRecord {}
