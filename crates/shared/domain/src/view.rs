//! Renderable units referenced by the catalog.
//! The core stores and forwards these handles; it never draws, instantiates or downcasts them.

use serde::Serializer;
use std::fmt::Debug;
use std::sync::Arc;

/// Anything the navigation runtime can display while a route is active.
pub trait Renderable: Debug + Send + Sync + 'static {
    /// Stable identifier used when the route table leaves the process (JSON, CLI output).
    fn key(&self) -> &str;
}

/// Shared, type-erased handle to a renderable unit.
pub type ViewRef = Arc<dyn Renderable>;

/// A renderable known only by its key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StaticView(&'static str);

impl StaticView {
    #[must_use]
    pub const fn new(key: &'static str) -> Self {
        Self(key)
    }

    /// Wraps the view into a [`ViewRef`].
    #[must_use]
    pub fn shared(key: &'static str) -> ViewRef {
        Arc::new(Self(key))
    }
}

impl Renderable for StaticView {
    fn key(&self) -> &str {
        self.0
    }
}

/// Serializes a view handle as its key.
///
/// # Errors
/// Propagates serializer failures.
pub fn serialize_view<S>(view: &ViewRef, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(view.key())
}
