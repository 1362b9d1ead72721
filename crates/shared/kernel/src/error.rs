use std::borrow::Cow;

/// Startup failures of the catalog. None of these are recoverable at runtime:
/// the shell must refuse to become navigable.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// A required field is empty or malformed.
    #[error("Catalog configuration error{}: {message}", format_context(.context))]
    Configuration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Two entries resolve to the same navigation path.
    #[error(
        "Path collision{}: '{path}' is declared by both '{first}' and '{second}'",
        format_context(.context)
    )]
    PathCollision {
        path: String,
        first: String,
        second: String,
        context: Option<Cow<'static, str>>,
    },

    /// Two feature names derive the same routing identifier.
    #[error(
        "Route name collision{}: '{name}' is derived from both '{first}' and '{second}'",
        format_context(.context)
    )]
    RouteNameCollision {
        name: String,
        first: String,
        second: String,
        context: Option<Cow<'static, str>>,
    },

    /// The catalog document could not be read or parsed.
    #[error("Catalog document error{}: {source}", format_context(.context))]
    Document { source: config::ConfigError, context: Option<Cow<'static, str>> },
}

impl CatalogError {
    pub(crate) fn configuration(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Configuration { message: message.into(), context: None }
    }
}

impl From<config::ConfigError> for CatalogError {
    fn from(source: config::ConfigError) -> Self {
        Self::Document { source, context: None }
    }
}

/// Adds `.context(..)` to catalog results.
pub trait CatalogErrorExt<T> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError>;
}

impl<T> CatalogErrorExt<T> for Result<T, CatalogError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Self {
        self.map_err(|mut e| {
            match &mut e {
                CatalogError::Configuration { context: c, .. }
                | CatalogError::PathCollision { context: c, .. }
                | CatalogError::RouteNameCollision { context: c, .. }
                | CatalogError::Document { context: c, .. } => *c = Some(context.into()),
            }
            e
        })
    }
}

impl<T> CatalogErrorExt<T> for Result<T, config::ConfigError> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, CatalogError> {
        self.map_err(|source| CatalogError::Document { source, context: Some(context.into()) })
    }
}

pub(crate) fn format_context(context: &Option<Cow<'static, str>>) -> Cow<'static, str> {
    context.as_ref().map_or(Cow::Borrowed(""), |c| Cow::Owned(format!(" ({c})")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_is_rendered_in_message() {
        let err: Result<(), CatalogError> = Err(CatalogError::configuration("feature has an empty name"));
        let err = err.context("net-tools").unwrap_err();

        assert_eq!(
            err.to_string(),
            "Catalog configuration error (net-tools): feature has an empty name"
        );
    }

    #[test]
    fn collision_without_context() {
        let err = CatalogError::RouteNameCollision {
            name: "AB".to_owned(),
            first: "A B".to_owned(),
            second: "AB".to_owned(),
            context: None,
        };

        assert_eq!(
            err.to_string(),
            "Route name collision: 'AB' is derived from both 'A B' and 'AB'"
        );
    }
}
