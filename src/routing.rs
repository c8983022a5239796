//! Route parsing and formatting for the directory's path space.
//!
//! `/` mounts the selector, `/city/<slug>` feeds the location resolver, and
//! `/error` plus anything unmatched render the not-found view. The not-found
//! view's single affordance is the root path, which remounts the selector at
//! its initial state.

/// A parsed route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// The cascading selector.
    Home,
    /// The city detail view for one slug.
    City(String),
    /// The not-found view.
    NotFound,
}

impl Route {
    /// Parse a path into a route. Unmatched paths fall through to the
    /// not-found view.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path == "/" {
            return Route::Home;
        }
        match path.strip_prefix("/city/") {
            Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                Route::City(slug.to_string())
            }
            _ => Route::NotFound,
        }
    }

    /// Format the route back into a path.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::City(slug) => format!("/city/{slug}"),
            Route::NotFound => "/error".to_string(),
        }
    }
}
