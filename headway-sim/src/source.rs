//! # Route path sources
//!
//! Where route geometry comes from. The driver only ever sees a loaded
//! [`RouteSet`]; whether that set was read from built-in coordinate tables
//! or fetched from an external geometry service is hidden behind
//! [`RoutePathSource`].

use thiserror::Error;

use crate::route::{RoutePathError, RouteSet};

#[derive(Debug, Error)]
pub enum SourceError {
    /// The underlying source could not be reached or returned garbage.
    #[error("failed to fetch route geometry: {0}")]
    Fetch(String),
    /// Fetched geometry violates the route path invariants.
    #[error("route geometry is not a usable path: {0}")]
    InvalidPath(#[from] RoutePathError),
}

/// Supplies the route paths a live map view animates.
///
/// Loading is async because a real source is a network fetch; this crate
/// ships a static implementation, and the seam exists so a fetching one can
/// be swapped in without touching the driver.
///
/// The view owning the driver must keep it Idle until a load resolves, and
/// a failed load leaves it Idle permanently: the failure is logged by the
/// caller, and no fallback geometry is silently substituted.
// Handles never leave the view's thread (the whole loop is single-threaded
// cooperative), so the futures carry no Send bound.
#[allow(async_fn_in_trait)]
pub trait RoutePathSource {
    /// Loads the full path set for a view.
    ///
    /// # Errors
    ///
    /// [`SourceError::Fetch`] when the underlying source is unreachable;
    /// [`SourceError::InvalidPath`] when its geometry fails validation.
    async fn load_route_paths(&self) -> Result<RouteSet, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::RoutePath;
    use geo::point;

    struct InlineSource;

    impl RoutePathSource for InlineSource {
        async fn load_route_paths(&self) -> Result<RouteSet, SourceError> {
            let path = RoutePath::new(
                "inline",
                vec![point! { x: -117.82, y: 34.05 }, point! { x: -117.80, y: 34.05 }],
            )?;
            Ok(RouteSet::new(vec![path]))
        }
    }

    struct UnreachableSource;

    impl RoutePathSource for UnreachableSource {
        async fn load_route_paths(&self) -> Result<RouteSet, SourceError> {
            Err(SourceError::Fetch("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_inline_source_loads() {
        let routes = InlineSource.load_route_paths().await.expect("loads");
        assert_eq!(routes.len(), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_reported() {
        let err = UnreachableSource.load_route_paths().await.unwrap_err();
        assert!(matches!(err, SourceError::Fetch(_)));
    }

    #[tokio::test]
    async fn test_invalid_geometry_is_reported() {
        struct Degenerate;
        impl RoutePathSource for Degenerate {
            async fn load_route_paths(&self) -> Result<RouteSet, SourceError> {
                let path = RoutePath::new("one point", vec![point! { x: 0.0, y: 0.0 }])?;
                Ok(RouteSet::new(vec![path]))
            }
        }

        let err = Degenerate.load_route_paths().await.unwrap_err();
        assert!(matches!(
            err,
            SourceError::InvalidPath(RoutePathError::TooFewPoints(1))
        ));
    }
}
