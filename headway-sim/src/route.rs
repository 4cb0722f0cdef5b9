//! # Route path model
//!
//! A route path is the ordered (longitude, latitude) sequence a simulated
//! vehicle travels around indefinitely. Paths are validated and measured at
//! construction time and never mutated afterwards; the sampler and driver
//! treat them as read-only shared data.

use geo::{Distance, Haversine, Point};
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RoutePathError {
    #[error("a route path needs at least 2 points; got {0}")]
    TooFewPoints(usize),
    #[error("consecutive duplicate point at index {0}")]
    DuplicatePoint(usize),
}

/// An ordered sequence of geographic points a simulated vehicle travels
/// repeatedly.
///
/// Invariants, enforced by [`RoutePath::new`]: at least two points, and no
/// two consecutive points are equal. The loop may be closed (last point
/// repeats the first) or open; sampling wraps around either way.
///
/// Segment lengths are haversine distances in meters, precomputed once.
#[derive(Clone, Debug)]
pub struct RoutePath {
    name: String,
    points: Vec<Point<f64>>,
    segment_lengths_m: Vec<f64>,
    total_length_m: f64,
}

impl RoutePath {
    /// Validates and measures a path.
    ///
    /// # Errors
    ///
    /// Fails if the path has fewer than 2 points, or if any point repeats
    /// its immediate predecessor.
    pub fn new(name: impl Into<String>, points: Vec<Point<f64>>) -> Result<Self, RoutePathError> {
        if points.len() < 2 {
            return Err(RoutePathError::TooFewPoints(points.len()));
        }
        if let Some((i, _)) = points.iter().tuple_windows().find_position(|(a, b)| a == b) {
            return Err(RoutePathError::DuplicatePoint(i + 1));
        }

        let segment_lengths_m: Vec<f64> = points
            .iter()
            .tuple_windows()
            .map(|(a, b)| Haversine.distance(*a, *b))
            .collect();
        let total_length_m = segment_lengths_m.iter().sum();

        Ok(Self {
            name: name.into(),
            points,
            segment_lengths_m,
            total_length_m,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &[Point<f64>] {
        &self.points
    }

    pub(crate) fn segment_lengths_m(&self) -> &[f64] {
        &self.segment_lengths_m
    }

    /// Total haversine length of the path in meters.
    pub fn total_length_m(&self) -> f64 {
        self.total_length_m
    }

    pub fn first_point(&self) -> Point<f64> {
        self.points[0]
    }
}

/// The full set of loaded route paths for a live map view.
///
/// Read-only once constructed. Besides lookup, its job is the speed
/// normalization policy: [`RouteSet::normalization_factor`] scales the
/// common base speed per route so that every route's loop takes the same
/// wall-clock period regardless of its length.
#[derive(Clone, Debug)]
pub struct RouteSet {
    paths: Vec<RoutePath>,
    max_length_m: f64,
}

impl RouteSet {
    pub fn new(paths: Vec<RoutePath>) -> Self {
        let max_length_m = paths.iter().map(RoutePath::total_length_m).fold(0.0, f64::max);
        Self { paths, max_length_m }
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&RoutePath> {
        self.paths.get(index)
    }

    pub fn paths(&self) -> &[RoutePath] {
        &self.paths
    }

    /// Longest path length in the set, in meters. 0 for an empty set.
    pub fn max_length_m(&self) -> f64 {
        self.max_length_m
    }

    /// Per-path speed scale: `path_length / max_length`.
    ///
    /// Multiplying the base speed by this factor makes a loop of any length
    /// complete in `max_length / base_speed` seconds, so vehicles on short
    /// and long routes stay in step. This is deliberate policy, not an
    /// artifact; changing it changes the on-screen choreography.
    ///
    /// Degenerate paths (shorter than `min_loop_length_m`) get a factor of
    /// 1.0; the sampler pins them in place anyway.
    pub fn normalization_factor(&self, path: &RoutePath, min_loop_length_m: f64) -> f64 {
        if path.total_length_m() < min_loop_length_m || self.max_length_m < min_loop_length_m {
            1.0
        } else {
            path.total_length_m() / self.max_length_m
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::point;

    fn path(name: &str, coords: &[(f64, f64)]) -> RoutePath {
        RoutePath::new(
            name,
            coords.iter().map(|&(x, y)| point! { x: x, y: y }).collect(),
        )
        .expect("valid test path")
    }

    #[test]
    fn test_rejects_single_point() {
        let result = RoutePath::new("stub", vec![point! { x: -117.8, y: 34.05 }]);
        assert_eq!(result.unwrap_err(), RoutePathError::TooFewPoints(1));
    }

    #[test]
    fn test_rejects_consecutive_duplicates() {
        let result = RoutePath::new(
            "stutter",
            vec![
                point! { x: -117.8, y: 34.05 },
                point! { x: -117.8, y: 34.05 },
                point! { x: -117.7, y: 34.05 },
            ],
        );
        assert_eq!(result.unwrap_err(), RoutePathError::DuplicatePoint(1));
    }

    #[test]
    fn test_allows_closed_loop() {
        // First == last is fine; only *consecutive* repeats are rejected.
        let p = path(
            "loop",
            &[(-117.8, 34.05), (-117.7, 34.05), (-117.7, 34.10), (-117.8, 34.05)],
        );
        assert_eq!(p.points().len(), 4);
    }

    #[test]
    fn test_total_length_sums_segments() {
        let p = path("l", &[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let sum: f64 = p.segment_lengths_m().iter().sum();
        assert!((p.total_length_m() - sum).abs() < 1e-9);
        // One degree of longitude at the equator is roughly 111 km.
        assert!(p.total_length_m() > 200_000.0);
        assert!(p.total_length_m() < 250_000.0);
    }

    #[test]
    fn test_normalization_equalizes_loop_period() {
        let short = path("short", &[(0.0, 0.0), (0.01, 0.0), (0.0, 0.0)]);
        let long = path("long", &[(0.0, 0.0), (0.02, 0.0), (0.0, 0.0)]);
        let set = RouteSet::new(vec![short.clone(), long.clone()]);

        let f_short = set.normalization_factor(&short, 1.0);
        let f_long = set.normalization_factor(&long, 1.0);
        assert!((f_long - 1.0).abs() < 1e-9);
        assert!((f_short - 0.5).abs() < 1e-3);

        // Loop period = length / (speed * factor); equal across routes.
        let speed = 10.0;
        let period_short = short.total_length_m() / (speed * f_short);
        let period_long = long.total_length_m() / (speed * f_long);
        assert!((period_short - period_long).abs() < 1e-6 * period_long);
    }

    #[test]
    fn test_degenerate_path_factor_is_one() {
        let tiny = path("tiny", &[(0.0, 0.0), (1e-9, 0.0)]);
        let long = path("long", &[(0.0, 0.0), (0.02, 0.0)]);
        let set = RouteSet::new(vec![tiny.clone(), long]);
        let factor = set.normalization_factor(&tiny, 1.0);
        assert!((factor - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_set() {
        let set = RouteSet::new(Vec::new());
        assert!(set.is_empty());
        assert!(set.get(0).is_none());
        assert!(set.max_length_m() < f64::EPSILON);
    }
}
