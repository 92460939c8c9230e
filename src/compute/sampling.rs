//! Random interior points by rejection sampling.
//!
//! Candidates are drawn uniformly from the polygon's bounding rectangle and kept
//! only when the polygon strictly contains them (`geo::Contains` excludes the
//! boundary and holes). The generator is re-seeded on every [`PointSampler::sample`]
//! call, so a polygon always yields the same points for a given seed no matter
//! how many polygons were sampled before it.

use crate::error::{BoundaryError, Result};
use boundary_types::BoundingBox2D;
use geo::{Area, BoundingRect, Contains, Point, Polygon};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded rejection sampler for polygon interiors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointSampler {
    seed: u64,
    max_attempts: Option<u64>,
}

impl PointSampler {
    /// Sampler with no attempt cap.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            max_attempts: None,
        }
    }

    /// Cap the number of candidate draws per [`sample`](Self::sample) call.
    ///
    /// `None` keeps drawing until enough points are accepted.
    pub fn with_max_attempts(mut self, max_attempts: Option<u64>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    /// Draw `count` points lying strictly inside `polygon`.
    ///
    /// # Errors
    ///
    /// - [`BoundaryError::DegeneratePolygon`] when the polygon has no area or its
    ///   bounding rectangle is too wide to draw from
    /// - [`BoundaryError::SamplingExhausted`] when the attempt cap runs out
    ///
    /// # Examples
    ///
    /// ```
    /// use boundary_index::compute::sampling::PointSampler;
    /// use geo::{Contains, polygon};
    ///
    /// let triangle = polygon![(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 0.0, y: 4.0), (x: 0.0, y: 0.0)];
    /// let points = PointSampler::new(7).sample(&triangle, 10).unwrap();
    ///
    /// assert_eq!(points.len(), 10);
    /// assert!(points.iter().all(|p| triangle.contains(p)));
    /// ```
    pub fn sample(&self, polygon: &Polygon, count: usize) -> Result<Vec<Point>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let Some(bounds) = polygon.bounding_rect() else {
            return Err(BoundaryError::DegeneratePolygon(
                "polygon has an empty exterior ring".to_string(),
            ));
        };

        let extent = BoundingBox2D::from_rect(bounds);
        if !(extent.width().is_finite() && extent.height().is_finite()) {
            return Err(BoundaryError::DegeneratePolygon(format!(
                "polygon spanning ({}, {})..({}, {}) overflows f64 width or height",
                bounds.min().x,
                bounds.min().y,
                bounds.max().x,
                bounds.max().y
            )));
        }

        if polygon.unsigned_area() == 0.0 {
            return Err(BoundaryError::DegeneratePolygon(format!(
                "polygon spanning ({}, {})..({}, {}) has zero area",
                bounds.min().x,
                bounds.min().y,
                bounds.max().x,
                bounds.max().y
            )));
        }

        let (min, max) = (bounds.min(), bounds.max());
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut points = Vec::with_capacity(count);
        let mut attempts: u64 = 0;

        while points.len() < count {
            if let Some(cap) = self.max_attempts
                && attempts >= cap
            {
                return Err(BoundaryError::SamplingExhausted {
                    requested: count,
                    accepted: points.len(),
                    attempts,
                });
            }
            attempts += 1;

            let candidate = Point::new(rng.gen_range(min.x..=max.x), rng.gen_range(min.y..=max.y));
            if polygon.contains(&candidate) {
                points.push(candidate);
            }
        }

        if let Some(cap) = self.max_attempts
            && self.is_near_cap(attempts)
        {
            log::warn!(
                "sampled {} points in {} attempts, close to the cap of {}",
                count,
                attempts,
                cap
            );
        } else {
            log::trace!(
                "sampled {} points in {} attempts (seed {})",
                count,
                attempts,
                self.seed
            );
        }

        Ok(points)
    }

    /// True when `attempts` used more than 90% of the cap.
    fn is_near_cap(&self, attempts: u64) -> bool {
        self.max_attempts
            .is_some_and(|cap| u128::from(attempts) * 10 > u128::from(cap) * 9)
    }
}

/// Draw `count` points inside `polygon` with an uncapped sampler seeded by `seed`.
pub fn random_points_in_polygon(polygon: &Polygon, count: usize, seed: u64) -> Result<Vec<Point>> {
    PointSampler::new(seed).sample(polygon, count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{LineString, polygon};

    fn square_with_hole() -> Polygon {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (0.0, 10.0),
                (0.0, 0.0),
            ]),
            vec![LineString::from(vec![
                (2.0, 2.0),
                (8.0, 2.0),
                (8.0, 8.0),
                (2.0, 8.0),
                (2.0, 2.0),
            ])],
        )
    }

    #[test]
    fn test_points_lie_inside_polygon() {
        let triangle = polygon![
            (x: 0.0, y: 0.0),
            (x: 10.0, y: 0.0),
            (x: 0.0, y: 10.0),
            (x: 0.0, y: 0.0),
        ];

        let points = PointSampler::new(1).sample(&triangle, 200).unwrap();
        assert_eq!(points.len(), 200);
        for point in &points {
            assert!(triangle.contains(point), "{:?} escaped the triangle", point);
        }
    }

    #[test]
    fn test_points_avoid_holes() {
        let polygon = square_with_hole();
        let hole = polygon![
            (x: 2.0, y: 2.0),
            (x: 8.0, y: 2.0),
            (x: 8.0, y: 8.0),
            (x: 2.0, y: 8.0),
            (x: 2.0, y: 2.0),
        ];

        let points = PointSampler::new(3).sample(&polygon, 100).unwrap();
        assert!(points.iter().all(|p| polygon.contains(p)));
        assert!(points.iter().all(|p| !hole.contains(p)));
    }

    #[test]
    fn test_same_seed_same_points() {
        let polygon = square_with_hole();
        let first = random_points_in_polygon(&polygon, 25, 42).unwrap();
        let second = random_points_in_polygon(&polygon, 25, 42).unwrap();
        assert_eq!(first, second);

        let other_seed = random_points_in_polygon(&polygon, 25, 43).unwrap();
        assert_ne!(first, other_seed);
    }

    #[test]
    fn test_sampler_is_reseeded_per_call() {
        let polygon = square_with_hole();
        let sampler = PointSampler::new(9);

        let first = sampler.sample(&polygon, 5).unwrap();
        let again = sampler.sample(&polygon, 5).unwrap();
        assert_eq!(first, again);
    }

    #[test]
    fn test_zero_count_draws_nothing() {
        let degenerate = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ];
        let points = PointSampler::new(1).sample(&degenerate, 0).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_zero_area_polygon_is_rejected() {
        let collinear = polygon![
            (x: 0.0, y: 0.0),
            (x: 1.0, y: 1.0),
            (x: 2.0, y: 2.0),
            (x: 0.0, y: 0.0),
        ];
        let result = PointSampler::new(1).sample(&collinear, 1);
        assert!(matches!(result, Err(BoundaryError::DegeneratePolygon(_))));

        let empty = Polygon::new(LineString::new(vec![]), vec![]);
        let result = PointSampler::new(1).sample(&empty, 1);
        assert!(matches!(result, Err(BoundaryError::DegeneratePolygon(_))));
    }

    #[test]
    fn test_attempt_cap_reports_progress() {
        // A sliver covering a tiny fraction of its bounding rectangle
        let sliver = polygon![
            (x: 0.0, y: 0.0),
            (x: 1000.0, y: 1000.0),
            (x: 1000.0, y: 1000.001),
            (x: 0.0, y: 0.0),
        ];

        let result = PointSampler::new(1)
            .with_max_attempts(Some(10))
            .sample(&sliver, 5);

        match result {
            Err(BoundaryError::SamplingExhausted {
                requested,
                accepted,
                attempts,
            }) => {
                assert_eq!(requested, 5);
                assert!(accepted < 5);
                assert_eq!(attempts, 10);
            }
            other => panic!("expected SamplingExhausted, got {:?}", other),
        }
    }

    #[test]
    fn test_near_cap_threshold() {
        let sampler = PointSampler::new(1).with_max_attempts(Some(100));
        assert!(!sampler.is_near_cap(1));
        assert!(!sampler.is_near_cap(90));
        assert!(sampler.is_near_cap(91));
        assert!(sampler.is_near_cap(100));

        let uncapped = PointSampler::new(1);
        assert!(!uncapped.is_near_cap(u64::MAX));
    }

    #[test]
    fn test_overflowing_extent_is_rejected() {
        let huge = polygon![
            (x: -1e308, y: -1.0),
            (x: 1e308, y: -1.0),
            (x: 1e308, y: 1.0),
            (x: -1e308, y: 1.0),
            (x: -1e308, y: -1.0),
        ];
        let result = PointSampler::new(1).sample(&huge, 1);
        assert!(matches!(result, Err(BoundaryError::DegeneratePolygon(_))));

        // Large but representable extents still sample
        let wide = polygon![
            (x: -1e307, y: -1.0),
            (x: 1e307, y: -1.0),
            (x: 1e307, y: 1.0),
            (x: -1e307, y: 1.0),
            (x: -1e307, y: -1.0),
        ];
        assert_eq!(PointSampler::new(1).sample(&wide, 3).unwrap().len(), 3);
    }

    #[test]
    fn test_generous_cap_succeeds() {
        let polygon = square_with_hole();
        let points = PointSampler::new(5)
            .with_max_attempts(Some(10_000))
            .sample(&polygon, 50)
            .unwrap();
        assert_eq!(points.len(), 50);
    }
}
