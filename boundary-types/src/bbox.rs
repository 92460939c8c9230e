use geo::{BoundingRect, Point, Polygon, Rect};
use serde::{Deserialize, Serialize};

/// A 2D axis-aligned bounding box.
///
/// Represents a rectangular area defined by minimum and maximum coordinates.
/// This is a wrapper around `geo::Rect`, so the corners are always normalized:
/// `min_x <= max_x` and `min_y <= max_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum coordinates.
    ///
    /// # Arguments
    ///
    /// * `min_x` - Minimum longitude/x coordinate
    /// * `min_y` - Minimum latitude/y coordinate
    /// * `max_x` - Maximum longitude/x coordinate
    /// * `max_y` - Maximum latitude/y coordinate
    ///
    /// # Examples
    ///
    /// ```
    /// use boundary_types::bbox::BoundingBox2D;
    ///
    /// let bbox = BoundingBox2D::new(-124.7, 24.5, -66.9, 49.4);
    /// assert_eq!(bbox.min_x(), -124.7);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_x, y: min_y },
                geo::coord! { x: max_x, y: max_y },
            ),
        }
    }

    /// Create a bounding box from a `geo::Rect`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Zero-area box sitting exactly on `point`.
    ///
    /// This is the probe used for point queries against the index.
    ///
    /// ```
    /// use boundary_types::bbox::BoundingBox2D;
    /// use geo::Point;
    ///
    /// let probe = BoundingBox2D::from_point(&Point::new(3.0, 4.0));
    /// assert_eq!(probe.width(), 0.0);
    /// assert_eq!(probe.min_x(), probe.max_x());
    /// ```
    pub fn from_point(point: &Point) -> Self {
        Self::new(point.x(), point.y(), point.x(), point.y())
    }

    /// Bounding box of a polygon, `None` when the exterior ring is empty.
    pub fn of_polygon(polygon: &Polygon) -> Option<Self> {
        polygon.bounding_rect().map(Self::from_rect)
    }

    /// Get the minimum x coordinate.
    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    /// Get the minimum y coordinate.
    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    /// Get the maximum x coordinate.
    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    /// Get the maximum y coordinate.
    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    /// Horizontal extent. Infinite when the span overflows `f64`.
    pub fn width(&self) -> f64 {
        self.max_x() - self.min_x()
    }

    pub fn height(&self) -> f64 {
        self.max_y() - self.min_y()
    }

    /// True when all four coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.min_x().is_finite()
            && self.min_y().is_finite()
            && self.max_x().is_finite()
            && self.max_y().is_finite()
    }

    /// Corners as `[min_x, min_y]`, `[max_x, max_y]`, the layout `rstar` envelopes use.
    pub fn corners(&self) -> ([f64; 2], [f64; 2]) {
        (
            [self.min_x(), self.min_y()],
            [self.max_x(), self.max_y()],
        )
    }
}
