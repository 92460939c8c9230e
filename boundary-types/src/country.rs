use geo::{MultiPolygon, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Boundary geometry of a country: one polygon or a collection of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CountryGeometry {
    Polygon(Polygon),
    MultiPolygon(MultiPolygon),
}

impl CountryGeometry {
    /// Constituent polygons in their original order.
    ///
    /// ```
    /// use boundary_types::CountryGeometry;
    /// use geo::{MultiPolygon, polygon};
    ///
    /// let island = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0), (x: 0.0, y: 0.0)];
    /// let geometry = CountryGeometry::MultiPolygon(MultiPolygon::new(vec![island.clone(), island]));
    /// assert_eq!(geometry.polygons().count(), 2);
    /// ```
    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        let slice: &[Polygon] = match self {
            CountryGeometry::Polygon(polygon) => std::slice::from_ref(polygon),
            CountryGeometry::MultiPolygon(multi) => &multi.0,
        };
        slice.iter()
    }

    pub fn polygon_count(&self) -> usize {
        match self {
            CountryGeometry::Polygon(_) => 1,
            CountryGeometry::MultiPolygon(multi) => multi.0.len(),
        }
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, CountryGeometry::MultiPolygon(_))
    }
}

impl From<Polygon> for CountryGeometry {
    fn from(polygon: Polygon) -> Self {
        CountryGeometry::Polygon(polygon)
    }
}

impl From<MultiPolygon> for CountryGeometry {
    fn from(multi: MultiPolygon) -> Self {
        CountryGeometry::MultiPolygon(multi)
    }
}

/// A named country boundary, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub geometry: CountryGeometry,
}

impl Country {
    pub fn new(name: impl Into<String>, geometry: impl Into<CountryGeometry>) -> Self {
        Self {
            name: name.into(),
            geometry: geometry.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn geometry(&self) -> &CountryGeometry {
        &self.geometry
    }

    pub fn polygons(&self) -> impl Iterator<Item = &Polygon> {
        self.geometry.polygons()
    }
}

/// A point sampled from inside one of a country's polygons.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplePoint {
    pub point: Point,
    pub country: String,
}

impl SamplePoint {
    pub fn new(point: Point, country: impl Into<String>) -> Self {
        Self {
            point,
            country: country.into(),
        }
    }

    pub fn point(&self) -> &Point {
        &self.point
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// WKT rendering of the coordinate, e.g. `POINT (2.35 48.85)`.
    pub fn wkt(&self) -> String {
        format!("POINT ({} {})", self.point.x(), self.point.y())
    }
}

impl fmt::Display for SamplePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.wkt(), self.country)
    }
}
