//! GeoJSON loading for country boundaries.
//!
//! Input is a FeatureCollection where each feature has a `properties.name`
//! string and a Polygon or MultiPolygon geometry. Features keep their file
//! order, which is what index-based country selection refers to.

use crate::error::{BoundaryError, Result};
use boundary_types::{Country, CountryGeometry};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use geojson::{Feature, GeoJson, Geometry, Value};
use std::fs;
use std::path::Path;

/// Country boundaries compiled into the crate.
pub const BUNDLED_COUNTRIES: &str = include_str!("../../data/countries.geo.json");

/// Parses the bundled country dataset.
pub fn bundled_countries() -> Result<Vec<Country>> {
    parse_countries(BUNDLED_COUNTRIES)
}

/// Reads and parses a country FeatureCollection from disk.
pub fn load_countries(path: impl AsRef<Path>) -> Result<Vec<Country>> {
    let path = path.as_ref();
    let json = fs::read_to_string(path)?;
    let countries = parse_countries(&json)?;

    log::info!("loaded {} countries from {}", countries.len(), path.display());
    Ok(countries)
}

/// Parses a country FeatureCollection.
///
/// # Examples
///
/// ```
/// use boundary_index::compute::geojson::parse_countries;
///
/// let json = r#"{
///   "type": "FeatureCollection",
///   "features": [{
///     "type": "Feature",
///     "properties": {"name": "Squareland"},
///     "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,1],[0,0]]]}
///   }]
/// }"#;
///
/// let countries = parse_countries(json).unwrap();
/// assert_eq!(countries[0].name(), "Squareland");
/// ```
pub fn parse_countries(json: &str) -> Result<Vec<Country>> {
    let geojson: GeoJson = serde_json::from_str(json)?;

    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(BoundaryError::InvalidFormat(
            "Country data must be a GeoJSON FeatureCollection".to_string(),
        ));
    };

    collection
        .features
        .iter()
        .enumerate()
        .map(|(position, feature)| country_from_feature(position, feature))
        .collect()
}

/// Converts one feature into a [`Country`]; `position` is only used in error messages.
pub fn country_from_feature(position: usize, feature: &Feature) -> Result<Country> {
    let name = feature
        .property("name")
        .and_then(|value| value.as_str())
        .ok_or_else(|| {
            BoundaryError::InvalidFormat(format!(
                "Feature {} has no string properties.name",
                position
            ))
        })?;

    let geometry = feature.geometry.as_ref().ok_or_else(|| {
        BoundaryError::InvalidFormat(format!("Feature {} ({}) has no geometry", position, name))
    })?;

    let geometry = country_geometry(geometry)
        .map_err(|e| BoundaryError::InvalidFormat(format!("Feature {} ({}): {}", position, name, e)))?;

    if geometry.polygon_count() == 0 {
        log::warn!("country {} has an empty MultiPolygon", name);
    }

    Ok(Country::new(name, geometry))
}

/// Converts a Polygon or MultiPolygon geometry.
pub fn country_geometry(geometry: &Geometry) -> Result<CountryGeometry> {
    match &geometry.value {
        Value::Polygon(rings) => Ok(CountryGeometry::Polygon(polygon_from_rings(rings)?)),
        Value::MultiPolygon(polygons) => {
            let polygons = polygons
                .iter()
                .map(|rings| polygon_from_rings(rings))
                .collect::<Result<Vec<_>>>()?;
            Ok(CountryGeometry::MultiPolygon(MultiPolygon::new(polygons)))
        }
        other => Err(BoundaryError::InvalidInput(format!(
            "Expected Polygon or MultiPolygon geometry, got {}",
            geometry_kind(other)
        ))),
    }
}

/// Builds a polygon from GeoJSON rings: the first is the exterior, the rest are holes.
pub fn polygon_from_rings(rings: &[Vec<Vec<f64>>]) -> Result<Polygon> {
    let Some((exterior, interiors)) = rings.split_first() else {
        return Err(BoundaryError::InvalidInput(
            "Polygon must have at least one ring".to_string(),
        ));
    };

    let exterior = ring_from_positions(exterior)?;
    let interiors = interiors
        .iter()
        .map(|ring| ring_from_positions(ring))
        .collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

fn ring_from_positions(positions: &[Vec<f64>]) -> Result<LineString> {
    let coords = positions
        .iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(BoundaryError::InvalidInput(
                    "Coordinate must have at least 2 values".to_string(),
                ));
            }
            Ok(Coord {
                x: position[0],
                y: position[1],
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(LineString::from(coords))
}

fn geometry_kind(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(features: &str) -> String {
        format!(r#"{{"type":"FeatureCollection","features":[{}]}}"#, features)
    }

    const SQUARE: &str = r#"{"type":"Feature","properties":{"name":"Squareland"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0],[4.0,0.0],[4.0,4.0],[0.0,4.0],[0.0,0.0]],[[1.0,1.0],[2.0,1.0],[2.0,2.0],[1.0,2.0],[1.0,1.0]]]}}"#;

    const ISLANDS: &str = r#"{"type":"Feature","properties":{"name":"Islands","iso":"IS"},"geometry":{"type":"MultiPolygon","coordinates":[[[[10.0,10.0],[11.0,10.0],[11.0,11.0],[10.0,10.0]]],[[[20.0,20.0],[22.0,20.0],[22.0,22.0],[20.0,20.0]]]]}}"#;

    #[test]
    fn test_parse_polygon_with_hole() {
        let countries = parse_countries(&collection(SQUARE)).unwrap();
        assert_eq!(countries.len(), 1);

        let country = &countries[0];
        assert_eq!(country.name(), "Squareland");
        let CountryGeometry::Polygon(polygon) = country.geometry() else {
            panic!("expected a single polygon");
        };
        assert_eq!(polygon.exterior().coords().count(), 5);
        assert_eq!(polygon.interiors().len(), 1);
    }

    #[test]
    fn test_parse_multipolygon_keeps_parts_and_order() {
        let countries = parse_countries(&collection(&format!("{},{}", SQUARE, ISLANDS))).unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].name(), "Squareland");
        assert_eq!(countries[1].name(), "Islands");
        assert!(countries[1].geometry().is_multi());
        assert_eq!(countries[1].geometry().polygon_count(), 2);
    }

    #[test]
    fn test_third_coordinate_is_ignored() {
        let feature = r#"{"type":"Feature","properties":{"name":"Hills"},"geometry":{"type":"Polygon","coordinates":[[[0.0,0.0,5.0],[1.0,0.0,5.0],[1.0,1.0,5.0],[0.0,0.0,5.0]]]}}"#;
        let countries = parse_countries(&collection(feature)).unwrap();
        let polygon = countries[0].polygons().next().unwrap();
        assert_eq!(polygon.exterior().0[1], Coord { x: 1.0, y: 0.0 });
    }

    #[test]
    fn test_missing_name_is_an_error() {
        let feature = r#"{"type":"Feature","properties":{"NAME":"Wrong"},"geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}"#;
        let err = parse_countries(&collection(feature)).unwrap_err();
        assert!(matches!(err, BoundaryError::InvalidFormat(msg) if msg.contains("properties.name")));
    }

    #[test]
    fn test_unsupported_geometry_is_an_error() {
        let feature = r#"{"type":"Feature","properties":{"name":"Dot"},"geometry":{"type":"Point","coordinates":[0.0,0.0]}}"#;
        let err = parse_countries(&collection(feature)).unwrap_err();
        assert!(matches!(err, BoundaryError::InvalidFormat(msg) if msg.contains("Point")));
    }

    #[test]
    fn test_missing_geometry_is_an_error() {
        let feature = r#"{"type":"Feature","properties":{"name":"Nowhere"},"geometry":null}"#;
        let err = parse_countries(&collection(feature)).unwrap_err();
        assert!(matches!(err, BoundaryError::InvalidFormat(msg) if msg.contains("Nowhere")));
    }

    #[test]
    fn test_non_collection_is_rejected() {
        let err = parse_countries(SQUARE).unwrap_err();
        assert!(matches!(err, BoundaryError::InvalidFormat(_)));
    }

    #[test]
    fn test_malformed_json_is_rejected() {
        let err = parse_countries("{not json").unwrap_err();
        assert!(matches!(err, BoundaryError::Json(_)));
    }

    #[test]
    fn test_polygon_without_rings_is_rejected() {
        assert!(polygon_from_rings(&[]).is_err());
    }

    #[test]
    fn test_bundled_dataset_parses() {
        let countries = bundled_countries().unwrap();
        assert!(countries.len() >= 10);
        assert!(
            countries
                .iter()
                .any(|c| c.name() == "United States of America" && c.geometry().is_multi())
        );
    }
}
