//! GeoJSON loading, interior point sampling and the bounding-box index.

pub mod geojson;
pub mod sampling;
pub mod spatial;
