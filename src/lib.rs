//! Spatial-index deletion check over country boundaries.
//!
//! Loads country polygons from GeoJSON, indexes one bounding box per polygon in
//! an R*-tree labelled with the country name, samples random interior points,
//! and checks that every point resolves to its own country. One country's
//! entries are then deleted and the check is repeated: only that country's
//! points should lose their match.
//!
//! ```rust
//! use boundary_index::{DemoConfig, ScenarioBuilder};
//!
//! let report = ScenarioBuilder::new()
//!     .config(DemoConfig::default().with_remove_name("Japan"))
//!     .run()?;
//!
//! assert!(report.missing.iter().all(|p| p.country == "Japan"));
//! for line in report.lines() {
//!     println!("{}", line);
//! }
//! # Ok::<(), boundary_index::BoundaryError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod error;
pub mod scenario;

pub use builder::{CountrySource, ScenarioBuilder};
pub use config::{CountrySelector, DemoConfig};
pub use error::{BoundaryError, Result};
pub use scenario::{DeletionReport, DeletionScenario, TrackedEntry};

pub use boundary_types::{BoundingBox2D, Country, CountryGeometry, SamplePoint};
pub use geo::{MultiPolygon, Point, Polygon};

pub use compute::geojson::{bundled_countries, load_countries, parse_countries};
pub use compute::sampling::{PointSampler, random_points_in_polygon};
pub use compute::spatial::{BoundaryIndex, EntryId, IndexStats, IndexedBBox};

/// Common imports
pub mod prelude {
    pub use crate::{BoundaryError, DemoConfig, Result, ScenarioBuilder};

    pub use crate::{BoundingBox2D, Country, CountryGeometry, SamplePoint};

    pub use crate::{BoundaryIndex, DeletionReport, DeletionScenario, PointSampler};

    pub use crate::CountrySelector;

    pub use geo::{MultiPolygon, Point, Polygon};
}
