//! # boundary-types
//!
//! Plain data types shared by the `boundary-index` crate:
//!
//! - **Bounding boxes**: `BoundingBox2D`, a `geo::Rect` wrapper used as the R-tree envelope
//! - **Countries**: `Country` and `CountryGeometry` (one polygon or several)
//! - **Sample points**: `SamplePoint`, a point tagged with the country that produced it
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use boundary_types::bbox::BoundingBox2D;
//! use geo::Point;
//!
//! let bbox = BoundingBox2D::new(10.0, 10.0, -10.0, -10.0);
//! assert_eq!(bbox.corners(), ([-10.0, -10.0], [10.0, 10.0]));
//!
//! let probe = BoundingBox2D::from_point(&Point::new(1.0, 2.0));
//! assert_eq!(probe.corners(), ([1.0, 2.0], [1.0, 2.0]));
//! ```

pub mod bbox;
pub mod country;

pub use bbox::BoundingBox2D;
pub use country::{Country, CountryGeometry, SamplePoint};
