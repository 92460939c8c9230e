//! R*-tree of labelled bounding boxes.
//!
//! Every entry carries a unique [`EntryId`], its bounding box and a text label.
//! Point lookups probe the tree with a zero-area box at the point and return
//! every entry whose box touches it; callers decide which labels count as a hit.
//!
//! Deletion is keyed by the id *and* the box the entry was inserted with. The
//! box locates the entry in the tree and the id picks it out among entries
//! sharing that box, so callers have to keep both around from insertion time.
//!
//! # Example
//!
//! ```rust
//! use boundary_index::compute::spatial::BoundaryIndex;
//! use boundary_index::{BoundingBox2D, Point};
//!
//! let mut index = BoundaryIndex::new();
//! let bbox = BoundingBox2D::new(-5.0, 41.0, 10.0, 51.0);
//! let id = index.insert(bbox, "France").unwrap();
//!
//! assert!(index.has_label_at(&Point::new(2.35, 48.85), "France"));
//! assert!(index.delete(id, &bbox));
//! assert!(!index.has_label_at(&Point::new(2.35, 48.85), "France"));
//! ```

use crate::error::{BoundaryError, Result};
use boundary_types::BoundingBox2D;
use geo::Point;
use rstar::{AABB, RTree, RTreeObject};
use rustc_hash::FxHashSet;
use std::fmt;
use uuid::Uuid;

/// Identifier of one index entry. Freshly minted ids are time-ordered UUIDs (v7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Indexed bounding box for the R*-tree.
#[derive(Debug, Clone)]
pub struct IndexedBBox {
    pub id: EntryId,
    pub bbox: BoundingBox2D,
    pub label: String,
}

impl RTreeObject for IndexedBBox {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        envelope_of(&self.bbox)
    }
}

fn envelope_of(bbox: &BoundingBox2D) -> AABB<[f64; 2]> {
    let (min, max) = bbox.corners();
    AABB::from_corners(min, max)
}

// Entries are identified by id and box; the label is payload.
impl PartialEq for IndexedBBox {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.bbox == other.bbox
    }
}

/// Spatial index mapping bounding boxes to labels.
pub struct BoundaryIndex {
    tree: RTree<IndexedBBox>,
    // Live ids, used to refuse duplicates
    live: FxHashSet<EntryId>,
}

impl BoundaryIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            live: FxHashSet::default(),
        }
    }

    /// Insert `bbox` under a freshly generated id and return that id.
    pub fn insert(&mut self, bbox: BoundingBox2D, label: impl Into<String>) -> Result<EntryId> {
        let id = EntryId::generate();
        self.insert_with_id(id, bbox, label)?;
        Ok(id)
    }

    /// Insert `bbox` under a caller-chosen id.
    ///
    /// Fails if the id is already live or the box has non-finite coordinates.
    pub fn insert_with_id(
        &mut self,
        id: EntryId,
        bbox: BoundingBox2D,
        label: impl Into<String>,
    ) -> Result<()> {
        if !bbox.is_finite() {
            return Err(BoundaryError::InvalidInput(format!(
                "Bounding box must have finite coordinates, got: {:?}",
                bbox.corners()
            )));
        }

        if self.live.contains(&id) {
            return Err(BoundaryError::DuplicateEntry(id));
        }

        self.live.insert(id);
        self.tree.insert(IndexedBBox {
            id,
            bbox,
            label: label.into(),
        });

        Ok(())
    }

    /// Remove the entry inserted as (`id`, `bbox`).
    ///
    /// Returns `false` when no such entry exists, including when `id` is live
    /// but was inserted with a different box.
    pub fn delete(&mut self, id: EntryId, bbox: &BoundingBox2D) -> bool {
        let probe = IndexedBBox {
            id,
            bbox: *bbox,
            label: String::new(),
        };

        let removed = self.tree.remove(&probe).is_some();
        if removed {
            self.live.remove(&id);
        }

        removed
    }

    /// Entries whose box intersects `bbox`, touching edges included.
    pub fn intersecting(&self, bbox: &BoundingBox2D) -> Vec<&IndexedBBox> {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(bbox))
            .collect()
    }

    /// Entries whose box contains `point`.
    pub fn query_point(&self, point: &Point) -> Vec<&IndexedBBox> {
        self.intersecting(&BoundingBox2D::from_point(point))
    }

    /// True when at least one entry containing `point` carries `label`.
    pub fn has_label_at(&self, point: &Point, label: &str) -> bool {
        self.tree
            .locate_in_envelope_intersecting(&envelope_of(&BoundingBox2D::from_point(point)))
            .any(|entry| entry.label == label)
    }

    pub fn contains_id(&self, id: &EntryId) -> bool {
        self.live.contains(id)
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &IndexedBBox> {
        self.tree.iter()
    }

    /// Get statistics about the index.
    pub fn stats(&self) -> IndexStats {
        let labels: FxHashSet<&str> = self.tree.iter().map(|e| e.label.as_str()).collect();

        IndexStats {
            entries: self.tree.size(),
            labels: labels.len(),
        }
    }
}

impl Default for BoundaryIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    /// Number of entries in the tree
    pub entries: usize,
    /// Number of distinct labels across all entries
    pub labels: usize,
}
