pub mod rtree;
pub use rtree::{BoundaryIndex, EntryId, IndexStats, IndexedBBox};
