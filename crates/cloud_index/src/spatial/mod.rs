//! Spatial partitioning data structures
//!
//! Provides octree-based spatial indexing for point clouds: point
//! location, region bucketing, and leaf-level export.

mod octree;

pub use octree::{Leaves, Octree, OctreeNode, SplitPolicy};
