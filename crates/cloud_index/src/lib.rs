//! # Cloud Index
//!
//! Octree spatial indexing for LAS point clouds.
//!
//! ## Features
//!
//! - **Octree Core**: Lazy subdivision, point location, depth-first leaf
//!   enumeration
//! - **Split Policies**: Per-leaf point limit or fixed depth limit
//! - **LAS Loading**: Scaled or raw grid coordinates, intensity and RGB
//!   payloads
//! - **Persistence**: RON export of populated leaves keyed by cell center
//!
//! ## Quick Start
//!
//! ```rust
//! use cloud_index::prelude::*;
//!
//! let mut octree = Octree::new(Point3::origin(), 8.0, SplitPolicy::MaxPointsPerLeaf(2));
//! octree.insert(Point3::new(1.0, 1.0, 1.0));
//! octree.insert(Point3::new(-1.0, 2.0, 0.5));
//! octree.insert(Point3::new(1.0, 1.5, 0.9));
//!
//! for leaf in octree.leaves() {
//!     println!("{} points around {:?}", leaf.points().len(), leaf.center());
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]

pub mod assets;
pub mod cloud;
pub mod config;
pub mod export;
pub mod foundation;
pub mod spatial;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        assets::{LasError, LasLoader},
        cloud::{Aabb, CloudPoint, PointCloud},
        config::{Config, ConfigError, IndexerConfig},
        export::{leaf_records, save_leaves, LeafRecord},
        foundation::math::{Point3, Vec3},
        spatial::{Octree, OctreeNode, SplitPolicy},
    };
}
