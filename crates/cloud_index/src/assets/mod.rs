//! Asset loading
//!
//! File-format front ends that turn on-disk point data into [`PointCloud`]
//! values for indexing.
//!
//! [`PointCloud`]: crate::cloud::PointCloud

mod las_loader;

pub use las_loader::{LasError, LasLoader};
