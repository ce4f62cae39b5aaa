//! Point-cloud domain types
//!
//! Provides the point and bounding-volume types shared by the loaders,
//! the spatial index, and the exporter.

mod bounds;
mod point;

pub use bounds::Aabb;
pub use point::{CloudPoint, PointCloud};
