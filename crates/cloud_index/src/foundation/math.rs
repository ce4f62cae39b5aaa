//! Math utilities and types
//!
//! Provides the fundamental math types for point-cloud geometry. LAS
//! coordinates are 64-bit after applying the header scale and offset, so
//! everything here is `f64`.

pub use nalgebra::Vector3;

/// 3D vector type
pub type Vec3 = Vector3<f64>;

/// 3D point type
pub type Point3 = nalgebra::Point3<f64>;
