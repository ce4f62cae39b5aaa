//! LAS file loader for lidar point clouds

use crate::cloud::{CloudPoint, PointCloud};
use crate::foundation::math::Point3;
use las::{Read, Reader};
use std::path::Path;
use thiserror::Error;

/// Errors produced while loading a LAS file
#[derive(Error, Debug)]
pub enum LasError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Error from the LAS parser
    #[error("LAS error: {0}")]
    Las(#[from] las::Error),
    /// Structurally valid file that cannot be indexed
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}

/// Loader turning LAS files into point clouds
pub struct LasLoader;

impl LasLoader {
    /// Load a LAS file and return its points as a cloud
    ///
    /// With `use_scaled_data` the georeferenced coordinates (header scale
    /// and offset applied) are used; otherwise the raw integer grid
    /// coordinates are recovered by inverting the header transforms.
    /// Intensity always travels with each point, RGB only when the point
    /// format carries color.
    pub fn load_las<P: AsRef<Path>>(path: P, use_scaled_data: bool) -> Result<PointCloud, LasError> {
        let mut reader = Reader::from_path(path)?;

        let header = reader.header();
        let expected = usize::try_from(header.number_of_points()).unwrap_or_default();
        let transforms = header.transforms().clone();

        let mut cloud = PointCloud::with_capacity(expected);
        for point in reader.points() {
            let point = point?;

            let position = if use_scaled_data {
                Point3::new(point.x, point.y, point.z)
            } else {
                Point3::new(
                    ((point.x - transforms.x.offset) / transforms.x.scale).round(),
                    ((point.y - transforms.y.offset) / transforms.y.scale).round(),
                    ((point.z - transforms.z.offset) / transforms.z.scale).round(),
                )
            };

            cloud.push(CloudPoint {
                position,
                intensity: point.intensity,
                color: point.color.map(|c| [c.red, c.green, c.blue]),
            });
        }

        if cloud.is_empty() {
            return Err(LasError::InvalidFormat(
                "No points found in LAS file".to_string(),
            ));
        }

        Ok(cloud)
    }
}
