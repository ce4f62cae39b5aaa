//! Point records and owned point collections

use crate::cloud::Aabb;
use crate::foundation::math::Point3;
use serde::{Deserialize, Serialize};

/// One point of a cloud: a position plus the per-point payload channels
/// carried through indexing (LAS intensity, optional RGB color)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CloudPoint {
    /// Position in the cloud's coordinate system
    pub position: Point3,
    /// Sensor return intensity
    pub intensity: u16,
    /// RGB color, present only in colorized point formats
    pub color: Option<[u16; 3]>,
}

impl CloudPoint {
    /// Create a point carrying only a position
    pub fn new(position: Point3) -> Self {
        Self {
            position,
            intensity: 0,
            color: None,
        }
    }
}

/// An owned, ordered sequence of cloud points
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    points: Vec<CloudPoint>,
}

impl PointCloud {
    /// Create an empty point cloud
    pub fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Create an empty point cloud with preallocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
        }
    }

    /// Append a point to the cloud
    pub fn push(&mut self, point: CloudPoint) {
        self.points.push(point);
    }

    /// Get the number of points in the cloud
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check whether the cloud is empty
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Get the stored points
    pub fn points(&self) -> &[CloudPoint] {
        &self.points
    }

    /// Iterate over the stored points
    pub fn iter(&self) -> std::slice::Iter<'_, CloudPoint> {
        self.points.iter()
    }

    /// Compute the tight bounding box of the cloud, or None if it is empty
    pub fn bounding_box(&self) -> Option<Aabb> {
        let mut points = self.points.iter();
        let mut aabb = Aabb::from_point(points.next()?.position);
        for point in points {
            aabb.grow_to_include(point.position);
        }
        Some(aabb)
    }

    /// Compute the bounding cube of the cloud: the minimum data corner and
    /// the longest axis extent as the cube edge length.
    ///
    /// Returns None for an empty cloud.
    pub fn bounding_cube(&self) -> Option<(Point3, f64)> {
        let aabb = self.bounding_box()?;
        Some((aabb.min, aabb.longest_edge()))
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a CloudPoint;
    type IntoIter = std::slice::Iter<'a, CloudPoint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_cloud() -> PointCloud {
        let mut cloud = PointCloud::new();
        cloud.push(CloudPoint::new(Point3::new(1.0, 2.0, 3.0)));
        cloud.push(CloudPoint::new(Point3::new(-1.0, 0.0, 9.0)));
        cloud.push(CloudPoint::new(Point3::new(4.0, -2.0, 5.0)));
        cloud
    }

    #[test]
    fn test_bounding_box() {
        let aabb = sample_cloud().bounding_box().unwrap();

        assert_relative_eq!(aabb.min, Point3::new(-1.0, -2.0, 3.0));
        assert_relative_eq!(aabb.max, Point3::new(4.0, 2.0, 9.0));
    }

    #[test]
    fn test_bounding_cube_uses_longest_axis() {
        let (origin, edge) = sample_cloud().bounding_cube().unwrap();

        assert_relative_eq!(origin, Point3::new(-1.0, -2.0, 3.0));
        // z spans 6.0, wider than x (5.0) and y (4.0)
        assert_relative_eq!(edge, 6.0);
    }

    #[test]
    fn test_empty_cloud_has_no_bounds() {
        assert!(PointCloud::new().bounding_box().is_none());
        assert!(PointCloud::new().bounding_cube().is_none());
    }
}
