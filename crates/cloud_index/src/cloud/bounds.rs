//! Axis-aligned bounding volumes

use crate::foundation::math::{Point3, Vec3};

/// Axis-Aligned Bounding Box for spatial queries
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Minimum corner of the bounding box
    pub min: Point3,
    /// Maximum corner of the bounding box
    pub max: Point3,
}

impl Aabb {
    /// Create a new AABB from min and max points
    pub fn new(min: Point3, max: Point3) -> Self {
        Self { min, max }
    }

    /// Create an AABB centered at a point with given extents
    pub fn from_center_extents(center: Point3, extents: Vec3) -> Self {
        Self {
            min: center - extents,
            max: center + extents,
        }
    }

    /// Create a degenerate AABB containing a single point
    pub fn from_point(point: Point3) -> Self {
        Self {
            min: point,
            max: point,
        }
    }

    /// Get the center of the AABB
    pub fn center(&self) -> Point3 {
        nalgebra::center(&self.min, &self.max)
    }

    /// Get the extents (half-size) of the AABB
    pub fn extents(&self) -> Vec3 {
        (self.max - self.min) * 0.5
    }

    /// Get the full size of the AABB along each axis
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Get the longest axis extent, the edge length of the enclosing cube
    pub fn longest_edge(&self) -> f64 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }

    /// Check if this AABB contains a point (boundary inclusive)
    pub fn contains_point(&self, point: Point3) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }

    /// Grow this AABB to include a point
    pub fn grow_to_include(&mut self, point: Point3) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_aabb_center_and_extents() {
        let aabb = Aabb::new(Point3::new(-2.0, -4.0, 0.0), Point3::new(2.0, 4.0, 8.0));

        assert_relative_eq!(aabb.center(), Point3::new(0.0, 0.0, 4.0));
        assert_relative_eq!(aabb.extents(), Vec3::new(2.0, 4.0, 4.0));
        assert_relative_eq!(aabb.longest_edge(), 8.0);
    }

    #[test]
    fn test_aabb_contains_boundary() {
        let aabb = Aabb::from_center_extents(Point3::origin(), Vec3::new(1.0, 1.0, 1.0));

        assert!(aabb.contains_point(Point3::new(1.0, -1.0, 0.5)));
        assert!(!aabb.contains_point(Point3::new(1.0001, 0.0, 0.0)));
    }

    #[test]
    fn test_aabb_grow_to_include() {
        let mut aabb = Aabb::from_point(Point3::new(1.0, 1.0, 1.0));
        aabb.grow_to_include(Point3::new(-3.0, 2.0, 0.0));

        assert_relative_eq!(aabb.min, Point3::new(-3.0, 1.0, 0.0));
        assert_relative_eq!(aabb.max, Point3::new(1.0, 2.0, 1.0));
    }
}
