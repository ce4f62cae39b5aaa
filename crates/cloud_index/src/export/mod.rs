//! Result persistence
//!
//! Serializes the populated leaves of an octree, keyed by leaf center,
//! so a later stage can reload the spatial buckets without rebuilding
//! the tree.

use crate::cloud::CloudPoint;
use crate::foundation::math::Point3;
use crate::spatial::Octree;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors produced while persisting leaf records
#[derive(Error, Debug)]
pub enum ExportError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Serializable snapshot of one populated leaf
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafRecord {
    /// Center of the leaf's cube, the record's key
    pub center: Point3,
    /// Full edge length of the leaf's cube
    pub size: f64,
    /// Points bucketed into this leaf
    pub points: Vec<CloudPoint>,
}

/// Snapshot every leaf of the tree into serializable records
///
/// Records appear in the tree's depth-first leaf order, so repeated
/// snapshots of an unmodified tree are identical.
pub fn leaf_records(octree: &Octree) -> Vec<LeafRecord> {
    octree
        .leaves()
        .map(|leaf| LeafRecord {
            center: leaf.center(),
            size: leaf.size(),
            points: leaf.points().to_vec(),
        })
        .collect()
}

/// Persist the tree's leaf records to a RON file
pub fn save_leaves<P: AsRef<Path>>(octree: &Octree, path: P) -> Result<(), ExportError> {
    let path = path.as_ref();
    if path.extension().and_then(|e| e.to_str()) != Some("ron") {
        return Err(ExportError::UnsupportedFormat(
            path.display().to_string(),
        ));
    }

    let records = leaf_records(octree);
    let contents = ron::ser::to_string_pretty(&records, Default::default())
        .map_err(|e| ExportError::Serialize(e.to_string()))?;

    std::fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::SplitPolicy;

    fn sample_octree() -> Octree {
        let mut octree = Octree::new(Point3::origin(), 8.0, SplitPolicy::MaxPointsPerLeaf(2));
        for position in [
            Point3::new(1.0, 1.0, 1.0),
            Point3::new(1.0, 1.0, 2.0),
            Point3::new(1.0, 1.0, -1.0),
            Point3::new(-2.0, -2.0, -2.0),
        ] {
            octree.insert(position);
        }
        octree
    }

    #[test]
    fn test_records_match_live_leaf_sequence() {
        let octree = sample_octree();
        let records = leaf_records(&octree);

        let leaves: Vec<_> = octree.leaves().collect();
        assert_eq!(records.len(), leaves.len());
        for (record, leaf) in records.iter().zip(&leaves) {
            assert_eq!(record.center, leaf.center());
            assert_eq!(record.points.as_slice(), leaf.points());
        }

        let stored: usize = records.iter().map(|r| r.points.len()).sum();
        assert_eq!(stored, octree.point_count());
    }

    #[test]
    fn test_records_round_trip_through_ron() {
        let records = leaf_records(&sample_octree());

        let encoded = ron::ser::to_string_pretty(&records, Default::default()).unwrap();
        let decoded: Vec<LeafRecord> = ron::from_str(&encoded).unwrap();

        assert_eq!(decoded, records);
    }

    #[test]
    fn test_only_ron_output_is_supported() {
        let octree = sample_octree();
        assert!(matches!(
            save_leaves(&octree, "result.pickle"),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }
}
