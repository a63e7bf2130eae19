// src/model/bbox.rs

use nalgebra::{Point3, Vector3};
use serde::Serialize;

/// AutoGrid sample spacing in Angstroms.
pub const GRID_SPACING: f64 = 0.375;

/// Axis-aligned docking box in Cartesian Angstrom coordinates.
///
/// Well-formed boxes satisfy min <= max per axis, but this is not enforced:
/// a negative padding or a user-supplied inverted box is carried through the
/// arithmetic unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BoundingBox {
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self { min, max }
    }

    /// Box around a raw extent, grown by `padding` on every face.
    pub fn from_extent(min: Point3<f64>, max: Point3<f64>, padding: f64) -> Self {
        Self::new(min, max).padded(padding)
    }

    /// Box from its center point and edge lengths.
    pub fn from_center_size(center: Point3<f64>, size: Vector3<f64>) -> Self {
        let half = size / 2.0;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Minimal extent of a point set. None if the set is empty.
    pub fn of_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point3<f64>>,
    {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            for axis in 0..3 {
                min[axis] = min[axis].min(p[axis]);
                max[axis] = max[axis].max(p[axis]);
            }
        }
        Some(Self { min, max })
    }

    /// Uniform margin on every face. Negative values shrink the box.
    pub fn padded(&self, padding: f64) -> Self {
        let pad = Vector3::repeat(padding);
        Self {
            min: self.min - pad,
            max: self.max + pad,
        }
    }

    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Grid point count per axis at the given spacing, rounded to nearest.
    pub fn grid_points(&self, spacing: f64) -> [i64; 3] {
        let size = self.size();
        [
            (size.x / spacing).round() as i64,
            (size.y / spacing).round() as i64,
            (size.z / spacing).round() as i64,
        ]
    }
}
