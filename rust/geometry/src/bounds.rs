// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Axis-aligned bounding boxes in world coordinates
//!
//! The host viewer reports one min/max corner pair per object, in meters.
//! Everything here is presentation-oriented measurement: raw dimensions,
//! corner points, face and space diagonals, and merging a multi-selection
//! into one enclosing box.

use crate::error::{Error, Result};
use nalgebra::Point3;

/// Axis-aligned bounding box, min/max corners in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

/// World-frame dimensions of a box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

impl BoundingBox {
    /// Create from min/max corners, rejecting inverted boxes
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Result<Self> {
        if min.x > max.x || min.y > max.y || min.z > max.z {
            return Err(Error::InvalidBox(format!(
                "min corner {min} exceeds max corner {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Create from two arbitrary opposite corners, normalizing per axis
    pub fn from_corners(a: Point3<f64>, b: Point3<f64>) -> Self {
        Self {
            min: Point3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z)),
            max: Point3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z)),
        }
    }

    /// Extent along world X
    #[inline]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Extent along world Y
    #[inline]
    pub fn depth(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent along world Z
    #[inline]
    pub fn height(&self) -> f64 {
        self.max.z - self.min.z
    }

    /// World-frame dimensions
    pub fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width(),
            depth: self.depth(),
            height: self.height(),
        }
    }

    /// Center point
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// The four corners of the bottom face, counter-clockwise from min
    pub fn planar_corners(&self) -> [Point3<f64>; 4] {
        [
            Point3::new(self.min.x, self.min.y, self.min.z),
            Point3::new(self.max.x, self.min.y, self.min.z),
            Point3::new(self.max.x, self.max.y, self.min.z),
            Point3::new(self.min.x, self.max.y, self.min.z),
        ]
    }

    /// Diagonal of the XY (plan) face
    #[inline]
    pub fn face_diagonal_xy(&self) -> f64 {
        self.width().hypot(self.depth())
    }

    /// Diagonal of the XZ face
    #[inline]
    pub fn face_diagonal_xz(&self) -> f64 {
        self.width().hypot(self.height())
    }

    /// Diagonal of the YZ face
    #[inline]
    pub fn face_diagonal_yz(&self) -> f64 {
        self.depth().hypot(self.height())
    }

    /// Full space diagonal
    pub fn space_diagonal(&self) -> f64 {
        (self.width().powi(2) + self.depth().powi(2) + self.height().powi(2)).sqrt()
    }

    /// Expand to include another box
    pub fn merge(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: Point3::new(
                self.min.x.min(other.min.x),
                self.min.y.min(other.min.y),
                self.min.z.min(other.min.z),
            ),
            max: Point3::new(
                self.max.x.max(other.max.x),
                self.max.y.max(other.max.y),
                self.max.z.max(other.max.z),
            ),
        }
    }
}

/// Enclose a set of boxes in one box; `None` for an empty set
pub fn enclose<'a>(boxes: impl IntoIterator<Item = &'a BoundingBox>) -> Option<BoundingBox> {
    boxes
        .into_iter()
        .fold(None, |acc: Option<BoundingBox>, b| match acc {
            Some(merged) => Some(merged.merge(b)),
            None => Some(*b),
        })
}
