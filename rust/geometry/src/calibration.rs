// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Building calibration and local-frame dimension estimation
//!
//! Buildings are rarely aligned with the world axes, so raw bounding-box
//! width/depth is misleading for rotated models. Two calibration points
//! picked along a building edge define a rotation angle; projecting a box's
//! plan corners into that rotated frame gives length/width along the
//! building axis. Height never rotates.
//!
//! These are presentation estimates for rectangular members. For geometry
//! that is neither rectangular nor axis-aligned in its own frame the numbers
//! are best-effort, not exact.

use crate::bounds::BoundingBox;
use crate::error::{Error, Result};
use nalgebra::Point3;

/// Two calibration points picked in plan produce barely-distinguishable
/// angles below this separation.
const MIN_CALIBRATION_DISTANCE: f64 = 1e-9;

/// Building rotation captured from two calibration points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    origin: Point3<f64>,
    angle: f64,
}

/// Dimensions in the calibrated building frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalDimensions {
    /// Extent along the building axis
    pub length: f64,
    /// Extent across the building axis
    pub width: f64,
    /// Vertical extent (unrotated)
    pub height: f64,
}

impl Calibration {
    /// Capture a calibration from two points along a building edge.
    ///
    /// The rotation angle is `atan2(Δy, Δx)`; the first point becomes the
    /// rotation origin. Z components are ignored.
    pub fn from_points(a: Point3<f64>, b: Point3<f64>) -> Result<Self> {
        let dx = b.x - a.x;
        let dy = b.y - a.y;
        if dx.hypot(dy) < MIN_CALIBRATION_DISTANCE {
            return Err(Error::DegenerateCalibration(
                "calibration points coincide in plan".to_string(),
            ));
        }
        Ok(Self {
            origin: a,
            angle: dy.atan2(dx),
        })
    }

    /// Build directly from a known angle in radians
    pub fn from_angle(origin: Point3<f64>, angle: f64) -> Self {
        Self { origin, angle }
    }

    /// Rotation angle in radians
    #[inline]
    pub fn angle_radians(&self) -> f64 {
        self.angle
    }

    /// Rotation angle in degrees, for display
    #[inline]
    pub fn angle_degrees(&self) -> f64 {
        self.angle.to_degrees()
    }

    /// Rotation origin (the first calibration point)
    #[inline]
    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    /// Rotate a point by `-angle` about the origin, into the building frame.
    /// Z passes through unchanged.
    pub fn to_local(&self, p: &Point3<f64>) -> Point3<f64> {
        let (sin, cos) = (-self.angle).sin_cos();
        let dx = p.x - self.origin.x;
        let dy = p.y - self.origin.y;
        Point3::new(
            self.origin.x + dx * cos - dy * sin,
            self.origin.y + dx * sin + dy * cos,
            p.z,
        )
    }

    /// Project a box's plan corners into the building frame and measure the
    /// rotated extents. Length runs along the building axis, width across
    /// it; height is `max.z - min.z` straight from the box.
    pub fn local_dimensions(&self, bbox: &BoundingBox) -> LocalDimensions {
        let mut min_x = f64::MAX;
        let mut max_x = f64::MIN;
        let mut min_y = f64::MAX;
        let mut max_y = f64::MIN;

        for corner in bbox.planar_corners() {
            let local = self.to_local(&corner);
            min_x = min_x.min(local.x);
            max_x = max_x.max(local.x);
            min_y = min_y.min(local.y);
            max_y = max_y.max(local.y);
        }

        LocalDimensions {
            length: max_x - min_x,
            width: max_y - min_y,
            height: bbox.height(),
        }
    }
}

/// Estimate the true length of a member rotated 45° in plan.
///
/// The bounding box of a 45°-rotated beam is square in plan; its diagonal
/// divided by √2 recovers the member length. Known to be wrong for other
/// rotation angles — kept as the approximation it has always been.
pub fn rotated_length_estimate(bbox: &BoundingBox) -> f64 {
    bbox.face_diagonal_xy() * std::f64::consts::FRAC_1_SQRT_2
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_box() -> BoundingBox {
        BoundingBox::from_corners(Point3::new(1.0, 2.0, 0.0), Point3::new(5.0, 4.0, 3.0))
    }

    #[test]
    fn test_zero_angle_matches_world_dimensions() {
        let cal =
            Calibration::from_points(Point3::new(0.0, 0.0, 0.0), Point3::new(10.0, 0.0, 0.0))
                .unwrap();
        assert_eq!(cal.angle_degrees(), 0.0);

        let bbox = sample_box();
        let local = cal.local_dimensions(&bbox);
        assert_relative_eq!(local.length, bbox.width());
        assert_relative_eq!(local.width, bbox.depth());
        assert_relative_eq!(local.height, bbox.height());
    }

    #[test]
    fn test_ninety_degrees_swaps_dimensions() {
        let cal =
            Calibration::from_points(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 10.0, 0.0))
                .unwrap();
        assert_relative_eq!(cal.angle_degrees(), 90.0, epsilon = 1e-9);

        let bbox = sample_box();
        let local = cal.local_dimensions(&bbox);
        assert_relative_eq!(local.length, bbox.depth(), epsilon = 1e-9);
        assert_relative_eq!(local.width, bbox.width(), epsilon = 1e-9);
        assert_relative_eq!(local.height, bbox.height());
    }

    #[test]
    fn test_forty_five_degree_beam_recovered() {
        // A 4m beam at 45° in plan has a square AABB with side a = 4·cos45°.
        let a = 4.0 * std::f64::consts::FRAC_1_SQRT_2;
        let bbox = BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(a, a, 0.2));

        let cal = Calibration::from_points(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0))
            .unwrap();
        assert_relative_eq!(cal.angle_degrees(), 45.0, epsilon = 1e-9);

        // Calibrated projection recovers the true length exactly
        let local = cal.local_dimensions(&bbox);
        assert_relative_eq!(local.length, 4.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rotated_length_estimate_is_diagonal_over_sqrt2() {
        let bbox =
            BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 1.0));
        // Plan diagonal is 5; the heuristic divides it by √2
        assert_relative_eq!(
            rotated_length_estimate(&bbox),
            5.0 * std::f64::consts::FRAC_1_SQRT_2,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_angle_from_points() {
        let cal = Calibration::from_points(Point3::new(1.0, 1.0, 0.0), Point3::new(2.0, 2.0, 5.0))
            .unwrap();
        assert_relative_eq!(cal.angle_degrees(), 45.0, epsilon = 1e-9);
        assert_eq!(cal.origin(), Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_coincident_points_rejected() {
        let p = Point3::new(3.0, 3.0, 0.0);
        assert!(Calibration::from_points(p, p).is_err());
        // Distinct Z alone does not make a usable plan direction
        assert!(Calibration::from_points(p, Point3::new(3.0, 3.0, 9.0)).is_err());
    }

    #[test]
    fn test_to_local_round_shape() {
        let cal = Calibration::from_angle(Point3::new(0.0, 0.0, 0.0), 30_f64.to_radians());
        let p = Point3::new(2.0, 0.0, 1.5);
        let local = cal.to_local(&p);
        assert_relative_eq!(local.x, 2.0 * 30_f64.to_radians().cos(), epsilon = 1e-12);
        assert_relative_eq!(local.y, -2.0 * 30_f64.to_radians().sin(), epsilon = 1e-12);
        assert_eq!(local.z, 1.5);
    }
}
