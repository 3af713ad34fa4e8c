// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dimension report
//!
//! JSON blob of the measurements taken over a selection, shaped for the
//! clipboard/download path of the panel. Geometry stays serde-free, so the
//! report owns its serializable mirror of the dimension types.

use precast_geometry::{BoundingBox, Calibration, LocalDimensions};
use serde::{Deserialize, Serialize};

/// World-frame dimensions of the enclosing box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldDimensions {
    pub width: f64,
    pub depth: f64,
    pub height: f64,
}

/// Calibrated building-frame dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingDimensions {
    pub length: f64,
    pub width: f64,
    pub height: f64,
    /// Calibration angle applied, degrees
    pub angle_degrees: f64,
}

impl BuildingDimensions {
    fn new(local: LocalDimensions, angle_degrees: f64) -> Self {
        Self {
            length: local.length,
            width: local.width,
            height: local.height,
            angle_degrees,
        }
    }
}

/// Measurement report over a selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionReport {
    /// Number of objects measured
    pub object_count: usize,
    /// Min corner of the enclosing box, meters
    pub min: [f64; 3],
    /// Max corner of the enclosing box, meters
    pub max: [f64; 3],
    pub world: WorldDimensions,
    /// Present when a building calibration was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<BuildingDimensions>,
    /// Plan-face diagonal, meters
    pub plan_diagonal: f64,
    /// Space diagonal, meters
    pub space_diagonal: f64,
    /// Best-effort length estimate for a member rotated 45° in plan
    pub rotated_length_estimate: f64,
}

impl DimensionReport {
    /// Build a report from the enclosing box of a selection.
    pub fn from_bounds(
        bounds: &BoundingBox,
        object_count: usize,
        calibration: Option<&Calibration>,
    ) -> Self {
        let dims = bounds.dimensions();
        Self {
            object_count,
            min: [bounds.min.x, bounds.min.y, bounds.min.z],
            max: [bounds.max.x, bounds.max.y, bounds.max.z],
            world: WorldDimensions {
                width: dims.width,
                depth: dims.depth,
                height: dims.height,
            },
            building: calibration.map(|cal| {
                BuildingDimensions::new(cal.local_dimensions(bounds), cal.angle_degrees())
            }),
            plan_diagonal: bounds.face_diagonal_xy(),
            space_diagonal: bounds.space_diagonal(),
            rotated_length_estimate: precast_geometry::rotated_length_estimate(bounds),
        }
    }

    /// Serialize for download/clipboard
    pub fn to_json(&self) -> crate::error::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
