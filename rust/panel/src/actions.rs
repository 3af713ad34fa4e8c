// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel actions
//!
//! One function per deterministic panel feature. Each follows the same
//! shape: validate the selection snapshot, compute, return a display record
//! or a single typed error. Actions never mutate the snapshot and never
//! reach back to the host.

use crate::error::{ActionError, Result};
use crate::selection::Selection;
use precast_core::fasteners::{aggregate_sorted, collect_bolt_records, BoltRecord};
use precast_core::guid;
use precast_export::{fastener_workbook, DimensionReport, FastenerRow, Workbook};
use precast_geometry::{enclose, BoundingBox, Calibration, Dimensions, LocalDimensions};

/// GUID lookup result for one object
#[derive(Debug, Clone, PartialEq)]
pub struct GuidLookup {
    pub runtime_id: u32,
    /// Compressed IFC form as reported by the host
    pub ifc: String,
    /// Canonical UUID form; `None` when the host string is not a valid
    /// IFC GUID (treated as "not found", not as a hard failure)
    pub ms: Option<String>,
}

/// Measurement over the selection's enclosing box
#[derive(Debug, Clone)]
pub struct Measurement {
    pub object_count: usize,
    pub bounds: BoundingBox,
    pub world: Dimensions,
    /// Present when a calibration was supplied
    pub building: Option<LocalDimensions>,
    /// Calibration angle in degrees, when supplied
    pub angle_degrees: Option<f64>,
    pub plan_diagonal: f64,
    pub space_diagonal: f64,
    pub rotated_length_estimate: f64,
}

/// Resolve the MS GUID for every selected object.
///
/// Objects whose host string fails to decode get `ms: None`; the action only
/// fails when the selection is empty.
pub fn lookup_guids(selection: &Selection) -> Result<Vec<GuidLookup>> {
    if selection.is_empty() {
        return Err(ActionError::EmptySelection);
    }

    Ok(selection
        .objects
        .iter()
        .map(|selected| {
            let ifc = selected.object.external_guid.clone();
            let ms = match guid::ifc_to_ms(&ifc) {
                Ok(ms) => Some(ms),
                Err(err) => {
                    tracing::warn!(
                        runtime_id = selected.object.runtime_id,
                        %err,
                        "GUID did not decode"
                    );
                    None
                }
            };
            GuidLookup {
                runtime_id: selected.object.runtime_id,
                ifc,
                ms,
            }
        })
        .collect())
}

/// Measure the enclosing box of the selection, optionally in the calibrated
/// building frame.
pub fn measure_selection(
    selection: &Selection,
    calibration: Option<&Calibration>,
) -> Result<Measurement> {
    if selection.is_empty() {
        return Err(ActionError::EmptySelection);
    }

    let bounds = enclose(selection.bounding_boxes()).ok_or(ActionError::MissingBoundingBox)?;

    tracing::debug!(
        model_id = %selection.model_id,
        objects = selection.len(),
        "measuring selection"
    );

    Ok(Measurement {
        object_count: selection.len(),
        bounds,
        world: bounds.dimensions(),
        building: calibration.map(|cal| cal.local_dimensions(&bounds)),
        angle_degrees: calibration.map(Calibration::angle_degrees),
        plan_diagonal: bounds.face_diagonal_xy(),
        space_diagonal: bounds.space_diagonal(),
        rotated_length_estimate: precast_geometry::rotated_length_estimate(&bounds),
    })
}

/// Aggregate fasteners across every selected assembly.
pub fn aggregate_selection_fasteners(selection: &Selection) -> Result<Vec<BoltRecord>> {
    if selection.is_empty() {
        return Err(ActionError::EmptySelection);
    }

    let records: Vec<BoltRecord> = selection
        .objects
        .iter()
        .flat_map(|selected| collect_bolt_records(&selected.object))
        .collect();

    if records.is_empty() {
        return Err(ActionError::NoFasteners);
    }

    Ok(aggregate_sorted(records))
}

/// Build the fastener workbook (data + summary sheet) for the selection.
pub fn export_fasteners(selection: &Selection) -> Result<Workbook> {
    if selection.is_empty() {
        return Err(ActionError::EmptySelection);
    }

    let mut rows = Vec::new();
    for selected in &selection.objects {
        let assembly = if selected.object.name.is_empty() {
            format!("#{}", selected.object.runtime_id)
        } else {
            selected.object.name.clone()
        };
        for record in collect_bolt_records(&selected.object) {
            rows.push(FastenerRow {
                assembly: assembly.clone(),
                record,
            });
        }
    }

    if rows.is_empty() {
        return Err(ActionError::NoFasteners);
    }

    Ok(fastener_workbook(&rows))
}

/// Build the JSON dimension report for the selection.
pub fn export_dimensions(
    selection: &Selection,
    calibration: Option<&Calibration>,
) -> Result<String> {
    let measurement = measure_selection(selection, calibration)?;
    let report =
        DimensionReport::from_bounds(&measurement.bounds, measurement.object_count, calibration);
    Ok(report.to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::SelectedObject;
    use precast_core::ViewerObject;
    use precast_geometry::Point3;

    fn selection_with_box() -> Selection {
        let mut obj = ViewerObject::new(7, "CU-7");
        obj.external_guid = "0000000000000000000000".into();
        let bbox =
            BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 1.0));
        let mut selection = Selection::new("model-a");
        selection.objects.push(SelectedObject::with_bounds(obj, bbox));
        selection
    }

    #[test]
    fn test_empty_selection_rejected_everywhere() {
        let empty = Selection::new("model-a");
        assert!(matches!(
            lookup_guids(&empty),
            Err(ActionError::EmptySelection)
        ));
        assert!(matches!(
            measure_selection(&empty, None),
            Err(ActionError::EmptySelection)
        ));
        assert!(matches!(
            aggregate_selection_fasteners(&empty),
            Err(ActionError::EmptySelection)
        ));
    }

    #[test]
    fn test_lookup_decodes_valid_guid() {
        let results = lookup_guids(&selection_with_box()).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0].ms.as_deref(),
            Some("00000000-0000-0000-0000-000000000000")
        );
    }

    #[test]
    fn test_lookup_invalid_guid_is_none_not_error() {
        let mut selection = selection_with_box();
        selection.objects[0].object.external_guid = "definitely not a guid".into();
        let results = lookup_guids(&selection).unwrap();
        assert_eq!(results[0].ms, None);
    }

    #[test]
    fn test_measure_without_bounds_is_validation_error() {
        let mut selection = Selection::new("model-a");
        selection
            .objects
            .push(SelectedObject::new(ViewerObject::new(1, "no-geometry")));
        assert!(matches!(
            measure_selection(&selection, None),
            Err(ActionError::MissingBoundingBox)
        ));
    }

    #[test]
    fn test_measure_world_dimensions() {
        let m = measure_selection(&selection_with_box(), None).unwrap();
        assert_eq!(m.world.width, 3.0);
        assert_eq!(m.world.depth, 4.0);
        assert_eq!(m.plan_diagonal, 5.0);
        assert!(m.building.is_none());
    }

    #[test]
    fn test_user_message_matches_display() {
        let err = ActionError::EmptySelection;
        assert_eq!(err.user_message(), "Nothing is selected");
    }
}
