// Panel actions exercised end to end over a built-up selection snapshot.

use precast_core::properties::{PropertySet, PropertyValue, ViewerObject};
use precast_geometry::{BoundingBox, Calibration, Point3};
use precast_panel::{
    aggregate_selection_fasteners, export_dimensions, export_fasteners, measure_selection,
    ActionError, SelectedObject, Selection,
};

fn bolt_set(name: &str, bolts: i64, washers: i64) -> PropertySet {
    PropertySet::new("Tekla Bolt")
        .with("Bolt Name", PropertyValue::Text(name.into()))
        .with("Bolt Standard", PropertyValue::Text("8.8".into()))
        .with("Bolt Size", PropertyValue::Text("M16".into()))
        .with("Bolt Length", PropertyValue::Text("40".into()))
        .with("Bolt Count", PropertyValue::Integer(bolts))
        .with("Nut Count", PropertyValue::Integer(bolts))
        .with("Washer Count", PropertyValue::Integer(washers))
}

fn cast_unit(runtime_id: u32, name: &str, bolt_sets: Vec<PropertySet>) -> ViewerObject {
    let mut assembly = ViewerObject::new(runtime_id, name);
    assembly.class = "IFCELEMENTASSEMBLY".into();
    for (i, set) in bolt_sets.into_iter().enumerate() {
        let mut part = ViewerObject::new(runtime_id * 100 + i as u32, format!("part-{i}"));
        part.property_sets.push(set);
        assembly.children.push(part);
    }
    assembly
}

fn two_assembly_selection() -> Selection {
    let mut selection = Selection::new("model-1");
    selection.objects.push(SelectedObject::with_bounds(
        cast_unit(1, "CU-1", vec![bolt_set("HILTI HST3", 4, 1)]),
        BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(6.0, 1.2, 0.4)),
    ));
    selection.objects.push(SelectedObject::with_bounds(
        cast_unit(
            2,
            "CU-2",
            vec![bolt_set("HILTI HST3", 2, 1), bolt_set("OPENING D25", 1, 0)],
        ),
        BoundingBox::from_corners(Point3::new(6.0, 0.0, 0.0), Point3::new(12.0, 1.2, 0.4)),
    ));
    selection
}

#[test]
fn aggregates_across_assemblies_and_drops_openings() {
    let totals = aggregate_selection_fasteners(&two_assembly_selection()).unwrap();
    assert_eq!(totals.len(), 1, "opening must not appear in the aggregate");
    assert_eq!(totals[0].name, "HILTI HST3");
    assert_eq!(totals[0].bolt_count, 6);
}

#[test]
fn workbook_carries_data_and_summary() {
    let wb = export_fasteners(&two_assembly_selection()).unwrap();

    let data = wb.sheet("data").unwrap();
    assert_eq!(data.rows.len(), 2, "one row per real fastener record");
    let csv = data.to_csv();
    assert!(csv.starts_with("Assembly,Name,Standard,Size,Length,Bolts,Nuts,Washers\n"));
    assert!(csv.contains("CU-1"));
    assert!(csv.contains("CU-2"));

    let summary = wb.sheet("summary").unwrap();
    assert_eq!(summary.rows.len(), 1);
}

#[test]
fn selection_without_fasteners_reports_validation_error() {
    let mut selection = Selection::new("model-1");
    selection.objects.push(SelectedObject::with_bounds(
        cast_unit(3, "CU-3", vec![]),
        BoundingBox::from_corners(Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 1.0)),
    ));
    let err = aggregate_selection_fasteners(&selection).unwrap_err();
    assert!(matches!(err, ActionError::NoFasteners));
    assert_eq!(err.user_message(), "No fastener data found in the selection");
}

#[test]
fn measurement_merges_selection_bounds() {
    let m = measure_selection(&two_assembly_selection(), None).unwrap();
    assert_eq!(m.object_count, 2);
    assert_eq!(m.world.width, 12.0);
    assert!((m.world.depth - 1.2).abs() < 1e-12);
}

#[test]
fn calibrated_measurement_swaps_extents_at_ninety_degrees() {
    let cal =
        Calibration::from_points(Point3::new(0.0, 0.0, 0.0), Point3::new(0.0, 8.0, 0.0)).unwrap();
    let m = measure_selection(&two_assembly_selection(), Some(&cal)).unwrap();
    let building = m.building.unwrap();
    assert!((building.length - 1.2).abs() < 1e-9);
    assert!((building.width - 12.0).abs() < 1e-9);
    assert!((m.angle_degrees.unwrap() - 90.0).abs() < 1e-9);
}

#[test]
fn dimension_report_is_valid_json() {
    let json = export_dimensions(&two_assembly_selection(), None).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["object_count"], serde_json::json!(2));
    assert_eq!(value["world"]["width"], serde_json::json!(12.0));
}
