// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Bolt/nut/washer extraction and aggregation
//!
//! A cast unit's children carry fastener data in property sets whose name
//! contains "bolt". Identical fasteners (same name, standard, size and
//! length) are aggregated by a composite key with their counts summed, for
//! on-screen summaries and the exported workbook.

use crate::properties::{PropertySet, ViewerObject};
use rustc_hash::FxHashMap;

/// One fastener line extracted from a bolt property set
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoltRecord {
    pub name: String,
    pub standard: String,
    pub size: String,
    pub length: String,
    pub bolt_count: u32,
    pub nut_count: u32,
    pub washer_count: u32,
}

impl BoltRecord {
    /// Composite grouping key: name + standard + size + length, lowercased.
    pub fn composite_key(&self) -> String {
        format!(
            "{}|{}|{}|{}",
            self.name.to_ascii_lowercase(),
            self.standard.to_ascii_lowercase(),
            self.size.to_ascii_lowercase(),
            self.length.to_ascii_lowercase()
        )
    }
}

/// Property-name aliases seen across exporters.
const NAME_KEYS: &[&str] = &["Bolt Name", "Name"];
const STANDARD_KEYS: &[&str] = &["Bolt Standard", "Standard"];
const SIZE_KEYS: &[&str] = &["Bolt Size", "Size"];
const LENGTH_KEYS: &[&str] = &["Bolt Length", "Length"];
const BOLT_COUNT_KEYS: &[&str] = &["Bolt Count", "Bolts"];
const NUT_COUNT_KEYS: &[&str] = &["Nut Count", "Nuts"];
const WASHER_COUNT_KEYS: &[&str] = &["Washer Count", "Washers"];

fn text_of(set: &PropertySet, keys: &[&str]) -> String {
    keys.iter()
        .find_map(|k| set.property(k))
        .map(|v| v.display_string())
        .unwrap_or_default()
}

fn count_of(set: &PropertySet, keys: &[&str]) -> u32 {
    keys.iter()
        .find_map(|k| set.property(k))
        .and_then(|v| v.as_integer())
        .and_then(|i| u32::try_from(i).ok())
        .unwrap_or(0)
}

/// Extract a fastener record from one property set, if it is a bolt set.
///
/// A washer count of exactly 0 marks a modeling artifact (a bolt-shaped
/// opening, not a real fastener) and yields no record.
pub fn bolt_record_from_set(set: &PropertySet) -> Option<BoltRecord> {
    if !set.name.to_ascii_lowercase().contains("bolt") {
        return None;
    }

    let name = text_of(set, NAME_KEYS);
    if name.is_empty() {
        return None;
    }

    let washer_count = count_of(set, WASHER_COUNT_KEYS);
    if washer_count == 0 {
        return None;
    }

    Some(BoltRecord {
        name,
        standard: text_of(set, STANDARD_KEYS),
        size: text_of(set, SIZE_KEYS),
        length: text_of(set, LENGTH_KEYS),
        bolt_count: count_of(set, BOLT_COUNT_KEYS),
        nut_count: count_of(set, NUT_COUNT_KEYS),
        washer_count,
    })
}

/// Walk an assembly's hierarchical children and collect every bolt record.
pub fn collect_bolt_records(assembly: &ViewerObject) -> Vec<BoltRecord> {
    assembly
        .descendants()
        .flat_map(|child| child.property_sets.iter())
        .filter_map(bolt_record_from_set)
        .collect()
}

/// Aggregate records by composite key, summing counts.
pub fn aggregate_fasteners(
    records: impl IntoIterator<Item = BoltRecord>,
) -> FxHashMap<String, BoltRecord> {
    let mut map: FxHashMap<String, BoltRecord> = FxHashMap::default();
    for record in records {
        match map.entry(record.composite_key()) {
            std::collections::hash_map::Entry::Occupied(mut e) => {
                let agg = e.get_mut();
                agg.bolt_count += record.bolt_count;
                agg.nut_count += record.nut_count;
                agg.washer_count += record.washer_count;
            }
            std::collections::hash_map::Entry::Vacant(e) => {
                e.insert(record);
            }
        }
    }
    map
}

/// Aggregate and return a deterministic, key-sorted list for display/export.
pub fn aggregate_sorted(records: impl IntoIterator<Item = BoltRecord>) -> Vec<BoltRecord> {
    let mut entries: Vec<(String, BoltRecord)> = aggregate_fasteners(records).into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries.into_iter().map(|(_, r)| r).collect()
}
