// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Viewer object and property-set model
//!
//! Mirrors the shape the host viewer returns for a selected object: named
//! property sets holding named values, plus a hierarchy of child objects
//! (assembly → parts). Values arrive loosely typed — numbers are often
//! delivered as strings — so the accessors coerce where it is safe to.

use smallvec::SmallVec;

/// A single property value as delivered by the host
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum PropertyValue {
    /// String value
    Text(String),
    /// Integer value
    Integer(i64),
    /// Float value
    Number(f64),
    /// Boolean value
    Boolean(bool),
    /// Missing/empty value
    Empty,
}

impl PropertyValue {
    /// Get as text, without coercion
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as float, coercing integers and numeric strings
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(f) => Some(*f),
            PropertyValue::Integer(i) => Some(*i as f64),
            PropertyValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get as integer, coercing whole floats and numeric strings
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            PropertyValue::Integer(i) => Some(*i),
            PropertyValue::Number(f) if f.fract() == 0.0 && f.is_finite() => Some(*f as i64),
            PropertyValue::Text(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Check for missing value
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, PropertyValue::Empty)
    }

    /// Render for display; empty values render as an empty string
    pub fn display_string(&self) -> String {
        match self {
            PropertyValue::Text(s) => s.clone(),
            PropertyValue::Number(f) => format!("{f}"),
            PropertyValue::Integer(i) => format!("{i}"),
            PropertyValue::Boolean(b) => format!("{b}"),
            PropertyValue::Empty => String::new(),
        }
    }
}

/// A named property inside a property set
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Property {
    pub name: String,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: impl Into<String>, value: PropertyValue) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// A named group of properties (e.g. "Tekla Bolt", "Pset_ElementAssembly")
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertySet {
    pub name: String,
    pub properties: SmallVec<[Property; 8]>,
}

impl PropertySet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: SmallVec::new(),
        }
    }

    /// Add a property, builder-style
    pub fn with(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.push(Property::new(name, value));
        self
    }

    /// Look up a property by name, case-insensitively
    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
            .map(|p| &p.value)
    }
}

/// One object from the host viewer's object graph
///
/// `runtime_id` is scoped to the viewer session; `external_guid` is the
/// permanent IFC GlobalId (may be empty when the host has none).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewerObject {
    /// Session-scoped numeric id
    pub runtime_id: u32,
    /// Permanent IFC GUID (22-char compressed form), empty if unknown
    pub external_guid: String,
    /// Display name
    pub name: String,
    /// IFC class name (e.g. "IFCELEMENTASSEMBLY")
    pub class: String,
    /// Property sets as returned by the host
    pub property_sets: Vec<PropertySet>,
    /// Hierarchical children (assembly parts, bolts, ...)
    pub children: Vec<ViewerObject>,
}

impl ViewerObject {
    pub fn new(runtime_id: u32, name: impl Into<String>) -> Self {
        Self {
            runtime_id,
            external_guid: String::new(),
            name: name.into(),
            class: String::new(),
            property_sets: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Look up a property set by name, case-insensitively
    pub fn property_set(&self, name: &str) -> Option<&PropertySet> {
        self.property_sets
            .iter()
            .find(|ps| ps.name.eq_ignore_ascii_case(name))
    }

    /// Look up a single property across set and property name
    pub fn find_property(&self, set_name: &str, prop_name: &str) -> Option<&PropertyValue> {
        self.property_set(set_name)?.property(prop_name)
    }

    /// Depth-first walk over all descendants, excluding `self`
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            stack: self.children.iter().rev().collect(),
        }
    }
}

/// Iterator over an object's hierarchical children, depth-first
pub struct Descendants<'a> {
    stack: Vec<&'a ViewerObject>,
}

impl<'a> Iterator for Descendants<'a> {
    type Item = &'a ViewerObject;

    fn next(&mut self) -> Option<Self::Item> {
        let next = self.stack.pop()?;
        self.stack.extend(next.children.iter().rev());
        Some(next)
    }
}
