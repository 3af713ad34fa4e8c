// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Selection snapshot
//!
//! A `Selection` is what the host SDK would have answered at the moment the
//! user clicked: the selected objects with their property graphs and, where
//! the host had one, a world-space bounding box per object. Actions consume
//! the snapshot; nothing here talks to the host.

use precast_core::ViewerObject;
use precast_geometry::BoundingBox;

/// One selected object plus its host-reported bounding box
#[derive(Debug, Clone)]
pub struct SelectedObject {
    pub object: ViewerObject,
    /// Absent when the host returned no geometry for the object
    pub bounding_box: Option<BoundingBox>,
}

impl SelectedObject {
    pub fn new(object: ViewerObject) -> Self {
        Self {
            object,
            bounding_box: None,
        }
    }

    pub fn with_bounds(object: ViewerObject, bounding_box: BoundingBox) -> Self {
        Self {
            object,
            bounding_box: Some(bounding_box),
        }
    }
}

/// The current selection in one model
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Host model identifier
    pub model_id: String,
    pub objects: Vec<SelectedObject>,
}

impl Selection {
    pub fn new(model_id: impl Into<String>) -> Self {
        Self {
            model_id: model_id.into(),
            objects: Vec::new(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// All host-reported bounding boxes in the selection
    pub fn bounding_boxes(&self) -> impl Iterator<Item = &BoundingBox> {
        self.objects.iter().filter_map(|o| o.bounding_box.as_ref())
    }
}
