// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Action error taxonomy
//!
//! Every action fails the same way the panel always has: one user-visible
//! message, no retry, no partial state. Missing data (empty selection, no
//! bounding box) is a named validation failure, not an exceptional path.

use thiserror::Error;

/// Result type for panel actions
pub type Result<T> = std::result::Result<T, ActionError>;

/// Failures an action can surface to the UI
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Nothing is selected")]
    EmptySelection,

    #[error("No bounding box available for the selection")]
    MissingBoundingBox,

    #[error("Object {0} has no external GUID")]
    MissingGuid(u32),

    #[error("No fastener data found in the selection")]
    NoFasteners,

    #[error(transparent)]
    Core(#[from] precast_core::Error),

    #[error(transparent)]
    Geometry(#[from] precast_geometry::Error),

    #[error(transparent)]
    Export(#[from] precast_export::Error),
}

impl ActionError {
    /// The single string the panel displays on failure
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
