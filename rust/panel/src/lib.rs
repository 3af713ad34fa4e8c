// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Precast-Tools Panel
//!
//! The deterministic half of the admin panel's button handlers. Each action
//! consumes a [`Selection`] snapshot — the data the host viewer SDK would
//! have returned — and produces a display record, an export artifact, or a
//! single user-facing error. Host round-trips and remote persistence stay
//! on the UI side.

pub mod actions;
pub mod error;
pub mod selection;

pub use actions::{
    aggregate_selection_fasteners, export_dimensions, export_fasteners, lookup_guids,
    measure_selection, GuidLookup, Measurement,
};
pub use error::{ActionError, Result};
pub use selection::{SelectedObject, Selection};
