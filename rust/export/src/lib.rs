// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Precast-Tools Export
//!
//! Turns measurement and fastener data into the panel's downloadable
//! artifacts: sheet-structured workbooks (CSV/JSON rendering), dimension
//! reports, and the typed popup message envelope.

pub mod error;
pub mod message;
pub mod report;
pub mod workbook;

pub use error::{Error, Result};
pub use message::{PanelAction, PanelResult};
pub use report::{BuildingDimensions, DimensionReport, WorldDimensions};
pub use workbook::{fastener_workbook, Cell, FastenerRow, Sheet, Workbook};
