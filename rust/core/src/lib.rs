// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Precast-Tools Core
//!
//! Host-independent data handling for precast BIM tooling:
//!
//! - **GUID codec**: 22-character compressed IFC GlobalId ↔ canonical UUID
//! - **Object model**: viewer objects, property sets, loose-typed values
//! - **Fastener aggregation**: bolt/nut/washer extraction from cast units
//!
//! ## Quick Start
//!
//! ```rust
//! use precast_core::guid;
//!
//! let ms = guid::ifc_to_ms("0000000000000000000000").unwrap();
//! assert_eq!(ms, "00000000-0000-0000-0000-000000000000");
//! assert_eq!(guid::ms_to_ifc(&ms).unwrap(), "0000000000000000000000");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization support for the object model

pub mod error;
pub mod fasteners;
pub mod guid;
pub mod properties;

pub use error::{Error, Result};
pub use fasteners::{
    aggregate_fasteners, aggregate_sorted, bolt_record_from_set, collect_bolt_records, BoltRecord,
};
pub use guid::{ifc_to_ms, is_ifc_guid, ms_to_ifc};
pub use properties::{Property, PropertySet, PropertyValue, ViewerObject};
