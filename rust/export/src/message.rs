// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Popup window message envelope
//!
//! Popups talk to the parent panel over the standard cross-window channel
//! with a typed JSON envelope. Requests are discriminated by `action`,
//! replies by `result`. The transport itself lives on the UI side.

use serde::{Deserialize, Serialize};

/// Request from a popup to the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum PanelAction {
    /// Resolve an IFC GUID and select the matching object
    LookupGuid { guid: String },
    /// Measure the current selection
    Measure,
    /// Aggregate fasteners over the current selection
    AggregateFasteners,
    /// Close the popup channel
    Close,
}

/// Reply from the panel to a popup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum PanelResult {
    /// GUID resolution outcome; `ms` is absent when the GUID was invalid
    Guid {
        ifc: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ms: Option<String>,
    },
    /// Serialized payload (dimension report or workbook JSON)
    Payload { json: String },
    /// The single user-facing failure message
    Error { message: String },
    /// Acknowledged with nothing to return
    Ok,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_discriminator() {
        let json = serde_json::to_string(&PanelAction::LookupGuid {
            guid: "0000000000000000000000".into(),
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["action"], "lookup_guid");

        let back: PanelAction = serde_json::from_str(&json).unwrap();
        assert!(matches!(back, PanelAction::LookupGuid { .. }));
    }

    #[test]
    fn test_result_discriminator() {
        let json = serde_json::to_string(&PanelResult::Error {
            message: "Nothing is selected".into(),
        })
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["result"], "error");
    }

    #[test]
    fn test_absent_ms_omitted() {
        let json = serde_json::to_string(&PanelResult::Guid {
            ifc: "not-a-guid".into(),
            ms: None,
        })
        .unwrap();
        assert!(!json.contains("\"ms\""));
    }
}
