// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in core data handling
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid IFC GUID length: expected 22 characters, got {0}")]
    GuidLength(usize),

    #[error("Invalid IFC GUID character: {0:?}")]
    GuidCharacter(char),

    #[error("Invalid IFC GUID: first character must be in '0'..='3'")]
    GuidOverflow,

    #[error("Invalid UUID: {0}")]
    Uuid(String),

    #[error("Property error: {0}")]
    Property(String),
}
