// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! IFC GUID ↔ Microsoft GUID conversion
//!
//! IFC files carry a 22-character compressed GlobalId encoded with a custom
//! 64-symbol alphabet (`0-9`, `A-Z`, `a-z`, `_`, `$`). The first character
//! contributes 2 bits, each remaining character 6 bits (2 + 21×6 = 128 bits),
//! which maps exactly onto a standard 128-bit UUID rendered as
//! `8-4-4-4-12` hex groups.

use crate::error::{Error, Result};

/// The IFC base-64 alphabet, in value order 0..=63.
const IFC_ALPHABET: &[u8; 64] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz_$";

/// Length of a compressed IFC GUID.
pub const IFC_GUID_LEN: usize = 22;

/// Length of a canonical hyphenated UUID.
pub const MS_GUID_LEN: usize = 36;

/// Map one IFC alphabet byte to its 6-bit value.
#[inline]
fn char_value(b: u8) -> Option<u32> {
    match b {
        b'0'..=b'9' => Some((b - b'0') as u32),
        b'A'..=b'Z' => Some((b - b'A') as u32 + 10),
        b'a'..=b'z' => Some((b - b'a') as u32 + 36),
        b'_' => Some(62),
        b'$' => Some(63),
        _ => None,
    }
}

/// Check whether a string looks like a compressed IFC GUID.
pub fn is_ifc_guid(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == IFC_GUID_LEN
        && char_value(bytes[0]).is_some_and(|v| v < 4)
        && bytes[1..].iter().all(|&b| char_value(b).is_some())
}

/// Decode a 22-character IFC GUID into the canonical lowercase UUID form.
///
/// The all-`'0'` input decodes to the nil UUID
/// `00000000-0000-0000-0000-000000000000`.
///
/// # Errors
/// Returns an error for inputs that are not exactly 22 characters, contain a
/// character outside the IFC alphabet, or whose first character encodes more
/// than 2 bits. Callers that look GUIDs up by string typically map these to
/// "not found" rather than surfacing them.
pub fn ifc_to_ms(ifc: &str) -> Result<String> {
    let bytes = ifc.as_bytes();
    if bytes.len() != IFC_GUID_LEN {
        return Err(Error::GuidLength(ifc.chars().count()));
    }

    let mut value: u128 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        let v = char_value(b).ok_or(Error::GuidCharacter(b as char))?;
        if i == 0 {
            // Leading character carries only the top 2 bits
            if v > 3 {
                return Err(Error::GuidOverflow);
            }
            value = v as u128;
        } else {
            value = (value << 6) | v as u128;
        }
    }

    let hex = format!("{value:032x}");
    Ok(format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    ))
}

/// Encode a canonical hyphenated UUID (case-insensitive) as a 22-character
/// IFC GUID.
///
/// Inverse of [`ifc_to_ms`]; the two round-trip exactly in both directions.
pub fn ms_to_ifc(ms: &str) -> Result<String> {
    let bytes = ms.as_bytes();
    if bytes.len() != MS_GUID_LEN {
        return Err(Error::Uuid(format!(
            "expected 36 characters, got {}",
            ms.chars().count()
        )));
    }

    let mut value: u128 = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if matches!(i, 8 | 13 | 18 | 23) {
            if b != b'-' {
                return Err(Error::Uuid(format!(
                    "expected '-' at position {i}, got {:?}",
                    b as char
                )));
            }
            continue;
        }
        let digit = (b as char)
            .to_digit(16)
            .ok_or_else(|| Error::Uuid(format!("invalid hex digit {:?}", b as char)))?;
        value = (value << 4) | digit as u128;
    }

    let mut out = [0u8; IFC_GUID_LEN];
    out[0] = IFC_ALPHABET[((value >> 126) & 0x3) as usize];
    for (i, slot) in out.iter_mut().skip(1).enumerate() {
        *slot = IFC_ALPHABET[((value >> (120 - 6 * i)) & 0x3f) as usize];
    }

    // Alphabet is ASCII, so the buffer is valid UTF-8
    Ok(String::from_utf8_lossy(&out).into_owned())
}
