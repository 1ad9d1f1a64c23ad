//! Fixed-width id encoding
//!
//! Numeric ids are 8-byte big-endian keys. Versioned ids append a 4-byte
//! big-endian version to the numeric id.

use crate::error::WasmBnsError;
use crate::types::VersionedId;

pub const NUMERIC_ID_LENGTH: usize = 8;
pub const VERSIONED_ID_LENGTH: usize = 12;

pub fn encode_numeric_id(id: u64) -> [u8; NUMERIC_ID_LENGTH] {
    id.to_be_bytes()
}

pub fn decode_numeric_id(bytes: &[u8]) -> Result<u64, WasmBnsError> {
    let array: [u8; NUMERIC_ID_LENGTH] = bytes
        .try_into()
        .map_err(|_| WasmBnsError::invalid_length("id", NUMERIC_ID_LENGTH, bytes.len()))?;
    Ok(u64::from_be_bytes(array))
}

pub fn encode_versioned_id(id: &VersionedId) -> [u8; VERSIONED_ID_LENGTH] {
    let mut out = [0u8; VERSIONED_ID_LENGTH];
    out[..NUMERIC_ID_LENGTH].copy_from_slice(&id.id.to_be_bytes());
    out[NUMERIC_ID_LENGTH..].copy_from_slice(&id.version.to_be_bytes());
    out
}

pub fn decode_versioned_id(bytes: &[u8]) -> Result<VersionedId, WasmBnsError> {
    if bytes.len() != VERSIONED_ID_LENGTH {
        return Err(WasmBnsError::invalid_length(
            "versioned id",
            VERSIONED_ID_LENGTH,
            bytes.len(),
        ));
    }
    let (id, version) = bytes.split_at(NUMERIC_ID_LENGTH);
    let mut version_bytes = [0u8; 4];
    version_bytes.copy_from_slice(version);

    Ok(VersionedId {
        id: decode_numeric_id(id)?,
        version: u32::from_be_bytes(version_bytes),
    })
}

/// Decode a numeric id found in a named wire field
pub(crate) fn decode_numeric_id_field(field: &str, bytes: &[u8]) -> Result<u64, WasmBnsError> {
    if bytes.is_empty() {
        return Err(WasmBnsError::missing(field));
    }
    decode_numeric_id(bytes).map_err(|_| {
        WasmBnsError::invalid_length(field, NUMERIC_ID_LENGTH, bytes.len())
    })
}
