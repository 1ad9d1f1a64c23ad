//! Error types for wasm-bns

use thiserror::Error;
use wasm_bindgen::prelude::*;

/// Main error type for wasm-bns operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WasmBnsError {
    /// A required field was absent (or held its zero value) on the wire
    #[error("missing {0}")]
    MissingField(String),
    /// A fixed-size byte field had the wrong length
    #[error("Invalid length of {field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: String,
        expected: usize,
        actual: usize,
    },
    /// Negative coin component, bad quantity string or wrong fractional digits
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// Memo longer than the chain allows, measured in UTF-8 bytes
    #[error("Invalid memo length: maximum {max} bytes, got {actual}")]
    InvalidMemo { max: usize, actual: usize },
    /// Bad bech32 checksum, wrong prefix or wrong payload length
    #[error("Invalid address: {0}")]
    InvalidAddress(String),
    /// Transaction kind, wire oneof or proposal action not handled by this codec
    #[error("Unsupported kind: {0}")]
    UnsupportedKind(String),
    /// A chain-level rule was broken (e.g. escrow party updates, strict votes)
    #[error("{0}")]
    ProtocolInvariantViolation(String),
    /// Protobuf decode error
    #[error("Protobuf decode error: {0}")]
    ProtobufDecode(String),
    /// Malformed input at the binding boundary (JSON, hex)
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl WasmBnsError {
    pub(crate) fn missing(field: impl Into<String>) -> Self {
        WasmBnsError::MissingField(field.into())
    }

    pub(crate) fn invalid_length(field: impl Into<String>, expected: usize, actual: usize) -> Self {
        WasmBnsError::InvalidLength {
            field: field.into(),
            expected,
            actual,
        }
    }
}

impl From<prost::DecodeError> for WasmBnsError {
    fn from(err: prost::DecodeError) -> Self {
        WasmBnsError::ProtobufDecode(err.to_string())
    }
}

impl From<serde_json::Error> for WasmBnsError {
    fn from(err: serde_json::Error) -> Self {
        WasmBnsError::InvalidInput(err.to_string())
    }
}

// REQUIRED: Converts to JS Error with stack trace
impl From<WasmBnsError> for JsValue {
    fn from(err: WasmBnsError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
