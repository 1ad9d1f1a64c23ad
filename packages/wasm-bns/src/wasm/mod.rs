//! WASM bindings for wasm-bns
//!
//! This module contains thin wrappers with #[wasm_bindgen] that delegate
//! to the core Rust implementations. Transactions cross the boundary as
//! plain JS objects in their JSON shape.

pub mod builder;
pub mod codec;
pub mod parser;

// Re-export WASM types
pub use builder::BuilderNamespace;
pub use codec::CodecNamespace;
pub use parser::ParserNamespace;

use serde::{de::DeserializeOwned, Serialize};
use wasm_bindgen::prelude::*;

use crate::error::WasmBnsError;
use crate::types::{SignedTransaction, UnsignedTransaction};

/// Deserialize a JS value, naming the argument in the error
pub(crate) fn from_js<T: DeserializeOwned>(value: JsValue, what: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| JsValue::from_str(&format!("Invalid {}: {}", what, e)))
}

/// Serialize to a plain JS object (maps become objects, not `Map`s)
pub(crate) fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

pub(crate) fn unsigned_from_js(value: JsValue) -> Result<UnsignedTransaction, JsValue> {
    let json: serde_json::Value = from_js(value, "transaction")?;
    Ok(UnsignedTransaction::from_json(json)?)
}

pub(crate) fn signed_from_js(value: JsValue) -> Result<SignedTransaction, JsValue> {
    let mut json: serde_json::Value = from_js(value, "signed transaction")?;
    let transaction = json
        .get_mut("transaction")
        .map(serde_json::Value::take)
        .ok_or_else(|| WasmBnsError::missing("transaction"))?;
    let transaction = UnsignedTransaction::from_json(transaction)?;

    let primary_signature = json
        .get_mut("primarySignature")
        .map(serde_json::Value::take)
        .ok_or_else(|| WasmBnsError::missing("primarySignature"))?;
    let other_signatures = match json.get_mut("otherSignatures") {
        Some(value) => serde_json::from_value(value.take()).map_err(WasmBnsError::from)?,
        None => Vec::new(),
    };

    Ok(SignedTransaction {
        transaction,
        primary_signature: serde_json::from_value(primary_signature).map_err(WasmBnsError::from)?,
        other_signatures,
    })
}
