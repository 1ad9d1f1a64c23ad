//! WASM bindings for transaction parsing
//!
//! ParserNamespace provides static methods for parsing BNS transactions

use crate::parser::decode_msg;
use crate::proto::bnsd::Tx;
use crate::transaction::parse_bytes;
use crate::types::TransactionBase;
use crate::wasm::to_js;
use prost::Message;
use wasm_bindgen::prelude::*;

/// Namespace for parsing operations
#[wasm_bindgen]
pub struct ParserNamespace;

#[wasm_bindgen]
impl ParserNamespace {
    /// Parse posted transaction bytes
    ///
    /// # Arguments
    /// * `bytes` - Raw `bnsd.Tx` bytes including signatures
    /// * `chain_id` - Chain the bytes belong to; selects the address prefix
    ///
    /// # Returns
    /// Signed transaction as JSON-compatible JS object
    #[wasm_bindgen(js_name = parseBytes)]
    pub fn parse_bytes_wasm(bytes: &[u8], chain_id: &str) -> Result<JsValue, JsValue> {
        let signed = parse_bytes(bytes, chain_id)?;
        to_js(&signed)
    }

    /// Parse posted transaction bytes from a hex string
    ///
    /// # Arguments
    /// * `hex` - Hex-encoded bytes (with or without 0x prefix)
    /// * `chain_id` - Chain the bytes belong to
    #[wasm_bindgen(js_name = parseHex)]
    pub fn parse_hex(hex: &str, chain_id: &str) -> Result<JsValue, JsValue> {
        let hex = hex.strip_prefix("0x").unwrap_or(hex);
        let bytes =
            hex::decode(hex).map_err(|e| JsValue::from_str(&format!("Invalid hex: {}", e)))?;
        let signed = parse_bytes(&bytes, chain_id)?;
        to_js(&signed)
    }

    /// Decode the message of a `bnsd.Tx`, ignoring fee and signatures
    #[wasm_bindgen(js_name = decodeMsg)]
    pub fn decode_msg_wasm(bytes: &[u8], chain_id: &str) -> Result<JsValue, JsValue> {
        let tx = Tx::decode(bytes).map_err(crate::error::WasmBnsError::from)?;
        let unsigned = decode_msg(TransactionBase::new(chain_id), &tx)?;
        to_js(&unsigned)
    }

    /// Get the `kind` of the transaction in posted bytes
    #[wasm_bindgen(js_name = getKind)]
    pub fn get_kind(bytes: &[u8], chain_id: &str) -> Result<String, JsValue> {
        let tx = Tx::decode(bytes).map_err(crate::error::WasmBnsError::from)?;
        let unsigned = decode_msg(TransactionBase::new(chain_id), &tx)?;
        Ok(unsigned.kind().to_string())
    }
}
