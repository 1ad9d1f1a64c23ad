//! WASM bindings for the field codecs
//!
//! CodecNamespace exposes the amount, address and id codecs on their own,
//! for callers that build or inspect wire data piecemeal.

use crate::address::{
    address_prefix, decode_bns_address, encode_bns_address, identity_to_address,
    is_valid_address, Bech32Prefix,
};
use crate::amount::{decode_amount, encode_amount};
use crate::error::WasmBnsError;
use crate::id::{decode_numeric_id, decode_versioned_id, encode_numeric_id, encode_versioned_id};
use crate::proposal::{parse_validator_key, validator_key};
use crate::proto::coin::Coin;
use crate::types::{Amount, PubkeyBundle, VersionedId};
use crate::wasm::{from_js, to_js};
use prost::Message;
use wasm_bindgen::prelude::*;

/// Namespace for field codec operations
#[wasm_bindgen]
pub struct CodecNamespace;

fn prefix_from_str(prefix: &str) -> Result<Bech32Prefix, WasmBnsError> {
    Bech32Prefix::from_hrp(prefix)
        .ok_or_else(|| WasmBnsError::InvalidAddress(format!("Unknown prefix '{}'", prefix)))
}

#[wasm_bindgen]
impl CodecNamespace {
    /// Encode an amount as protobuf `coin.Coin` bytes
    ///
    /// # Example
    /// ```json
    /// { "quantity": "3123456789", "fractionalDigits": 9, "tokenTicker": "ASH" }
    /// ```
    #[wasm_bindgen(js_name = encodeAmount)]
    pub fn encode_amount_wasm(amount: JsValue) -> Result<Vec<u8>, JsValue> {
        let amount: Amount = from_js(amount, "amount")?;
        Ok(encode_amount(&amount)?.encode_to_vec())
    }

    /// Decode protobuf `coin.Coin` bytes into an amount
    #[wasm_bindgen(js_name = decodeAmount)]
    pub fn decode_amount_wasm(bytes: &[u8]) -> Result<JsValue, JsValue> {
        let coin = Coin::decode(bytes).map_err(WasmBnsError::from)?;
        to_js(&decode_amount(&coin)?)
    }

    /// Address prefix used on a chain (`iov` or `tiov`)
    #[wasm_bindgen(js_name = addressPrefix)]
    pub fn address_prefix_wasm(chain_id: &str) -> String {
        address_prefix(chain_id).as_str().to_string()
    }

    /// Encode a 20-byte address hash as bech32
    #[wasm_bindgen(js_name = encodeAddress)]
    pub fn encode_address(prefix: &str, data: &[u8]) -> Result<String, JsValue> {
        Ok(encode_bns_address(prefix_from_str(prefix)?, data)?)
    }

    /// Decode a bech32 address into `{ prefix, data }`
    #[wasm_bindgen(js_name = decodeAddress)]
    pub fn decode_address(address: &str) -> Result<JsValue, JsValue> {
        let decoded = decode_bns_address(address)?;

        let obj = js_sys::Object::new();
        js_sys::Reflect::set(&obj, &"prefix".into(), &decoded.prefix.into())?;
        js_sys::Reflect::set(
            &obj,
            &"data".into(),
            &js_sys::Uint8Array::from(decoded.data.as_slice()).into(),
        )?;
        Ok(obj.into())
    }

    /// Derive the address of a pubkey (`{ algo, data }`) on a chain
    #[wasm_bindgen(js_name = identityToAddress)]
    pub fn identity_to_address_wasm(chain_id: &str, pubkey: JsValue) -> Result<String, JsValue> {
        let pubkey: PubkeyBundle = from_js(pubkey, "pubkey")?;
        Ok(identity_to_address(chain_id, &pubkey)?)
    }

    #[wasm_bindgen(js_name = isValidAddress)]
    pub fn is_valid_address_wasm(address: &str) -> bool {
        is_valid_address(address)
    }

    /// Encode a numeric id as 8 big-endian bytes
    #[wasm_bindgen(js_name = encodeNumericId)]
    pub fn encode_numeric_id_wasm(id: u64) -> Vec<u8> {
        encode_numeric_id(id).to_vec()
    }

    #[wasm_bindgen(js_name = decodeNumericId)]
    pub fn decode_numeric_id_wasm(bytes: &[u8]) -> Result<u64, JsValue> {
        Ok(decode_numeric_id(bytes)?)
    }

    /// Encode `{ id, version }` as 12 bytes
    #[wasm_bindgen(js_name = encodeVersionedId)]
    pub fn encode_versioned_id_wasm(id: JsValue) -> Result<Vec<u8>, JsValue> {
        let id: VersionedId = from_js(id, "versioned id")?;
        Ok(encode_versioned_id(&id).to_vec())
    }

    #[wasm_bindgen(js_name = decodeVersionedId)]
    pub fn decode_versioned_id_wasm(bytes: &[u8]) -> Result<JsValue, JsValue> {
        to_js(&decode_versioned_id(bytes)?)
    }

    /// Validator key (`ed25519_<pubkey_hex>`) of an ed25519 pubkey
    #[wasm_bindgen(js_name = validatorKey)]
    pub fn validator_key_wasm(pubkey: &[u8]) -> String {
        validator_key(pubkey)
    }

    #[wasm_bindgen(js_name = parseValidatorKey)]
    pub fn parse_validator_key_wasm(key: &str) -> Result<Vec<u8>, JsValue> {
        Ok(parse_validator_key(key)?)
    }
}
