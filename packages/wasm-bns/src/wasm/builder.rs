//! WASM bindings for encoding and signing
//!
//! BuilderNamespace provides the entry points a wallet needs to get a BNS
//! transaction signed and posted: signing bytes, postable bytes and the id.

use crate::builder::encode_msg;
use crate::proto::bnsd::Tx;
use crate::transaction::{bytes_to_post, bytes_to_sign_with_options, identifier};
use crate::types::EncodeOptions;
use crate::wasm::{from_js, signed_from_js, unsigned_from_js};
use prost::Message;
use wasm_bindgen::prelude::*;

/// Namespace for encoding operations
#[wasm_bindgen]
pub struct BuilderNamespace;

fn options_from_js(options: Option<JsValue>) -> Result<EncodeOptions, JsValue> {
    match options {
        Some(value) if !value.is_undefined() && !value.is_null() => from_js(value, "options"),
        _ => Ok(EncodeOptions::default()),
    }
}

#[wasm_bindgen]
impl BuilderNamespace {
    /// Build the bytes to sign for a transaction
    ///
    /// # Arguments
    /// * `tx` - Unsigned transaction (JSON object with `kind` and `chainId`)
    /// * `nonce` - Signer's nonce
    /// * `options` - Optional `{ strictMode }`, strict by default
    ///
    /// # Returns
    /// `{ bytes: Uint8Array, prehashType: "sha512" }`
    ///
    /// # Example
    /// ```json
    /// {
    ///   "kind": "bcp/send",
    ///   "chainId": "registry-chain",
    ///   "sender": "tiov1dcg3fat5zrvw00xezzjk3jgedm7pg70y222af3",
    ///   "recipient": "tiov1k898u78hgs36uqw68dg7va5nfkgstu5z0fhz3f",
    ///   "amount": { "quantity": "1000000001", "fractionalDigits": 9, "tokenTicker": "CASH" }
    /// }
    /// ```
    #[wasm_bindgen(js_name = bytesToSign)]
    pub fn bytes_to_sign_wasm(
        tx: JsValue,
        nonce: JsValue,
        options: Option<JsValue>,
    ) -> Result<JsValue, JsValue> {
        let tx = unsigned_from_js(tx)?;
        let nonce: i64 = from_js(nonce, "nonce")?;
        let job = bytes_to_sign_with_options(&tx, nonce, options_from_js(options)?)?;

        let obj = js_sys::Object::new();
        js_sys::Reflect::set(
            &obj,
            &"bytes".into(),
            &js_sys::Uint8Array::from(job.bytes.as_slice()).into(),
        )?;
        js_sys::Reflect::set(&obj, &"prehashType".into(), &crate::wasm::to_js(&job.prehash_type)?)?;
        Ok(obj.into())
    }

    /// Encode a signed transaction for broadcasting
    #[wasm_bindgen(js_name = bytesToPost)]
    pub fn bytes_to_post_wasm(signed: JsValue) -> Result<Vec<u8>, JsValue> {
        let signed = signed_from_js(signed)?;
        Ok(bytes_to_post(&signed)?)
    }

    /// Transaction id (uppercase hex) of a signed transaction
    #[wasm_bindgen]
    pub fn identifier(signed: JsValue) -> Result<String, JsValue> {
        let signed = signed_from_js(signed)?;
        Ok(identifier(&signed)?.0)
    }

    /// Encode only the message of a transaction
    ///
    /// Returns a `bnsd.Tx` holding just the message oneof, without fee,
    /// multisig ids or signatures.
    #[wasm_bindgen(js_name = encodeMsg)]
    pub fn encode_msg_wasm(tx: JsValue, options: Option<JsValue>) -> Result<Vec<u8>, JsValue> {
        let tx = unsigned_from_js(tx)?;
        let options = options_from_js(options)?;
        let wire = Tx {
            sum: Some(encode_msg(&tx, options.strict_mode)?),
            ..Default::default()
        };
        Ok(wire.encode_to_vec())
    }
}
