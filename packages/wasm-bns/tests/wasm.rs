#![cfg(target_arch = "wasm32")]

use prost::Message;
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

use wasm_bns::builder::encode_msg;
use wasm_bns::proto::bnsd::Tx;
use wasm_bns::types::{ReturnEscrowTx, TxMsg, UnsignedTransaction};
use wasm_bns::wasm::{BuilderNamespace, CodecNamespace, ParserNamespace};

#[wasm_bindgen_test]
fn codec_namespace_addresses() {
    let data = hex::decode("f6cade229408c93a2a8d181d62efce46ff60d210").unwrap();
    let address = CodecNamespace::encode_address("tiov", &data).unwrap();
    assert_eq!(address, "tiov17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mky");
    assert!(CodecNamespace::is_valid_address_wasm(&address));
    assert_eq!(CodecNamespace::address_prefix_wasm("iov-mainnet"), "iov");
}

#[wasm_bindgen_test]
fn codec_namespace_ids() {
    let bytes = CodecNamespace::encode_numeric_id_wasm(4);
    assert_eq!(bytes, vec![0, 0, 0, 0, 0, 0, 0, 4]);
    assert_eq!(CodecNamespace::decode_numeric_id_wasm(&bytes).unwrap(), 4);
}

#[wasm_bindgen_test]
fn builder_rejects_unknown_kind() {
    let tx = js_sys::JSON::parse(r#"{"kind":"eth/send","chainId":"ethereum-eip155-1"}"#).unwrap();
    assert!(BuilderNamespace::encode_msg_wasm(tx, None).is_err());
}

#[wasm_bindgen_test]
fn parser_rejects_empty_bytes() {
    assert!(ParserNamespace::parse_bytes_wasm(&[], "registry-chain").is_err());
}

#[wasm_bindgen_test]
fn parser_keeps_large_ids_exact() {
    let tx = UnsignedTransaction::new(
        "registry-chain",
        TxMsg::ReturnEscrow(ReturnEscrowTx {
            escrow_id: u64::MAX,
        }),
    );
    let wire = Tx {
        sum: Some(encode_msg(&tx, true).unwrap()),
        ..Default::default()
    };
    let decoded =
        ParserNamespace::decode_msg_wasm(&wire.encode_to_vec(), "registry-chain").unwrap();
    let escrow_id = js_sys::Reflect::get(&decoded, &JsValue::from_str("escrowId")).unwrap();
    assert_eq!(escrow_id.as_string().as_deref(), Some("18446744073709551615"));
}
