use proptest::prelude::*;

use wasm_bns::address::encode_bns_address;
use wasm_bns::proposal::{parse_validator_key, validator_key};
use wasm_bns::proto::bnsd::Tx;
use wasm_bns::types::{Amount, SendTx, TransactionBase, VersionedId};
use wasm_bns::{
    decode_amount, decode_msg, decode_numeric_id, decode_versioned_id, encode_amount, encode_msg,
    encode_numeric_id, encode_versioned_id, Bech32Prefix, TxMsg, UnsignedTransaction,
};

proptest! {
    /// Amount roundtrip: quantities below 10^24 survive encode -> decode.
    #[test]
    fn amount_roundtrip(quantity in "(0|[1-9][0-9]{0,23})", ticker in "[A-Z]{3,4}") {
        let amount = Amount::new(quantity, ticker);
        let coin = encode_amount(&amount).unwrap();
        prop_assert!(coin.fractional < 1_000_000_000);
        prop_assert_eq!(decode_amount(&coin).unwrap(), amount);
    }

    /// Any fractional digit count other than 9 is rejected.
    #[test]
    fn amount_rejects_other_digits(digits in 0u32..40, quantity in "[0-9]{1,12}") {
        prop_assume!(digits != 9);
        let amount = Amount {
            quantity,
            fractional_digits: digits,
            token_ticker: "ASH".to_string(),
        };
        prop_assert!(encode_amount(&amount).is_err());
    }

    /// Numeric id roundtrip over the full u64 range.
    #[test]
    fn numeric_id_roundtrip(id in any::<u64>()) {
        let bytes = encode_numeric_id(id);
        prop_assert_eq!(bytes.len(), 8);
        prop_assert_eq!(decode_numeric_id(&bytes).unwrap(), id);
    }

    /// Only 8-byte inputs decode as numeric ids.
    #[test]
    fn numeric_id_length(bytes in prop::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(decode_numeric_id(&bytes).is_ok(), bytes.len() == 8);
    }

    /// Versioned id roundtrip.
    #[test]
    fn versioned_id_roundtrip(id in any::<u64>(), version in any::<u32>()) {
        let versioned = VersionedId { id, version };
        let bytes = encode_versioned_id(&versioned);
        prop_assert_eq!(decode_versioned_id(&bytes).unwrap(), versioned);
    }

    /// Validator keys are produced and consumed identically.
    #[test]
    fn validator_key_roundtrip(pubkey in prop::array::uniform32(0u8..)) {
        let key = validator_key(&pubkey);
        prop_assert!(key.starts_with("ed25519_"));
        prop_assert_eq!(parse_validator_key(&key).unwrap(), pubkey.to_vec());
    }

    /// Send messages roundtrip, with an empty memo normalized to none.
    #[test]
    fn send_msg_roundtrip(
        sender in prop::array::uniform20(0u8..),
        recipient in prop::array::uniform20(0u8..),
        quantity in "[1-9][0-9]{0,20}",
        memo in proptest::option::of("[a-zA-Z0-9 ]{1,128}"),
    ) {
        let chain_id = "registry-chain";
        let tx = UnsignedTransaction::new(
            chain_id,
            TxMsg::Send(SendTx {
                sender: encode_bns_address(Bech32Prefix::Tiov, &sender).unwrap(),
                recipient: encode_bns_address(Bech32Prefix::Tiov, &recipient).unwrap(),
                amount: Amount::new(quantity, "CASH"),
                memo,
            }),
        );
        let wire = Tx {
            sum: Some(encode_msg(&tx, true).unwrap()),
            ..Default::default()
        };
        prop_assert_eq!(decode_msg(TransactionBase::new(chain_id), &wire).unwrap(), tx);
    }
}
