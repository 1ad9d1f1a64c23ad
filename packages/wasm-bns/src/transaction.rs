//! Transaction envelopes, signing bytes and identifiers
//!
//! The envelope (`bnsd.Tx`) wraps the kind-specific message with the fee,
//! multisig contract ids and signatures. Signers sign the envelope without
//! signatures, prefixed by the weave sign-code v1 header.

use prost::Message;
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::address::{
    address_prefix, decode_address_for_prefix, encode_address_field, Bech32Prefix,
};
use crate::amount::{decode_amount, encode_amount};
use crate::builder::{encode_msg, metadata};
use crate::error::WasmBnsError;
use crate::id::{decode_numeric_id_field, encode_numeric_id};
use crate::parser::decode_msg;
use crate::proto::bnsd::Tx;
use crate::proto::crypto::{public_key, signature};
use crate::proto::{cash, crypto, sigs};
use crate::types::*;

/// Magic header of weave sign-code v1
pub const SIGN_CODE_V1: [u8; 4] = [0x00, 0xca, 0xfe, 0x00];

/// Bytes of the tx hash kept for the transaction id
pub const TRANSACTION_ID_LENGTH: usize = 20;

/// Maximum chain id length, bounded by its single length byte
pub const MAX_CHAIN_ID_LENGTH: usize = 255;

const ED25519_PUBKEY_LENGTH: usize = 32;

fn encode_fee(prefix: Bech32Prefix, fee: &Fee) -> Result<cash::FeeInfo, WasmBnsError> {
    Ok(cash::FeeInfo {
        metadata: metadata(),
        payer: match &fee.payer {
            Some(payer) => decode_address_for_prefix(prefix, payer)?,
            None => Vec::new(),
        },
        fees: fee.tokens.as_ref().map(encode_amount).transpose()?,
    })
}

fn decode_fee(prefix: Bech32Prefix, fee: &cash::FeeInfo) -> Result<Fee, WasmBnsError> {
    let payer = if fee.payer.is_empty() {
        None
    } else {
        Some(encode_address_field(prefix, "payer", &fee.payer)?)
    };

    Ok(Fee {
        tokens: fee.fees.as_ref().map(decode_amount).transpose()?,
        payer,
    })
}

/// Encode a signature with its pubkey and nonce into a `StdSignature`
///
/// Only ed25519 keys of 32 bytes are supported.
pub fn encode_full_signature(full: &FullSignature) -> Result<sigs::StdSignature, WasmBnsError> {
    match full.pubkey.algo {
        Algorithm::Ed25519 => {}
        Algorithm::Secp256k1 => {
            return Err(WasmBnsError::UnsupportedKind(
                "unsupported algorithm: secp256k1".to_string(),
            ))
        }
    }
    if full.pubkey.data.len() != ED25519_PUBKEY_LENGTH {
        return Err(WasmBnsError::invalid_length(
            "pubkey",
            ED25519_PUBKEY_LENGTH,
            full.pubkey.data.len(),
        ));
    }

    Ok(sigs::StdSignature {
        sequence: full.nonce,
        pubkey: Some(crypto::PublicKey {
            r#pub: Some(public_key::Pub::Ed25519(full.pubkey.data.clone())),
        }),
        signature: Some(crypto::Signature {
            sig: Some(signature::Sig::Ed25519(full.signature.clone())),
        }),
    })
}

/// Decode a `StdSignature` back into a signature with pubkey and nonce
pub fn decode_full_signature(sig: &sigs::StdSignature) -> Result<FullSignature, WasmBnsError> {
    let pubkey = match sig.pubkey.as_ref().and_then(|p| p.r#pub.as_ref()) {
        Some(public_key::Pub::Ed25519(data)) => data,
        None => return Err(WasmBnsError::missing("pubkey")),
    };
    if pubkey.len() != ED25519_PUBKEY_LENGTH {
        return Err(WasmBnsError::invalid_length(
            "pubkey",
            ED25519_PUBKEY_LENGTH,
            pubkey.len(),
        ));
    }
    let signature = match sig.signature.as_ref().and_then(|s| s.sig.as_ref()) {
        Some(signature::Sig::Ed25519(data)) => data,
        None => return Err(WasmBnsError::missing("signature")),
    };

    Ok(FullSignature {
        nonce: sig.sequence,
        pubkey: PubkeyBundle {
            algo: Algorithm::Ed25519,
            data: pubkey.clone(),
        },
        signature: signature.clone(),
    })
}

fn build_tx(
    tx: &UnsignedTransaction,
    signatures: Vec<sigs::StdSignature>,
    options: EncodeOptions,
) -> Result<Tx, WasmBnsError> {
    let prefix = address_prefix(tx.chain_id());
    let fees = tx
        .base
        .fee
        .as_ref()
        .map(|fee| encode_fee(prefix, fee))
        .transpose()?;

    Ok(Tx {
        fees,
        signatures,
        multisig: tx
            .base
            .multisig
            .iter()
            .map(|id| encode_numeric_id(*id).to_vec())
            .collect(),
        sum: Some(encode_msg(tx, options.strict_mode)?),
    })
}

/// Encode a transaction envelope without signatures
pub fn encode_unsigned_tx(
    tx: &UnsignedTransaction,
    options: EncodeOptions,
) -> Result<Vec<u8>, WasmBnsError> {
    Ok(build_tx(tx, Vec::new(), options)?.encode_to_vec())
}

/// Encode a transaction envelope with all signatures, primary first
pub fn encode_signed_tx(
    signed: &SignedTransaction,
    options: EncodeOptions,
) -> Result<Vec<u8>, WasmBnsError> {
    let signatures = signed
        .signatures()
        .map(encode_full_signature)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(build_tx(&signed.transaction, signatures, options)?.encode_to_vec())
}

/// Prefix encoded transaction bytes with the sign-code header, chain id and nonce
pub fn append_sign_bytes(
    tx_bytes: &[u8],
    chain_id: &str,
    nonce: i64,
) -> Result<Vec<u8>, WasmBnsError> {
    if chain_id.len() > MAX_CHAIN_ID_LENGTH {
        return Err(WasmBnsError::ProtocolInvariantViolation(
            "chainId must not exceed a length of 255 characters".to_string(),
        ));
    }

    let mut out = Vec::with_capacity(SIGN_CODE_V1.len() + 1 + chain_id.len() + 8 + tx_bytes.len());
    out.extend_from_slice(&SIGN_CODE_V1);
    out.push(chain_id.len() as u8);
    out.extend_from_slice(chain_id.as_bytes());
    out.extend_from_slice(&nonce.to_be_bytes());
    out.extend_from_slice(tx_bytes);
    Ok(out)
}

/// Build the bytes a signer signs for the given nonce
///
/// # Arguments
/// * `tx` - Transaction to sign
/// * `nonce` - Signer's current nonce on the chain
/// * `options` - Encoding options
pub fn bytes_to_sign_with_options(
    tx: &UnsignedTransaction,
    nonce: i64,
    options: EncodeOptions,
) -> Result<SigningJob, WasmBnsError> {
    let tx_bytes = encode_unsigned_tx(tx, options)?;
    let bytes = append_sign_bytes(&tx_bytes, tx.chain_id(), nonce)?;
    debug!(
        kind = tx.kind(),
        nonce,
        len = bytes.len(),
        "built signing bytes"
    );

    Ok(SigningJob {
        bytes,
        prehash_type: PrehashType::Sha512,
    })
}

/// Build the bytes a signer signs, in strict mode
pub fn bytes_to_sign(tx: &UnsignedTransaction, nonce: i64) -> Result<SigningJob, WasmBnsError> {
    bytes_to_sign_with_options(tx, nonce, EncodeOptions::default())
}

/// Bytes of a signed transaction as broadcast to the chain
pub fn bytes_to_post(signed: &SignedTransaction) -> Result<Vec<u8>, WasmBnsError> {
    encode_signed_tx(signed, EncodeOptions::default())
}

/// Transaction id: uppercase hex of the first 20 bytes of sha256(bytes_to_post)
pub fn identifier(signed: &SignedTransaction) -> Result<TransactionId, WasmBnsError> {
    let hash = Sha256::digest(bytes_to_post(signed)?);
    Ok(TransactionId(
        hex::encode_upper(&hash[..TRANSACTION_ID_LENGTH]),
    ))
}

/// Parse posted transaction bytes
///
/// # Arguments
/// * `bytes` - Bytes as returned by [`bytes_to_post`]
/// * `chain_id` - Chain the transaction was posted to; selects the address prefix
pub fn parse_bytes(bytes: &[u8], chain_id: &str) -> Result<SignedTransaction, WasmBnsError> {
    let tx = Tx::decode(bytes)?;
    let prefix = address_prefix(chain_id);

    let mut signatures = tx
        .signatures
        .iter()
        .map(decode_full_signature)
        .collect::<Result<Vec<_>, _>>()?
        .into_iter();
    let primary_signature = signatures
        .next()
        .ok_or_else(|| WasmBnsError::missing("signatures"))?;

    let base = TransactionBase {
        chain_id: chain_id.to_string(),
        fee: tx.fees.as_ref().map(|fee| decode_fee(prefix, fee)).transpose()?,
        multisig: tx
            .multisig
            .iter()
            .map(|id| decode_numeric_id_field("multisig", id))
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(SignedTransaction {
        transaction: decode_msg(base, &tx)?,
        primary_signature,
        other_signatures: signatures.collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN_ID: &str = "test-123";

    fn send_tx() -> UnsignedTransaction {
        let mut tx = UnsignedTransaction::new(
            CHAIN_ID,
            TxMsg::Send(SendTx {
                sender: "tiov1dcg3fat5zrvw00xezzjk3jgedm7pg70y222af3".to_string(),
                recipient: "tiov1k898u78hgs36uqw68dg7va5nfkgstu5z0fhz3f".to_string(),
                amount: Amount::new("1000000001", "CASH"),
                memo: Some("paid transfer".to_string()),
            }),
        );
        tx.base.fee = Some(Fee {
            tokens: Some(Amount::new("10000000", "CASH")),
            payer: None,
        });
        tx
    }

    fn signature(nonce: i64, fill: u8) -> FullSignature {
        FullSignature {
            nonce,
            pubkey: PubkeyBundle {
                algo: Algorithm::Ed25519,
                data: vec![fill; 32],
            },
            signature: vec![fill.wrapping_add(1); 64],
        }
    }

    fn signed() -> SignedTransaction {
        SignedTransaction {
            transaction: send_tx(),
            primary_signature: signature(0, 0x11),
            other_signatures: vec![signature(7, 0x22)],
        }
    }

    #[test]
    fn test_sign_bytes_layout() {
        let bytes = append_sign_bytes(&[0xaa, 0xbb], "test-123", 1).unwrap();
        assert_eq!(
            hex::encode(bytes),
            "00cafe0008746573742d3132330000000000000001aabb"
        );
    }

    #[test]
    fn test_sign_bytes_negative_nonce() {
        let bytes = append_sign_bytes(&[], "a", -1).unwrap();
        assert_eq!(hex::encode(bytes), "00cafe000161ffffffffffffffff");
    }

    #[test]
    fn test_chain_id_too_long() {
        assert!(append_sign_bytes(&[], &"c".repeat(255), 0).is_ok());
        let err = append_sign_bytes(&[], &"c".repeat(256), 0).unwrap_err();
        assert!(err
            .to_string()
            .contains("chainId must not exceed a length of 255 characters"));
    }

    #[test]
    fn test_bytes_to_sign() {
        let tx = send_tx();
        let job = bytes_to_sign(&tx, 5).unwrap();
        assert_eq!(job.prehash_type, PrehashType::Sha512);

        let unsigned = encode_unsigned_tx(&tx, EncodeOptions::default()).unwrap();
        let header_len = 4 + 1 + CHAIN_ID.len() + 8;
        assert_eq!(&job.bytes[..4], &SIGN_CODE_V1);
        assert_eq!(job.bytes[4] as usize, CHAIN_ID.len());
        assert_eq!(&job.bytes[header_len - 8..header_len], &5i64.to_be_bytes());
        assert_eq!(&job.bytes[header_len..], unsigned.as_slice());
    }

    #[test]
    fn test_post_and_parse() {
        let signed = signed();
        let bytes = bytes_to_post(&signed).unwrap();
        let parsed = parse_bytes(&bytes, CHAIN_ID).unwrap();
        assert_eq!(parsed, signed);
    }

    #[test]
    fn test_multisig_and_payer_round_trip() {
        let mut signed = signed();
        signed.transaction.base.multisig = vec![1, 4];
        signed.transaction.base.fee = Some(Fee {
            tokens: None,
            payer: Some("tiov17yp0mh3yxwv6yxx386mxyfzlqnhe6q58edka6r".to_string()),
        });
        let bytes = bytes_to_post(&signed).unwrap();

        let raw = Tx::decode(bytes.as_slice()).unwrap();
        assert_eq!(raw.multisig, vec![encode_numeric_id(1).to_vec(), encode_numeric_id(4).to_vec()]);
        assert_eq!(parse_bytes(&bytes, CHAIN_ID).unwrap(), signed);
    }

    #[test]
    fn test_parse_requires_signature() {
        let bytes = encode_unsigned_tx(&send_tx(), EncodeOptions::default()).unwrap();
        let err = parse_bytes(&bytes, CHAIN_ID).unwrap_err();
        assert_eq!(err, WasmBnsError::missing("signatures"));
    }

    #[test]
    fn test_identifier() {
        let signed = signed();
        let id = identifier(&signed).unwrap();
        assert_eq!(id.0.len(), 40);
        assert!(id.0.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));

        let hash = Sha256::digest(bytes_to_post(&signed).unwrap());
        assert_eq!(id.0, hex::encode_upper(&hash[..20]));

        let mut other = signed.clone();
        other.primary_signature.nonce = 1;
        assert_ne!(identifier(&other).unwrap(), id);
    }

    #[test]
    fn test_secp256k1_unsupported() {
        let mut sig = signature(0, 1);
        sig.pubkey.algo = Algorithm::Secp256k1;
        sig.pubkey.data = vec![2; 33];
        let err = encode_full_signature(&sig).unwrap_err();
        assert!(matches!(err, WasmBnsError::UnsupportedKind(_)));
    }

    #[test]
    fn test_pubkey_length() {
        let mut sig = signature(0, 1);
        sig.pubkey.data.truncate(31);
        assert_eq!(
            encode_full_signature(&sig).unwrap_err(),
            WasmBnsError::invalid_length("pubkey", 32, 31)
        );
    }
}
