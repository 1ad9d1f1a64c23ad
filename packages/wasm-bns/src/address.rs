//! Bech32 address encoding and decoding for BNS
//!
//! Addresses are the first 20 bytes of a sha256 hash, rendered as bech32
//! with the `iov` prefix on mainnet and `tiov` on every other chain.

use bech32::primitives::decode::CheckedHrpstring;
use bech32::{Bech32, Hrp};
use sha2::{Digest, Sha256};

use crate::error::WasmBnsError;
use crate::types::{Algorithm, PubkeyBundle};

/// Chain id of the BNS mainnet
pub const BNS_MAINNET_CHAIN_ID: &str = "iov-mainnet";

/// Length of the raw address hash
pub const ADDRESS_LENGTH: usize = 20;

/// Human readable part of a BNS address
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bech32Prefix {
    /// Mainnet
    Iov,
    /// Testnets and local chains
    Tiov,
}

impl Bech32Prefix {
    pub fn as_str(&self) -> &'static str {
        match self {
            Bech32Prefix::Iov => "iov",
            Bech32Prefix::Tiov => "tiov",
        }
    }

    /// Parse a lowercase human readable part
    pub fn from_hrp(hrp: &str) -> Option<Self> {
        match hrp {
            "iov" => Some(Bech32Prefix::Iov),
            "tiov" => Some(Bech32Prefix::Tiov),
            _ => None,
        }
    }
}

/// A decoded bech32 address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedAddress {
    /// Lowercased human readable part
    pub prefix: String,
    pub data: Vec<u8>,
}

/// Get the address prefix used on a chain
pub fn address_prefix(chain_id: &str) -> Bech32Prefix {
    if chain_id == BNS_MAINNET_CHAIN_ID {
        Bech32Prefix::Iov
    } else {
        Bech32Prefix::Tiov
    }
}

/// Encode an address hash as bech32
///
/// # Arguments
/// * `prefix` - Prefix of the target chain
/// * `data` - 20-byte address hash
pub fn encode_bns_address(prefix: Bech32Prefix, data: &[u8]) -> Result<String, WasmBnsError> {
    if data.len() != ADDRESS_LENGTH {
        return Err(WasmBnsError::invalid_length(
            "address",
            ADDRESS_LENGTH,
            data.len(),
        ));
    }

    let hrp = Hrp::parse(prefix.as_str())
        .map_err(|e| WasmBnsError::InvalidAddress(format!("Invalid prefix: {}", e)))?;
    bech32::encode::<Bech32>(hrp, data)
        .map_err(|e| WasmBnsError::InvalidAddress(format!("Bech32 encoding failed: {}", e)))
}

/// Decode a bech32 address, validating its checksum
///
/// The prefix is returned as found; see [`decode_address_for_prefix`] for
/// the variant that also checks prefix and length.
pub fn decode_bns_address(address: &str) -> Result<DecodedAddress, WasmBnsError> {
    let checked = CheckedHrpstring::new::<Bech32>(address)
        .map_err(|e| WasmBnsError::InvalidAddress(format!("{}: {}", address, e)))?;

    Ok(DecodedAddress {
        prefix: checked.hrp().to_lowercase(),
        data: checked.byte_iter().collect(),
    })
}

/// Decode an address that must carry the given prefix and a 20-byte hash
pub fn decode_address_for_prefix(
    prefix: Bech32Prefix,
    address: &str,
) -> Result<Vec<u8>, WasmBnsError> {
    let decoded = decode_bns_address(address)?;
    if decoded.prefix != prefix.as_str() {
        return Err(WasmBnsError::InvalidAddress(format!(
            "{}: expected prefix '{}', got '{}'",
            address,
            prefix.as_str(),
            decoded.prefix
        )));
    }
    if decoded.data.len() != ADDRESS_LENGTH {
        return Err(WasmBnsError::invalid_length(
            "address",
            ADDRESS_LENGTH,
            decoded.data.len(),
        ));
    }
    Ok(decoded.data)
}

/// Decode an address used on the given chain
pub fn decode_address_for_chain(chain_id: &str, address: &str) -> Result<Vec<u8>, WasmBnsError> {
    decode_address_for_prefix(address_prefix(chain_id), address)
}

/// Render an address found in a named wire field
pub(crate) fn encode_address_field(
    prefix: Bech32Prefix,
    field: &str,
    bytes: &[u8],
) -> Result<String, WasmBnsError> {
    if bytes.is_empty() {
        return Err(WasmBnsError::missing(field));
    }
    if bytes.len() != ADDRESS_LENGTH {
        return Err(WasmBnsError::invalid_length(field, ADDRESS_LENGTH, bytes.len()));
    }
    encode_bns_address(prefix, bytes)
}

fn algorithm_prefix(algo: Algorithm) -> &'static [u8] {
    match algo {
        Algorithm::Ed25519 => b"sigs/ed25519/",
        Algorithm::Secp256k1 => b"sigs/secp256k1/",
    }
}

/// Derive the address of a public key on the given chain
///
/// The address is the first 20 bytes of `sha256("sigs/<algo>/" || pubkey)`.
pub fn identity_to_address(chain_id: &str, pubkey: &PubkeyBundle) -> Result<String, WasmBnsError> {
    let mut hasher = Sha256::new();
    hasher.update(algorithm_prefix(pubkey.algo));
    hasher.update(&pubkey.data);
    let hash = hasher.finalize();

    encode_bns_address(address_prefix(chain_id), &hash[..ADDRESS_LENGTH])
}

/// Check whether a string is a valid BNS address on any BNS chain
pub fn is_valid_address(address: &str) -> bool {
    match decode_bns_address(address) {
        Ok(decoded) => {
            Bech32Prefix::from_hrp(&decoded.prefix).is_some()
                && decoded.data.len() == ADDRESS_LENGTH
        }
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        "f6cade229408c93a2a8d181d62efce46ff60d210",
        "tiov17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mky"
    )]
    #[case(
        "ae8cf0f2d436db9ecbbe118cf1d1637d568797c9",
        "tiov146x0puk5xmdeaja7zxx0r5tr04tg097fralsxd"
    )]
    #[case(
        "0e95c039ef14ee329d0e09d84f909cf9eb5ef472",
        "tiov1p62uqw00znhr98gwp8vylyyul844aarjhe9duq"
    )]
    fn test_testnet_addresses(#[case] data: &str, #[case] address: &str) {
        let data = hex::decode(data).unwrap();
        assert_eq!(
            encode_bns_address(Bech32Prefix::Tiov, &data).unwrap(),
            address
        );

        let decoded = decode_bns_address(address).unwrap();
        assert_eq!(decoded.prefix, "tiov");
        assert_eq!(decoded.data, data);
    }

    #[test]
    fn test_mainnet_address() {
        let data = hex::decode("f6cade229408c93a2a8d181d62efce46ff60d210").unwrap();
        let address = encode_bns_address(Bech32Prefix::Iov, &data).unwrap();
        assert_eq!(address, "iov17m9dug55pryn525drqwk9m7wgmlkp5ssm8rlk4");
        assert_eq!(decode_address_for_chain("iov-mainnet", &address).unwrap(), data);
    }

    #[test]
    fn test_address_prefix() {
        assert_eq!(address_prefix("iov-mainnet"), Bech32Prefix::Iov);
        assert_eq!(address_prefix("registry-chain"), Bech32Prefix::Tiov);
        assert_eq!(address_prefix(""), Bech32Prefix::Tiov);
    }

    #[test]
    fn test_bad_checksum() {
        let err = decode_bns_address("tiov17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mkz").unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAddress(_)));
        assert!(!is_valid_address("tiov17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mkz"));
    }

    #[test]
    fn test_prefix_mismatch() {
        let err = decode_address_for_chain(
            "iov-mainnet",
            "tiov17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mky",
        )
        .unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAddress(_)));
    }

    #[test]
    fn test_encode_requires_20_bytes() {
        let err = encode_bns_address(Bech32Prefix::Tiov, &[1, 2, 3]).unwrap_err();
        assert_eq!(err, WasmBnsError::invalid_length("address", 20, 3));
    }

    #[test]
    fn test_encode_address_field() {
        let data = hex::decode("ae8cf0f2d436db9ecbbe118cf1d1637d568797c9").unwrap();
        assert_eq!(
            encode_address_field(Bech32Prefix::Tiov, "source", &data).unwrap(),
            "tiov146x0puk5xmdeaja7zxx0r5tr04tg097fralsxd"
        );
        assert_eq!(
            encode_address_field(Bech32Prefix::Tiov, "source", &[]).unwrap_err(),
            WasmBnsError::missing("source")
        );
        assert_eq!(
            encode_address_field(Bech32Prefix::Tiov, "source", &data[..19]).unwrap_err(),
            WasmBnsError::invalid_length("source", 20, 19)
        );
    }

    #[test]
    fn test_identity_to_address() {
        let pubkey = PubkeyBundle {
            algo: Algorithm::Ed25519,
            data: (0u8..32).collect(),
        };
        assert_eq!(
            identity_to_address("registry-chain", &pubkey).unwrap(),
            "tiov14aj328ljl9j57g57v5xsyqc277ewyru2stkvv6"
        );
        assert_eq!(
            identity_to_address("iov-mainnet", &pubkey).unwrap(),
            "iov14aj328ljl9j57g57v5xsyqc277ewyru277lgvt"
        );
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("tiov17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mky"));
        assert!(is_valid_address("iov17m9dug55pryn525drqwk9m7wgmlkp5ssm8rlk4"));
        assert!(!is_valid_address("17m9dug55pryn525drqwk9m7wgmlkp5ss4j2mky"));
        assert!(!is_valid_address(""));
    }
}
