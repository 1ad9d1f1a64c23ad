//! wasm-bns: WASM module for BNS (IOV Name Service) transaction encoding
//!
//! This crate provides:
//! - Amount, bech32 address and id codecs
//! - Message encoding/decoding for every supported transaction kind,
//!   including governance proposal actions
//! - Signing bytes, postable bytes and transaction ids
//!
//! # Architecture
//!
//! The crate follows a two-layer architecture:
//! - **Core layer** (`src/*.rs`): Pure Rust logic, no WASM dependencies
//! - **WASM layer** (`src/wasm/*.rs`): Thin wrappers with `#[wasm_bindgen]`

pub mod address;
pub mod amount;
pub mod builder;
pub mod error;
pub mod id;
pub mod parser;
pub mod proposal;
pub mod proto;
pub mod transaction;
pub mod types;
pub mod wasm;

// Re-export main types for convenience
pub use address::{
    address_prefix, decode_bns_address, encode_bns_address, identity_to_address,
    is_valid_address, Bech32Prefix,
};
pub use amount::{decode_amount, encode_amount};
pub use builder::encode_msg;
pub use error::WasmBnsError;
pub use id::{decode_numeric_id, decode_versioned_id, encode_numeric_id, encode_versioned_id};
pub use parser::decode_msg;
pub use proposal::{decode_raw_proposal_option, encode_proposal_action};
pub use transaction::{bytes_to_post, bytes_to_sign, identifier, parse_bytes};
pub use types::{SignedTransaction, TxMsg, UnsignedTransaction};
