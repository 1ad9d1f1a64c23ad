//! Wire schema of the bnsd application
//!
//! Hand-maintained prost definitions, one module per protobuf package of
//! weave/bnsd. Only the messages this codec reads or writes are declared;
//! field tags must match the chain's `.proto` files exactly.

pub mod account;
pub mod aswap;
pub mod bnsd;
pub mod cash;
pub mod coin;
pub mod crypto;
pub mod datamigration;
pub mod escrow;
pub mod gov;
pub mod migration;
pub mod msgfee;
pub mod multisig;
pub mod sigs;
pub mod txfee;
pub mod username;
pub mod validators;
pub mod weave;
