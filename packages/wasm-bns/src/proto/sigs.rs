/// StdSignature represents the signature, the identity of the signer
/// (the PubKey), and a sequence number to prevent replay attacks.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StdSignature {
    #[prost(int64, tag = "1")]
    pub sequence: i64,
    #[prost(message, optional, tag = "2")]
    pub pubkey: ::core::option::Option<super::crypto::PublicKey>,
    /// Removed Address, Pubkey is more powerful
    #[prost(message, optional, tag = "4")]
    pub signature: ::core::option::Option<super::crypto::Signature>,
}
