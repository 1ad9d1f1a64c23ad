/// CreateMsg creates a new atomic swap
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub source: ::prost::alloc::vec::Vec<u8>,
    /// sha256 hash of preimage, 32 bytes long
    #[prost(bytes = "vec", tag = "3")]
    pub preimage_hash: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub destination: ::prost::alloc::vec::Vec<u8>,
    /// amount may contain multiple token types
    #[prost(message, repeated, tag = "5")]
    pub amount: ::prost::alloc::vec::Vec<super::coin::Coin>,
    /// Timeout represents wall clock time.
    #[prost(int64, tag = "6")]
    pub timeout: i64,
    /// max length 128 character
    #[prost(string, tag = "7")]
    pub memo: ::prost::alloc::string::String,
}
/// ReleaseMsg releases the tokens to the destination
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReleaseMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// swap_id to release
    #[prost(bytes = "vec", tag = "2")]
    pub swap_id: ::prost::alloc::vec::Vec<u8>,
    /// the preimage that hashes to the swap's preimage_hash
    #[prost(bytes = "vec", tag = "3")]
    pub preimage: ::prost::alloc::vec::Vec<u8>,
}
/// ReturnMsg releases the tokens to the source after the timeout
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReturnMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// swap_id to return
    #[prost(bytes = "vec", tag = "2")]
    pub swap_id: ::prost::alloc::vec::Vec<u8>,
}
