/// CreateMsg is a request to create an Escrow with some tokens.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub source: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub arbiter: ::prost::alloc::vec::Vec<u8>,
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
/// ReleaseMsg releases the content to the destination.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReleaseMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub escrow_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "3")]
    pub amount: ::prost::alloc::vec::Vec<super::coin::Coin>,
}
/// ReturnMsg returns the content to the source.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReturnMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub escrow_id: ::prost::alloc::vec::Vec<u8>,
}
/// UpdatePartiesMsg changes any of the parties of the escrow.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdatePartiesMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub escrow_id: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub source: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "4")]
    pub arbiter: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "5")]
    pub destination: ::prost::alloc::vec::Vec<u8>,
}
