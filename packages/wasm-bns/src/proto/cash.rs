/// SendMsg is a request to move these coins from the given
/// source to the given destination address.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct SendMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub source: ::prost::alloc::vec::Vec<u8>,
    #[prost(bytes = "vec", tag = "3")]
    pub destination: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "4")]
    pub amount: ::core::option::Option<super::coin::Coin>,
    /// max length 128 character
    #[prost(string, tag = "5")]
    pub memo: ::prost::alloc::string::String,
    /// max length 64 bytes
    #[prost(bytes = "vec", tag = "6")]
    pub r#ref: ::prost::alloc::vec::Vec<u8>,
}
/// FeeInfo records who pays what fees to have this
/// message processed
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FeeInfo {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub payer: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, optional, tag = "3")]
    pub fees: ::core::option::Option<super::coin::Coin>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Configuration {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// Owner is present to implement gconf.OwnedConfig interface
    #[prost(bytes = "vec", tag = "2")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    /// Collector address is the destination of all collected fees
    #[prost(bytes = "vec", tag = "3")]
    pub collector_address: ::prost::alloc::vec::Vec<u8>,
    /// Minimal fee is the minimum fee required for any transaction
    #[prost(message, optional, tag = "4")]
    pub minimal_fee: ::core::option::Option<super::coin::Coin>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateConfigurationMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(message, optional, tag = "2")]
    pub patch: ::core::option::Option<Configuration>,
}
