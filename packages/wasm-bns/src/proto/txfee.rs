#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Configuration {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    /// Free bytes is an amount of bytes that is not charged
    #[prost(int32, tag = "3")]
    pub free_bytes: i32,
    /// Base fee is the price of a single byte above the free allowance
    #[prost(message, optional, tag = "4")]
    pub base_fee: ::core::option::Option<super::coin::Coin>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateConfigurationMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(message, optional, tag = "2")]
    pub patch: ::core::option::Option<Configuration>,
}
