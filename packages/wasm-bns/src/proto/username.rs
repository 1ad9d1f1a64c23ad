/// BlockchainAddress represents a blochain address. This structure clubs together
/// blokchain ID together with an address on that network. It is used to point
/// to an address on any blockchain network.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockchainAddress {
    /// An arbitrary blockchain ID.
    #[prost(string, tag = "1")]
    pub blockchain_id: ::prost::alloc::string::String,
    /// An address on the specified blockchain network. Address is not a
    /// weave.Address as we cannot know what is the format of an address on the
    /// chain that this token instance links to.
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
}
/// RegisterTokenMsg is creating a new username token. The owner is always set
/// to the main signer.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterTokenMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub targets: ::prost::alloc::vec::Vec<BlockchainAddress>,
}
/// TransferTokenMsg is a request to transfer an ownership of a token. The
/// mesage must be signed by the current token owner. Acceptance of the
/// transfer is not required.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferTokenMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    /// Owner is the address that the ownership of the token is transferred to.
    #[prost(bytes = "vec", tag = "3")]
    pub new_owner: ::prost::alloc::vec::Vec<u8>,
}
/// ChangeTokenTargetsMsg is a request to change the address that this token
/// points to. Only the owner of a token can request this operation.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ChangeTokenTargetsMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub username: ::prost::alloc::string::String,
    /// An new list of blockchain addresses that this username should point to.
    #[prost(message, repeated, tag = "3")]
    pub new_targets: ::prost::alloc::vec::Vec<BlockchainAddress>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Configuration {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    /// Valid username name defines rules for the name part of a username
    #[prost(string, tag = "3")]
    pub valid_username_name: ::prost::alloc::string::String,
    /// Valid username label defines rules for the label part of a username
    #[prost(string, tag = "4")]
    pub valid_username_label: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateConfigurationMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(message, optional, tag = "2")]
    pub patch: ::core::option::Option<Configuration>,
}
