/// BlockchainAddress represents a blockchain address. This structure clubs together
/// blockchain ID together with an address on that network.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct BlockchainAddress {
    #[prost(string, tag = "1")]
    pub blockchain_id: ::prost::alloc::string::String,
    #[prost(string, tag = "2")]
    pub address: ::prost::alloc::string::String,
}
/// AccountMsgFee defines a fee for a single message type.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AccountMsgFee {
    #[prost(string, tag = "1")]
    pub msg_path: ::prost::alloc::string::String,
    #[prost(message, optional, tag = "2")]
    pub fee: ::core::option::Option<super::coin::Coin>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Configuration {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// Owner is present to implement gconf.OwnedConfig interface
    #[prost(bytes = "vec", tag = "2")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    /// Valid domain defines a regular expression that every valid domain of an account must match.
    #[prost(string, tag = "3")]
    pub valid_domain: ::prost::alloc::string::String,
    /// Valid name defines a regular expression that every valid name of an account must match.
    #[prost(string, tag = "4")]
    pub valid_name: ::prost::alloc::string::String,
    /// Valid blockchain ID defines a regular expression that a valid target blockchain ID must match.
    #[prost(string, tag = "5")]
    pub valid_blockchain_id: ::prost::alloc::string::String,
    /// Valid blockchain address defines a regular expression that a valid target address must match.
    #[prost(string, tag = "6")]
    pub valid_blockchain_address: ::prost::alloc::string::String,
    /// Domain renew defines the duration of the domain renewal period.
    #[prost(int64, tag = "7")]
    pub domain_renew: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateConfigurationMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(message, optional, tag = "2")]
    pub patch: ::core::option::Option<Configuration>,
}
/// RegisterDomainMsg is issuing registration of a new domain. Domain name
/// must be unique and it is not possible to register a domain that already exists.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterDomainMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    /// Admin holds the address of the newly registered domain.
    #[prost(bytes = "vec", tag = "3")]
    pub admin: ::prost::alloc::vec::Vec<u8>,
    /// Has superuser is a feature switch flag.
    #[prost(bool, tag = "4")]
    pub has_superuser: bool,
    /// Third party token is an arbitrary data that can be provided by a
    /// middleman (broker) that helped register the domain.
    #[prost(bytes = "vec", tag = "5")]
    pub third_party_token: ::prost::alloc::vec::Vec<u8>,
    /// Msg fees declares an additional fee that must be paid for each message
    /// that is processed by this extension.
    #[prost(message, repeated, tag = "6")]
    pub msg_fees: ::prost::alloc::vec::Vec<AccountMsgFee>,
    /// Account review defines the duration of the account renewal period.
    #[prost(int64, tag = "7")]
    pub account_renew: i64,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReplaceAccountMsgFeesMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "3")]
    pub new_msg_fees: ::prost::alloc::vec::Vec<AccountMsgFee>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferDomainMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "3")]
    pub new_admin: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenewDomainMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteDomainMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RegisterAccountMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    pub owner: ::prost::alloc::vec::Vec<u8>,
    #[prost(message, repeated, tag = "5")]
    pub targets: ::prost::alloc::vec::Vec<BlockchainAddress>,
    #[prost(bytes = "vec", tag = "6")]
    pub third_party_token: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TransferAccountMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    pub new_owner: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ReplaceAccountTargetsMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(message, repeated, tag = "4")]
    pub new_targets: ::prost::alloc::vec::Vec<BlockchainAddress>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteAccountMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
}
/// FlushDomainMsg deletes all accounts of a domain except the empty name one
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct FlushDomainMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RenewAccountMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct AddAccountCertificateMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    #[prost(bytes = "vec", tag = "4")]
    pub certificate: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteAccountCertificateMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub domain: ::prost::alloc::string::String,
    #[prost(string, tag = "3")]
    pub name: ::prost::alloc::string::String,
    /// Certificate hash is the sha256 checksum of the certificate to delete
    #[prost(bytes = "vec", tag = "4")]
    pub certificate_hash: ::prost::alloc::vec::Vec<u8>,
}
