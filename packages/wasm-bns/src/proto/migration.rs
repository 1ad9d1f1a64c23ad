/// UpgradeSchemaMsg increments the schema version of a package by one
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpgradeSchemaMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// Name of the package that schema version upgrade is made for.
    #[prost(string, tag = "2")]
    pub pkg: ::prost::alloc::string::String,
    /// Version to upgrade to, current schema version plus one
    #[prost(uint32, tag = "3")]
    pub to_version: u32,
}
