#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteMigrationMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub migration_id: ::prost::alloc::string::String,
}
