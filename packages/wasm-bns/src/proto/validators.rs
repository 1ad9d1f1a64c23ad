/// ApplyDiffMsg is designed to update validator power
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ApplyDiffMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(message, repeated, tag = "2")]
    pub validator_updates: ::prost::alloc::vec::Vec<super::weave::ValidatorUpdate>,
}
