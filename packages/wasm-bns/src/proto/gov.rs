/// Elector clubs together the address with the weight of its vote
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Elector {
    #[prost(bytes = "vec", tag = "1")]
    pub address: ::prost::alloc::vec::Vec<u8>,
    /// The voting weight of this elector. Max value is 65535 (2^16-1).
    #[prost(uint32, tag = "2")]
    pub weight: u32,
}
/// The Fraction type represents a numerator and denominator to enable higher precision thresholds in
/// the election rules. For example:
/// numerator: 1, denominator: 2 => > 50%
/// numerator: 2, denominator: 3 => > 66.666..%
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Fraction {
    #[prost(uint32, tag = "1")]
    pub numerator: u32,
    #[prost(uint32, tag = "2")]
    pub denominator: u32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateProposalMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// Human readable title.
    #[prost(string, tag = "2")]
    pub title: ::prost::alloc::string::String,
    /// Content of the proposal. Protobuf encoded, app-specific decoded must be passed in constructor
    #[prost(bytes = "vec", tag = "3")]
    pub raw_option: ::prost::alloc::vec::Vec<u8>,
    /// Human readable description with 3 to 5000 chars.
    #[prost(string, tag = "4")]
    pub description: ::prost::alloc::string::String,
    /// ElectionRuleID is a reference to the election rule
    #[prost(bytes = "vec", tag = "5")]
    pub election_rule_id: ::prost::alloc::vec::Vec<u8>,
    /// Unix timestamp when the proposal starts. Must be in the future.
    #[prost(int64, tag = "6")]
    pub start_time: i64,
    /// Author is an optional field to set the address of the author with a proposal. The author must sign the message.
    /// When not set it will default to the main signer.
    #[prost(bytes = "vec", tag = "7")]
    pub author: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeleteProposalMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub proposal_id: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct VoteMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    /// The unique id of the proposal.
    #[prost(bytes = "vec", tag = "2")]
    pub proposal_id: ::prost::alloc::vec::Vec<u8>,
    /// voter address is an optional field. When not set the main signer will be used as default. The voter address
    /// must be included in the electorate for a valid vote.
    #[prost(bytes = "vec", tag = "3")]
    pub voter: ::prost::alloc::vec::Vec<u8>,
    /// Option for the vote. Must be Yes, No or Abstain for a valid vote.
    #[prost(enumeration = "VoteOption", tag = "4")]
    pub selected: i32,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct TallyMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub proposal_id: ::prost::alloc::vec::Vec<u8>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct CreateTextResolutionMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(string, tag = "2")]
    pub resolution: ::prost::alloc::string::String,
}
/// UpdateElectorateMsg is the request to update the electors of an electorate.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateElectorateMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub electorate_id: ::prost::alloc::vec::Vec<u8>,
    /// DiffElectors contains the changes that should be applied. Adding an address should have a positive weight, removing
    /// with weight=0.
    #[prost(message, repeated, tag = "3")]
    pub diff_electors: ::prost::alloc::vec::Vec<Elector>,
}
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct UpdateElectionRuleMsg {
    #[prost(message, optional, tag = "1")]
    pub metadata: ::core::option::Option<super::weave::Metadata>,
    #[prost(bytes = "vec", tag = "2")]
    pub election_rule_id: ::prost::alloc::vec::Vec<u8>,
    /// Duration in seconds of how long the voting period will take place.
    #[prost(uint32, tag = "3")]
    pub voting_period: u32,
    #[prost(message, optional, tag = "4")]
    pub threshold: ::core::option::Option<Fraction>,
    #[prost(message, optional, tag = "5")]
    pub quorum: ::core::option::Option<Fraction>,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum VoteOption {
    Invalid = 0,
    Yes = 1,
    No = 2,
    Abstain = 3,
}
