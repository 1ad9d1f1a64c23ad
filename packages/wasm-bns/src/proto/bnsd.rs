/// Tx contains the message.
///
/// When extending Tx, follow the rules:
/// - range 1-50 is reserved for middlewares,
/// - range 51-inf is reserved for different message types,
/// - keep the same numbers for the same message types in both bnsd and bnscli
///    Tx. If a message is not supported by one of them, skip the number.
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Tx {
    #[prost(message, optional, tag = "1")]
    pub fees: ::core::option::Option<super::cash::FeeInfo>,
    #[prost(message, repeated, tag = "2")]
    pub signatures: ::prost::alloc::vec::Vec<super::sigs::StdSignature>,
    /// ID of a multisig contract.
    #[prost(bytes = "vec", repeated, tag = "4")]
    pub multisig: ::prost::alloc::vec::Vec<::prost::alloc::vec::Vec<u8>>,
    /// msg is a sum type over all allowed messages on this chain.
    #[prost(
        oneof = "tx::Sum",
        tags = "51, 52, 53, 54, 55, 56, 57, 61, 62, 63, 70, 71, 72, 73, 74, 75, 76, 81, 82, 83, 84, 85, 86, 87, 88, 89, 90, 91, 92, 93, 94"
    )]
    pub sum: ::core::option::Option<tx::Sum>,
}
/// Nested message and enum types in `Tx`.
pub mod tx {
    /// msg is a sum type over all allowed messages on this chain.
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Sum {
        #[prost(message, tag = "51")]
        CashSendMsg(super::super::cash::SendMsg),
        #[prost(message, tag = "52")]
        EscrowCreateMsg(super::super::escrow::CreateMsg),
        #[prost(message, tag = "53")]
        EscrowReleaseMsg(super::super::escrow::ReleaseMsg),
        #[prost(message, tag = "54")]
        EscrowReturnMsg(super::super::escrow::ReturnMsg),
        #[prost(message, tag = "55")]
        EscrowUpdatePartiesMsg(super::super::escrow::UpdatePartiesMsg),
        #[prost(message, tag = "56")]
        MultisigCreateMsg(super::super::multisig::CreateMsg),
        #[prost(message, tag = "57")]
        MultisigUpdateMsg(super::super::multisig::UpdateMsg),
        #[prost(message, tag = "61")]
        UsernameRegisterTokenMsg(super::super::username::RegisterTokenMsg),
        #[prost(message, tag = "62")]
        UsernameTransferTokenMsg(super::super::username::TransferTokenMsg),
        #[prost(message, tag = "63")]
        UsernameChangeTokenTargetsMsg(super::super::username::ChangeTokenTargetsMsg),
        #[prost(message, tag = "70")]
        AswapCreateMsg(super::super::aswap::CreateMsg),
        #[prost(message, tag = "71")]
        AswapReleaseMsg(super::super::aswap::ReleaseMsg),
        #[prost(message, tag = "72")]
        AswapReturnMsg(super::super::aswap::ReturnMsg),
        #[prost(message, tag = "73")]
        GovCreateProposalMsg(super::super::gov::CreateProposalMsg),
        #[prost(message, tag = "74")]
        GovDeleteProposalMsg(super::super::gov::DeleteProposalMsg),
        #[prost(message, tag = "75")]
        GovVoteMsg(super::super::gov::VoteMsg),
        #[prost(message, tag = "76")]
        GovTallyMsg(super::super::gov::TallyMsg),
        #[prost(message, tag = "81")]
        AccountUpdateConfigurationMsg(super::super::account::UpdateConfigurationMsg),
        #[prost(message, tag = "82")]
        AccountRegisterDomainMsg(super::super::account::RegisterDomainMsg),
        #[prost(message, tag = "83")]
        AccountReplaceAccountMsgFeesMsg(super::super::account::ReplaceAccountMsgFeesMsg),
        #[prost(message, tag = "84")]
        AccountTransferDomainMsg(super::super::account::TransferDomainMsg),
        #[prost(message, tag = "85")]
        AccountRenewDomainMsg(super::super::account::RenewDomainMsg),
        #[prost(message, tag = "86")]
        AccountDeleteDomainMsg(super::super::account::DeleteDomainMsg),
        #[prost(message, tag = "87")]
        AccountRegisterAccountMsg(super::super::account::RegisterAccountMsg),
        #[prost(message, tag = "88")]
        AccountTransferAccountMsg(super::super::account::TransferAccountMsg),
        #[prost(message, tag = "89")]
        AccountReplaceAccountTargetsMsg(super::super::account::ReplaceAccountTargetsMsg),
        #[prost(message, tag = "90")]
        AccountDeleteAccountMsg(super::super::account::DeleteAccountMsg),
        #[prost(message, tag = "91")]
        AccountFlushDomainMsg(super::super::account::FlushDomainMsg),
        #[prost(message, tag = "92")]
        AccountRenewAccountMsg(super::super::account::RenewAccountMsg),
        #[prost(message, tag = "93")]
        AccountAddAccountCertificateMsg(super::super::account::AddAccountCertificateMsg),
        #[prost(message, tag = "94")]
        AccountDeleteAccountCertificateMsg(super::super::account::DeleteAccountCertificateMsg),
    }
}
/// ExecuteProposalBatchMsg encapsulates multiple messages to support batch processing
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ExecuteProposalBatchMsg {
    #[prost(message, repeated, tag = "1")]
    pub messages: ::prost::alloc::vec::Vec<execute_proposal_batch_msg::Union>,
}
/// Nested message and enum types in `ExecuteProposalBatchMsg`.
pub mod execute_proposal_batch_msg {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Union {
        #[prost(oneof = "union::Sum", tags = "51, 53")]
        pub sum: ::core::option::Option<union::Sum>,
    }
    /// Nested message and enum types in `Union`.
    pub mod union {
        #[allow(clippy::derive_partial_eq_without_eq)]
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Sum {
            #[prost(message, tag = "51")]
            SendMsg(super::super::super::cash::SendMsg),
            #[prost(message, tag = "53")]
            EscrowReleaseMsg(super::super::super::escrow::ReleaseMsg),
        }
    }
}
/// ProposalOptions are possible items that can be enacted by a governance vote
/// Trimmed down somewhat arbitrary to what is believed to be reasonable
#[allow(clippy::derive_partial_eq_without_eq)]
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ProposalOptions {
    #[prost(
        oneof = "proposal_options::Option",
        tags = "51, 53, 58, 60, 69, 77, 78, 79, 80, 81, 82, 83, 84, 85, 86"
    )]
    pub option: ::core::option::Option<proposal_options::Option>,
}
/// Nested message and enum types in `ProposalOptions`.
pub mod proposal_options {
    #[allow(clippy::derive_partial_eq_without_eq)]
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Option {
        #[prost(message, tag = "51")]
        CashSendMsg(super::super::cash::SendMsg),
        #[prost(message, tag = "53")]
        EscrowReleaseMsg(super::super::escrow::ReleaseMsg),
        #[prost(message, tag = "58")]
        ValidatorsApplyDiffMsg(super::super::validators::ApplyDiffMsg),
        #[prost(message, tag = "60")]
        ExecuteProposalBatchMsg(super::ExecuteProposalBatchMsg),
        #[prost(message, tag = "69")]
        MigrationUpgradeSchemaMsg(super::super::migration::UpgradeSchemaMsg),
        #[prost(message, tag = "77")]
        GovUpdateElectorateMsg(super::super::gov::UpdateElectorateMsg),
        #[prost(message, tag = "78")]
        GovUpdateElectionRuleMsg(super::super::gov::UpdateElectionRuleMsg),
        #[prost(message, tag = "79")]
        GovCreateTextResolutionMsg(super::super::gov::CreateTextResolutionMsg),
        #[prost(message, tag = "80")]
        MsgfeeSetMsgFeeMsg(super::super::msgfee::SetMsgFeeMsg),
        #[prost(message, tag = "81")]
        DatamigrationExecuteMigrationMsg(super::super::datamigration::ExecuteMigrationMsg),
        #[prost(message, tag = "82")]
        CashUpdateConfigurationMsg(super::super::cash::UpdateConfigurationMsg),
        #[prost(message, tag = "83")]
        TxfeeUpdateConfigurationMsg(super::super::txfee::UpdateConfigurationMsg),
        #[prost(message, tag = "84")]
        UsernameUpdateConfigurationMsg(super::super::username::UpdateConfigurationMsg),
        #[prost(message, tag = "85")]
        AccountUpdateConfigurationMsg(super::super::account::UpdateConfigurationMsg),
        #[prost(message, tag = "86")]
        MsgfeeUpdateConfigurationMsg(super::super::msgfee::UpdateConfigurationMsg),
    }
}
