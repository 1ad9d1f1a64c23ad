//! Shared types for BNS transactions
//!
//! The JSON shape (camelCase fields, `kind` tags, hex-encoded bytes) is the
//! one wallets exchange with the codec through the WASM layer.

use std::collections::BTreeMap;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::WasmBnsError;

/// Fixed number of fractional digits for all tokens on BNS
pub const WEAVE_FRACTIONAL_DIGITS: u32 = 9;

/// Maximum memo length in UTF-8 bytes
pub const MAX_MEMO_LENGTH: usize = 128;

/// Deserialize u64 from either a number or string
///
/// JavaScript callers cannot represent every u64 as a number, so ids may
/// arrive as decimal strings.
pub(crate) fn deserialize_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct U64Visitor;

    impl<'de> de::Visitor<'de> for U64Visitor {
        type Value = u64;

        fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
            formatter.write_str("a u64 as number or string")
        }

        fn visit_u64<E>(self, value: u64) -> Result<u64, E>
        where
            E: de::Error,
        {
            Ok(value)
        }

        fn visit_i64<E>(self, value: i64) -> Result<u64, E>
        where
            E: de::Error,
        {
            u64::try_from(value).map_err(|_| E::custom("negative values not allowed"))
        }

        fn visit_str<E>(self, value: &str) -> Result<u64, E>
        where
            E: de::Error,
        {
            value.parse().map_err(E::custom)
        }
    }

    deserializer.deserialize_any(U64Visitor)
}

/// Serialize u64 as a decimal string
///
/// Values above 2^53 - 1 would lose precision as JavaScript numbers.
fn serialize_u64<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

fn serialize_u64_vec<S: Serializer>(values: &[u64], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_seq(values.iter().map(u64::to_string))
}

fn deserialize_u64_vec<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapped(#[serde(deserialize_with = "deserialize_u64")] u64);

    let values: Vec<Wrapped> = Vec::deserialize(deserializer)?;
    Ok(values.into_iter().map(|Wrapped(v)| v).collect())
}

/// Hex (de)serialization for raw byte fields
pub(crate) mod hex_bytes {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let s = String::deserialize(deserializer)?;
        let s = s.strip_prefix("0x").unwrap_or(&s);
        hex::decode(s).map_err(serde::de::Error::custom)
    }
}

// =============================================================================
// Amounts, fees and small value types
// =============================================================================

/// Fixed-point token amount
///
/// `quantity` is the integer count of the smallest unit as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    pub quantity: String,
    pub fractional_digits: u32,
    pub token_ticker: String,
}

impl Amount {
    /// Build an amount with the chain's fractional digits
    pub fn new(quantity: impl Into<String>, token_ticker: impl Into<String>) -> Self {
        Self {
            quantity: quantity.into(),
            fractional_digits: WEAVE_FRACTIONAL_DIGITS,
            token_ticker: token_ticker.into(),
        }
    }
}

/// Transaction fee and the address paying it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tokens: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer: Option<String>,
}

/// Absolute timeout as a UNIX timestamp in seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeout {
    pub timestamp: i64,
}

/// Numeric id together with a revision number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedId {
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub id: u64,
    pub version: u32,
}

/// Username target on some other chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainAddressPair {
    pub chain_id: String,
    pub address: String,
}

/// Account target on some other chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockchainAddress {
    pub blockchain_id: String,
    pub address: String,
}

/// Multisignature contract participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub address: String,
    pub weight: u32,
}

/// Fee charged by a domain for a message path
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountMsgFee {
    pub msg_path: String,
    pub fee: Amount,
}

/// Configuration of the account extension
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountConfiguration {
    pub owner: String,
    pub valid_domain: String,
    pub valid_name: String,
    pub valid_blockchain_id: String,
    pub valid_blockchain_address: String,
    /// Domain renewal period in seconds
    pub domain_renew: i64,
}

// =============================================================================
// Transactions
// =============================================================================

/// Fields every BNS transaction carries regardless of kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionBase {
    pub chain_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fee: Option<Fee>,
    /// Multisignature contract ids the transaction is authorized by
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        serialize_with = "serialize_u64_vec",
        deserialize_with = "deserialize_u64_vec"
    )]
    pub multisig: Vec<u64>,
}

impl TransactionBase {
    pub fn new(chain_id: impl Into<String>) -> Self {
        Self {
            chain_id: chain_id.into(),
            fee: None,
            multisig: Vec::new(),
        }
    }
}

/// A transaction before signing: the common base plus the kind-specific message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnsignedTransaction {
    #[serde(flatten)]
    pub base: TransactionBase,
    #[serde(flatten)]
    pub msg: TxMsg,
}

impl UnsignedTransaction {
    pub fn new(chain_id: impl Into<String>, msg: TxMsg) -> Self {
        Self {
            base: TransactionBase::new(chain_id),
            msg,
        }
    }

    pub fn chain_id(&self) -> &str {
        &self.base.chain_id
    }

    pub fn kind(&self) -> &'static str {
        self.msg.kind()
    }

    /// Parse a transaction from its JSON form
    ///
    /// The `kind` tag is checked against [`TxMsg::KINDS`] first so that
    /// transactions of other chain families fail with `UnsupportedKind`
    /// rather than a generic deserialization error.
    pub fn from_json(value: serde_json::Value) -> Result<Self, WasmBnsError> {
        let kind = value
            .get("kind")
            .and_then(|k| k.as_str())
            .ok_or_else(|| WasmBnsError::missing("kind"))?;
        if !TxMsg::KINDS.contains(&kind) {
            return Err(WasmBnsError::UnsupportedKind(format!(
                "Received transaction of unsupported kind: {}",
                kind
            )));
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// Kind-specific transaction message, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum TxMsg {
    // Token sends
    #[serde(rename = "bcp/send")]
    Send(SendTx),

    // Atomic swaps
    #[serde(rename = "bcp/swap_offer")]
    SwapOffer(SwapOfferTx),
    #[serde(rename = "bcp/swap_claim")]
    SwapClaim(SwapClaimTx),
    #[serde(rename = "bcp/swap_abort")]
    SwapAbort(SwapAbortTx),

    // Usernames
    #[serde(rename = "bns/register_username")]
    RegisterUsername(RegisterUsernameTx),
    #[serde(rename = "bns/update_targets_of_username")]
    UpdateTargetsOfUsername(UpdateTargetsOfUsernameTx),
    #[serde(rename = "bns/transfer_username")]
    TransferUsername(TransferUsernameTx),

    // Accounts
    #[serde(rename = "bns/update_account_configuration")]
    UpdateAccountConfiguration(UpdateAccountConfigurationTx),
    #[serde(rename = "bns/register_domain")]
    RegisterDomain(RegisterDomainTx),
    #[serde(rename = "bns/transfer_domain")]
    TransferDomain(TransferDomainTx),
    #[serde(rename = "bns/renew_domain")]
    RenewDomain(DomainTx),
    #[serde(rename = "bns/delete_domain")]
    DeleteDomain(DomainTx),
    #[serde(rename = "bns/register_account")]
    RegisterAccount(RegisterAccountTx),
    #[serde(rename = "bns/transfer_account")]
    TransferAccount(TransferAccountTx),
    #[serde(rename = "bns/replace_account_targets")]
    ReplaceAccountTargets(ReplaceAccountTargetsTx),
    #[serde(rename = "bns/delete_account")]
    DeleteAccount(AccountTx),
    #[serde(rename = "bns/delete_all_accounts")]
    DeleteAllAccounts(DomainTx),
    #[serde(rename = "bns/renew_account")]
    RenewAccount(AccountTx),
    #[serde(rename = "bns/add_account_certificate")]
    AddAccountCertificate(AddAccountCertificateTx),
    #[serde(rename = "bns/replace_account_msg_fees")]
    ReplaceAccountMsgFees(ReplaceAccountMsgFeesTx),
    #[serde(rename = "bns/delete_account_certificate")]
    DeleteAccountCertificate(DeleteAccountCertificateTx),

    // Multisignature contracts
    #[serde(rename = "bns/create_multisignature_contract")]
    CreateMultisignature(CreateMultisignatureTx),
    #[serde(rename = "bns/update_multisignature_contract")]
    UpdateMultisignature(UpdateMultisignatureTx),

    // Escrows
    #[serde(rename = "bns/create_escrow")]
    CreateEscrow(CreateEscrowTx),
    #[serde(rename = "bns/release_escrow")]
    ReleaseEscrow(ReleaseEscrowTx),
    #[serde(rename = "bns/return_escrow")]
    ReturnEscrow(ReturnEscrowTx),
    #[serde(rename = "bns/update_escrow_parties")]
    UpdateEscrowParties(UpdateEscrowPartiesTx),

    // Governance
    #[serde(rename = "bns/create_proposal")]
    CreateProposal(CreateProposalTx),
    #[serde(rename = "bns/vote")]
    Vote(VoteTx),
}

impl TxMsg {
    /// All `kind` tags this codec handles
    pub const KINDS: &'static [&'static str] = &[
        "bcp/send",
        "bcp/swap_offer",
        "bcp/swap_claim",
        "bcp/swap_abort",
        "bns/register_username",
        "bns/update_targets_of_username",
        "bns/transfer_username",
        "bns/update_account_configuration",
        "bns/register_domain",
        "bns/transfer_domain",
        "bns/renew_domain",
        "bns/delete_domain",
        "bns/register_account",
        "bns/transfer_account",
        "bns/replace_account_targets",
        "bns/delete_account",
        "bns/delete_all_accounts",
        "bns/renew_account",
        "bns/add_account_certificate",
        "bns/replace_account_msg_fees",
        "bns/delete_account_certificate",
        "bns/create_multisignature_contract",
        "bns/update_multisignature_contract",
        "bns/create_escrow",
        "bns/release_escrow",
        "bns/return_escrow",
        "bns/update_escrow_parties",
        "bns/create_proposal",
        "bns/vote",
    ];

    /// The `kind` tag of this message
    pub fn kind(&self) -> &'static str {
        match self {
            TxMsg::Send(_) => "bcp/send",
            TxMsg::SwapOffer(_) => "bcp/swap_offer",
            TxMsg::SwapClaim(_) => "bcp/swap_claim",
            TxMsg::SwapAbort(_) => "bcp/swap_abort",
            TxMsg::RegisterUsername(_) => "bns/register_username",
            TxMsg::UpdateTargetsOfUsername(_) => "bns/update_targets_of_username",
            TxMsg::TransferUsername(_) => "bns/transfer_username",
            TxMsg::UpdateAccountConfiguration(_) => "bns/update_account_configuration",
            TxMsg::RegisterDomain(_) => "bns/register_domain",
            TxMsg::TransferDomain(_) => "bns/transfer_domain",
            TxMsg::RenewDomain(_) => "bns/renew_domain",
            TxMsg::DeleteDomain(_) => "bns/delete_domain",
            TxMsg::RegisterAccount(_) => "bns/register_account",
            TxMsg::TransferAccount(_) => "bns/transfer_account",
            TxMsg::ReplaceAccountTargets(_) => "bns/replace_account_targets",
            TxMsg::DeleteAccount(_) => "bns/delete_account",
            TxMsg::DeleteAllAccounts(_) => "bns/delete_all_accounts",
            TxMsg::RenewAccount(_) => "bns/renew_account",
            TxMsg::AddAccountCertificate(_) => "bns/add_account_certificate",
            TxMsg::ReplaceAccountMsgFees(_) => "bns/replace_account_msg_fees",
            TxMsg::DeleteAccountCertificate(_) => "bns/delete_account_certificate",
            TxMsg::CreateMultisignature(_) => "bns/create_multisignature_contract",
            TxMsg::UpdateMultisignature(_) => "bns/update_multisignature_contract",
            TxMsg::CreateEscrow(_) => "bns/create_escrow",
            TxMsg::ReleaseEscrow(_) => "bns/release_escrow",
            TxMsg::ReturnEscrow(_) => "bns/return_escrow",
            TxMsg::UpdateEscrowParties(_) => "bns/update_escrow_parties",
            TxMsg::CreateProposal(_) => "bns/create_proposal",
            TxMsg::Vote(_) => "bns/vote",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendTx {
    pub sender: String,
    pub recipient: String,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapOfferTx {
    pub sender: String,
    pub recipient: String,
    pub amounts: Vec<Amount>,
    /// sha256 of the preimage
    #[serde(with = "hex_bytes")]
    pub hash: Vec<u8>,
    pub timeout: Timeout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapClaimTx {
    #[serde(with = "hex_bytes")]
    pub swap_id: Vec<u8>,
    #[serde(with = "hex_bytes")]
    pub preimage: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapAbortTx {
    #[serde(with = "hex_bytes")]
    pub swap_id: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterUsernameTx {
    /// Full human readable address including the namespace, e.g. `alice*iov`
    pub username: String,
    pub targets: Vec<ChainAddressPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTargetsOfUsernameTx {
    pub username: String,
    pub targets: Vec<ChainAddressPair>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferUsernameTx {
    pub username: String,
    pub new_owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateAccountConfigurationTx {
    pub configuration: AccountConfiguration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterDomainTx {
    pub domain: String,
    pub admin: String,
    pub has_superuser: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    pub msg_fees: Vec<AccountMsgFee>,
    /// Account renewal period in seconds
    pub account_renew: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferDomainTx {
    pub domain: String,
    pub new_admin: String,
}

/// Messages that only name a domain (renew, delete, delete all accounts)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainTx {
    pub domain: String,
}

/// Messages that only name an account (renew, delete)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountTx {
    pub domain: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterAccountTx {
    pub domain: String,
    pub name: String,
    pub owner: String,
    pub targets: Vec<BlockchainAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferAccountTx {
    pub domain: String,
    pub name: String,
    pub new_owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAccountTargetsTx {
    pub domain: String,
    pub name: String,
    pub new_targets: Vec<BlockchainAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountCertificateTx {
    pub domain: String,
    pub name: String,
    #[serde(with = "hex_bytes")]
    pub certificate: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceAccountMsgFeesTx {
    pub domain: String,
    pub new_msg_fees: Vec<AccountMsgFee>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteAccountCertificateTx {
    pub domain: String,
    pub name: String,
    #[serde(with = "hex_bytes")]
    pub certificate_hash: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMultisignatureTx {
    pub participants: Vec<Participant>,
    pub activation_threshold: u32,
    pub admin_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMultisignatureTx {
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub contract_id: u64,
    pub participants: Vec<Participant>,
    pub activation_threshold: u32,
    pub admin_threshold: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEscrowTx {
    pub sender: String,
    pub arbiter: String,
    pub recipient: String,
    pub amounts: Vec<Amount>,
    pub timeout: Timeout,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseEscrowTx {
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub escrow_id: u64,
    pub amounts: Vec<Amount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReturnEscrowTx {
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub escrow_id: u64,
}

/// Replaces exactly one party of an escrow
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEscrowPartiesTx {
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub escrow_id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sender: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arbiter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipient: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProposalTx {
    pub title: String,
    /// The action executed when the proposal is accepted
    pub action: ProposalAction,
    pub description: String,
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub election_rule_id: u64,
    /// UNIX timestamp in seconds
    pub start_time: i64,
    pub author: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VoteOption {
    Yes,
    No,
    Abstain,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteTx {
    #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
    pub proposal_id: u64,
    pub selection: VoteOption,
    /// Required in strict mode; the chain falls back to the main signer otherwise
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voter: Option<String>,
}

// =============================================================================
// Proposal actions
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorProperties {
    pub power: i64,
}

/// Validator power updates keyed by `ed25519_<pubkey_hex>`
pub type Validators = BTreeMap<String, ValidatorProperties>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElectorProperties {
    /// Voting weight, at most 65535
    pub weight: u32,
}

/// Elector weight updates keyed by bech32 address
pub type Electors = BTreeMap<String, ElectorProperties>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fraction {
    pub numerator: u32,
    pub denominator: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendAction {
    pub sender: String,
    pub recipient: String,
    pub amount: Amount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashConfiguration {
    pub owner: String,
    pub collector_address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimal_fee: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxFeeConfiguration {
    pub owner: String,
    pub free_bytes: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<Amount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsernameConfiguration {
    pub owner: String,
    pub valid_username_name: String,
    pub valid_username_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsgFeeConfiguration {
    pub owner: String,
    pub fee_admin: String,
}

/// The action to be executed when a proposal is accepted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ProposalAction {
    #[serde(rename = "gov_create_text_resolution")]
    CreateTextResolution { resolution: String },
    /// Only `Send` actions are accepted inside a batch
    #[serde(rename = "execute_proposal_batch")]
    ExecuteProposalBatch { messages: Vec<ProposalAction> },
    #[serde(rename = "escrow_release", rename_all = "camelCase")]
    ReleaseEscrow {
        #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
        escrow_id: u64,
        amount: Amount,
    },
    #[serde(rename = "cash_send")]
    Send(SendAction),
    #[serde(rename = "validators_apply_diff", rename_all = "camelCase")]
    SetValidators { validator_updates: Validators },
    #[serde(rename = "gov_update_election_rule", rename_all = "camelCase")]
    UpdateElectionRule {
        #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
        election_rule_id: u64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<Fraction>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        quorum: Option<Fraction>,
        /// Voting period in seconds
        voting_period: u32,
    },
    #[serde(rename = "gov_update_electorate", rename_all = "camelCase")]
    UpdateElectorate {
        #[serde(serialize_with = "serialize_u64", deserialize_with = "deserialize_u64")]
        electorate_id: u64,
        diff_electors: Electors,
    },
    #[serde(rename = "msgfee_set_msg_fee", rename_all = "camelCase")]
    SetMsgFee { msg_path: String, fee: Amount },
    #[serde(rename = "datamigration_execute_migration")]
    ExecuteMigration { id: String },
    #[serde(rename = "migration_upgrade_schema", rename_all = "camelCase")]
    UpgradeSchema { pkg: String, to_version: u32 },
    #[serde(rename = "cash_update_configuration")]
    SetCashConfiguration(CashConfiguration),
    #[serde(rename = "txfee_update_configuration")]
    SetTxFeeConfiguration(TxFeeConfiguration),
    #[serde(rename = "username_update_configuration")]
    SetUsernameConfiguration(UsernameConfiguration),
    #[serde(rename = "account_update_configuration")]
    SetAccountConfiguration(AccountConfiguration),
    #[serde(rename = "msgfee_update_configuration")]
    SetMsgFeeConfiguration(MsgFeeConfiguration),
}

impl ProposalAction {
    /// The `kind` tag of this action
    pub fn kind(&self) -> &'static str {
        match self {
            ProposalAction::CreateTextResolution { .. } => "gov_create_text_resolution",
            ProposalAction::ExecuteProposalBatch { .. } => "execute_proposal_batch",
            ProposalAction::ReleaseEscrow { .. } => "escrow_release",
            ProposalAction::Send(_) => "cash_send",
            ProposalAction::SetValidators { .. } => "validators_apply_diff",
            ProposalAction::UpdateElectionRule { .. } => "gov_update_election_rule",
            ProposalAction::UpdateElectorate { .. } => "gov_update_electorate",
            ProposalAction::SetMsgFee { .. } => "msgfee_set_msg_fee",
            ProposalAction::ExecuteMigration { .. } => "datamigration_execute_migration",
            ProposalAction::UpgradeSchema { .. } => "migration_upgrade_schema",
            ProposalAction::SetCashConfiguration(_) => "cash_update_configuration",
            ProposalAction::SetTxFeeConfiguration(_) => "txfee_update_configuration",
            ProposalAction::SetUsernameConfiguration(_) => "username_update_configuration",
            ProposalAction::SetAccountConfiguration(_) => "account_update_configuration",
            ProposalAction::SetMsgFeeConfiguration(_) => "msgfee_update_configuration",
        }
    }
}

// =============================================================================
// Signatures and signing
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Ed25519,
    Secp256k1,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PubkeyBundle {
    pub algo: Algorithm,
    #[serde(with = "hex_bytes")]
    pub data: Vec<u8>,
}

/// A signature together with the signer's pubkey and nonce
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullSignature {
    pub nonce: i64,
    pub pubkey: PubkeyBundle,
    #[serde(with = "hex_bytes")]
    pub signature: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedTransaction {
    pub transaction: UnsignedTransaction,
    pub primary_signature: FullSignature,
    #[serde(default)]
    pub other_signatures: Vec<FullSignature>,
}

impl SignedTransaction {
    /// All signatures, primary first
    pub fn signatures(&self) -> impl Iterator<Item = &FullSignature> {
        std::iter::once(&self.primary_signature).chain(self.other_signatures.iter())
    }
}

/// Hash the signer applies to the bytes before signing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrehashType {
    None,
    Sha256,
    Sha512,
}

/// Bytes to be signed and how to prehash them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigningJob {
    #[serde(with = "hex_bytes")]
    pub bytes: Vec<u8>,
    pub prehash_type: PrehashType,
}

/// Uppercase hex transaction id as shown by block explorers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(pub String);

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Options controlling message encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodeOptions {
    /// Reject transactions that rely on chain-side defaults (e.g. a vote without voter)
    #[serde(default = "default_strict_mode")]
    pub strict_mode: bool,
}

fn default_strict_mode() -> bool {
    true
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            strict_mode: default_strict_mode(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_send_from_json() {
        let tx = UnsignedTransaction::from_json(json!({
            "kind": "bcp/send",
            "chainId": "registry-chain",
            "sender": "tiov1dcg3fat5zrvw00xezzjk3jgedm7pg70y222af3",
            "recipient": "tiov1k898u78hgs36uqw68dg7va5nfkgstu5z0fhz3f",
            "amount": { "quantity": "1000000001", "fractionalDigits": 9, "tokenTicker": "CASH" },
            "memo": "hello"
        }))
        .unwrap();

        assert_eq!(tx.chain_id(), "registry-chain");
        assert_eq!(tx.kind(), "bcp/send");
        match tx.msg {
            TxMsg::Send(send) => {
                assert_eq!(send.amount, Amount::new("1000000001", "CASH"));
                assert_eq!(send.memo.as_deref(), Some("hello"));
            }
            other => panic!("unexpected message {:?}", other),
        }
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let err = UnsignedTransaction::from_json(json!({
            "kind": "eth/send",
            "chainId": "ethereum-eip155-1"
        }))
        .unwrap_err();
        assert!(matches!(err, WasmBnsError::UnsupportedKind(_)));
    }

    #[test]
    fn test_missing_kind() {
        let err = UnsignedTransaction::from_json(json!({ "chainId": "x" })).unwrap_err();
        assert_eq!(err, WasmBnsError::MissingField("kind".to_string()));
    }

    #[test]
    fn test_ids_accept_strings() {
        let tx = UnsignedTransaction::from_json(json!({
            "kind": "bns/return_escrow",
            "chainId": "registry-chain",
            "escrowId": "18446744073709551615",
            "multisig": [4, "5"]
        }))
        .unwrap();
        assert_eq!(tx.base.multisig, vec![4, 5]);
        assert_eq!(
            tx.msg,
            TxMsg::ReturnEscrow(ReturnEscrowTx {
                escrow_id: u64::MAX
            })
        );
    }

    #[test]
    fn test_ids_serialize_as_strings() {
        let mut tx = UnsignedTransaction::new(
            "registry-chain",
            TxMsg::ReturnEscrow(ReturnEscrowTx {
                escrow_id: u64::MAX,
            }),
        );
        tx.base.multisig = vec![9_007_199_254_740_993];
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["escrowId"], "18446744073709551615");
        assert_eq!(value["multisig"], json!(["9007199254740993"]));
        assert_eq!(UnsignedTransaction::from_json(value).unwrap(), tx);
    }

    #[test]
    fn test_json_roundtrip_keeps_kind() {
        let tx = UnsignedTransaction::new(
            "registry-chain",
            TxMsg::SwapAbort(SwapAbortTx {
                swap_id: vec![0, 0, 0, 0, 0, 0, 0, 7],
            }),
        );
        let value = serde_json::to_value(&tx).unwrap();
        assert_eq!(value["kind"], "bcp/swap_abort");
        assert_eq!(value["swapId"], "0000000000000007");
        assert_eq!(UnsignedTransaction::from_json(value).unwrap(), tx);
    }

    #[test]
    fn test_kinds_match_variants() {
        assert_eq!(TxMsg::KINDS.len(), 29);
        let vote = TxMsg::Vote(VoteTx {
            proposal_id: 1,
            selection: VoteOption::Yes,
            voter: None,
        });
        assert!(TxMsg::KINDS.contains(&vote.kind()));
    }

    #[test]
    fn test_proposal_action_tag() {
        let action: ProposalAction = serde_json::from_value(json!({
            "kind": "gov_update_election_rule",
            "electionRuleId": 2,
            "threshold": { "numerator": 2, "denominator": 3 },
            "votingPeriod": 3600
        }))
        .unwrap();
        assert_eq!(action.kind(), "gov_update_election_rule");
        assert_eq!(
            action,
            ProposalAction::UpdateElectionRule {
                election_rule_id: 2,
                threshold: Some(Fraction {
                    numerator: 2,
                    denominator: 3
                }),
                quorum: None,
                voting_period: 3600,
            }
        );
    }

    #[test]
    fn test_encode_options_default_strict() {
        assert!(EncodeOptions::default().strict_mode);
        let opts: EncodeOptions = serde_json::from_value(json!({})).unwrap();
        assert!(opts.strict_mode);
    }
}
