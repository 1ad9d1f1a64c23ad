//! Message decoding
//!
//! Turns the `bnsd.Tx` oneof back into a typed [`UnsignedTransaction`].
//! Addresses are rendered with the prefix of the chain the transaction was
//! decoded for.

use tracing::{debug, warn};

use crate::address::{address_prefix, encode_address_field, Bech32Prefix};
use crate::amount::{decode_amount, decode_amount_field};
use crate::builder::{SWAP_HASH_LENGTH, SWAP_ID_LENGTH};
use crate::error::WasmBnsError;
use crate::id::decode_numeric_id_field;
use crate::proposal::{decode_account_configuration, decode_raw_proposal_option};
use crate::proto::bnsd::tx::Sum;
use crate::proto::bnsd::Tx;
use crate::proto::{account, coin, gov, multisig, username};
use crate::types::*;

fn decode_memo(memo: &str) -> Option<String> {
    Some(memo.to_string()).filter(|memo| !memo.is_empty())
}

fn decode_amounts(amounts: &[coin::Coin]) -> Result<Vec<Amount>, WasmBnsError> {
    amounts.iter().map(decode_amount).collect()
}

fn optional_address(
    prefix: Bech32Prefix,
    field: &str,
    bytes: &[u8],
) -> Result<Option<String>, WasmBnsError> {
    if bytes.is_empty() {
        return Ok(None);
    }
    encode_address_field(prefix, field, bytes).map(Some)
}

fn fixed_bytes(field: &str, bytes: &[u8], expected: usize) -> Result<Vec<u8>, WasmBnsError> {
    if bytes.is_empty() {
        return Err(WasmBnsError::missing(field));
    }
    if bytes.len() != expected {
        return Err(WasmBnsError::invalid_length(field, expected, bytes.len()));
    }
    Ok(bytes.to_vec())
}

/// Decode multisig participants
///
/// The wire message names the address field `signature`.
pub fn decode_participants(
    prefix: Bech32Prefix,
    participants: &[multisig::Participant],
) -> Result<Vec<Participant>, WasmBnsError> {
    participants
        .iter()
        .enumerate()
        .map(|(i, participant)| {
            Ok(Participant {
                address: encode_address_field(
                    prefix,
                    &format!("participants.{}.signature", i),
                    &participant.signature,
                )?,
                weight: participant.weight,
            })
        })
        .collect()
}

fn decode_chain_address_pairs(pairs: &[username::BlockchainAddress]) -> Vec<ChainAddressPair> {
    pairs
        .iter()
        .map(|pair| ChainAddressPair {
            chain_id: pair.blockchain_id.clone(),
            address: pair.address.clone(),
        })
        .collect()
}

fn decode_blockchain_addresses(targets: &[account::BlockchainAddress]) -> Vec<BlockchainAddress> {
    targets
        .iter()
        .map(|target| BlockchainAddress {
            blockchain_id: target.blockchain_id.clone(),
            address: target.address.clone(),
        })
        .collect()
}

fn decode_account_msg_fees(
    msg_fees: &[account::AccountMsgFee],
) -> Result<Vec<AccountMsgFee>, WasmBnsError> {
    msg_fees
        .iter()
        .map(|msg_fee| {
            Ok(AccountMsgFee {
                msg_path: msg_fee.msg_path.clone(),
                fee: decode_amount_field("fee", msg_fee.fee.as_ref())?,
            })
        })
        .collect()
}

fn decode_vote_option(selected: i32) -> Result<VoteOption, WasmBnsError> {
    match gov::VoteOption::try_from(selected) {
        Ok(gov::VoteOption::Yes) => Ok(VoteOption::Yes),
        Ok(gov::VoteOption::No) => Ok(VoteOption::No),
        Ok(gov::VoteOption::Abstain) => Ok(VoteOption::Abstain),
        Ok(gov::VoteOption::Invalid) => Err(WasmBnsError::ProtocolInvariantViolation(
            "VOTE_OPTION_INVALID is not allowed".to_string(),
        )),
        Err(_) => Err(WasmBnsError::ProtocolInvariantViolation(format!(
            "Received unknown value for vote option: {}",
            selected
        ))),
    }
}

/// Decode the kind-specific message of a transaction
///
/// # Arguments
/// * `base` - Chain id, fee and multisig ids already decoded from the envelope
/// * `tx` - Wire transaction holding the message oneof
pub fn decode_msg(base: TransactionBase, tx: &Tx) -> Result<UnsignedTransaction, WasmBnsError> {
    let prefix = address_prefix(&base.chain_id);
    let sum = tx.sum.as_ref().ok_or_else(|| {
        WasmBnsError::UnsupportedKind("unknown message type in transaction".to_string())
    })?;

    let msg = match sum {
        // Token sends
        Sum::CashSendMsg(msg) => TxMsg::Send(SendTx {
            sender: encode_address_field(prefix, "source", &msg.source)?,
            recipient: encode_address_field(prefix, "destination", &msg.destination)?,
            amount: decode_amount_field("amount", msg.amount.as_ref())?,
            memo: decode_memo(&msg.memo),
        }),

        // Atomic swaps
        Sum::AswapCreateMsg(msg) => TxMsg::SwapOffer(SwapOfferTx {
            sender: encode_address_field(prefix, "source", &msg.source)?,
            recipient: encode_address_field(prefix, "destination", &msg.destination)?,
            amounts: decode_amounts(&msg.amount)?,
            hash: fixed_bytes("preimageHash", &msg.preimage_hash, SWAP_HASH_LENGTH)?,
            timeout: Timeout {
                timestamp: msg.timeout,
            },
            memo: decode_memo(&msg.memo),
        }),
        Sum::AswapReleaseMsg(msg) => TxMsg::SwapClaim(SwapClaimTx {
            swap_id: fixed_bytes("swapId", &msg.swap_id, SWAP_ID_LENGTH)?,
            preimage: fixed_bytes("preimage", &msg.preimage, SWAP_HASH_LENGTH)?,
        }),
        Sum::AswapReturnMsg(msg) => TxMsg::SwapAbort(SwapAbortTx {
            swap_id: fixed_bytes("swapId", &msg.swap_id, SWAP_ID_LENGTH)?,
        }),

        // Usernames
        Sum::UsernameRegisterTokenMsg(msg) => TxMsg::RegisterUsername(RegisterUsernameTx {
            username: msg.username.clone(),
            targets: decode_chain_address_pairs(&msg.targets),
        }),
        Sum::UsernameChangeTokenTargetsMsg(msg) => {
            TxMsg::UpdateTargetsOfUsername(UpdateTargetsOfUsernameTx {
                username: msg.username.clone(),
                targets: decode_chain_address_pairs(&msg.new_targets),
            })
        }
        Sum::UsernameTransferTokenMsg(msg) => TxMsg::TransferUsername(TransferUsernameTx {
            username: msg.username.clone(),
            new_owner: encode_address_field(prefix, "newOwner", &msg.new_owner)?,
        }),

        // Accounts
        Sum::AccountUpdateConfigurationMsg(msg) => {
            let patch = msg.patch.as_ref().ok_or_else(|| WasmBnsError::missing("patch"))?;
            TxMsg::UpdateAccountConfiguration(UpdateAccountConfigurationTx {
                configuration: decode_account_configuration(prefix, patch)?,
            })
        }
        Sum::AccountRegisterDomainMsg(msg) => TxMsg::RegisterDomain(RegisterDomainTx {
            domain: msg.domain.clone(),
            admin: encode_address_field(prefix, "admin", &msg.admin)?,
            has_superuser: msg.has_superuser,
            broker: optional_address(prefix, "thirdPartyToken", &msg.third_party_token)?,
            msg_fees: decode_account_msg_fees(&msg.msg_fees)?,
            account_renew: msg.account_renew,
        }),
        Sum::AccountTransferDomainMsg(msg) => TxMsg::TransferDomain(TransferDomainTx {
            domain: msg.domain.clone(),
            new_admin: encode_address_field(prefix, "newAdmin", &msg.new_admin)?,
        }),
        Sum::AccountRenewDomainMsg(msg) => TxMsg::RenewDomain(DomainTx {
            domain: msg.domain.clone(),
        }),
        Sum::AccountDeleteDomainMsg(msg) => TxMsg::DeleteDomain(DomainTx {
            domain: msg.domain.clone(),
        }),
        Sum::AccountRegisterAccountMsg(msg) => TxMsg::RegisterAccount(RegisterAccountTx {
            domain: msg.domain.clone(),
            name: msg.name.clone(),
            owner: encode_address_field(prefix, "owner", &msg.owner)?,
            targets: decode_blockchain_addresses(&msg.targets),
            broker: optional_address(prefix, "thirdPartyToken", &msg.third_party_token)?,
        }),
        Sum::AccountTransferAccountMsg(msg) => TxMsg::TransferAccount(TransferAccountTx {
            domain: msg.domain.clone(),
            name: msg.name.clone(),
            new_owner: encode_address_field(prefix, "newOwner", &msg.new_owner)?,
        }),
        Sum::AccountReplaceAccountTargetsMsg(msg) => {
            TxMsg::ReplaceAccountTargets(ReplaceAccountTargetsTx {
                domain: msg.domain.clone(),
                name: msg.name.clone(),
                new_targets: decode_blockchain_addresses(&msg.new_targets),
            })
        }
        Sum::AccountDeleteAccountMsg(msg) => TxMsg::DeleteAccount(AccountTx {
            domain: msg.domain.clone(),
            name: msg.name.clone(),
        }),
        Sum::AccountFlushDomainMsg(msg) => TxMsg::DeleteAllAccounts(DomainTx {
            domain: msg.domain.clone(),
        }),
        Sum::AccountRenewAccountMsg(msg) => TxMsg::RenewAccount(AccountTx {
            domain: msg.domain.clone(),
            name: msg.name.clone(),
        }),
        Sum::AccountAddAccountCertificateMsg(msg) => {
            if msg.certificate.is_empty() {
                return Err(WasmBnsError::missing("certificate"));
            }
            TxMsg::AddAccountCertificate(AddAccountCertificateTx {
                domain: msg.domain.clone(),
                name: msg.name.clone(),
                certificate: msg.certificate.clone(),
            })
        }
        Sum::AccountReplaceAccountMsgFeesMsg(msg) => {
            TxMsg::ReplaceAccountMsgFees(ReplaceAccountMsgFeesTx {
                domain: msg.domain.clone(),
                new_msg_fees: decode_account_msg_fees(&msg.new_msg_fees)?,
            })
        }
        Sum::AccountDeleteAccountCertificateMsg(msg) => {
            if msg.certificate_hash.is_empty() {
                return Err(WasmBnsError::missing("certificateHash"));
            }
            TxMsg::DeleteAccountCertificate(DeleteAccountCertificateTx {
                domain: msg.domain.clone(),
                name: msg.name.clone(),
                certificate_hash: msg.certificate_hash.clone(),
            })
        }

        // Multisignature contracts
        Sum::MultisigCreateMsg(msg) => TxMsg::CreateMultisignature(CreateMultisignatureTx {
            participants: decode_participants(prefix, &msg.participants)?,
            activation_threshold: msg.activation_threshold,
            admin_threshold: msg.admin_threshold,
        }),
        Sum::MultisigUpdateMsg(msg) => TxMsg::UpdateMultisignature(UpdateMultisignatureTx {
            contract_id: decode_numeric_id_field("contractId", &msg.contract_id)?,
            participants: decode_participants(prefix, &msg.participants)?,
            activation_threshold: msg.activation_threshold,
            admin_threshold: msg.admin_threshold,
        }),

        // Escrows
        Sum::EscrowCreateMsg(msg) => TxMsg::CreateEscrow(CreateEscrowTx {
            sender: encode_address_field(prefix, "source", &msg.source)?,
            arbiter: encode_address_field(prefix, "arbiter", &msg.arbiter)?,
            recipient: encode_address_field(prefix, "destination", &msg.destination)?,
            amounts: decode_amounts(&msg.amount)?,
            timeout: Timeout {
                timestamp: msg.timeout,
            },
            memo: decode_memo(&msg.memo),
        }),
        Sum::EscrowReleaseMsg(msg) => TxMsg::ReleaseEscrow(ReleaseEscrowTx {
            escrow_id: decode_numeric_id_field("escrowId", &msg.escrow_id)?,
            amounts: decode_amounts(&msg.amount)?,
        }),
        Sum::EscrowReturnMsg(msg) => TxMsg::ReturnEscrow(ReturnEscrowTx {
            escrow_id: decode_numeric_id_field("escrowId", &msg.escrow_id)?,
        }),
        Sum::EscrowUpdatePartiesMsg(msg) => TxMsg::UpdateEscrowParties(UpdateEscrowPartiesTx {
            escrow_id: decode_numeric_id_field("escrowId", &msg.escrow_id)?,
            sender: optional_address(prefix, "source", &msg.source)?,
            arbiter: optional_address(prefix, "arbiter", &msg.arbiter)?,
            recipient: optional_address(prefix, "destination", &msg.destination)?,
        }),

        // Governance
        Sum::GovCreateProposalMsg(msg) => {
            if msg.raw_option.is_empty() {
                return Err(WasmBnsError::missing("rawOption"));
            }
            TxMsg::CreateProposal(CreateProposalTx {
                title: msg.title.clone(),
                action: decode_raw_proposal_option(prefix, &msg.raw_option)?,
                description: msg.description.clone(),
                election_rule_id: decode_numeric_id_field("electionRuleId", &msg.election_rule_id)?,
                start_time: msg.start_time,
                author: encode_address_field(prefix, "author", &msg.author)?,
            })
        }
        Sum::GovVoteMsg(msg) => {
            let voter = optional_address(prefix, "voter", &msg.voter)?;
            if voter.is_none() {
                warn!("vote without voter, the chain falls back to the main signer");
            }
            TxMsg::Vote(VoteTx {
                proposal_id: decode_numeric_id_field("proposalId", &msg.proposal_id)?,
                selection: decode_vote_option(msg.selected)?,
                voter,
            })
        }
        Sum::GovDeleteProposalMsg(_) | Sum::GovTallyMsg(_) => {
            return Err(WasmBnsError::UnsupportedKind(
                "unknown message type in transaction".to_string(),
            ))
        }
    };

    debug!(kind = msg.kind(), chain_id = %base.chain_id, "decoded message");
    Ok(UnsignedTransaction { base, msg })
}
