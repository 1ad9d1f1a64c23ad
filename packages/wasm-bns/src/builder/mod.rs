//! Message encoding
//!
//! Translates the kind-specific part of an [`UnsignedTransaction`] into the
//! `bnsd.Tx` oneof. Every wire message carries `metadata { schema: 1 }` and
//! leaves zero values unset so they are omitted from the encoding.

use tracing::debug;

use crate::address::{address_prefix, decode_address_for_prefix, Bech32Prefix};
use crate::amount::encode_amount;
use crate::error::WasmBnsError;
use crate::id::encode_numeric_id;
use crate::proposal::encode_proposal_action;
use crate::proto::bnsd::tx::Sum;
use crate::proto::{account, aswap, cash, escrow, gov, multisig, username, weave};
use crate::types::*;

/// Length of an atomic swap preimage and its sha256 hash
pub const SWAP_HASH_LENGTH: usize = 32;

/// Length of an atomic swap id
pub const SWAP_ID_LENGTH: usize = 8;

pub(crate) fn metadata() -> Option<weave::Metadata> {
    Some(weave::Metadata { schema: 1 })
}

fn address(prefix: Bech32Prefix, address: &str) -> Result<Vec<u8>, WasmBnsError> {
    decode_address_for_prefix(prefix, address)
}

fn optional_address(
    prefix: Bech32Prefix,
    maybe: Option<&String>,
) -> Result<Vec<u8>, WasmBnsError> {
    maybe.map_or(Ok(Vec::new()), |a| address(prefix, a))
}

fn required_bytes(field: &str, bytes: &[u8]) -> Result<Vec<u8>, WasmBnsError> {
    if bytes.is_empty() {
        return Err(WasmBnsError::missing(field));
    }
    Ok(bytes.to_vec())
}

fn check_length(field: &str, bytes: &[u8], expected: usize) -> Result<(), WasmBnsError> {
    if bytes.len() != expected {
        return Err(WasmBnsError::invalid_length(field, expected, bytes.len()));
    }
    Ok(())
}

/// Validate a memo and normalize `None` to the empty (absent) string
///
/// The limit is measured in UTF-8 bytes, not characters.
pub fn encode_memo(memo: Option<&str>) -> Result<String, WasmBnsError> {
    let memo = memo.unwrap_or_default();
    if memo.len() > MAX_MEMO_LENGTH {
        return Err(WasmBnsError::InvalidMemo {
            max: MAX_MEMO_LENGTH,
            actual: memo.len(),
        });
    }
    Ok(memo.to_string())
}

fn encode_amounts(amounts: &[Amount]) -> Result<Vec<crate::proto::coin::Coin>, WasmBnsError> {
    amounts.iter().map(encode_amount).collect()
}

/// Encode multisig participants
///
/// The wire message names the address field `signature`.
pub fn encode_participants(
    prefix: Bech32Prefix,
    participants: &[Participant],
) -> Result<Vec<multisig::Participant>, WasmBnsError> {
    participants
        .iter()
        .map(|participant| {
            Ok(multisig::Participant {
                signature: address(prefix, &participant.address)?,
                weight: participant.weight,
            })
        })
        .collect()
}

/// Encode the kind-specific message of a transaction
///
/// # Arguments
/// * `tx` - Transaction to encode; addresses must use the prefix of its chain
/// * `strict_mode` - Reject transactions that rely on chain-side defaults
pub fn encode_msg(tx: &UnsignedTransaction, strict_mode: bool) -> Result<Sum, WasmBnsError> {
    let prefix = address_prefix(tx.chain_id());
    debug!(kind = tx.kind(), chain_id = tx.chain_id(), "encoding message");

    let sum = match &tx.msg {
        // Token sends
        TxMsg::Send(send) => Sum::CashSendMsg(encode_send_msg(prefix, send)?),

        // Atomic swaps
        TxMsg::SwapOffer(offer) => Sum::AswapCreateMsg(encode_swap_offer(prefix, offer)?),
        TxMsg::SwapClaim(claim) => Sum::AswapReleaseMsg(encode_swap_claim(claim)?),
        TxMsg::SwapAbort(abort) => Sum::AswapReturnMsg(encode_swap_abort(abort)?),

        // Usernames
        TxMsg::RegisterUsername(register) => {
            Sum::UsernameRegisterTokenMsg(encode_register_username(register)?)
        }
        TxMsg::UpdateTargetsOfUsername(update) => {
            Sum::UsernameChangeTokenTargetsMsg(username::ChangeTokenTargetsMsg {
                metadata: metadata(),
                username: update.username.clone(),
                new_targets: encode_chain_address_pairs(&update.targets),
            })
        }
        TxMsg::TransferUsername(transfer) => {
            Sum::UsernameTransferTokenMsg(username::TransferTokenMsg {
                metadata: metadata(),
                username: transfer.username.clone(),
                new_owner: address(prefix, &transfer.new_owner)?,
            })
        }

        // Accounts
        TxMsg::UpdateAccountConfiguration(update) => {
            Sum::AccountUpdateConfigurationMsg(account::UpdateConfigurationMsg {
                metadata: metadata(),
                patch: Some(encode_account_configuration(prefix, &update.configuration)?),
            })
        }
        TxMsg::RegisterDomain(register) => {
            Sum::AccountRegisterDomainMsg(encode_register_domain(prefix, register)?)
        }
        TxMsg::TransferDomain(transfer) => {
            Sum::AccountTransferDomainMsg(account::TransferDomainMsg {
                metadata: metadata(),
                domain: transfer.domain.clone(),
                new_admin: address(prefix, &transfer.new_admin)?,
            })
        }
        TxMsg::RenewDomain(renew) => Sum::AccountRenewDomainMsg(account::RenewDomainMsg {
            metadata: metadata(),
            domain: renew.domain.clone(),
        }),
        TxMsg::DeleteDomain(delete) => Sum::AccountDeleteDomainMsg(account::DeleteDomainMsg {
            metadata: metadata(),
            domain: delete.domain.clone(),
        }),
        TxMsg::RegisterAccount(register) => {
            Sum::AccountRegisterAccountMsg(encode_register_account(prefix, register)?)
        }
        TxMsg::TransferAccount(transfer) => {
            Sum::AccountTransferAccountMsg(account::TransferAccountMsg {
                metadata: metadata(),
                domain: transfer.domain.clone(),
                name: transfer.name.clone(),
                new_owner: address(prefix, &transfer.new_owner)?,
            })
        }
        TxMsg::ReplaceAccountTargets(replace) => {
            Sum::AccountReplaceAccountTargetsMsg(account::ReplaceAccountTargetsMsg {
                metadata: metadata(),
                domain: replace.domain.clone(),
                name: replace.name.clone(),
                new_targets: encode_blockchain_addresses(&replace.new_targets),
            })
        }
        TxMsg::DeleteAccount(delete) => Sum::AccountDeleteAccountMsg(account::DeleteAccountMsg {
            metadata: metadata(),
            domain: delete.domain.clone(),
            name: delete.name.clone(),
        }),
        TxMsg::DeleteAllAccounts(flush) => Sum::AccountFlushDomainMsg(account::FlushDomainMsg {
            metadata: metadata(),
            domain: flush.domain.clone(),
        }),
        TxMsg::RenewAccount(renew) => Sum::AccountRenewAccountMsg(account::RenewAccountMsg {
            metadata: metadata(),
            domain: renew.domain.clone(),
            name: renew.name.clone(),
        }),
        TxMsg::AddAccountCertificate(add) => {
            Sum::AccountAddAccountCertificateMsg(account::AddAccountCertificateMsg {
                metadata: metadata(),
                domain: add.domain.clone(),
                name: add.name.clone(),
                certificate: required_bytes("certificate", &add.certificate)?,
            })
        }
        TxMsg::ReplaceAccountMsgFees(replace) => {
            Sum::AccountReplaceAccountMsgFeesMsg(account::ReplaceAccountMsgFeesMsg {
                metadata: metadata(),
                domain: replace.domain.clone(),
                new_msg_fees: encode_account_msg_fees(&replace.new_msg_fees)?,
            })
        }
        TxMsg::DeleteAccountCertificate(delete) => {
            Sum::AccountDeleteAccountCertificateMsg(account::DeleteAccountCertificateMsg {
                metadata: metadata(),
                domain: delete.domain.clone(),
                name: delete.name.clone(),
                certificate_hash: required_bytes("certificateHash", &delete.certificate_hash)?,
            })
        }

        // Multisignature contracts
        TxMsg::CreateMultisignature(create) => Sum::MultisigCreateMsg(multisig::CreateMsg {
            metadata: metadata(),
            participants: encode_participants(prefix, &create.participants)?,
            activation_threshold: create.activation_threshold,
            admin_threshold: create.admin_threshold,
        }),
        TxMsg::UpdateMultisignature(update) => Sum::MultisigUpdateMsg(multisig::UpdateMsg {
            metadata: metadata(),
            contract_id: encode_numeric_id(update.contract_id).to_vec(),
            participants: encode_participants(prefix, &update.participants)?,
            activation_threshold: update.activation_threshold,
            admin_threshold: update.admin_threshold,
        }),

        // Escrows
        TxMsg::CreateEscrow(create) => Sum::EscrowCreateMsg(encode_create_escrow(prefix, create)?),
        TxMsg::ReleaseEscrow(release) => Sum::EscrowReleaseMsg(escrow::ReleaseMsg {
            metadata: metadata(),
            escrow_id: encode_numeric_id(release.escrow_id).to_vec(),
            amount: encode_amounts(&release.amounts)?,
        }),
        TxMsg::ReturnEscrow(ret) => Sum::EscrowReturnMsg(escrow::ReturnMsg {
            metadata: metadata(),
            escrow_id: encode_numeric_id(ret.escrow_id).to_vec(),
        }),
        TxMsg::UpdateEscrowParties(update) => {
            Sum::EscrowUpdatePartiesMsg(encode_update_escrow_parties(prefix, update)?)
        }

        // Governance
        TxMsg::CreateProposal(create) => {
            Sum::GovCreateProposalMsg(encode_create_proposal(prefix, create)?)
        }
        TxMsg::Vote(vote) => Sum::GovVoteMsg(encode_vote(prefix, vote, strict_mode)?),
    };

    Ok(sum)
}

// Token sends

fn encode_send_msg(prefix: Bech32Prefix, send: &SendTx) -> Result<cash::SendMsg, WasmBnsError> {
    Ok(cash::SendMsg {
        metadata: metadata(),
        source: address(prefix, &send.sender)?,
        destination: address(prefix, &send.recipient)?,
        amount: Some(encode_amount(&send.amount)?),
        memo: encode_memo(send.memo.as_deref())?,
        r#ref: Vec::new(),
    })
}

// Atomic swaps

fn encode_swap_offer(
    prefix: Bech32Prefix,
    offer: &SwapOfferTx,
) -> Result<aswap::CreateMsg, WasmBnsError> {
    check_length("hash", &offer.hash, SWAP_HASH_LENGTH)?;

    Ok(aswap::CreateMsg {
        metadata: metadata(),
        source: address(prefix, &offer.sender)?,
        preimage_hash: offer.hash.clone(),
        destination: address(prefix, &offer.recipient)?,
        amount: encode_amounts(&offer.amounts)?,
        timeout: offer.timeout.timestamp,
        memo: encode_memo(offer.memo.as_deref())?,
    })
}

fn encode_swap_claim(claim: &SwapClaimTx) -> Result<aswap::ReleaseMsg, WasmBnsError> {
    check_length("swapId", &claim.swap_id, SWAP_ID_LENGTH)?;
    check_length("preimage", &claim.preimage, SWAP_HASH_LENGTH)?;

    Ok(aswap::ReleaseMsg {
        metadata: metadata(),
        swap_id: claim.swap_id.clone(),
        preimage: claim.preimage.clone(),
    })
}

fn encode_swap_abort(abort: &SwapAbortTx) -> Result<aswap::ReturnMsg, WasmBnsError> {
    check_length("swapId", &abort.swap_id, SWAP_ID_LENGTH)?;

    Ok(aswap::ReturnMsg {
        metadata: metadata(),
        swap_id: abort.swap_id.clone(),
    })
}

// Usernames

fn encode_chain_address_pairs(pairs: &[ChainAddressPair]) -> Vec<username::BlockchainAddress> {
    pairs
        .iter()
        .map(|pair| username::BlockchainAddress {
            blockchain_id: pair.chain_id.clone(),
            address: pair.address.clone(),
        })
        .collect()
}

fn encode_register_username(
    register: &RegisterUsernameTx,
) -> Result<username::RegisterTokenMsg, WasmBnsError> {
    if !register.username.ends_with("*iov") {
        return Err(WasmBnsError::ProtocolInvariantViolation(
            "The username property needs to be a full human readable address, including the namespace suffix (e.g. '*iov')".to_string(),
        ));
    }

    Ok(username::RegisterTokenMsg {
        metadata: metadata(),
        username: register.username.clone(),
        targets: encode_chain_address_pairs(&register.targets),
    })
}

// Accounts

pub(crate) fn encode_account_configuration(
    prefix: Bech32Prefix,
    configuration: &AccountConfiguration,
) -> Result<account::Configuration, WasmBnsError> {
    Ok(account::Configuration {
        metadata: metadata(),
        owner: address(prefix, &configuration.owner)?,
        valid_domain: configuration.valid_domain.clone(),
        valid_name: configuration.valid_name.clone(),
        valid_blockchain_id: configuration.valid_blockchain_id.clone(),
        valid_blockchain_address: configuration.valid_blockchain_address.clone(),
        domain_renew: configuration.domain_renew,
    })
}

fn encode_account_msg_fees(
    msg_fees: &[AccountMsgFee],
) -> Result<Vec<account::AccountMsgFee>, WasmBnsError> {
    msg_fees
        .iter()
        .map(|msg_fee| {
            Ok(account::AccountMsgFee {
                msg_path: msg_fee.msg_path.clone(),
                fee: Some(encode_amount(&msg_fee.fee)?),
            })
        })
        .collect()
}

fn encode_blockchain_addresses(targets: &[BlockchainAddress]) -> Vec<account::BlockchainAddress> {
    targets
        .iter()
        .map(|target| account::BlockchainAddress {
            blockchain_id: target.blockchain_id.clone(),
            address: target.address.clone(),
        })
        .collect()
}

fn encode_register_domain(
    prefix: Bech32Prefix,
    register: &RegisterDomainTx,
) -> Result<account::RegisterDomainMsg, WasmBnsError> {
    Ok(account::RegisterDomainMsg {
        metadata: metadata(),
        domain: register.domain.clone(),
        admin: address(prefix, &register.admin)?,
        has_superuser: register.has_superuser,
        third_party_token: optional_address(prefix, register.broker.as_ref())?,
        msg_fees: encode_account_msg_fees(&register.msg_fees)?,
        account_renew: register.account_renew,
    })
}

fn encode_register_account(
    prefix: Bech32Prefix,
    register: &RegisterAccountTx,
) -> Result<account::RegisterAccountMsg, WasmBnsError> {
    Ok(account::RegisterAccountMsg {
        metadata: metadata(),
        domain: register.domain.clone(),
        name: register.name.clone(),
        owner: address(prefix, &register.owner)?,
        targets: encode_blockchain_addresses(&register.targets),
        third_party_token: optional_address(prefix, register.broker.as_ref())?,
    })
}

// Escrows

fn encode_create_escrow(
    prefix: Bech32Prefix,
    create: &CreateEscrowTx,
) -> Result<escrow::CreateMsg, WasmBnsError> {
    Ok(escrow::CreateMsg {
        metadata: metadata(),
        source: address(prefix, &create.sender)?,
        arbiter: address(prefix, &create.arbiter)?,
        destination: address(prefix, &create.recipient)?,
        amount: encode_amounts(&create.amounts)?,
        timeout: create.timeout.timestamp,
        memo: encode_memo(create.memo.as_deref())?,
    })
}

fn encode_update_escrow_parties(
    prefix: Bech32Prefix,
    update: &UpdateEscrowPartiesTx,
) -> Result<escrow::UpdatePartiesMsg, WasmBnsError> {
    let parties = [&update.sender, &update.arbiter, &update.recipient]
        .iter()
        .filter(|party| party.is_some())
        .count();
    if parties != 1 {
        return Err(WasmBnsError::ProtocolInvariantViolation(format!(
            "Only one party can be updated at a time, got {}",
            parties
        )));
    }

    Ok(escrow::UpdatePartiesMsg {
        metadata: metadata(),
        escrow_id: encode_numeric_id(update.escrow_id).to_vec(),
        source: optional_address(prefix, update.sender.as_ref())?,
        arbiter: optional_address(prefix, update.arbiter.as_ref())?,
        destination: optional_address(prefix, update.recipient.as_ref())?,
    })
}

// Governance

fn encode_create_proposal(
    prefix: Bech32Prefix,
    create: &CreateProposalTx,
) -> Result<gov::CreateProposalMsg, WasmBnsError> {
    Ok(gov::CreateProposalMsg {
        metadata: metadata(),
        title: create.title.clone(),
        raw_option: encode_proposal_action(prefix, &create.action)?,
        description: create.description.clone(),
        election_rule_id: encode_numeric_id(create.election_rule_id).to_vec(),
        start_time: create.start_time,
        author: address(prefix, &create.author)?,
    })
}

fn encode_vote_option(option: VoteOption) -> gov::VoteOption {
    match option {
        VoteOption::Yes => gov::VoteOption::Yes,
        VoteOption::No => gov::VoteOption::No,
        VoteOption::Abstain => gov::VoteOption::Abstain,
    }
}

fn encode_vote(
    prefix: Bech32Prefix,
    vote: &VoteTx,
    strict_mode: bool,
) -> Result<gov::VoteMsg, WasmBnsError> {
    if strict_mode && vote.voter.is_none() {
        return Err(WasmBnsError::ProtocolInvariantViolation(
            "In strict mode VoteTx.voter must be set".to_string(),
        ));
    }

    Ok(gov::VoteMsg {
        metadata: metadata(),
        proposal_id: encode_numeric_id(vote.proposal_id).to_vec(),
        voter: optional_address(prefix, vote.voter.as_ref())?,
        selected: encode_vote_option(vote.selection) as i32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN_ID: &str = "registry-chain";
    const SENDER: &str = "tiov1dcg3fat5zrvw00xezzjk3jgedm7pg70y222af3";
    const RECIPIENT: &str = "tiov1k898u78hgs36uqw68dg7va5nfkgstu5z0fhz3f";
    const ARBITER: &str = "tiov17yp0mh3yxwv6yxx386mxyfzlqnhe6q58edka6r";
    const OWNER: &str = "tiov1p62uqw00znhr98gwp8vylyyul844aarjhe9duq";
    const BROKER: &str = "tiov1zg69v7yszg69v7yszg69v7yszg69v7ysy7xxgy";

    fn tx(msg: TxMsg) -> UnsignedTransaction {
        UnsignedTransaction::new(CHAIN_ID, msg)
    }

    fn send_with_memo(memo: Option<String>) -> UnsignedTransaction {
        tx(TxMsg::Send(SendTx {
            sender: SENDER.to_string(),
            recipient: RECIPIENT.to_string(),
            amount: Amount::new("1000000001", "CASH"),
            memo,
        }))
    }

    #[test]
    fn test_encode_send() {
        let sum = encode_msg(&send_with_memo(Some("paid transfer".to_string())), true).unwrap();
        let Sum::CashSendMsg(msg) = sum else {
            panic!("expected send message");
        };
        assert_eq!(msg.metadata, Some(weave::Metadata { schema: 1 }));
        assert_eq!(hex::encode(&msg.source), "6e1114f57410d8e7bcd910a568c9196efc1479e4");
        assert_eq!(
            hex::encode(&msg.destination),
            "b1ca7e78f74423ae01da3b51e676934d9105f282"
        );
        let amount = msg.amount.unwrap();
        assert_eq!((amount.whole, amount.fractional), (1, 1));
        assert_eq!(amount.ticker, "CASH");
        assert_eq!(msg.memo, "paid transfer");
    }

    #[test]
    fn test_memo_limit_in_bytes() {
        assert!(encode_msg(&send_with_memo(Some("a".repeat(128))), true).is_ok());

        let err = encode_msg(&send_with_memo(Some("a".repeat(129))), true).unwrap_err();
        assert!(err
            .to_string()
            .contains("Invalid memo length: maximum 128 bytes"));

        // 43 three-byte characters exceed the limit although only 43 chars long
        let err = encode_msg(&send_with_memo(Some("€".repeat(43))), true).unwrap_err();
        assert_eq!(err, WasmBnsError::InvalidMemo { max: 128, actual: 129 });
    }

    #[test]
    fn test_empty_memo_is_absent() {
        let Sum::CashSendMsg(none) = encode_msg(&send_with_memo(None), true).unwrap() else {
            panic!("expected send message");
        };
        let Sum::CashSendMsg(empty) =
            encode_msg(&send_with_memo(Some(String::new())), true).unwrap()
        else {
            panic!("expected send message");
        };
        assert_eq!(none, empty);
        assert!(none.memo.is_empty());
    }

    #[test]
    fn test_sender_from_other_chain_rejected() {
        let mut send = send_with_memo(None);
        send.base.chain_id = "iov-mainnet".to_string();
        let err = encode_msg(&send, true).unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAddress(_)));
    }

    #[test]
    fn test_register_username_requires_namespace() {
        let register = |username: &str| {
            tx(TxMsg::RegisterUsername(RegisterUsernameTx {
                username: username.to_string(),
                targets: vec![ChainAddressPair {
                    chain_id: "chain1".to_string(),
                    address: "23456782367823X".to_string(),
                }],
            }))
        };
        assert!(encode_msg(&register("bob*iov"), true).is_ok());
        let err = encode_msg(&register("bob"), true).unwrap_err();
        assert!(matches!(err, WasmBnsError::ProtocolInvariantViolation(_)));
    }

    #[test]
    fn test_register_domain() {
        let register = tx(TxMsg::RegisterDomain(RegisterDomainTx {
            domain: "hole".to_string(),
            admin: OWNER.to_string(),
            has_superuser: true,
            broker: Some(BROKER.to_string()),
            msg_fees: vec![AccountMsgFee {
                msg_path: "some-msg-path".to_string(),
                fee: Amount::new("1000000002", "ASH"),
            }],
            account_renew: 1234,
        }));
        let Sum::AccountRegisterDomainMsg(msg) = encode_msg(&register, true).unwrap() else {
            panic!("expected register domain message");
        };
        assert_eq!(msg.domain, "hole");
        assert_eq!(hex::encode(&msg.admin), "0e95c039ef14ee329d0e09d84f909cf9eb5ef472");
        assert!(msg.has_superuser);
        assert_eq!(
            hex::encode(&msg.third_party_token),
            "1234567890123456789012345678901234567890"
        );
        let fee = msg.msg_fees[0].fee.as_ref().unwrap();
        assert_eq!((fee.whole, fee.fractional), (1, 2));
        assert_eq!(msg.account_renew, 1234);
    }

    #[test]
    fn test_participants_use_signature_field() {
        let participants = vec![
            Participant {
                address: BROKER.to_string(),
                weight: 4,
            },
            Participant {
                address: "tiov140x77qfr40x77qfr40x77qfr40x77qfrj4zpp5".to_string(),
                weight: 1,
            },
        ];
        let encoded = encode_participants(Bech32Prefix::Tiov, &participants).unwrap();
        assert_eq!(
            hex::encode(&encoded[0].signature),
            "1234567890123456789012345678901234567890"
        );
        assert_eq!(encoded[0].weight, 4);
        assert_eq!(
            hex::encode(&encoded[1].signature),
            "abcdef0123abcdef0123abcdef0123abcdef0123"
        );
    }

    #[test]
    fn test_release_escrow_id() {
        let release = tx(TxMsg::ReleaseEscrow(ReleaseEscrowTx {
            escrow_id: 4,
            amounts: vec![Amount::new("1000000001", "CASH")],
        }));
        let Sum::EscrowReleaseMsg(msg) = encode_msg(&release, true).unwrap() else {
            panic!("expected release message");
        };
        assert_eq!(msg.escrow_id, vec![0, 0, 0, 0, 0, 0, 0, 4]);
    }

    fn update_parties(
        sender: Option<&str>,
        arbiter: Option<&str>,
        recipient: Option<&str>,
    ) -> UnsignedTransaction {
        tx(TxMsg::UpdateEscrowParties(UpdateEscrowPartiesTx {
            escrow_id: 4,
            sender: sender.map(str::to_string),
            arbiter: arbiter.map(str::to_string),
            recipient: recipient.map(str::to_string),
        }))
    }

    #[test]
    fn test_update_escrow_parties_single_party() {
        let Sum::EscrowUpdatePartiesMsg(msg) =
            encode_msg(&update_parties(None, Some(ARBITER), None), true).unwrap()
        else {
            panic!("expected update parties message");
        };
        assert_eq!(hex::encode(&msg.arbiter), "f102fdde243399a218d13eb662245f04ef9d0287");
        assert!(msg.source.is_empty());
        assert!(msg.destination.is_empty());
    }

    #[test]
    fn test_update_escrow_parties_requires_exactly_one() {
        let err = encode_msg(&update_parties(None, None, None), true).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Only one party can be updated at a time, got 0"
        );

        let err = encode_msg(&update_parties(Some(SENDER), None, Some(RECIPIENT)), true)
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("Only one party can be updated at a time, got 2"));
    }

    #[test]
    fn test_vote_strict_mode() {
        let vote = tx(TxMsg::Vote(VoteTx {
            proposal_id: 0xaabbccdd22,
            selection: VoteOption::Abstain,
            voter: None,
        }));
        let err = encode_msg(&vote, true).unwrap_err();
        assert!(err
            .to_string()
            .contains("In strict mode VoteTx.voter must be set"));

        let Sum::GovVoteMsg(msg) = encode_msg(&vote, false).unwrap() else {
            panic!("expected vote message");
        };
        assert!(msg.voter.is_empty());
        assert_eq!(msg.selected, gov::VoteOption::Abstain as i32);
        assert_eq!(hex::encode(&msg.proposal_id), "000000aabbccdd22");
    }

    #[test]
    fn test_swap_lengths() {
        let claim = tx(TxMsg::SwapClaim(SwapClaimTx {
            swap_id: vec![0x12, 0x34],
            preimage: vec![0; 32],
        }));
        let err = encode_msg(&claim, true).unwrap_err();
        assert_eq!(err, WasmBnsError::invalid_length("swapId", 8, 2));

        let offer = tx(TxMsg::SwapOffer(SwapOfferTx {
            sender: SENDER.to_string(),
            recipient: RECIPIENT.to_string(),
            amounts: vec![],
            hash: vec![0; 20],
            timeout: Timeout {
                timestamp: 1601234567,
            },
            memo: None,
        }));
        let err = encode_msg(&offer, true).unwrap_err();
        assert_eq!(err, WasmBnsError::invalid_length("hash", 32, 20));
    }

    #[test]
    fn test_account_certificates_must_not_be_empty() {
        let add = |certificate: Vec<u8>| {
            tx(TxMsg::AddAccountCertificate(AddAccountCertificateTx {
                domain: "hole".to_string(),
                name: "alice".to_string(),
                certificate,
            }))
        };
        let err = encode_msg(&add(vec![]), true).unwrap_err();
        assert_eq!(err, WasmBnsError::missing("certificate"));
        let encoded = encode_msg(&add(vec![0xde, 0xad]), true).unwrap();
        let Sum::AccountAddAccountCertificateMsg(msg) = encoded else {
            panic!("expected add certificate message");
        };
        assert_eq!(msg.certificate, vec![0xde, 0xad]);

        let delete = tx(TxMsg::DeleteAccountCertificate(DeleteAccountCertificateTx {
            domain: "hole".to_string(),
            name: "alice".to_string(),
            certificate_hash: vec![],
        }));
        let err = encode_msg(&delete, true).unwrap_err();
        assert_eq!(err, WasmBnsError::missing("certificateHash"));
    }
}
