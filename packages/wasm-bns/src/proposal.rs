//! Governance proposal actions
//!
//! A proposal stores the action it executes as a standalone, protobuf
//! encoded `ProposalOptions` message inside `CreateProposalMsg.raw_option`.
//! Encoding and decoding the action is therefore a separate stage that
//! runs before (encode) or after (decode) the outer message codec.

use prost::Message;
use tracing::debug;

use crate::address::{decode_address_for_prefix, encode_address_field, Bech32Prefix};
use crate::amount::{decode_amount, decode_amount_field, encode_amount};
use crate::builder::{encode_account_configuration, encode_memo, metadata};
use crate::error::WasmBnsError;
use crate::id::{decode_numeric_id_field, encode_numeric_id};
use crate::proto::bnsd::execute_proposal_batch_msg::{union, Union};
use crate::proto::bnsd::proposal_options::Option as ProposalOption;
use crate::proto::bnsd::{ExecuteProposalBatchMsg, ProposalOptions};
use crate::proto::{
    account, cash, datamigration, escrow, gov, migration, msgfee, txfee, username, validators,
    weave,
};
use crate::types::*;

const VALIDATOR_KEY_PREFIX: &str = "ed25519_";
const VALIDATOR_PUBKEY_LENGTH: usize = 32;
const VALIDATOR_KEY_ERROR: &str =
    "Got validators object key of unexpected format. Must be 'ed25519_<pubkey_hex>'";

/// Build the `ed25519_<pubkey_hex>` key of a validator
pub fn validator_key(pubkey: &[u8]) -> String {
    format!("{}{}", VALIDATOR_KEY_PREFIX, hex::encode(pubkey))
}

/// Extract the ed25519 pubkey from a validator key
///
/// Only the exact form [`validator_key`] produces is accepted: the prefix
/// followed by 64 lowercase hex digits.
pub fn parse_validator_key(key: &str) -> Result<Vec<u8>, WasmBnsError> {
    let invalid = || WasmBnsError::ProtocolInvariantViolation(VALIDATOR_KEY_ERROR.to_string());

    let hex_part = key.strip_prefix(VALIDATOR_KEY_PREFIX).ok_or_else(invalid)?;
    let well_formed = hex_part.len() == VALIDATOR_PUBKEY_LENGTH * 2
        && hex_part
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
    if !well_formed {
        return Err(invalid());
    }
    hex::decode(hex_part).map_err(|_| invalid())
}

fn check_fraction(fraction: &Fraction) -> Result<(), WasmBnsError> {
    if fraction.denominator == 0 {
        return Err(WasmBnsError::ProtocolInvariantViolation(
            "Denominator must not be 0".to_string(),
        ));
    }
    Ok(())
}

fn encode_fraction(fraction: &Option<Fraction>) -> Result<Option<gov::Fraction>, WasmBnsError> {
    fraction
        .as_ref()
        .map(|f| {
            check_fraction(f)?;
            Ok(gov::Fraction {
                numerator: f.numerator,
                denominator: f.denominator,
            })
        })
        .transpose()
}

fn decode_fraction(fraction: &Option<gov::Fraction>) -> Result<Option<Fraction>, WasmBnsError> {
    fraction
        .as_ref()
        .map(|f| {
            let decoded = Fraction {
                numerator: f.numerator,
                denominator: f.denominator,
            };
            check_fraction(&decoded)?;
            Ok(decoded)
        })
        .transpose()
}

fn optional_amount(amount: &Option<Amount>) -> Result<Option<crate::proto::coin::Coin>, WasmBnsError> {
    amount.as_ref().map(encode_amount).transpose()
}

fn encode_send_action(
    prefix: Bech32Prefix,
    send: &SendAction,
) -> Result<cash::SendMsg, WasmBnsError> {
    Ok(cash::SendMsg {
        metadata: metadata(),
        source: decode_address_for_prefix(prefix, &send.sender)?,
        destination: decode_address_for_prefix(prefix, &send.recipient)?,
        amount: Some(encode_amount(&send.amount)?),
        memo: encode_memo(send.memo.as_deref())?,
        r#ref: Vec::new(),
    })
}

fn decode_send_action(prefix: Bech32Prefix, msg: &cash::SendMsg) -> Result<SendAction, WasmBnsError> {
    Ok(SendAction {
        sender: encode_address_field(prefix, "source", &msg.source)?,
        recipient: encode_address_field(prefix, "destination", &msg.destination)?,
        amount: decode_amount_field("amount", msg.amount.as_ref())?,
        memo: Some(msg.memo.clone()).filter(|memo| !memo.is_empty()),
    })
}

fn encode_batch(
    prefix: Bech32Prefix,
    messages: &[ProposalAction],
) -> Result<ExecuteProposalBatchMsg, WasmBnsError> {
    let messages = messages
        .iter()
        .map(|message| match message {
            ProposalAction::Send(send) => Ok(Union {
                sum: Some(union::Sum::SendMsg(encode_send_action(prefix, send)?)),
            }),
            _ => Err(WasmBnsError::UnsupportedKind(
                "Only send actions are currently supported in proposal batch".to_string(),
            )),
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ExecuteProposalBatchMsg { messages })
}

fn decode_batch(
    prefix: Bech32Prefix,
    batch: &ExecuteProposalBatchMsg,
) -> Result<Vec<ProposalAction>, WasmBnsError> {
    batch
        .messages
        .iter()
        .map(|message| match &message.sum {
            Some(union::Sum::SendMsg(send)) => {
                Ok(ProposalAction::Send(decode_send_action(prefix, send)?))
            }
            _ => Err(WasmBnsError::UnsupportedKind(
                "Only send actions are currently supported in proposal batch".to_string(),
            )),
        })
        .collect()
}

fn encode_validators(updates: &Validators) -> Result<Vec<weave::ValidatorUpdate>, WasmBnsError> {
    updates
        .iter()
        .map(|(key, properties)| {
            Ok(weave::ValidatorUpdate {
                pub_key: Some(weave::PubKey {
                    r#type: "ed25519".to_string(),
                    data: parse_validator_key(key)?,
                }),
                power: properties.power,
            })
        })
        .collect()
}

fn decode_validators(updates: &[weave::ValidatorUpdate]) -> Result<Validators, WasmBnsError> {
    updates
        .iter()
        .map(|update| {
            let pub_key = update
                .pub_key
                .as_ref()
                .filter(|pub_key| !pub_key.data.is_empty())
                .ok_or_else(|| WasmBnsError::missing("pubKey"))?;
            Ok((
                validator_key(&pub_key.data),
                ValidatorProperties {
                    power: update.power,
                },
            ))
        })
        .collect()
}

fn encode_electors(
    prefix: Bech32Prefix,
    electors: &Electors,
) -> Result<Vec<gov::Elector>, WasmBnsError> {
    electors
        .iter()
        .map(|(address, properties)| {
            Ok(gov::Elector {
                address: decode_address_for_prefix(prefix, address)?,
                weight: properties.weight,
            })
        })
        .collect()
}

fn decode_electors(prefix: Bech32Prefix, electors: &[gov::Elector]) -> Result<Electors, WasmBnsError> {
    electors
        .iter()
        .map(|elector| {
            Ok((
                encode_address_field(prefix, "address", &elector.address)?,
                ElectorProperties {
                    weight: elector.weight,
                },
            ))
        })
        .collect()
}

fn build_option(prefix: Bech32Prefix, action: &ProposalAction) -> Result<ProposalOption, WasmBnsError> {
    let option = match action {
        ProposalAction::CreateTextResolution { resolution } => {
            ProposalOption::GovCreateTextResolutionMsg(gov::CreateTextResolutionMsg {
                metadata: metadata(),
                resolution: resolution.clone(),
            })
        }
        ProposalAction::ExecuteProposalBatch { messages } => {
            ProposalOption::ExecuteProposalBatchMsg(encode_batch(prefix, messages)?)
        }
        ProposalAction::ReleaseEscrow { escrow_id, amount } => {
            ProposalOption::EscrowReleaseMsg(escrow::ReleaseMsg {
                metadata: metadata(),
                escrow_id: encode_numeric_id(*escrow_id).to_vec(),
                amount: vec![encode_amount(amount)?],
            })
        }
        ProposalAction::Send(send) => ProposalOption::CashSendMsg(encode_send_action(prefix, send)?),
        ProposalAction::SetValidators { validator_updates } => {
            ProposalOption::ValidatorsApplyDiffMsg(validators::ApplyDiffMsg {
                metadata: metadata(),
                validator_updates: encode_validators(validator_updates)?,
            })
        }
        ProposalAction::UpdateElectionRule {
            election_rule_id,
            threshold,
            quorum,
            voting_period,
        } => ProposalOption::GovUpdateElectionRuleMsg(gov::UpdateElectionRuleMsg {
            metadata: metadata(),
            election_rule_id: encode_numeric_id(*election_rule_id).to_vec(),
            voting_period: *voting_period,
            threshold: encode_fraction(threshold)?,
            quorum: encode_fraction(quorum)?,
        }),
        ProposalAction::UpdateElectorate {
            electorate_id,
            diff_electors,
        } => ProposalOption::GovUpdateElectorateMsg(gov::UpdateElectorateMsg {
            metadata: metadata(),
            electorate_id: encode_numeric_id(*electorate_id).to_vec(),
            diff_electors: encode_electors(prefix, diff_electors)?,
        }),
        ProposalAction::SetMsgFee { msg_path, fee } => {
            ProposalOption::MsgfeeSetMsgFeeMsg(msgfee::SetMsgFeeMsg {
                metadata: metadata(),
                msg_path: msg_path.clone(),
                fee: Some(encode_amount(fee)?),
            })
        }
        ProposalAction::ExecuteMigration { id } => {
            if id.is_empty() {
                return Err(WasmBnsError::missing("migrationId"));
            }
            ProposalOption::DatamigrationExecuteMigrationMsg(datamigration::ExecuteMigrationMsg {
                metadata: metadata(),
                migration_id: id.clone(),
            })
        }
        ProposalAction::UpgradeSchema { pkg, to_version } => {
            ProposalOption::MigrationUpgradeSchemaMsg(migration::UpgradeSchemaMsg {
                metadata: metadata(),
                pkg: pkg.clone(),
                to_version: *to_version,
            })
        }
        ProposalAction::SetCashConfiguration(config) => {
            ProposalOption::CashUpdateConfigurationMsg(cash::UpdateConfigurationMsg {
                metadata: metadata(),
                patch: Some(cash::Configuration {
                    metadata: metadata(),
                    owner: decode_address_for_prefix(prefix, &config.owner)?,
                    collector_address: decode_address_for_prefix(
                        prefix,
                        &config.collector_address,
                    )?,
                    minimal_fee: optional_amount(&config.minimal_fee)?,
                }),
            })
        }
        ProposalAction::SetTxFeeConfiguration(config) => {
            ProposalOption::TxfeeUpdateConfigurationMsg(txfee::UpdateConfigurationMsg {
                metadata: metadata(),
                patch: Some(txfee::Configuration {
                    metadata: metadata(),
                    owner: decode_address_for_prefix(prefix, &config.owner)?,
                    free_bytes: config.free_bytes,
                    base_fee: optional_amount(&config.base_fee)?,
                }),
            })
        }
        ProposalAction::SetUsernameConfiguration(config) => {
            ProposalOption::UsernameUpdateConfigurationMsg(username::UpdateConfigurationMsg {
                metadata: metadata(),
                patch: Some(username::Configuration {
                    metadata: metadata(),
                    owner: decode_address_for_prefix(prefix, &config.owner)?,
                    valid_username_name: config.valid_username_name.clone(),
                    valid_username_label: config.valid_username_label.clone(),
                }),
            })
        }
        ProposalAction::SetAccountConfiguration(config) => {
            ProposalOption::AccountUpdateConfigurationMsg(account::UpdateConfigurationMsg {
                metadata: metadata(),
                patch: Some(encode_account_configuration(prefix, config)?),
            })
        }
        ProposalAction::SetMsgFeeConfiguration(config) => {
            ProposalOption::MsgfeeUpdateConfigurationMsg(msgfee::UpdateConfigurationMsg {
                metadata: metadata(),
                patch: Some(msgfee::Configuration {
                    metadata: metadata(),
                    owner: decode_address_for_prefix(prefix, &config.owner)?,
                    fee_admin: decode_address_for_prefix(prefix, &config.fee_admin)?,
                }),
            })
        }
    };

    Ok(option)
}

/// Serialize a proposal action into standalone `ProposalOptions` bytes
///
/// # Arguments
/// * `prefix` - Address prefix of the chain the proposal is created on
/// * `action` - Action executed when the proposal passes
pub fn encode_proposal_action(
    prefix: Bech32Prefix,
    action: &ProposalAction,
) -> Result<Vec<u8>, WasmBnsError> {
    debug!(kind = action.kind(), "encoding proposal action");
    let options = ProposalOptions {
        option: Some(build_option(prefix, action)?),
    };
    Ok(options.encode_to_vec())
}

fn required_patch<T>(patch: &Option<T>) -> Result<&T, WasmBnsError> {
    patch.as_ref().ok_or_else(|| WasmBnsError::missing("patch"))
}

/// Decode the raw option bytes of a proposal into its action
pub fn decode_raw_proposal_option(
    prefix: Bech32Prefix,
    raw_option: &[u8],
) -> Result<ProposalAction, WasmBnsError> {
    let options = ProposalOptions::decode(raw_option)?;
    let option = options.option.ok_or_else(|| {
        WasmBnsError::UnsupportedKind("Unsupported ProposalOptions".to_string())
    })?;

    let action = match option {
        ProposalOption::GovCreateTextResolutionMsg(msg) => ProposalAction::CreateTextResolution {
            resolution: msg.resolution,
        },
        ProposalOption::ExecuteProposalBatchMsg(batch) => ProposalAction::ExecuteProposalBatch {
            messages: decode_batch(prefix, &batch)?,
        },
        ProposalOption::EscrowReleaseMsg(msg) => {
            let amount = msg
                .amount
                .first()
                .ok_or_else(|| WasmBnsError::missing("amount.0"))?;
            ProposalAction::ReleaseEscrow {
                escrow_id: decode_numeric_id_field("escrowId", &msg.escrow_id)?,
                amount: decode_amount(amount)?,
            }
        }
        ProposalOption::CashSendMsg(msg) => ProposalAction::Send(decode_send_action(prefix, &msg)?),
        ProposalOption::ValidatorsApplyDiffMsg(msg) => ProposalAction::SetValidators {
            validator_updates: decode_validators(&msg.validator_updates)?,
        },
        ProposalOption::GovUpdateElectionRuleMsg(msg) => ProposalAction::UpdateElectionRule {
            election_rule_id: decode_numeric_id_field("electionRuleId", &msg.election_rule_id)?,
            threshold: decode_fraction(&msg.threshold)?,
            quorum: decode_fraction(&msg.quorum)?,
            voting_period: msg.voting_period,
        },
        ProposalOption::GovUpdateElectorateMsg(msg) => ProposalAction::UpdateElectorate {
            electorate_id: decode_numeric_id_field("electorateId", &msg.electorate_id)?,
            diff_electors: decode_electors(prefix, &msg.diff_electors)?,
        },
        ProposalOption::MsgfeeSetMsgFeeMsg(msg) => ProposalAction::SetMsgFee {
            fee: decode_amount_field("fee", msg.fee.as_ref())?,
            msg_path: msg.msg_path,
        },
        ProposalOption::DatamigrationExecuteMigrationMsg(msg) => {
            if msg.migration_id.is_empty() {
                return Err(WasmBnsError::missing("migrationId"));
            }
            ProposalAction::ExecuteMigration {
                id: msg.migration_id,
            }
        }
        ProposalOption::MigrationUpgradeSchemaMsg(msg) => ProposalAction::UpgradeSchema {
            pkg: msg.pkg,
            to_version: msg.to_version,
        },
        ProposalOption::CashUpdateConfigurationMsg(msg) => {
            let patch = required_patch(&msg.patch)?;
            ProposalAction::SetCashConfiguration(CashConfiguration {
                owner: encode_address_field(prefix, "owner", &patch.owner)?,
                collector_address: encode_address_field(
                    prefix,
                    "collectorAddress",
                    &patch.collector_address,
                )?,
                minimal_fee: patch.minimal_fee.as_ref().map(decode_amount).transpose()?,
            })
        }
        ProposalOption::TxfeeUpdateConfigurationMsg(msg) => {
            let patch = required_patch(&msg.patch)?;
            ProposalAction::SetTxFeeConfiguration(TxFeeConfiguration {
                owner: encode_address_field(prefix, "owner", &patch.owner)?,
                free_bytes: patch.free_bytes,
                base_fee: patch.base_fee.as_ref().map(decode_amount).transpose()?,
            })
        }
        ProposalOption::UsernameUpdateConfigurationMsg(msg) => {
            let patch = required_patch(&msg.patch)?;
            ProposalAction::SetUsernameConfiguration(UsernameConfiguration {
                owner: encode_address_field(prefix, "owner", &patch.owner)?,
                valid_username_name: patch.valid_username_name.clone(),
                valid_username_label: patch.valid_username_label.clone(),
            })
        }
        ProposalOption::AccountUpdateConfigurationMsg(msg) => {
            let patch = required_patch(&msg.patch)?;
            ProposalAction::SetAccountConfiguration(decode_account_configuration(prefix, patch)?)
        }
        ProposalOption::MsgfeeUpdateConfigurationMsg(msg) => {
            let patch = required_patch(&msg.patch)?;
            ProposalAction::SetMsgFeeConfiguration(MsgFeeConfiguration {
                owner: encode_address_field(prefix, "owner", &patch.owner)?,
                fee_admin: encode_address_field(prefix, "feeAdmin", &patch.fee_admin)?,
            })
        }
    };

    debug!(kind = action.kind(), "decoded proposal action");
    Ok(action)
}

pub(crate) fn decode_account_configuration(
    prefix: Bech32Prefix,
    configuration: &account::Configuration,
) -> Result<AccountConfiguration, WasmBnsError> {
    Ok(AccountConfiguration {
        owner: encode_address_field(prefix, "owner", &configuration.owner)?,
        valid_domain: configuration.valid_domain.clone(),
        valid_name: configuration.valid_name.clone(),
        valid_blockchain_id: configuration.valid_blockchain_id.clone(),
        valid_blockchain_address: configuration.valid_blockchain_address.clone(),
        domain_renew: configuration.domain_renew,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ALICE: &str = "tiov1dcg3fat5zrvw00xezzjk3jgedm7pg70y222af3";
    const BOB: &str = "tiov1k898u78hgs36uqw68dg7va5nfkgstu5z0fhz3f";
    const VALIDATOR: &str = "ed25519_0902bb5de30ccb15bd2b2e4c5d8c6b7d4a3d0e0f1f2f3f4f5f6f7f8f9fafbfcf";

    fn round_trip(action: &ProposalAction) -> ProposalAction {
        let bytes = encode_proposal_action(Bech32Prefix::Tiov, action).unwrap();
        decode_raw_proposal_option(Bech32Prefix::Tiov, &bytes).unwrap()
    }

    fn send(memo: Option<&str>) -> ProposalAction {
        ProposalAction::Send(SendAction {
            sender: ALICE.to_string(),
            recipient: BOB.to_string(),
            amount: Amount::new("5000000000", "CASH"),
            memo: memo.map(str::to_string),
        })
    }

    #[test]
    fn test_validator_key_pair() {
        let pubkey = parse_validator_key(VALIDATOR).unwrap();
        assert_eq!(pubkey.len(), 32);
        assert_eq!(validator_key(&pubkey), VALIDATOR);
    }

    #[rstest]
    #[case("0902bb5de30ccb15bd2b2e4c5d8c6b7d4a3d0e0f1f2f3f4f5f6f7f8f9fafbfcf")]
    #[case("ed25519_0902bb")]
    #[case("secp256k1_0902bb5de30ccb15bd2b2e4c5d8c6b7d4a3d0e0f1f2f3f4f5f6f7f8f9fafbfcf")]
    #[case("ed25519_0902BB5DE30CCB15BD2B2E4C5D8C6B7D4A3D0E0F1F2F3F4F5F6F7F8F9FAFBFCF")]
    #[case("ed25519_zz02bb5de30ccb15bd2b2e4c5d8c6b7d4a3d0e0f1f2f3f4f5f6f7f8f9fafbfcf")]
    fn test_bad_validator_key(#[case] key: &str) {
        let err = parse_validator_key(key).unwrap_err();
        assert!(err
            .to_string()
            .contains("Got validators object key of unexpected format"));
    }

    #[test]
    fn test_text_resolution_round_trip() {
        let action = ProposalAction::CreateTextResolution {
            resolution: "The winner is Alice".to_string(),
        };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_set_validators_round_trip() {
        let mut validator_updates = Validators::new();
        validator_updates.insert(VALIDATOR.to_string(), ValidatorProperties { power: 5 });
        validator_updates.insert(validator_key(&[0x11; 32]), ValidatorProperties { power: 0 });
        let action = ProposalAction::SetValidators { validator_updates };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_update_electorate_round_trip() {
        let mut diff_electors = Electors::new();
        diff_electors.insert(ALICE.to_string(), ElectorProperties { weight: 8 });
        diff_electors.insert(BOB.to_string(), ElectorProperties { weight: 0 });
        let action = ProposalAction::UpdateElectorate {
            electorate_id: 5,
            diff_electors,
        };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_update_election_rule_round_trip() {
        let action = ProposalAction::UpdateElectionRule {
            election_rule_id: 2,
            threshold: Some(Fraction {
                numerator: 2,
                denominator: 3,
            }),
            quorum: None,
            voting_period: 3600,
        };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_zero_denominator_rejected() {
        let action = ProposalAction::UpdateElectionRule {
            election_rule_id: 2,
            threshold: None,
            quorum: Some(Fraction {
                numerator: 1,
                denominator: 0,
            }),
            voting_period: 3600,
        };
        let err = encode_proposal_action(Bech32Prefix::Tiov, &action).unwrap_err();
        assert_eq!(
            err,
            WasmBnsError::ProtocolInvariantViolation("Denominator must not be 0".to_string())
        );

        let raw = ProposalOptions {
            option: Some(ProposalOption::GovUpdateElectionRuleMsg(
                gov::UpdateElectionRuleMsg {
                    metadata: metadata(),
                    election_rule_id: encode_numeric_id(2).to_vec(),
                    voting_period: 10,
                    threshold: Some(gov::Fraction {
                        numerator: 1,
                        denominator: 0,
                    }),
                    quorum: None,
                },
            )),
        }
        .encode_to_vec();
        assert!(decode_raw_proposal_option(Bech32Prefix::Tiov, &raw).is_err());
    }

    #[test]
    fn test_batch_round_trip() {
        let action = ProposalAction::ExecuteProposalBatch {
            messages: vec![send(Some("first")), send(None)],
        };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_batch_only_accepts_sends() {
        let action = ProposalAction::ExecuteProposalBatch {
            messages: vec![ProposalAction::CreateTextResolution {
                resolution: "nested".to_string(),
            }],
        };
        let err = encode_proposal_action(Bech32Prefix::Tiov, &action).unwrap_err();
        assert!(matches!(err, WasmBnsError::UnsupportedKind(_)));
    }

    #[test]
    fn test_release_escrow_single_amount() {
        let action = ProposalAction::ReleaseEscrow {
            escrow_id: 4,
            amount: Amount::new("1000000001", "CASH"),
        };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_migration_id_required() {
        let err = encode_proposal_action(
            Bech32Prefix::Tiov,
            &ProposalAction::ExecuteMigration { id: String::new() },
        )
        .unwrap_err();
        assert_eq!(err, WasmBnsError::missing("migrationId"));

        let action = ProposalAction::ExecuteMigration {
            id: "fix-2020-03".to_string(),
        };
        assert_eq!(round_trip(&action), action);
    }

    #[test]
    fn test_configuration_round_trips() {
        let actions = vec![
            ProposalAction::SetCashConfiguration(CashConfiguration {
                owner: ALICE.to_string(),
                collector_address: BOB.to_string(),
                minimal_fee: Some(Amount::new("10000000", "CASH")),
            }),
            ProposalAction::SetTxFeeConfiguration(TxFeeConfiguration {
                owner: ALICE.to_string(),
                free_bytes: 1024,
                base_fee: None,
            }),
            ProposalAction::SetUsernameConfiguration(UsernameConfiguration {
                owner: ALICE.to_string(),
                valid_username_name: "^[a-z0-9]{4,16}$".to_string(),
                valid_username_label: "^iov$".to_string(),
            }),
            ProposalAction::SetAccountConfiguration(AccountConfiguration {
                owner: ALICE.to_string(),
                valid_domain: "^[a-z]{4,16}$".to_string(),
                valid_name: "^[a-z]{1,16}$".to_string(),
                valid_blockchain_id: "^[a-z-]{4,32}$".to_string(),
                valid_blockchain_address: "^[a-z0-9]{4,64}$".to_string(),
                domain_renew: 86400,
            }),
            ProposalAction::SetMsgFeeConfiguration(MsgFeeConfiguration {
                owner: ALICE.to_string(),
                fee_admin: BOB.to_string(),
            }),
            ProposalAction::SetMsgFee {
                msg_path: "username/register_token".to_string(),
                fee: Amount::new("10000000000", "CASH"),
            },
            ProposalAction::UpgradeSchema {
                pkg: "username".to_string(),
                to_version: 2,
            },
        ];
        for action in actions {
            assert_eq!(round_trip(&action), action, "kind {}", action.kind());
        }
    }

    #[test]
    fn test_empty_option_unsupported() {
        let err = decode_raw_proposal_option(Bech32Prefix::Tiov, &[]).unwrap_err();
        assert!(matches!(err, WasmBnsError::UnsupportedKind(_)));
    }

    #[test]
    fn test_prefix_of_other_chain_rejected() {
        let err = encode_proposal_action(Bech32Prefix::Iov, &send(None)).unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAddress(_)));
    }
}
