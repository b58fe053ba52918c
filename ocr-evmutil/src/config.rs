use crate::config_digest::ConfigDigest;
use ethers_core::{
    types::{Address, Bytes},
    utils::to_checksum,
};
use ocr_contracts::ocr2::{ocr2_base, ocr2_title_request};
use serde::{Deserialize, Serialize};

/// The key an oracle signs reports with, on EVM chains its 20 byte address
pub type OnchainPublicKey = Bytes;

/// An account reports are transmitted from, on EVM chains an EIP-55 hex address
pub type Account = String;

/// A configuration as set on the contract with `setConfig`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractConfig {
    pub config_digest: ConfigDigest,
    pub config_count: u64,
    pub signers: Vec<OnchainPublicKey>,
    pub transmitters: Vec<Account>,
    pub f: u8,
    pub onchain_config: Bytes,
    pub offchain_config_version: u64,
    pub offchain_config: Bytes,
}

impl ContractConfig {
    /// The signers as addresses, `None` if one of them is not 20 bytes long
    pub fn signer_addresses(&self) -> Option<Vec<Address>> {
        self.signers
            .iter()
            .map(|signer| (signer.len() == Address::len_bytes()).then(|| Address::from_slice(signer)))
            .collect()
    }
}

macro_rules! impl_from_config_set {
    ($($event:ty),+) => {
        $(
            impl From<$event> for ContractConfig {
                fn from(event: $event) -> Self {
                    Self {
                        config_digest: event.config_digest.into(),
                        config_count: event.config_count,
                        signers: event
                            .signers
                            .iter()
                            .map(|signer| Bytes::from(signer.as_bytes().to_vec()))
                            .collect(),
                        transmitters: event
                            .transmitters
                            .iter()
                            .map(|transmitter| to_checksum(transmitter, None))
                            .collect(),
                        f: event.f,
                        onchain_config: event.onchain_config,
                        offchain_config_version: event.encoded_config_version,
                        offchain_config: event.encoded,
                    }
                }
            }
        )+
    };
}

impl_from_config_set!(ocr2_base::ConfigSetFilter, ocr2_title_request::ConfigSetFilter);
