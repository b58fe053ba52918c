//! Config digests and the EVM digester.
//!
//! A [`ConfigDigest`] identifies one configuration of one protocol instance.
//! Its first two bytes are the big-endian [`ConfigDigestPrefix`] of the
//! digester that computed it; the remaining bytes are a hash over the
//! configuration and the contract it was set on.

use crate::config::ContractConfig;
use ethers_core::{
    abi::{encode, Token},
    types::{Address, H256, U256},
    utils::keccak256,
};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Errors returned when constructing or computing a [`ConfigDigest`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigestError {
    #[error("cannot convert bytes to ConfigDigest, bytes have wrong length {0}")]
    InvalidLength(usize),

    #[error("invalid config digest hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("signer {index} is not an address: expected 20 bytes, got {len}")]
    InvalidSigner { index: usize, len: usize },

    #[error("transmitter {index} is not a hex address: {account:?}")]
    InvalidTransmitter { index: usize, account: String },

    #[error("config digest mismatch: contract reported {reported}, computed {computed}")]
    Mismatch { reported: ConfigDigest, computed: ConfigDigest },
}

/// Domain separator between the ways a [`ConfigDigest`] can be computed,
/// typically one per target chain family.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDigestPrefix(pub u16);

impl ConfigDigestPrefix {
    pub const EVM: Self = Self(1);
    pub const TERRA: Self = Self(2);
    pub const SOLANA: Self = Self(3);

    /// `0` guards against zero defaults, `0xffff` is kept for future use
    pub const fn is_reserved(&self) -> bool {
        self.0 == 0 || self.0 == 0xffff
    }

    pub const fn to_be_bytes(self) -> [u8; 2] {
        self.0.to_be_bytes()
    }
}

impl fmt::Display for ConfigDigestPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06x}", self.0)
    }
}

/// Digest of the configuration of a protocol instance
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ConfigDigest(pub [u8; 32]);

impl ConfigDigest {
    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Lowercase hex without `0x` prefix
    pub fn hex(&self) -> String {
        hex::encode(self.0)
    }

    /// The first 16 bytes, the digest length used by OCR1
    pub fn truncate(&self) -> [u8; 16] {
        let mut truncated = [0u8; 16];
        truncated.copy_from_slice(&self.0[..16]);
        truncated
    }

    /// The prefix encoded in the first two bytes
    pub const fn prefix(&self) -> ConfigDigestPrefix {
        ConfigDigestPrefix(u16::from_be_bytes([self.0[0], self.0[1]]))
    }
}

impl fmt::Display for ConfigDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl fmt::Debug for ConfigDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ConfigDigest({})", self.hex())
    }
}

impl From<[u8; 32]> for ConfigDigest {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl From<ConfigDigest> for [u8; 32] {
    fn from(digest: ConfigDigest) -> Self {
        digest.0
    }
}

impl From<H256> for ConfigDigest {
    fn from(hash: H256) -> Self {
        Self(hash.0)
    }
}

impl From<ConfigDigest> for H256 {
    fn from(digest: ConfigDigest) -> Self {
        H256(digest.0)
    }
}

impl TryFrom<&[u8]> for ConfigDigest {
    type Error = DigestError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| DigestError::InvalidLength(bytes.len()))?;
        Ok(Self(bytes))
    }
}

impl FromStr for ConfigDigest {
    type Err = DigestError;

    /// Parses 64 hex characters, with or without `0x` prefix
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        Self::try_from(bytes.as_slice())
    }
}

impl AsRef<[u8]> for ConfigDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for ConfigDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex())
    }
}

impl<'de> Deserialize<'de> for ConfigDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(D::Error::custom)
    }
}

/// Computes config digests off-chain the same way the contract does on-chain.
///
/// This guards against a node that reports a digest which does not belong to
/// the config it returns.
pub trait OffchainConfigDigester: Send + Sync {
    /// The digest of `config`. Its first two bytes must be the big-endian
    /// [`OffchainConfigDigester::config_digest_prefix`].
    fn config_digest(&self, config: &ContractConfig) -> Result<ConfigDigest, DigestError>;

    /// Constant prefix of every digest this digester computes
    fn config_digest_prefix(&self) -> ConfigDigestPrefix;

    /// Recomputes the digest of `config` and compares it with the one it carries
    fn check_config_digest(&self, config: &ContractConfig) -> Result<(), DigestError> {
        let computed = self.config_digest(config)?;
        if computed != config.config_digest {
            return Err(DigestError::Mismatch { reported: config.config_digest, computed })
        }
        Ok(())
    }
}

/// The digester matching `OCR2Base.setConfig`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvmOffchainConfigDigester {
    pub chain_id: u64,
    pub contract_address: Address,
}

impl EvmOffchainConfigDigester {
    pub fn new(chain_id: u64, contract_address: Address) -> Self {
        Self { chain_id, contract_address }
    }
}

impl OffchainConfigDigester for EvmOffchainConfigDigester {
    fn config_digest(&self, config: &ContractConfig) -> Result<ConfigDigest, DigestError> {
        let signers = config
            .signers
            .iter()
            .enumerate()
            .map(|(index, signer)| {
                if signer.len() != Address::len_bytes() {
                    return Err(DigestError::InvalidSigner { index, len: signer.len() })
                }
                Ok(Token::Address(Address::from_slice(signer)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let transmitters = config
            .transmitters
            .iter()
            .enumerate()
            .map(|(index, account)| {
                account.parse::<Address>().map(Token::Address).map_err(|_| {
                    DigestError::InvalidTransmitter { index, account: account.clone() }
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let encoded = encode(&[
            Token::Uint(U256::from(self.chain_id)),
            Token::Address(self.contract_address),
            Token::Uint(U256::from(config.config_count)),
            Token::Array(signers),
            Token::Array(transmitters),
            Token::Uint(U256::from(config.f)),
            Token::Bytes(config.onchain_config.to_vec()),
            Token::Uint(U256::from(config.offchain_config_version)),
            Token::Bytes(config.offchain_config.to_vec()),
        ]);

        let mut digest = keccak256(encoded);
        digest[..2].copy_from_slice(&self.config_digest_prefix().to_be_bytes());
        Ok(ConfigDigest(digest))
    }

    fn config_digest_prefix(&self) -> ConfigDigestPrefix {
        ConfigDigestPrefix::EVM
    }
}
