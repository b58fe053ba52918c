//! Reports as they are submitted to the contract.

use crate::config_digest::ConfigDigest;
use ethers_core::types::Bytes;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Index of an oracle in the signers/transmitters lists of a config
pub type OracleId = u8;

/// An opaque report, encoded by the reporting plugin
pub type Report = Bytes;

/// Length of an `r || s || v` secp256k1 signature
pub const SIGNATURE_LENGTH: usize = 65;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureError {
    #[error("signature has length {0}, expected {SIGNATURE_LENGTH}")]
    InvalidLength(usize),
}

/// Identifies the protocol round a report was produced in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportTimestamp {
    pub config_digest: ConfigDigest,
    pub epoch: u32,
    pub round: u8,
}

/// Context a report is signed and transmitted with
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    #[serde(flatten)]
    pub timestamp: ReportTimestamp,
    /// Hash over data exchanged during the round that is not sent on-chain but
    /// still covered by the signatures
    pub extra_hash: [u8; 32],
}

impl ReportContext {
    pub fn new(config_digest: ConfigDigest, epoch: u32, round: u8, extra_hash: [u8; 32]) -> Self {
        Self { timestamp: ReportTimestamp { config_digest, epoch, round }, extra_hash }
    }
}

/// A signature over a report together with the oracle that produced it
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributedOnchainSignature {
    pub signature: Bytes,
    pub signer: OracleId,
}

/// The `reportContext` argument of `transmit`.
///
/// ```text
/// [0] config digest
/// [1] 27 zero bytes | epoch (4 bytes, big-endian) | round (1 byte)
/// [2] extra hash
/// ```
pub fn raw_report_context(context: &ReportContext) -> [[u8; 32]; 3] {
    let mut epoch_and_round = [0u8; 32];
    epoch_and_round[27..31].copy_from_slice(&context.timestamp.epoch.to_be_bytes());
    epoch_and_round[31] = context.timestamp.round;
    [context.timestamp.config_digest.0, epoch_and_round, context.extra_hash]
}

/// Splits a 65 byte signature into `(r, s, v)`
pub fn split_signature(signature: &[u8]) -> Result<([u8; 32], [u8; 32], u8), SignatureError> {
    if signature.len() != SIGNATURE_LENGTH {
        return Err(SignatureError::InvalidLength(signature.len()))
    }
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&signature[..32]);
    s.copy_from_slice(&signature[32..64]);
    Ok((r, s, signature[64]))
}
