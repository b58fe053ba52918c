#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
//! EVM specific pieces of off-chain reporting built on the contract bindings
//! of [`ocr_contracts`].
//!
//! - [`EvmOffchainConfigDigester`] computes config digests exactly like
//!   `OCR2Base.setConfig`.
//! - [`raw_report_context`] and [`split_signature`] produce the arguments of
//!   `transmit`, [`ContractTransmitter`] sends it.
//! - [`ContractConfigTracker`] reads the current config from the chain.

mod config;
pub use config::{Account, ContractConfig, OnchainPublicKey};

mod config_digest;
pub use config_digest::{
    ConfigDigest, ConfigDigestPrefix, DigestError, EvmOffchainConfigDigester,
    OffchainConfigDigester,
};

mod keyring;
pub use keyring::{report_signing_hash, EvmOnchainKeyring, KeyringError};

mod report;
pub use report::{
    raw_report_context, split_signature, AttributedOnchainSignature, OracleId, Report,
    ReportContext, ReportTimestamp, SignatureError, SIGNATURE_LENGTH,
};

mod tracker;
pub use tracker::{ContractConfigTracker, TrackerError};

mod transmitter;
pub use transmitter::{ContractTransmitter, TransmitterError, MAX_SIGNATURES, TRANSMIT_GAS_LIMIT};
