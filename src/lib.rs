#![warn(missing_debug_implementations, rust_2018_idioms, unreachable_pub)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! # ocr-bindings
//!
//! Rust bindings to the off-chain reporting (OCR) contracts and the EVM
//! plumbing an oracle needs around them.
//!
//! A prelude is provided which imports the most used types:
//!
//! ```no_run
//! use ocr_bindings::prelude::*;
//! use ethers_providers::{Http, Provider};
//! use std::sync::Arc;
//!
//! # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(Provider::<Http>::try_from("http://localhost:8545")?);
//! let address = "0x5FbDB2315678afecb367f032d93F642f64180aa3".parse()?;
//!
//! let tracker = ContractConfigTracker::new(address, client);
//! let (block, digest) = tracker.latest_config_details().await?;
//! let config = tracker.latest_config(block).await?;
//! assert_eq!(config.config_digest, digest);
//! # Ok(())
//! # }
//! ```

/// # Contract bindings
///
/// `abigen` generated bindings of every OCR contract, grouped by protocol
/// generation, together with the embedded ABI and bytecode artifacts.
pub mod contracts {
    pub use ocr_contracts::*;
}

/// # EVM utilities
///
/// Config digests, report contexts and signatures, and the config tracker and
/// transmitter working against a deployed `OCR2Base` contract.
pub mod evmutil {
    pub use ocr_evmutil::*;
}

/// Easy imports of frequently used type definitions and traits
pub mod prelude {
    pub use ocr_contracts::{
        artifact, deploy_artifact, ocr2::ocr2_base::OCR2Base, Artifact, BoundContract,
        EventIterator, Generation,
    };
    pub use ocr_evmutil::{
        ConfigDigest, ContractConfig, ContractConfigTracker, ContractTransmitter,
        EvmOffchainConfigDigester, EvmOnchainKeyring, OffchainConfigDigester, ReportContext,
    };
}
