#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(unsafe_code)]
#![allow(clippy::too_many_arguments)]
//! Type-safe bindings to the off-chain reporting (OCR) contracts.
//!
//! Every binding is generated by [`ethers_contract::abigen`] from the ABI in
//! `abi/<generation>/<Contract>.json`; the creation bytecode, where the
//! contract is deployable, lives in `bin/<generation>/<Contract>.bin`. Both are
//! the unmodified solc outputs and are embedded as [`Artifact`]s.
//!
//! ```no_run
//! use ethers_providers::{Http, Provider};
//! use ocr_contracts::ocr2::ocr2_base::OCR2Base;
//! use std::sync::Arc;
//!
//! # async fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Arc::new(Provider::<Http>::try_from("http://localhost:8545")?);
//! let aggregator = OCR2Base::new(ethers_core::types::Address::zero(), client);
//! let (config_count, block_number, digest) = aggregator.latest_config_details().call().await?;
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub use artifact::{artifact, artifacts, artifacts_of, Artifact, ArtifactError, Generation};

mod deploy;
pub use deploy::{deploy_artifact, BoundContract, DeployError};

pub mod events;
pub use events::{EventError, EventIterator};

pub mod ocr1;
pub mod ocr2;
pub mod ocr3;
