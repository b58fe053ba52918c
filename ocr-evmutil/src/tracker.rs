use crate::{config::ContractConfig, config_digest::ConfigDigest};
use ethers_contract::ContractError;
use ethers_core::types::Address;
use ethers_providers::Middleware;
use ocr_contracts::{
    ocr2::ocr2_base::{ConfigSetFilter, OCR2Base},
    EventError, EventIterator,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Error, Debug)]
pub enum TrackerError<M: Middleware> {
    #[error(transparent)]
    Contract(#[from] ContractError<M>),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("found no config in block {0}")]
    NoConfigFound(u64),
}

/// Tracks the configuration of an `OCR2Base` contract.
///
/// Configs are only ever looked up on demand, there is no change notification.
#[derive(Debug)]
pub struct ContractConfigTracker<M> {
    contract: OCR2Base<M>,
    client: Arc<M>,
}

impl<M> Clone for ContractConfigTracker<M> {
    fn clone(&self) -> Self {
        Self { contract: self.contract.clone(), client: self.client.clone() }
    }
}

impl<M: Middleware> ContractConfigTracker<M> {
    pub fn new(address: Address, client: Arc<M>) -> Self {
        Self { contract: OCR2Base::new(address, client.clone()), client }
    }

    pub fn contract(&self) -> &OCR2Base<M> {
        &self.contract
    }

    /// The block the current config was set in, and its digest. Both are zero
    /// if the contract was never configured.
    #[instrument(skip(self), fields(contract = ?self.contract.address()))]
    pub async fn latest_config_details(&self) -> Result<(u64, ConfigDigest), TrackerError<M>> {
        let (config_count, block_number, digest) =
            self.contract.latest_config_details().call().await?;
        debug!(config_count, block_number, "latest config details");
        Ok((block_number.into(), ConfigDigest::from(digest)))
    }

    /// The config set in `changed_in_block`. If the block contains several
    /// `ConfigSet` events the last one wins.
    #[instrument(skip(self), fields(contract = ?self.contract.address()))]
    pub async fn latest_config(
        &self,
        changed_in_block: u64,
    ) -> Result<ContractConfig, TrackerError<M>> {
        let filter = self
            .contract
            .config_set_filter()
            .from_block(changed_in_block)
            .to_block(changed_in_block)
            .filter;
        let events = EventIterator::<ConfigSetFilter>::query(self.client.as_ref(), &filter)
            .await
            .map_err(ContractError::from_middleware_error)?;

        let (event, meta) =
            events.last_event()?.ok_or(TrackerError::NoConfigFound(changed_in_block))?;
        debug!(config_count = event.config_count, tx = ?meta.transaction_hash, "found config");
        Ok(event.into())
    }

    /// The number of the most recent block
    pub async fn latest_block_height(&self) -> Result<u64, TrackerError<M>> {
        let number = self
            .client
            .get_block_number()
            .await
            .map_err(ContractError::from_middleware_error)?;
        Ok(number.as_u64())
    }
}
