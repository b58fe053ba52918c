use crate::{
    config::Account,
    config_digest::ConfigDigest,
    report::{
        raw_report_context, split_signature, AttributedOnchainSignature, OracleId, ReportContext,
        SignatureError,
    },
};
use ethers_contract::{ContractCall, ContractError};
use ethers_core::{
    types::{Address, Bytes, TxHash},
    utils::to_checksum,
};
use ethers_providers::Middleware;
use ocr_contracts::{
    ocr2::ocr2_base::{OCR2Base, TransmitedFilter},
    EventError, EventIterator,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, trace};

/// Gas limit of every `transmit` transaction
pub const TRANSMIT_GAS_LIMIT: u64 = 500_000;

/// `rawVs` packs one `v` byte per signature into a single word
pub const MAX_SIGNATURES: usize = 32;

#[derive(Error, Debug)]
pub enum TransmitterError<M: Middleware> {
    #[error(transparent)]
    Contract(#[from] ContractError<M>),

    #[error(transparent)]
    Event(#[from] EventError),

    #[error("invalid signature of oracle {signer}: {source}")]
    Signature {
        signer: OracleId,
        #[source]
        source: SignatureError,
    },

    #[error("{0} signatures do not fit into rawVs, at most {MAX_SIGNATURES} are allowed")]
    TooManySignatures(usize),
}

/// Submits reports to an `OCR2Base` contract from a fixed account.
#[derive(Debug)]
pub struct ContractTransmitter<M> {
    contract: OCR2Base<M>,
    client: Arc<M>,
    from: Address,
    legacy: bool,
}

impl<M: Middleware> ContractTransmitter<M> {
    pub fn new(address: Address, client: Arc<M>, from: Address) -> Self {
        Self { contract: OCR2Base::new(address, client.clone()), client, from, legacy: false }
    }

    /// Sends legacy transactions instead of EIP-1559 ones, for chains without a base fee
    #[must_use]
    pub fn legacy(mut self) -> Self {
        self.legacy = true;
        self
    }

    pub fn contract(&self) -> &OCR2Base<M> {
        &self.contract
    }

    /// Prepares the `transmit` call for `report`. Signatures are passed on in
    /// the given order.
    pub fn transmit_call(
        &self,
        context: &ReportContext,
        report: Bytes,
        signatures: &[AttributedOnchainSignature],
    ) -> Result<ContractCall<M, ()>, TransmitterError<M>> {
        if signatures.len() > MAX_SIGNATURES {
            return Err(TransmitterError::TooManySignatures(signatures.len()))
        }

        let mut rs = Vec::with_capacity(signatures.len());
        let mut ss = Vec::with_capacity(signatures.len());
        let mut raw_vs = [0u8; 32];
        for (i, attributed) in signatures.iter().enumerate() {
            let (r, s, v) = split_signature(&attributed.signature)
                .map_err(|source| TransmitterError::Signature { signer: attributed.signer, source })?;
            rs.push(r);
            ss.push(s);
            raw_vs[i] = v;
        }

        let call = self
            .contract
            .transmit(raw_report_context(context), report, rs, ss, raw_vs)
            .from(self.from)
            .gas(TRANSMIT_GAS_LIMIT);
        Ok(if self.legacy { call.legacy() } else { call })
    }

    /// Sends the `transmit` transaction and returns its hash without waiting
    /// for it to be mined.
    #[instrument(skip_all, fields(
        contract = ?self.contract.address(),
        epoch = context.timestamp.epoch,
        round = context.timestamp.round,
    ))]
    pub async fn transmit(
        &self,
        context: &ReportContext,
        report: Bytes,
        signatures: &[AttributedOnchainSignature],
    ) -> Result<TxHash, TransmitterError<M>> {
        let call = self.transmit_call(context, report, signatures)?;
        let tx_hash = call.send().await?.tx_hash();
        debug!(?tx_hash, signatures = signatures.len(), "transmitted report");
        Ok(tx_hash)
    }

    /// Digest and epoch of the most recent transmission, zero if nothing was
    /// transmitted yet. Scans all `Transmited` events of the contract.
    #[instrument(skip(self), fields(contract = ?self.contract.address()))]
    pub async fn latest_config_digest_and_epoch(
        &self,
    ) -> Result<(ConfigDigest, u32), TransmitterError<M>> {
        let filter = self.contract.transmited_filter().from_block(0u64).filter;
        let events = EventIterator::<TransmitedFilter>::query(self.client.as_ref(), &filter)
            .await
            .map_err(ContractError::from_middleware_error)?;
        trace!(events = events.remaining(), "scanning transmissions");

        Ok(events
            .last_event()?
            .map(|(event, _)| (ConfigDigest::from(event.config_digest), event.epoch))
            .unwrap_or_default())
    }

    /// The account reports are transmitted from, EIP-55 checksummed
    pub fn from_account(&self) -> Account {
        to_checksum(&self.from, None)
    }
}
