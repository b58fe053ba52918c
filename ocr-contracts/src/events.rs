//! Iteration over past contract logs.
//!
//! [`EventIterator`] decodes the logs returned by a single `eth_getLogs`
//! query into the typed event structs generated by `abigen!`. For streaming
//! access to future logs use `Event::stream` / `Event::subscribe` on the
//! generated filter builders instead.

use ethers_contract::{EthLogDecode, LogMeta};
use ethers_core::{
    abi::RawLog,
    types::{Filter, Log},
};
use ethers_providers::Middleware;
use std::{collections::VecDeque, marker::PhantomData};
use thiserror::Error;
use tracing::trace;

/// Error returned when a log cannot be decoded into the requested event type
#[derive(Error, Debug)]
#[error("failed to decode log {index} of transaction {tx_hash:?}: {source}")]
pub struct EventError {
    /// Position of the log within the query result
    pub index: usize,
    /// Hash of the transaction that emitted the log
    pub tx_hash: Option<ethers_core::types::TxHash>,
    #[source]
    pub source: ethers_core::abi::Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum IteratorState {
    Iterating,
    Exhausted,
    Failed,
}

/// Iterator over the logs matching a filter, decoded into `D`.
///
/// Yields the event together with its [`LogMeta`]. The first log that fails to
/// decode is yielded as an error, after which the iterator is fused. Logs
/// that are still pending (no block or transaction information yet) are
/// skipped.
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct EventIterator<D> {
    logs: VecDeque<Log>,
    position: usize,
    state: IteratorState,
    _event: PhantomData<D>,
}

impl<D> std::fmt::Debug for EventIterator<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventIterator")
            .field("buffered", &self.logs.len())
            .field("position", &self.position)
            .field("state", &self.state)
            .finish()
    }
}

impl<D: EthLogDecode> EventIterator<D> {
    /// Wraps already fetched logs
    pub fn new(logs: Vec<Log>) -> Self {
        Self { logs: logs.into(), position: 0, state: IteratorState::Iterating, _event: PhantomData }
    }

    /// Runs `eth_getLogs` with the given filter. Errors of the client are returned as is.
    ///
    /// The filter is typically taken from a generated event builder, e.g.
    /// `&contract.config_set_filter().from_block(0).filter`.
    pub async fn query<M: Middleware>(client: &M, filter: &Filter) -> Result<Self, M::Error> {
        let logs = client.get_logs(filter).await?;
        trace!(count = logs.len(), "fetched logs");
        Ok(Self::new(logs))
    }

    /// Number of logs that have not been consumed yet
    pub fn remaining(&self) -> usize {
        match self.state {
            IteratorState::Iterating => self.logs.len(),
            _ => 0,
        }
    }

    /// Whether a log failed to decode
    pub fn is_failed(&self) -> bool {
        self.state == IteratorState::Failed
    }

    /// Drops all buffered logs
    pub fn close(&mut self) {
        self.logs.clear();
        if self.state == IteratorState::Iterating {
            self.state = IteratorState::Exhausted;
        }
    }

    /// Consumes the iterator and returns the last event, as needed when only the
    /// most recent state change matters.
    pub fn last_event(self) -> Result<Option<(D, LogMeta)>, EventError> {
        let mut last = None;
        for item in self {
            last = Some(item?);
        }
        Ok(last)
    }
}

fn is_pending(log: &Log) -> bool {
    log.block_number.is_none() ||
        log.block_hash.is_none() ||
        log.transaction_hash.is_none() ||
        log.transaction_index.is_none() ||
        log.log_index.is_none()
}

impl<D: EthLogDecode> Iterator for EventIterator<D> {
    type Item = Result<(D, LogMeta), EventError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state != IteratorState::Iterating {
            return None
        }
        loop {
            let Some(log) = self.logs.pop_front() else {
                self.state = IteratorState::Exhausted;
                return None
            };
            let index = self.position;
            self.position += 1;

            if is_pending(&log) {
                trace!(index, "skipping pending log");
                continue
            }

            let raw = RawLog { topics: log.topics.clone(), data: log.data.to_vec() };
            return match D::decode_log(&raw) {
                Ok(event) => Some(Ok((event, LogMeta::from(&log)))),
                Err(source) => {
                    self.state = IteratorState::Failed;
                    self.logs.clear();
                    Some(Err(EventError { index, tx_hash: log.transaction_hash, source }))
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}

impl<D: EthLogDecode> std::iter::FusedIterator for EventIterator<D> {}
