//! Signing reports with an oracle's on-chain key.

use crate::{
    config::OnchainPublicKey,
    report::{raw_report_context, ReportContext, SIGNATURE_LENGTH},
};
use ethers_core::{
    types::{Address, Bytes, Signature, H256, U256},
    utils::keccak256,
};
use ethers_signers::{LocalWallet, Signer, WalletError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KeyringError {
    #[error(transparent)]
    Wallet(#[from] WalletError),
}

/// The hash the contract recovers signers from:
/// `keccak256(keccak256(report) || reportContext[0] || reportContext[1] || reportContext[2])`
pub fn report_signing_hash(context: &ReportContext, report: &[u8]) -> H256 {
    let mut data = Vec::with_capacity(32 * 4);
    data.extend_from_slice(&keccak256(report));
    for word in raw_report_context(context) {
        data.extend_from_slice(&word);
    }
    H256(keccak256(data))
}

/// Signs reports for the contract with a secp256k1 key
#[derive(Debug)]
pub struct EvmOnchainKeyring {
    wallet: LocalWallet,
}

impl EvmOnchainKeyring {
    pub fn new(wallet: LocalWallet) -> Self {
        Self { wallet }
    }

    pub fn address(&self) -> Address {
        Signer::address(&self.wallet)
    }

    /// The signer's address as it appears in the `signers` of a config
    pub fn public_key(&self) -> OnchainPublicKey {
        self.address().as_bytes().to_vec().into()
    }

    pub fn max_signature_length(&self) -> usize {
        SIGNATURE_LENGTH
    }

    /// Signs `report` in `context`. The returned signature is `r || s || v` with
    /// `v` in `{0, 1}`; the contract adds 27 before calling `ecrecover`.
    pub fn sign(&self, context: &ReportContext, report: &[u8]) -> Result<Bytes, KeyringError> {
        let signature = self.wallet.sign_hash(report_signing_hash(context, report))?;
        let mut bytes = signature.to_vec();
        bytes[SIGNATURE_LENGTH - 1] = recovery_id(signature.v);
        Ok(bytes.into())
    }

    /// Whether `signature` over `report` was produced by the key behind `public_key`
    pub fn verify(
        public_key: &[u8],
        context: &ReportContext,
        report: &[u8],
        signature: &[u8],
    ) -> bool {
        if signature.len() != SIGNATURE_LENGTH || public_key.len() != Address::len_bytes() {
            return false
        }
        let signature = Signature {
            r: U256::from_big_endian(&signature[..32]),
            s: U256::from_big_endian(&signature[32..64]),
            v: u64::from(recovery_id(signature[64].into())) + 27,
        };
        match signature.recover(report_signing_hash(context, report)) {
            Ok(signer) => signer.as_bytes() == public_key,
            Err(_) => false,
        }
    }
}

/// Normalizes legacy (27/28) and EIP-155 `v` values to `{0, 1}`
fn recovery_id(v: u64) -> u8 {
    let id = match v {
        27 | 28 => v - 27,
        v if v >= 35 => (v - 35) % 2,
        v => v,
    };
    id as u8
}
