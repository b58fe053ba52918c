//! Demo contract verifying BLS attestations inline.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    DemoBLSAttestationVerifier,
    "./abi/ocr3/DemoBLSAttestationVerifier.json"
);

pub static DEMO_BLS_ATTESTATION_VERIFIER: Artifact = Artifact::new(
    Generation::Ocr3,
    "DemoBLSAttestationVerifier",
    include_str!("../../abi/ocr3/DemoBLSAttestationVerifier.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/DemoBLSAttestationVerifier.bin"));

bound_contract!(DemoBLSAttestationVerifier, DEMO_BLS_ATTESTATION_VERIFIER);
