//! Demo contract verifying ECDSA attestations inline.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    DemoECDSAAttestationVerifier,
    "./abi/ocr3/DemoECDSAAttestationVerifier.json"
);

pub static DEMO_ECDSA_ATTESTATION_VERIFIER: Artifact = Artifact::new(
    Generation::Ocr3,
    "DemoECDSAAttestationVerifier",
    include_str!("../../abi/ocr3/DemoECDSAAttestationVerifier.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/DemoECDSAAttestationVerifier.bin"));

bound_contract!(DemoECDSAAttestationVerifier, DEMO_ECDSA_ATTESTATION_VERIFIER);
