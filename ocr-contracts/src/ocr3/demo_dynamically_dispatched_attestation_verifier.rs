//! Demo contract delegating attestation verification to a library deployed at the address
//! passed to the constructor, see [`crate::ocr3::selector_interface`].

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    DemoDynamicallyDispatchedAttestationVerifier,
    "./abi/ocr3/DemoDynamicallyDispatchedAttestationVerifier.json"
);

pub static DEMO_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER: Artifact = Artifact::new(
    Generation::Ocr3,
    "DemoDynamicallyDispatchedAttestationVerifier",
    include_str!("../../abi/ocr3/DemoDynamicallyDispatchedAttestationVerifier.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/DemoDynamicallyDispatchedAttestationVerifier.bin"));

bound_contract!(
    DemoDynamicallyDispatchedAttestationVerifier,
    DEMO_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER
);
