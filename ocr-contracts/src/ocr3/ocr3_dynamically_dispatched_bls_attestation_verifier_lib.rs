use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    OCR3DynamicallyDispatchedBLSAttestationVerifierLib,
    "./abi/ocr3/OCR3DynamicallyDispatchedBLSAttestationVerifierLib.json"
);

pub static OCR3_DYNAMICALLY_DISPATCHED_BLS_ATTESTATION_VERIFIER_LIB: Artifact =
    Artifact::new(
        Generation::Ocr3,
        "OCR3DynamicallyDispatchedBLSAttestationVerifierLib",
        include_str!("../../abi/ocr3/OCR3DynamicallyDispatchedBLSAttestationVerifierLib.json"),
    )
    .with_bytecode(include_str!("../../bin/ocr3/OCR3DynamicallyDispatchedBLSAttestationVerifierLib.bin"));

bound_contract!(
    OCR3DynamicallyDispatchedBLSAttestationVerifierLib,
    OCR3_DYNAMICALLY_DISPATCHED_BLS_ATTESTATION_VERIFIER_LIB
);
