use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    OCR3DynamicallyDispatchedECDSAAttestationVerifierLib,
    "./abi/ocr3/OCR3DynamicallyDispatchedECDSAAttestationVerifierLib.json"
);

pub static OCR3_DYNAMICALLY_DISPATCHED_ECDSA_ATTESTATION_VERIFIER_LIB: Artifact =
    Artifact::new(
        Generation::Ocr3,
        "OCR3DynamicallyDispatchedECDSAAttestationVerifierLib",
        include_str!("../../abi/ocr3/OCR3DynamicallyDispatchedECDSAAttestationVerifierLib.json"),
    )
    .with_bytecode(include_str!("../../bin/ocr3/OCR3DynamicallyDispatchedECDSAAttestationVerifierLib.bin"));

bound_contract!(
    OCR3DynamicallyDispatchedECDSAAttestationVerifierLib,
    OCR3_DYNAMICALLY_DISPATCHED_ECDSA_ATTESTATION_VERIFIER_LIB
);
