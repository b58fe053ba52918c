//! The `getSelectors` interface implemented by the dynamically dispatched verifier libraries.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    OCR3DynamicallyDispatchedAttestationVerifierSelectorInterface,
    "./abi/ocr3/OCR3DynamicallyDispatchedAttestationVerifierSelectorInterface.json"
);

pub static OCR3_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER_SELECTOR_INTERFACE: Artifact =
    Artifact::new(
        Generation::Ocr3,
        "OCR3DynamicallyDispatchedAttestationVerifierSelectorInterface",
        include_str!(
            "../../abi/ocr3/OCR3DynamicallyDispatchedAttestationVerifierSelectorInterface.json"
        ),
    );

bound_contract!(
    OCR3DynamicallyDispatchedAttestationVerifierSelectorInterface,
    OCR3_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER_SELECTOR_INTERFACE
);
