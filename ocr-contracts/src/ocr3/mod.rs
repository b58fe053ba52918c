//! Bindings of the OCR3 attestation verifier contracts.
//!
//! Base contracts and internal libraries have an empty ABI, so there is
//! nothing to bind. They are still exported as artifacts and can be deployed
//! with [`crate::deploy_artifact`].

use crate::{Artifact, Generation};

pub mod demo_bls_attestation_verifier;
pub mod demo_dynamically_dispatched_attestation_verifier;
pub mod demo_ecdsa_attestation_verifier;
pub mod ocr3_dynamically_dispatched_bls_attestation_verifier_lib;
pub mod ocr3_dynamically_dispatched_ecdsa_attestation_verifier_lib;
pub mod selector_interface;

pub static OCR3_ATTESTATION_VERIFIER_BASE: Artifact = Artifact::new(
    Generation::Ocr3,
    "OCR3AttestationVerifierBase",
    include_str!("../../abi/ocr3/OCR3AttestationVerifierBase.json"),
);

pub static OCR3_BLS_ATTESTATION_VERIFIER: Artifact = Artifact::new(
    Generation::Ocr3,
    "OCR3BLSAttestationVerifier",
    include_str!("../../abi/ocr3/OCR3BLSAttestationVerifier.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/OCR3BLSAttestationVerifier.bin"));

pub static OCR3_ECDSA_ATTESTATION_VERIFIER: Artifact = Artifact::new(
    Generation::Ocr3,
    "OCR3ECDSAAttestationVerifier",
    include_str!("../../abi/ocr3/OCR3ECDSAAttestationVerifier.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/OCR3ECDSAAttestationVerifier.bin"));

pub static OCR3_BLS_ATTESTATION_VERIFIER_LIB: Artifact = Artifact::new(
    Generation::Ocr3,
    "OCR3BLSAttestationVerifierLib",
    include_str!("../../abi/ocr3/OCR3BLSAttestationVerifierLib.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/OCR3BLSAttestationVerifierLib.bin"));

pub static OCR3_ECDSA_ATTESTATION_VERIFIER_LIB: Artifact = Artifact::new(
    Generation::Ocr3,
    "OCR3ECDSAAttestationVerifierLib",
    include_str!("../../abi/ocr3/OCR3ECDSAAttestationVerifierLib.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/OCR3ECDSAAttestationVerifierLib.bin"));

/// Only has a constructor taking the verifier library address
pub static OCR3_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER: Artifact = Artifact::new(
    Generation::Ocr3,
    "OCR3DynamicallyDispatchedAttestationVerifier",
    include_str!("../../abi/ocr3/OCR3DynamicallyDispatchedAttestationVerifier.json"),
)
.with_bytecode(include_str!("../../bin/ocr3/OCR3DynamicallyDispatchedAttestationVerifier.bin"));
