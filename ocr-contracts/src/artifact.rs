//! Compiled contract artifacts: the ABI JSON and creation bytecode of every
//! contract this crate has bindings for.

use ethers_core::{
    abi::{Abi, Event, Function},
    types::Bytes,
};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

use crate::{ocr1, ocr2, ocr3};

/// Errors returned when reading an [`Artifact`]
#[derive(Error, Debug)]
pub enum ArtifactError {
    /// The ABI JSON could not be parsed
    #[error("invalid ABI of {name}: {source}")]
    Abi {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    /// Abstract contracts and interfaces ship without bytecode
    #[error("{0} has no bytecode")]
    MissingBytecode(String),

    /// The bytecode contains a library placeholder left by solc
    #[error("bytecode of {0} contains unlinked library references")]
    UnlinkedLibrary(String),

    /// The bytecode is not valid hex
    #[error("invalid bytecode of {name}: {source}")]
    Bytecode {
        name: String,
        #[source]
        source: hex::FromHexError,
    },

    /// The bytecode decoded to zero bytes
    #[error("bytecode of {0} is empty")]
    EmptyBytecode(String),
}

/// The protocol generation a contract belongs to.
///
/// Each generation lives in its own directory below `abi/` and `bin/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Ocr1,
    Ocr2,
    Ocr3,
}

impl Generation {
    pub const ALL: [Generation; 3] = [Generation::Ocr1, Generation::Ocr2, Generation::Ocr3];

    /// The directory name of this generation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Generation::Ocr1 => "ocr1",
            Generation::Ocr2 => "ocr2",
            Generation::Ocr3 => "ocr3",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Generation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ocr1" | "1" => Ok(Generation::Ocr1),
            "ocr2" | "2" => Ok(Generation::Ocr2),
            "ocr3" | "3" => Ok(Generation::Ocr3),
            other => Err(format!("unknown generation `{other}`, expected one of ocr1, ocr2, ocr3")),
        }
    }
}

/// ABI and (optional) creation bytecode of a compiled contract.
///
/// The content is embedded at compile time and is byte-identical to the
/// compiler output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Artifact {
    /// The contract name as declared in Solidity
    pub name: &'static str,
    /// The generation the contract belongs to
    pub generation: Generation,
    /// The raw ABI JSON
    pub abi: &'static str,
    /// The creation bytecode as hex, `None` for interfaces and abstract contracts
    pub bytecode: Option<&'static str>,
}

impl Artifact {
    pub const fn new(generation: Generation, name: &'static str, abi: &'static str) -> Self {
        Self { name, generation, abi, bytecode: None }
    }

    #[must_use]
    pub const fn with_bytecode(mut self, bytecode: &'static str) -> Self {
        self.bytecode = Some(bytecode);
        self
    }

    /// Whether the artifact carries creation bytecode
    pub fn is_deployable(&self) -> bool {
        self.bytecode.is_some()
    }

    /// Parses the ABI JSON
    pub fn abi(&self) -> Result<Abi, ArtifactError> {
        parse_abi(self.name, self.abi)
    }

    /// Decodes the creation bytecode
    pub fn bytecode(&self) -> Result<Bytes, ArtifactError> {
        let hex = self.bytecode.ok_or_else(|| ArtifactError::MissingBytecode(self.name.to_string()))?;
        decode_bytecode(self.name, hex)
    }

    /// Canonical signatures of all functions, e.g. `transferOwnership(address)`, sorted
    pub fn function_signatures(&self) -> Result<Vec<String>, ArtifactError> {
        let abi = self.abi()?;
        let mut sigs = abi.functions().map(function_signature).collect::<Vec<_>>();
        sigs.sort();
        Ok(sigs)
    }

    /// Canonical signatures of all events, sorted
    pub fn event_signatures(&self) -> Result<Vec<String>, ArtifactError> {
        let abi = self.abi()?;
        let mut sigs = abi.events().map(event_signature).collect::<Vec<_>>();
        sigs.sort();
        Ok(sigs)
    }
}

/// Parses an ABI JSON document as emitted by `solc --abi`
pub fn parse_abi(name: &str, json: &str) -> Result<Abi, ArtifactError> {
    serde_json::from_str(json)
        .map_err(|source| ArtifactError::Abi { name: name.to_string(), source })
}

/// Decodes hex bytecode as emitted by `solc --bin`, with or without `0x` prefix.
pub fn decode_bytecode(name: &str, hex: &str) -> Result<Bytes, ArtifactError> {
    let hex = hex.trim();
    // solc marks library references with `__$<hash>$__` (or `__Name___` in old versions)
    if hex.contains("__") {
        return Err(ArtifactError::UnlinkedLibrary(name.to_string()))
    }
    let hex = hex.strip_prefix("0x").unwrap_or(hex);
    let bytes = hex::decode(hex)
        .map_err(|source| ArtifactError::Bytecode { name: name.to_string(), source })?;
    if bytes.is_empty() {
        return Err(ArtifactError::EmptyBytecode(name.to_string()))
    }
    Ok(bytes.into())
}

fn function_signature(function: &Function) -> String {
    let inputs = function.inputs.iter().map(|p| p.kind.to_string()).collect::<Vec<_>>();
    format!("{}({})", function.name, inputs.join(","))
}

fn event_signature(event: &Event) -> String {
    let inputs = event.inputs.iter().map(|p| p.kind.to_string()).collect::<Vec<_>>();
    format!("{}({})", event.name, inputs.join(","))
}

static ARTIFACTS: &[&Artifact] = &[
    // ocr1
    &ocr1::aggregator_validator_interface::AGGREGATOR_VALIDATOR_INTERFACE,
    &ocr1::test_validator::TEST_VALIDATOR,
    // ocr2
    &ocr2::confirmed_owner::CONFIRMED_OWNER,
    &ocr2::confirmed_owner_with_proposal::CONFIRMED_OWNER_WITH_PROPOSAL,
    &ocr2::ocr2_base::OCR2_BASE,
    &ocr2::ocr2_title_request::OCR2_TITLE_REQUEST,
    &ocr2::ownable_interface::OWNABLE_INTERFACE,
    &ocr2::owner_is_creator::OWNER_IS_CREATOR,
    &ocr2::type_and_version_interface::TYPE_AND_VERSION_INTERFACE,
    // ocr3
    &ocr3::demo_bls_attestation_verifier::DEMO_BLS_ATTESTATION_VERIFIER,
    &ocr3::demo_ecdsa_attestation_verifier::DEMO_ECDSA_ATTESTATION_VERIFIER,
    &ocr3::demo_dynamically_dispatched_attestation_verifier::DEMO_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER,
    &ocr3::ocr3_dynamically_dispatched_bls_attestation_verifier_lib::OCR3_DYNAMICALLY_DISPATCHED_BLS_ATTESTATION_VERIFIER_LIB,
    &ocr3::ocr3_dynamically_dispatched_ecdsa_attestation_verifier_lib::OCR3_DYNAMICALLY_DISPATCHED_ECDSA_ATTESTATION_VERIFIER_LIB,
    &ocr3::selector_interface::OCR3_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER_SELECTOR_INTERFACE,
    &ocr3::OCR3_ATTESTATION_VERIFIER_BASE,
    &ocr3::OCR3_BLS_ATTESTATION_VERIFIER,
    &ocr3::OCR3_ECDSA_ATTESTATION_VERIFIER,
    &ocr3::OCR3_BLS_ATTESTATION_VERIFIER_LIB,
    &ocr3::OCR3_ECDSA_ATTESTATION_VERIFIER_LIB,
    &ocr3::OCR3_DYNAMICALLY_DISPATCHED_ATTESTATION_VERIFIER,
];

/// All embedded artifacts, grouped by generation
pub fn artifacts() -> impl Iterator<Item = &'static Artifact> {
    ARTIFACTS.iter().copied()
}

/// All embedded artifacts of the given generation
pub fn artifacts_of(generation: Generation) -> impl Iterator<Item = &'static Artifact> {
    artifacts().filter(move |artifact| artifact.generation == generation)
}

/// Looks up an artifact by its Solidity contract name
pub fn artifact(name: &str) -> Option<&'static Artifact> {
    artifacts().find(|artifact| artifact.name == name)
}
