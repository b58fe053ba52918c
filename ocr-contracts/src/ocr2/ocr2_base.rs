//! The abstract OCR2 contract: configuration via `setConfig` and report
//! submission via `transmit`.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(OCR2Base, "./abi/ocr2/OCR2Base.json");

pub static OCR2_BASE: Artifact = Artifact::new(
    Generation::Ocr2,
    "OCR2Base",
    include_str!("../../abi/ocr2/OCR2Base.json"),
);

bound_contract!(OCR2Base, OCR2_BASE);
