//! Demo OCR2 contract: users request the title of a web page, the oracles fulfill the
//! request through `transmit`.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(OCR2TitleRequest, "./abi/ocr2/OCR2TitleRequest.json");

pub static OCR2_TITLE_REQUEST: Artifact = Artifact::new(
    Generation::Ocr2,
    "OCR2TitleRequest",
    include_str!("../../abi/ocr2/OCR2TitleRequest.json"),
)
.with_bytecode(include_str!("../../bin/ocr2/OCR2TitleRequest.bin"));

bound_contract!(OCR2TitleRequest, OCR2_TITLE_REQUEST);
