use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(TypeAndVersionInterface, "./abi/ocr2/TypeAndVersionInterface.json");

pub static TYPE_AND_VERSION_INTERFACE: Artifact = Artifact::new(
    Generation::Ocr2,
    "TypeAndVersionInterface",
    include_str!("../../abi/ocr2/TypeAndVersionInterface.json"),
);

bound_contract!(TypeAndVersionInterface, TYPE_AND_VERSION_INTERFACE);
