use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(OwnableInterface, "./abi/ocr2/OwnableInterface.json");

pub static OWNABLE_INTERFACE: Artifact = Artifact::new(
    Generation::Ocr2,
    "OwnableInterface",
    include_str!("../../abi/ocr2/OwnableInterface.json"),
);

bound_contract!(OwnableInterface, OWNABLE_INTERFACE);
