//! Two-step ownership where the deployer becomes the owner.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(OwnerIsCreator, "./abi/ocr2/OwnerIsCreator.json");

pub static OWNER_IS_CREATOR: Artifact = Artifact::new(
    Generation::Ocr2,
    "OwnerIsCreator",
    include_str!("../../abi/ocr2/OwnerIsCreator.json"),
)
.with_bytecode(include_str!("../../bin/ocr2/OwnerIsCreator.bin"));

bound_contract!(OwnerIsCreator, OWNER_IS_CREATOR);
