//! Two-step ownership with the initial owner passed to the constructor.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(ConfirmedOwner, "./abi/ocr2/ConfirmedOwner.json");

pub static CONFIRMED_OWNER: Artifact = Artifact::new(
    Generation::Ocr2,
    "ConfirmedOwner",
    include_str!("../../abi/ocr2/ConfirmedOwner.json"),
)
.with_bytecode(include_str!("../../bin/ocr2/ConfirmedOwner.bin"));

bound_contract!(ConfirmedOwner, CONFIRMED_OWNER);
