use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(ConfirmedOwnerWithProposal, "./abi/ocr2/ConfirmedOwnerWithProposal.json");

pub static CONFIRMED_OWNER_WITH_PROPOSAL: Artifact = Artifact::new(
    Generation::Ocr2,
    "ConfirmedOwnerWithProposal",
    include_str!("../../abi/ocr2/ConfirmedOwnerWithProposal.json"),
)
.with_bytecode(include_str!("../../bin/ocr2/ConfirmedOwnerWithProposal.bin"));

bound_contract!(ConfirmedOwnerWithProposal, CONFIRMED_OWNER_WITH_PROPOSAL);
