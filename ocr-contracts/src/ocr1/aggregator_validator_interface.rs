use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(
    AggregatorValidatorInterface,
    "./abi/ocr1/AggregatorValidatorInterface.json"
);

pub static AGGREGATOR_VALIDATOR_INTERFACE: Artifact = Artifact::new(
    Generation::Ocr1,
    "AggregatorValidatorInterface",
    include_str!("../../abi/ocr1/AggregatorValidatorInterface.json"),
);

bound_contract!(AggregatorValidatorInterface, AGGREGATOR_VALIDATOR_INTERFACE);
