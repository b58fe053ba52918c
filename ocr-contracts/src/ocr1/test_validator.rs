//! A validator that accepts every answer, used to exercise the validator hook of the
//! aggregator in tests.

use crate::{deploy::bound_contract, Artifact, Generation};

ethers_contract::abigen!(TestValidator, "./abi/ocr1/TestValidator.json");

pub static TEST_VALIDATOR: Artifact = Artifact::new(
    Generation::Ocr1,
    "TestValidator",
    include_str!("../../abi/ocr1/TestValidator.json"),
)
.with_bytecode(include_str!("../../bin/ocr1/TestValidator.bin"));

bound_contract!(TestValidator, TEST_VALIDATOR);
