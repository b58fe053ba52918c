//! Bindings of the first generation OCR contracts.

pub mod aggregator_validator_interface;
pub mod test_validator;
