//! Bindings of the OCR2 contracts.
//!
//! `OCR2Base` is abstract: use it to talk to any deployed OCR2 contract,
//! e.g. an `OCR2TitleRequest`, through the shared configuration and
//! transmission surface.

pub mod confirmed_owner;
pub mod confirmed_owner_with_proposal;
pub mod ocr2_base;
pub mod ocr2_title_request;
pub mod ownable_interface;
pub mod owner_is_creator;
pub mod type_and_version_interface;
