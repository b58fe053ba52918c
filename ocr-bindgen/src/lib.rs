#![deny(unsafe_code)]
//! Maintenance of the `ocr-contracts` artifact tree.
//!
//! The tree is described by a [`Manifest`] (`bindgen.toml`) listing the
//! contracts of every protocol generation. Compiler output is brought in with
//! [`import()`], verified with [`check()`] and turned into standalone binding
//! modules with [`generate()`].

pub mod check;
pub use check::{check, Problem};

pub mod generate;
pub use generate::{generate, GenerateOptions};

pub mod import;
pub use import::{import, parse_combined_json, CompiledContract};

pub mod manifest;
pub use manifest::{ContractEntry, GenerationManifest, Manifest, DEFAULT_MANIFEST};
