//! Regenerating standalone binding modules with [`MultiAbigen`].

use crate::manifest::Manifest;
use ethers_contract_abigen::{Abigen, MultiAbigen};
use eyre::WrapErr;
use ocr_contracts::{artifact::parse_abi, Generation};
use std::{fs, path::Path};
use tracing::{debug, info};

/// How generated modules are laid out and written
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Put every contract of a generation into a single `mod.rs`
    pub single_file: bool,
    /// Compare against the existing output instead of writing it
    pub check: bool,
}

/// The abigen inputs of one generation, skipping contracts whose ABI is empty
/// since they have nothing to bind.
pub fn abigens(manifest: &Manifest, generation: Generation) -> eyre::Result<Vec<Abigen>> {
    let mut abigens = Vec::new();
    for name in manifest.generation(generation).names() {
        let path = manifest.abi_path(generation, name);
        let json = fs::read_to_string(&path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?;
        let abi = parse_abi(name, &json)?;
        if abi.functions.is_empty() && abi.events.is_empty() && abi.errors.is_empty() {
            debug!(contract = name, %generation, "skipping empty ABI");
            continue
        }
        abigens.push(Abigen::new(name, json)?);
    }
    Ok(abigens)
}

/// Generates `<out>/<generation>/` for every generation with bindable
/// contracts. Returns the generations that were written or checked.
pub fn generate(
    manifest: &Manifest,
    out: &Path,
    options: GenerateOptions,
) -> eyre::Result<Vec<Generation>> {
    let mut done = Vec::new();
    for generation in Generation::ALL {
        let abigens = abigens(manifest, generation)?;
        if abigens.is_empty() {
            continue
        }
        let contracts = abigens.len();
        let bindings = MultiAbigen::from_abigens(abigens)
            .build()
            .wrap_err_with(|| format!("failed to generate {generation} bindings"))?;

        let module = out.join(generation.as_str());
        if options.check {
            bindings
                .ensure_consistent_module(&module, options.single_file)
                .wrap_err_with(|| format!("{} is out of date", module.display()))?;
            info!(%generation, contracts, "bindings are up to date");
        } else {
            bindings
                .write_to_module(&module, options.single_file)
                .wrap_err_with(|| format!("failed to write {}", module.display()))?;
            info!(%generation, contracts, module = %module.display(), "generated bindings");
        }
        done.push(generation);
    }
    Ok(done)
}
