//! Importing `solc --combined-json abi,bin` output into the artifact tree.

use crate::manifest::Manifest;
use eyre::{bail, eyre, WrapErr};
use ocr_contracts::Generation;
use serde::Deserialize;
use serde_json::Value;
use std::{collections::BTreeMap, fs, path::Path};
use tracing::{debug, info};

#[derive(Debug, Deserialize)]
struct CombinedJson {
    contracts: BTreeMap<String, CombinedContract>,
}

#[derive(Debug, Deserialize)]
struct CombinedContract {
    abi: Value,
    #[serde(default)]
    bin: String,
}

/// A contract extracted from solc output
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompiledContract {
    pub name: String,
    /// Pretty printed ABI JSON, newline terminated
    pub abi: String,
    /// `0x` prefixed creation bytecode, `None` for abstract contracts
    pub bin: Option<String>,
}

/// Parses combined JSON output. Contract keys are `<source path>:<name>`.
///
/// Older solc versions encode every ABI as a JSON string, newer ones as an
/// array; both are accepted.
pub fn parse_combined_json(json: &str) -> eyre::Result<Vec<CompiledContract>> {
    let combined: CombinedJson =
        serde_json::from_str(json).wrap_err("invalid solc combined JSON")?;

    combined
        .contracts
        .into_iter()
        .map(|(key, contract)| {
            let name = key.rsplit(':').next().unwrap_or(&key).to_string();
            let abi = match contract.abi {
                Value::String(s) => serde_json::from_str(&s)
                    .wrap_err_with(|| format!("invalid ABI string of {key}"))?,
                abi @ Value::Array(_) => abi,
                other => bail!("ABI of {key} is neither an array nor a string: {other}"),
            };
            let abi = format!("{}\n", serde_json::to_string_pretty(&abi)?);
            let bin = contract.bin.trim();
            let bin = (!bin.is_empty())
                .then(|| format!("0x{}\n", bin.strip_prefix("0x").unwrap_or(bin)));
            Ok(CompiledContract { name, abi, bin })
        })
        .collect()
}

/// Writes the selected contracts into `abi/<generation>/` and `bin/<generation>/`.
///
/// Without explicit `names`, every contract the manifest lists for the
/// generation is imported. Returns the names of the written contracts.
pub fn import(
    manifest: &Manifest,
    combined_json: &Path,
    generation: Generation,
    names: &[String],
) -> eyre::Result<Vec<String>> {
    let json = fs::read_to_string(combined_json)
        .wrap_err_with(|| format!("failed to read {}", combined_json.display()))?;
    let compiled = parse_combined_json(&json)?;
    debug!(contracts = compiled.len(), "parsed solc output");

    let wanted: Vec<&str> = if names.is_empty() {
        manifest.generation(generation).names().collect()
    } else {
        names.iter().map(String::as_str).collect()
    };

    let mut written = Vec::with_capacity(wanted.len());
    for name in wanted {
        let contract = compiled
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| eyre!("{name} is not part of {}", combined_json.display()))?;
        write_contract(manifest, generation, contract)?;
        written.push(contract.name.clone());
    }
    Ok(written)
}

fn write_contract(
    manifest: &Manifest,
    generation: Generation,
    contract: &CompiledContract,
) -> eyre::Result<()> {
    let abi_path = manifest.abi_path(generation, &contract.name);
    let bin_path = manifest.bin_path(generation, &contract.name);
    for path in [&abi_path, &bin_path] {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
    }

    fs::write(&abi_path, &contract.abi)
        .wrap_err_with(|| format!("failed to write {}", abi_path.display()))?;
    match &contract.bin {
        Some(bin) => fs::write(&bin_path, bin)
            .wrap_err_with(|| format!("failed to write {}", bin_path.display()))?,
        // an abstract contract must not keep bytecode of an earlier version around
        None if bin_path.exists() => fs::remove_file(&bin_path)?,
        None => {}
    }
    info!(
        contract = %contract.name,
        %generation,
        deployable = contract.bin.is_some(),
        "imported"
    );
    Ok(())
}
