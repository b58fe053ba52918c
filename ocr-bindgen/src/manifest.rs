//! The `bindgen.toml` manifest listing the contracts of every generation.

use eyre::WrapErr;
use ocr_contracts::Generation;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_MANIFEST: &str = "bindgen.toml";

/// Contracts of one generation
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenerationManifest {
    /// Deployable contracts, these must ship bytecode
    #[serde(default)]
    pub contracts: Vec<String>,
    /// Interfaces and abstract contracts, these ship an ABI only
    #[serde(default, rename = "abstract")]
    pub abstract_contracts: Vec<String>,
}

impl GenerationManifest {
    /// All contract names, deployable ones first
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.contracts.iter().chain(&self.abstract_contracts).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|n| n == name)
    }

    pub fn is_abstract(&self, name: &str) -> bool {
        self.abstract_contracts.iter().any(|n| n == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Directory containing `abi/` and `bin/`, relative to the manifest
    #[serde(default)]
    pub root: PathBuf,
    #[serde(default)]
    pub ocr1: GenerationManifest,
    #[serde(default)]
    pub ocr2: GenerationManifest,
    #[serde(default)]
    pub ocr3: GenerationManifest,
}

/// A single contract entry of a [`Manifest`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractEntry<'a> {
    pub name: &'a str,
    pub generation: Generation,
    pub is_abstract: bool,
}

impl Manifest {
    /// Reads the manifest at `path` and resolves `root` against its directory
    pub fn load(path: impl AsRef<Path>) -> eyre::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read manifest {}", path.display()))?;
        let mut manifest: Manifest = toml::from_str(&content)
            .wrap_err_with(|| format!("invalid manifest {}", path.display()))?;
        let dir = path.parent().unwrap_or_else(|| Path::new(""));
        manifest.root = dir.join(&manifest.root);
        tracing::debug!(root = %manifest.root.display(), "loaded manifest");
        Ok(manifest)
    }

    pub fn generation(&self, generation: Generation) -> &GenerationManifest {
        match generation {
            Generation::Ocr1 => &self.ocr1,
            Generation::Ocr2 => &self.ocr2,
            Generation::Ocr3 => &self.ocr3,
        }
    }

    /// All contracts, ordered by generation
    pub fn contracts(&self) -> impl Iterator<Item = ContractEntry<'_>> {
        Generation::ALL.into_iter().flat_map(move |generation| {
            let contracts = self.generation(generation);
            contracts.names().map(move |name| ContractEntry {
                name,
                generation,
                is_abstract: contracts.is_abstract(name),
            })
        })
    }

    pub fn abi_path(&self, generation: Generation, name: &str) -> PathBuf {
        self.root.join("abi").join(generation.as_str()).join(format!("{name}.json"))
    }

    pub fn bin_path(&self, generation: Generation, name: &str) -> PathBuf {
        self.root.join("bin").join(generation.as_str()).join(format!("{name}.bin"))
    }
}
