//! Consistency checks of the artifact tree.

use crate::manifest::{ContractEntry, Manifest};
use ocr_contracts::{
    artifact::{decode_bytecode, parse_abi},
    ArtifactError, Generation,
};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

/// A problem found in the artifact tree
#[derive(Error, Debug)]
pub enum Problem {
    #[error("{generation}/{name}: cannot read {}: {source}", .path.display())]
    Unreadable {
        name: String,
        generation: Generation,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{generation}/{name}: {source}")]
    Artifact {
        name: String,
        generation: Generation,
        #[source]
        source: ArtifactError,
    },

    #[error("{generation}/{name}: abstract contracts must not ship bytecode, found {}", .path.display())]
    UnexpectedBytecode { name: String, generation: Generation, path: PathBuf },

    #[error("{generation}/{name}: not listed in the manifest")]
    Unlisted { name: String, generation: Generation },
}

/// Checks every contract of the manifest and reports all problems found.
///
/// - every contract has an ABI that parses
/// - deployable contracts have bytecode that decodes and is fully linked
/// - abstract contracts have no bytecode
/// - there are no ABIs the manifest does not know about
pub fn check(manifest: &Manifest) -> Vec<Problem> {
    let mut problems = Vec::new();
    for entry in manifest.contracts() {
        check_contract(manifest, entry, &mut problems);
    }
    problems.extend(unlisted(manifest));
    problems
}

fn check_contract(manifest: &Manifest, entry: ContractEntry<'_>, problems: &mut Vec<Problem>) {
    let ContractEntry { name, generation, is_abstract } = entry;
    let unreadable = |path: PathBuf, source| Problem::Unreadable {
        name: name.to_string(),
        generation,
        path,
        source,
    };
    let artifact =
        |source| Problem::Artifact { name: name.to_string(), generation, source };

    let abi_path = manifest.abi_path(generation, name);
    match fs::read_to_string(&abi_path) {
        Ok(json) => {
            if let Err(err) = parse_abi(name, &json) {
                problems.push(artifact(err));
            }
        }
        Err(err) => problems.push(unreadable(abi_path, err)),
    }

    let bin_path = manifest.bin_path(generation, name);
    if is_abstract {
        if bin_path.exists() {
            problems.push(Problem::UnexpectedBytecode {
                name: name.to_string(),
                generation,
                path: bin_path,
            });
        }
        return
    }
    match fs::read_to_string(&bin_path) {
        Ok(hex) => {
            if let Err(err) = decode_bytecode(name, &hex) {
                problems.push(artifact(err));
            }
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            problems.push(artifact(ArtifactError::MissingBytecode(name.to_string())))
        }
        Err(err) => problems.push(unreadable(bin_path, err)),
    }
}

fn unlisted(manifest: &Manifest) -> Vec<Problem> {
    let mut problems = Vec::new();
    for generation in Generation::ALL {
        let dir = manifest.root.join("abi").join(generation.as_str());
        let Ok(entries) = fs::read_dir(&dir) else { continue };
        let mut names = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.extension().map_or(false, |ext| ext == "json"))
            .filter_map(|path| path.file_stem().map(|s| s.to_string_lossy().into_owned()))
            .collect::<Vec<_>>();
        names.sort();
        for name in names {
            if !manifest.generation(generation).contains(&name) {
                problems.push(Problem::Unlisted { name, generation });
            }
        }
    }
    problems
}
