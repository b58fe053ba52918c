use crate::common::*;
use ocr_bindgen::Problem;
use ocr_contracts::{ArtifactError, Generation};
use std::fs;

#[test]
fn imported_artifacts_are_consistent() {
    let (_dir, manifest) = imported_workspace();
    let problems = ocr_bindgen::check(&manifest);
    assert!(problems.is_empty(), "{problems:#?}");
}

#[test]
fn reports_missing_artifacts() {
    let (_dir, manifest) = workspace();
    let problems = ocr_bindgen::check(&manifest);
    // both ABIs and the bytecode of the deployable contract
    assert_eq!(problems.len(), 3, "{problems:#?}");
    assert!(matches!(
        &problems[0],
        Problem::Unreadable { name, generation: Generation::Ocr2, .. } if name == "Counter"
    ));
    assert!(matches!(
        &problems[1],
        Problem::Artifact { source: ArtifactError::MissingBytecode(name), .. } if name == "Counter"
    ));
    assert!(matches!(&problems[2], Problem::Unreadable { name, .. } if name == "ICounter"));
}

#[test]
fn reports_broken_artifacts() {
    let (dir, manifest) = imported_workspace();
    let artifacts = dir.path().join("artifacts");
    fs::write(artifacts.join("abi/ocr2/Counter.json"), "[{").unwrap();
    fs::write(
        artifacts.join("bin/ocr2/Counter.bin"),
        "0x6080__$a1b2c3d4e5f6a1b2c3d4e5f6a1b2c3d4e5$__6080\n",
    )
    .unwrap();
    fs::write(artifacts.join("bin/ocr2/ICounter.bin"), "0x6080\n").unwrap();

    let problems = ocr_bindgen::check(&manifest);
    assert_eq!(problems.len(), 3, "{problems:#?}");
    assert!(matches!(&problems[0], Problem::Artifact { source: ArtifactError::Abi { .. }, .. }));
    assert!(matches!(
        &problems[1],
        Problem::Artifact { source: ArtifactError::UnlinkedLibrary(_), .. }
    ));
    assert!(matches!(&problems[2], Problem::UnexpectedBytecode { name, .. } if name == "ICounter"));
    assert!(problems[2].to_string().starts_with("ocr2/ICounter: abstract contracts"));
}

#[test]
fn reports_unlisted_abis() {
    let (dir, manifest) = imported_workspace();
    ocr_bindgen::import(&manifest, &combined(dir.path()), Generation::Ocr2, &["Other".into()])
        .unwrap();

    let problems = ocr_bindgen::check(&manifest);
    assert_eq!(problems.len(), 1, "{problems:#?}");
    assert_eq!(problems[0].to_string(), "ocr2/Other: not listed in the manifest");
}
