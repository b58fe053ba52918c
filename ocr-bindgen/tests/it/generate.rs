use crate::common::*;
use ocr_bindgen::GenerateOptions;
use ocr_contracts::Generation;
use std::fs;

#[test]
fn generates_and_checks_modules() {
    let (dir, manifest) = imported_workspace();
    let out = dir.path().join("bindings");

    let generated = ocr_bindgen::generate(&manifest, &out, GenerateOptions::default()).unwrap();
    assert_eq!(generated, vec![Generation::Ocr2]);

    let module = out.join("ocr2");
    let mod_rs = fs::read_to_string(module.join("mod.rs")).unwrap();
    assert!(mod_rs.contains("mod counter"), "{mod_rs}");
    let counter = fs::read_to_string(module.join("counter.rs")).unwrap();
    assert!(counter.contains("IncrementedFilter"));
    assert!(counter.contains("IncrementCall"));
    assert!(!out.join("ocr1").exists());

    let check = GenerateOptions { check: true, ..Default::default() };
    ocr_bindgen::generate(&manifest, &out, check).unwrap();

    fs::write(module.join("counter.rs"), "// edited\n").unwrap();
    assert!(ocr_bindgen::generate(&manifest, &out, check).is_err());
}

#[test]
fn generates_single_file_modules() {
    let (dir, manifest) = imported_workspace();
    let out = dir.path().join("bindings");
    let options = GenerateOptions { single_file: true, check: false };

    ocr_bindgen::generate(&manifest, &out, options).unwrap();
    let mod_rs = fs::read_to_string(out.join("ocr2/mod.rs")).unwrap();
    assert!(mod_rs.contains("IncrementedFilter"));
    assert!(!out.join("ocr2/counter.rs").exists());

    ocr_bindgen::generate(&manifest, &out, GenerateOptions { check: true, ..options }).unwrap();
}

#[test]
fn checking_missing_output_fails() {
    let (dir, manifest) = imported_workspace();
    let check = GenerateOptions { check: true, single_file: false };
    assert!(ocr_bindgen::generate(&manifest, &dir.path().join("nothing"), check).is_err());
}
