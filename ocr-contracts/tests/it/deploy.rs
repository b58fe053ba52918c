use ethers_core::types::Address;
use ethers_providers::Provider;
use ocr_contracts::{
    artifact, deploy_artifact,
    ocr2::{ocr2_base::OCR2Base, ocr2_title_request::OCR2TitleRequest},
    ocr3::demo_dynamically_dispatched_attestation_verifier::DemoDynamicallyDispatchedAttestationVerifier,
    ArtifactError, BoundContract, DeployError,
};
use std::sync::Arc;

#[test]
fn abstract_contracts_cannot_be_deployed() {
    let (provider, _mock) = Provider::mocked();
    let err = OCR2Base::deploy(Arc::new(provider), ()).unwrap_err();
    assert!(matches!(
        err,
        DeployError::Artifact(ArtifactError::MissingBytecode(ref name)) if name == "OCR2Base"
    ));
}

#[test]
fn deployment_sends_embedded_bytecode() {
    let (provider, _mock) = Provider::mocked();
    let deployer = OCR2TitleRequest::deploy(Arc::new(provider), ()).unwrap();

    let expected = artifact("OCR2TitleRequest").unwrap().bytecode().unwrap();
    assert_eq!(deployer.deployer.tx.data(), Some(&expected));
}

#[test]
fn binds_to_deployed_instance() {
    let (provider, _mock) = Provider::mocked();
    let address = Address::repeat_byte(0x42);
    let contract = OCR2TitleRequest::at(address, Arc::new(provider)).unwrap();
    assert_eq!(contract.address(), address);
}

#[test]
fn constructor_arguments_are_appended() {
    let (provider, _mock) = Provider::mocked();
    let lib = Address::repeat_byte(0x77);
    let deployer = DemoDynamicallyDispatchedAttestationVerifier::deploy(Arc::new(provider), lib)
        .unwrap();

    let data = deployer.deployer.tx.data().unwrap();
    let bytecode = artifact("DemoDynamicallyDispatchedAttestationVerifier")
        .unwrap()
        .bytecode()
        .unwrap();
    assert_eq!(data.len(), bytecode.len() + 32);
    assert_eq!(data[..bytecode.len()], bytecode[..]);
    assert_eq!(data[data.len() - 20..], lib.0);
}

#[test]
fn libraries_deploy_untyped() {
    let (provider, _mock) = Provider::mocked();
    let artifact = artifact("OCR3ECDSAAttestationVerifierLib").unwrap();
    let deployer = deploy_artifact(artifact, Arc::new(provider), ()).unwrap();
    assert_eq!(deployer.deployer.tx.data(), Some(&artifact.bytecode().unwrap()));
}

#[tokio::test]
#[ignore = "requires anvil"]
async fn deploys_to_anvil() {
    use ethers_core::utils::Anvil;
    use ethers_providers::{Http, Middleware};

    let anvil = Anvil::new().spawn();
    let sender = anvil.addresses()[0];
    // anvil signs for its unlocked dev accounts
    let provider = Provider::<Http>::try_from(anvil.endpoint()).unwrap().with_sender(sender);
    let client = Arc::new(provider);

    let contract = OCR2TitleRequest::deploy(client.clone(), ()).unwrap().legacy().send().await.unwrap();
    assert!(!client.get_code(contract.address(), None).await.unwrap().is_empty());
    assert_eq!(contract.owner().call().await.unwrap(), sender);

    let (config_count, block_number, digest) =
        contract.latest_config_details().call().await.unwrap();
    assert_eq!((config_count, block_number, digest), (0, 0, [0; 32]));
}
