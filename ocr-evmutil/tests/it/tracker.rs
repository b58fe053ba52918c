use crate::common::{config_set_log, contract_address};
use ethers_core::{
    abi::{encode, Token},
    types::{Address, Bytes, Log, U64},
};
use ethers_providers::{JsonRpcError, MockResponse, Provider};
use hex_literal::hex;
use ocr_evmutil::{
    ConfigDigest, ContractConfigTracker, EvmOffchainConfigDigester, OffchainConfigDigester,
    TrackerError,
};
use std::sync::Arc;

// digest of the config in `config_set_log` with count 1 on chain 1337
const DIGEST: [u8; 32] = hex!("00015ae8ad5b9d6af1b1f42d45e0f0cbf889ce0a186b19c0318c4edbcbe911db");

fn signers() -> Vec<Address> {
    vec![Address::repeat_byte(1), Address::repeat_byte(2)]
}

fn transmitters() -> Vec<Address> {
    vec![Address::repeat_byte(3), Address::repeat_byte(4)]
}

#[tokio::test]
async fn reads_latest_config_details() {
    let (provider, mock) = Provider::mocked();
    let tracker = ContractConfigTracker::new(contract_address(), Arc::new(provider));

    let output = encode(&[
        Token::Uint(1u64.into()),
        Token::Uint(42u64.into()),
        Token::FixedBytes(DIGEST.to_vec()),
    ]);
    mock.push::<Bytes, Bytes>(output.into()).unwrap();

    let (changed_in_block, digest) = tracker.latest_config_details().await.unwrap();
    assert_eq!(changed_in_block, 42);
    assert_eq!(digest, ConfigDigest(DIGEST));
}

#[tokio::test]
async fn reads_config_of_block() {
    let (provider, mock) = Provider::mocked();
    let tracker = ContractConfigTracker::new(contract_address(), Arc::new(provider));

    // two configs in the same block, the later one is current
    let logs = vec![
        config_set_log(42, 0, 7, [7; 32], &signers(), &transmitters()),
        config_set_log(42, 3, 1, DIGEST, &signers(), &transmitters()),
    ];
    mock.push::<Vec<Log>, _>(logs).unwrap();

    let config = tracker.latest_config(42).await.unwrap();
    assert_eq!(config.config_count, 1);
    assert_eq!(config.config_digest, ConfigDigest(DIGEST));
    assert_eq!(config.signers[0].to_vec(), vec![1u8; 20]);
    assert_eq!(
        config.transmitters,
        vec![
            "0x0303030303030303030303030303030303030303",
            "0x0404040404040404040404040404040404040404"
        ]
    );

    // the node reported a digest that belongs to the config it returned
    let digester = EvmOffchainConfigDigester::new(1337, contract_address());
    digester.check_config_digest(&config).unwrap();
}

#[tokio::test]
async fn missing_config_is_an_error() {
    let (provider, mock) = Provider::mocked();
    let tracker = ContractConfigTracker::new(contract_address(), Arc::new(provider));

    mock.push::<Vec<Log>, _>(vec![]).unwrap();
    let err = tracker.latest_config(99).await.unwrap_err();
    assert!(matches!(err, TrackerError::NoConfigFound(99)));
    assert_eq!(err.to_string(), "found no config in block 99");
}

#[tokio::test]
async fn undecodable_config_is_an_error() {
    let (provider, mock) = Provider::mocked();
    let tracker = ContractConfigTracker::new(contract_address(), Arc::new(provider));

    let mut broken = config_set_log(42, 0, 1, DIGEST, &signers(), &transmitters());
    broken.data = Bytes::from(vec![0u8; 31]);
    mock.push::<Vec<Log>, _>(vec![broken]).unwrap();

    let err = tracker.latest_config(42).await.unwrap_err();
    assert!(matches!(err, TrackerError::Event(ref e) if e.index == 0), "{err:?}");
}

#[tokio::test]
async fn reads_block_height() {
    let (provider, mock) = Provider::mocked();
    let tracker = ContractConfigTracker::new(contract_address(), Arc::new(provider));

    mock.push(U64::from(1234)).unwrap();
    assert_eq!(tracker.latest_block_height().await.unwrap(), 1234);
    mock.assert_request("eth_blockNumber", ()).unwrap();
}

#[tokio::test]
async fn rpc_errors_are_passed_through() {
    let (provider, mock) = Provider::mocked();
    let tracker = ContractConfigTracker::new(contract_address(), Arc::new(provider));

    mock.push_response(MockResponse::Error(JsonRpcError {
        code: -32000,
        message: "header not found".to_string(),
        data: None,
    }));
    let err = tracker.latest_block_height().await.unwrap_err();
    assert!(matches!(err, TrackerError::Contract(_)));
    assert!(err.to_string().contains("header not found"), "{err}");
}
