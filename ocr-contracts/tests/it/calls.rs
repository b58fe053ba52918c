use ethers_contract::{EthCall, EthEvent};
use ethers_core::{
    abi::{encode, AbiDecode, Token},
    types::{Address, Bytes, Log, H256, U256, U64},
};
use ethers_providers::{JsonRpcError, MockResponse, Provider};
use ocr_contracts::{
    ocr2::{ocr2_base::*, ocr2_title_request::OCR2TitleRequest},
    EventIterator,
};
use std::sync::Arc;

const DIGEST: [u8; 32] = hex_literal::hex!(
    "000145ea1fc8d6d79cbf1a6ffa1a5a88c0e2a6d28d2e05ac64a0a2c8b1e31aa3"
);

fn contract_address() -> Address {
    "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap()
}

#[tokio::test]
async fn decodes_call_outputs() {
    let (provider, mock) = Provider::mocked();
    let contract = OCR2Base::new(contract_address(), Arc::new(provider));

    let output = encode(&[
        Token::Uint(3u64.into()),
        Token::Uint(42u64.into()),
        Token::FixedBytes(DIGEST.to_vec()),
    ]);
    mock.push::<Bytes, Bytes>(output.into()).unwrap();

    let (config_count, block_number, digest) =
        contract.latest_config_details().call().await.unwrap();
    assert_eq!(config_count, 3);
    assert_eq!(block_number, 42);
    assert_eq!(digest, DIGEST);
}

#[tokio::test]
async fn decodes_dynamic_outputs() {
    let (provider, mock) = Provider::mocked();
    let contract = OCR2Base::new(contract_address(), Arc::new(provider));

    let transmitters = vec![Address::repeat_byte(1), Address::repeat_byte(2)];
    let output = encode(&[Token::Array(
        transmitters.iter().copied().map(Token::Address).collect(),
    )]);
    mock.push::<Bytes, Bytes>(output.into()).unwrap();
    mock.push::<Bytes, Bytes>(encode(&[Token::String("OCR2TitleRequest 1.0.0".into())]).into())
        .unwrap();

    // responses are served last in, first out
    let version = contract.type_and_version().call().await.unwrap();
    assert_eq!(version, "OCR2TitleRequest 1.0.0");
    assert_eq!(contract.transmitters().call().await.unwrap(), transmitters);
}

#[tokio::test]
async fn node_errors_are_passed_through() {
    let (provider, mock) = Provider::mocked();
    let contract = OCR2Base::new(contract_address(), Arc::new(provider));

    mock.push_response(MockResponse::Error(JsonRpcError {
        code: -32000,
        message: "header not found".to_string(),
        data: None,
    }));

    let err = contract.latest_config_details().call().await.unwrap_err();
    assert!(!err.is_revert());
    assert!(err.to_string().contains("header not found"), "{err}");
}

#[tokio::test]
async fn reverts_without_data_are_reported_as_reverts() {
    let (provider, mock) = Provider::mocked();
    let contract = OCR2Base::new(contract_address(), Arc::new(provider));

    mock.push_response(MockResponse::Error(JsonRpcError {
        code: 3,
        message: "execution reverted: Only callable by owner".to_string(),
        data: None,
    }));

    let err = contract.accept_ownership().call().await.unwrap_err();
    assert!(err.is_revert(), "{err}");
    assert_eq!(err.as_revert(), Some(&Bytes::default()));
}

#[test]
fn transmit_calldata_roundtrips() {
    let (provider, _mock) = Provider::mocked();
    let contract = OCR2TitleRequest::new(contract_address(), Arc::new(provider));

    let report_context = [DIGEST, [7; 32], [0; 32]];
    let report = Bytes::from_static(b"report");
    let rs = vec![[1; 32], [2; 32]];
    let ss = vec![[3; 32], [4; 32]];
    let mut raw_vs = [0u8; 32];
    raw_vs[0] = 27;
    raw_vs[1] = 28;

    let call = contract.transmit(report_context, report.clone(), rs.clone(), ss.clone(), raw_vs);
    let calldata = call.calldata().unwrap();
    assert_eq!(calldata[..4], TransmitCall::selector());

    let decoded = TransmitCall::decode(&calldata).unwrap();
    assert_eq!(
        decoded,
        TransmitCall { report_context, report, rs, ss, raw_vs }
    );
}

#[tokio::test]
async fn queries_past_events() {
    let (provider, mock) = Provider::mocked();
    let client = Arc::new(provider);
    let contract = OCR2Base::new(contract_address(), client.clone());

    let log = Log {
        address: contract_address(),
        topics: vec![TransmitedFilter::signature()],
        data: encode(&[Token::FixedBytes(DIGEST.to_vec()), Token::Uint(U256::from(9))]).into(),
        block_hash: Some(H256::repeat_byte(0x42)),
        block_number: Some(U64::from(100)),
        transaction_hash: Some(H256::repeat_byte(0x43)),
        transaction_index: Some(U64::zero()),
        log_index: Some(U256::one()),
        ..Default::default()
    };
    mock.push::<Vec<Log>, _>(vec![log]).unwrap();

    let filter = contract.transmited_filter().from_block(0u64).filter;
    let mut events = EventIterator::<TransmitedFilter>::query(&*client, &filter).await.unwrap();

    let (event, meta) = events.next().unwrap().unwrap();
    assert_eq!(event, TransmitedFilter { config_digest: DIGEST, epoch: 9 });
    assert_eq!(meta.block_number, U64::from(100));
    assert_eq!(meta.log_index, U256::one());
    assert!(events.next().is_none());
}
