use ethers_contract::EthEvent;
use ethers_core::{
    abi::{encode, Token},
    types::{Address, Log, H256, U256, U64},
};
use ocr_contracts::ocr2::ocr2_base::{ConfigSetFilter, TransmitedFilter};

pub fn contract_address() -> Address {
    "0x5fbdb2315678afecb367f032d93f642f64180aa3".parse().unwrap()
}

fn log(topic: H256, data: Vec<u8>, block: u64, log_index: u64) -> Log {
    Log {
        address: contract_address(),
        topics: vec![topic],
        data: data.into(),
        block_hash: Some(H256::from_low_u64_be(block)),
        block_number: Some(U64::from(block)),
        transaction_hash: Some(H256::from_low_u64_be(block << 8 | log_index)),
        transaction_index: Some(U64::zero()),
        log_index: Some(U256::from(log_index)),
        ..Default::default()
    }
}

pub fn config_set_log(
    block: u64,
    log_index: u64,
    config_count: u64,
    config_digest: [u8; 32],
    signers: &[Address],
    transmitters: &[Address],
) -> Log {
    let data = encode(&[
        Token::Uint(U256::zero()),
        Token::FixedBytes(config_digest.to_vec()),
        Token::Uint(config_count.into()),
        Token::Array(signers.iter().copied().map(Token::Address).collect()),
        Token::Array(transmitters.iter().copied().map(Token::Address).collect()),
        Token::Uint(1u8.into()),
        Token::Bytes(vec![0xaa, 0xbb]),
        Token::Uint(2u64.into()),
        Token::Bytes(b"offchain".to_vec()),
    ]);
    log(ConfigSetFilter::signature(), data, block, log_index)
}

pub fn transmited_log(block: u64, log_index: u64, config_digest: [u8; 32], epoch: u32) -> Log {
    let data = encode(&[Token::FixedBytes(config_digest.to_vec()), Token::Uint(epoch.into())]);
    log(TransmitedFilter::signature(), data, block, log_index)
}
