use minnow_sdk::constants::addrs::{DeployedContracts, SEPOLIA_CONTRACTS};
use minnow_sdk::constants::{SEPOLIA, TOKEN_DECIMALS};

pub static CHAIN_ID: u64 = SEPOLIA;
pub static CONTRACTS: &DeployedContracts = &SEPOLIA_CONTRACTS;
pub static DECIMALS: u8 = TOKEN_DECIMALS;
