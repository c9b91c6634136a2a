use hex_literal::hex;

use crate::types::Address;

/// Addresses of the deployed contracts a page talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DeployedContracts {
    /// Bank contract (deposit/transfer/claim page).
    pub bank: Address,
    /// Constant-product pair (liquidity/swap page).
    pub pair: Address,
    pub token_a: Address,
    pub token_b: Address,
}

/// Sepolia deployment.
pub const SEPOLIA_CONTRACTS: DeployedContracts = DeployedContracts {
    bank: Address::new(hex!("117aeead6f30e9febea4b6bf8477b722f5a4d970")),
    pair: Address::new(hex!("e64146364c92c120d8fe3a318972fe2803f4b1c8")),
    token_a: Address::new(hex!("53e8bf31b9061ecd610f4d056adda9c298dca64c")),
    token_b: Address::new(hex!("3fe402d564c4da533807558114b3b2361cbc8af3")),
};

pub fn deployed_contracts(chain_id: u64) -> Option<&'static DeployedContracts> {
    match chain_id {
        super::SEPOLIA => Some(&SEPOLIA_CONTRACTS),
        _ => None,
    }
}
