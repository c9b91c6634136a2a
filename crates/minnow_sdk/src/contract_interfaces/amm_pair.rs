use std::rc::Rc;

use ethnum::U256;

use super::{execute, read};
use crate::abi::{self, CallData};
use crate::provider::Provider;
use crate::types::Address;
use crate::Error;

/// Handle to the constant-product pair, bound to the connected account.
#[derive(Clone)]
pub struct IAmmPair {
    provider: Rc<dyn Provider>,
    pub address: Address,
    account: Address,
}

impl IAmmPair {
    pub fn new(provider: Rc<dyn Provider>, address: Address, account: Address) -> Self {
        Self {
            provider,
            address,
            account,
        }
    }

    /// Requires prior approvals for both tokens.
    pub async fn add_liquidity(&self, amount_a: U256, amount_b: U256) -> Result<(), Error> {
        let data = CallData::new("addLiquidity(uint256,uint256)")
            .push_uint(amount_a)
            .push_uint(amount_b)
            .build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    pub async fn remove_liquidity(&self, shares: U256) -> Result<(), Error> {
        let data = CallData::new("removeLiquidity(uint256)")
            .push_uint(shares)
            .build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    /// Requires a prior approval for token A.
    pub async fn swap_a_for_b(&self, amount_in: U256) -> Result<(), Error> {
        let data = CallData::new("swapAforB(uint256)").push_uint(amount_in).build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    /// Requires a prior approval for token B.
    pub async fn swap_b_for_a(&self, amount_in: U256) -> Result<(), Error> {
        let data = CallData::new("swapBforA(uint256)").push_uint(amount_in).build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    /// Mint the one-time starter allocation of both tokens to `recipient`.
    pub async fn initial_funding(&self, recipient: Address) -> Result<(), Error> {
        let data = CallData::new("initialFunding(address)")
            .push_address(recipient)
            .build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    pub async fn reserve_a(&self) -> Result<U256, Error> {
        let data = CallData::new("reserveA()").build();
        let return_data = read(&*self.provider, self.address, data).await?;
        Ok(abi::decode_uint(&return_data)?)
    }

    pub async fn reserve_b(&self) -> Result<U256, Error> {
        let data = CallData::new("reserveB()").build();
        let return_data = read(&*self.provider, self.address, data).await?;
        Ok(abi::decode_uint(&return_data)?)
    }

    pub async fn shares(&self, account: Address) -> Result<U256, Error> {
        let data = CallData::new("shares(address)")
            .push_address(account)
            .build();
        let return_data = read(&*self.provider, self.address, data).await?;
        Ok(abi::decode_uint(&return_data)?)
    }
}
