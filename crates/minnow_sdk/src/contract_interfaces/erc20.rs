use std::rc::Rc;

use ethnum::U256;

use super::{execute, read};
use crate::abi::{self, CallData};
use crate::provider::Provider;
use crate::types::Address;
use crate::Error;

/// Handle to one of the pool's ERC-20 tokens, bound to the connected account.
#[derive(Clone)]
pub struct IErc20 {
    provider: Rc<dyn Provider>,
    pub address: Address,
    account: Address,
}

impl IErc20 {
    pub fn new(provider: Rc<dyn Provider>, address: Address, account: Address) -> Self {
        Self {
            provider,
            address,
            account,
        }
    }

    pub async fn approve(&self, spender: Address, amount: U256) -> Result<(), Error> {
        let data = CallData::new("approve(address,uint256)")
            .push_address(spender)
            .push_uint(amount)
            .build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    pub async fn balance_of(&self, account: Address) -> Result<U256, Error> {
        let data = CallData::new("balanceOf(address)")
            .push_address(account)
            .build();
        let return_data = read(&*self.provider, self.address, data).await?;
        Ok(abi::decode_uint(&return_data)?)
    }
}
