use std::rc::Rc;

use ethnum::U256;

use super::{execute, read};
use crate::abi::{self, CallData};
use crate::provider::Provider;
use crate::types::Address;
use crate::Error;

/// Handle to the bank contract, bound to the connected account.
#[derive(Clone)]
pub struct IBank {
    provider: Rc<dyn Provider>,
    pub address: Address,
    account: Address,
}

impl IBank {
    pub fn new(provider: Rc<dyn Provider>, address: Address, account: Address) -> Self {
        Self {
            provider,
            address,
            account,
        }
    }

    /// Deposit native currency; the amount travels as the transaction value.
    pub async fn deposit(&self, amount: U256) -> Result<(), Error> {
        let data = CallData::new("deposit()").build();
        execute(&*self.provider, self.account, self.address, data, amount).await
    }

    pub async fn withdraw(&self, amount: U256) -> Result<(), Error> {
        let data = CallData::new("withdraw(uint256)").push_uint(amount).build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    /// Move `amount` of the caller's internal balance to `recipient`. The
    /// contract takes the amount first, unlike the ERC-20 convention.
    pub async fn transfer(&self, amount: U256, recipient: Address) -> Result<(), Error> {
        let data = CallData::new("transfer(uint256,address)")
            .push_uint(amount)
            .push_address(recipient)
            .build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    pub async fn claim_initial_balance(&self) -> Result<(), Error> {
        let data = CallData::new("claimInitialBalance()").build();
        execute(&*self.provider, self.account, self.address, data, U256::ZERO).await
    }

    pub async fn get_balance(&self, account: Address) -> Result<U256, Error> {
        let data = CallData::new("getBalance(address)")
            .push_address(account)
            .build();
        let return_data = read(&*self.provider, self.address, data).await?;
        Ok(abi::decode_uint(&return_data)?)
    }

    pub async fn has_received_initial(&self, account: Address) -> Result<bool, Error> {
        let data = CallData::new("hasReceivedInitial(address)")
            .push_address(account)
            .build();
        let return_data = read(&*self.provider, self.address, data).await?;
        Ok(abi::decode_bool(&return_data)?)
    }
}
