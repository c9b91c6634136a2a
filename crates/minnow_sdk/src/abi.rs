//! Minimal calldata encoding for the fixed ABI surface the pages use.
//! Every function here takes only static 32-byte types (`uint256`,
//! `address`, `bool`), so there is no dynamic-offset encoding.

use ethnum::U256;
use sha3::{Digest, Keccak256};

use crate::types::Address;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum AbiError {
    #[error("return data too short: expected at least {expected} bytes, got {actual}")]
    ShortReturnData { expected: usize, actual: usize },

    #[error("return word is not a valid {0}")]
    BadWord(&'static str),
}

/// First four bytes of the Keccak-256 hash of the canonical signature,
/// e.g. `selector("approve(address,uint256)")`.
pub fn selector(signature: &str) -> [u8; 4] {
    let digest = Keccak256::digest(signature.as_bytes());
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest[..4]);
    out
}

/// Builder for `selector ++ abi_encode(args)` calldata.
#[derive(Clone, Debug)]
pub struct CallData {
    bytes: Vec<u8>,
}

impl CallData {
    pub fn new(signature: &str) -> Self {
        Self {
            bytes: selector(signature).to_vec(),
        }
    }

    pub fn push_uint(mut self, value: U256) -> Self {
        self.bytes.extend_from_slice(&value.to_be_bytes());
        self
    }

    pub fn push_address(mut self, address: Address) -> Self {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(address.as_bytes());
        self.bytes.extend_from_slice(&word);
        self
    }

    pub fn build(self) -> Vec<u8> {
        self.bytes
    }
}

fn first_word(data: &[u8]) -> Result<[u8; 32], AbiError> {
    if data.len() < 32 {
        return Err(AbiError::ShortReturnData {
            expected: 32,
            actual: data.len(),
        });
    }
    let mut word = [0u8; 32];
    word.copy_from_slice(&data[..32]);
    Ok(word)
}

pub fn decode_uint(data: &[u8]) -> Result<U256, AbiError> {
    first_word(data).map(U256::from_be_bytes)
}

pub fn decode_bool(data: &[u8]) -> Result<bool, AbiError> {
    let word = first_word(data)?;
    if word[..31].iter().any(|byte| *byte != 0) || word[31] > 1 {
        return Err(AbiError::BadWord("bool"));
    }
    Ok(word[31] == 1)
}

pub fn decode_address(data: &[u8]) -> Result<Address, AbiError> {
    let word = first_word(data)?;
    if word[..12].iter().any(|byte| *byte != 0) {
        return Err(AbiError::BadWord("address"));
    }
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&word[12..]);
    Ok(Address(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn known_selectors() {
        assert_eq!(selector("approve(address,uint256)"), [0x09, 0x5e, 0xa7, 0xb3]);
        assert_eq!(selector("balanceOf(address)"), [0x70, 0xa0, 0x82, 0x31]);
        assert_eq!(selector("deposit()"), [0xd0, 0xe3, 0x0d, 0xb0]);
    }

    #[test]
    fn encodes_address_and_uint_words() {
        let spender = Address::from_str("0xE64146364C92c120d8FE3a318972Fe2803F4b1c8").unwrap();
        let data = CallData::new("approve(address,uint256)")
            .push_address(spender)
            .push_uint(U256::from(10u128))
            .build();

        assert_eq!(data.len(), 4 + 32 + 32);
        assert_eq!(&data[..4], &[0x09, 0x5e, 0xa7, 0xb3]);
        // address is right-aligned in its word
        assert_eq!(&data[4..16], &[0u8; 12]);
        assert_eq!(&data[16..36], spender.as_bytes());
        // uint word is big-endian
        assert_eq!(data[67], 10);
        assert_eq!(&data[36..67], &[0u8; 31]);
    }

    #[test]
    fn decodes_return_words() {
        let mut word = [0u8; 32];
        word[31] = 1;
        assert_eq!(decode_bool(&word).unwrap(), true);
        assert_eq!(decode_uint(&word).unwrap(), U256::ONE);

        word[31] = 2;
        assert!(decode_bool(&word).is_err());

        assert!(decode_uint(&[0u8; 16]).is_err());
    }
}
