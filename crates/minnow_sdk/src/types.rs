use serde::{Deserialize, Serialize};

use crate::Error;

/// A 20-byte account or contract address.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Address(pub [u8; 20]);

impl Address {
    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex, the form the provider boundary expects.
    pub fn to_hex(&self) -> String {
        let mut out = String::with_capacity(42);
        out.push_str("0x");
        for byte in self.0 {
            out.push_str(&format!("{byte:02x}"));
        }
        out
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl std::fmt::Debug for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Address({})", self.to_hex())
    }
}

impl std::str::FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or_else(|| Error::invalid_input("address must start with 0x"))?;

        if hex.len() != 40 {
            return Err(Error::invalid_input("address must be 20 bytes of hex"));
        }

        let mut bytes = [0u8; 20];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&hex[2 * i..2 * i + 2], 16)
                .map_err(|_| Error::invalid_input("address contains non-hex characters"))?;
        }
        Ok(Self(bytes))
    }
}

/// Hash of a submitted transaction, kept in the provider's hex form.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct TxHash(pub String);

impl std::fmt::Display for TxHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn address_round_trips_through_hex() {
        let addr = Address::from_str("0x117aEeAD6F30e9fEbEA4b6BF8477B722F5A4d970").unwrap();
        assert_eq!(addr.to_hex(), "0x117aeead6f30e9febea4b6bf8477b722f5a4d970");
        assert_eq!(Address::from_str(&addr.to_hex()).unwrap(), addr);
    }

    #[test]
    fn address_rejects_malformed_input() {
        assert!(Address::from_str("117aeead6f30e9febea4b6bf8477b722f5a4d970").is_err());
        assert!(Address::from_str("0x1234").is_err());
        assert!(Address::from_str("0xzz7aeead6f30e9febea4b6bf8477b722f5a4d970").is_err());
    }
}
