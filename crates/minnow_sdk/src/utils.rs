use ethnum::U256;

use crate::types::Address;
use crate::Error;

/// Parse a user-typed decimal amount into base units. Empty input, garbage,
/// zero, and more fractional digits than the token carries are all rejected.
pub fn parse_token_amount(input: &str, decimals: u8) -> Result<U256, Error> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_input("Please enter a valid amount"));
    }

    let (int_part, frac_part) = match trimmed.split_once('.') {
        Some((int_part, frac_part)) => (int_part, frac_part),
        None => (trimmed, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(Error::invalid_input("Please enter a valid amount"));
    }
    if frac_part.len() > decimals as usize {
        return Err(Error::invalid_input(format!(
            "At most {decimals} decimal places are supported"
        )));
    }

    let scale = U256::from(10u8).pow(decimals as u32);
    let frac_scale = U256::from(10u8).pow((decimals as usize - frac_part.len()) as u32);

    let int = parse_digits(int_part)?;
    let frac = parse_digits(frac_part)?;

    let value = int
        .checked_mul(scale)
        .and_then(|scaled| scaled.checked_add(frac * frac_scale))
        .ok_or_else(|| Error::invalid_input("Amount is too large"))?;

    if value == U256::ZERO {
        return Err(Error::invalid_input("Please enter a valid amount"));
    }
    Ok(value)
}

fn parse_digits(digits: &str) -> Result<U256, Error> {
    if digits.is_empty() {
        return Ok(U256::ZERO);
    }
    U256::from_str_radix(digits, 10)
        .map_err(|_| Error::invalid_input("Please enter a valid amount"))
}

/// Render base units as a decimal string with at most six fractional digits,
/// trailing zeros trimmed.
pub fn display_token_amount(value: U256, decimals: u8) -> String {
    let scale = U256::from(10u8).pow(decimals as u32);
    let int = value / scale;
    let frac = value % scale;

    if frac == U256::ZERO {
        return int.to_string();
    }

    let mut frac_str = format!("{frac:0>width$}", width = decimals as usize);
    frac_str.truncate(6);
    while frac_str.ends_with('0') {
        frac_str.pop();
    }
    if frac_str.is_empty() {
        return int.to_string();
    }
    format!("{int}.{frac_str}")
}

/// `0x1234...abcd` form for status lines.
pub fn shorten_address(address: &Address) -> String {
    let hex = address.to_hex();
    format!("{}...{}", &hex[..6], &hex[hex.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn units(n: u128) -> U256 {
        U256::from(n) * U256::from(10u8).pow(18)
    }

    #[test]
    fn parses_whole_and_fractional_amounts() {
        assert_eq!(parse_token_amount("5", 18).unwrap(), units(5));
        assert_eq!(parse_token_amount("1.5", 18).unwrap(), units(3) / 2);
        assert_eq!(parse_token_amount(".5", 18).unwrap(), units(1) / 2);
        assert_eq!(
            parse_token_amount("0.000001", 18).unwrap(),
            U256::from(10u8).pow(12)
        );
        assert_eq!(parse_token_amount(" 2 ", 18).unwrap(), units(2));
    }

    #[test]
    fn rejects_invalid_amounts() {
        assert!(parse_token_amount("", 18).is_err());
        assert!(parse_token_amount("abc", 18).is_err());
        assert!(parse_token_amount("1.2.3", 18).is_err());
        assert!(parse_token_amount("0", 18).is_err());
        assert!(parse_token_amount("0.0", 18).is_err());
        assert!(parse_token_amount(".", 18).is_err());
        assert!(parse_token_amount("-1", 18).is_err());
        // 19 fractional digits against 18 decimals
        assert!(parse_token_amount("0.0000000000000000001", 18).is_err());
    }

    #[test]
    fn displays_amounts_with_trimmed_fraction() {
        assert_eq!(display_token_amount(units(5), 18), "5");
        assert_eq!(display_token_amount(units(3) / 2, 18), "1.5");
        assert_eq!(display_token_amount(U256::from(10u8).pow(12), 18), "0.000001");
        // below the six displayed places
        assert_eq!(display_token_amount(U256::ONE, 18), "0");
        assert_eq!(display_token_amount(U256::ZERO, 18), "0");
    }

    #[test]
    fn parse_display_round_trip() {
        for text in ["7", "0.25", "123.456789"] {
            let value = parse_token_amount(text, 18).unwrap();
            assert_eq!(display_token_amount(value, 18), text);
        }
    }

    #[test]
    fn shortens_addresses() {
        let addr = Address::from_str("0x117aeead6f30e9febea4b6bf8477b722f5a4d970").unwrap();
        assert_eq!(shorten_address(&addr), "0x117a...d970");
    }
}
