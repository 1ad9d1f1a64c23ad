//! Fixed-point amount encoding
//!
//! BNS stores amounts as `whole` coins plus `fractional` billionths. The
//! decimal quantity string is split with arbitrary precision arithmetic so
//! no value ever passes through floating point.

use num_bigint::BigUint;

use crate::error::WasmBnsError;
use crate::proto::coin::Coin;
use crate::types::{Amount, WEAVE_FRACTIONAL_DIGITS};

fn fractional_divisor() -> BigUint {
    BigUint::from(10u32).pow(WEAVE_FRACTIONAL_DIGITS)
}

/// Encode an amount into its wire `Coin`
///
/// Zero components and an empty ticker are left at their default value so
/// they are omitted on the wire.
///
/// # Arguments
/// * `amount` - Amount with exactly 9 fractional digits
pub fn encode_amount(amount: &Amount) -> Result<Coin, WasmBnsError> {
    if amount.fractional_digits != WEAVE_FRACTIONAL_DIGITS {
        return Err(WasmBnsError::InvalidAmount(format!(
            "Fractional digits must be {} but was {}",
            WEAVE_FRACTIONAL_DIGITS, amount.fractional_digits
        )));
    }

    let quantity = &amount.quantity;
    if quantity.is_empty() || !quantity.bytes().all(|b| b.is_ascii_digit()) {
        return Err(WasmBnsError::InvalidAmount(format!(
            "Quantity must be a non-negative integer string, got '{}'",
            quantity
        )));
    }

    let value = BigUint::parse_bytes(quantity.as_bytes(), 10)
        .ok_or_else(|| WasmBnsError::InvalidAmount(format!("Invalid quantity '{}'", quantity)))?;
    let divisor = fractional_divisor();

    let whole = i64::try_from(&(&value / &divisor)).map_err(|_| {
        WasmBnsError::InvalidAmount(format!("Quantity '{}' exceeds the int64 range", quantity))
    })?;
    // always below 10^9
    let fractional = i64::try_from(&(&value % &divisor))
        .map_err(|_| WasmBnsError::InvalidAmount("Fractional part out of range".to_string()))?;

    Ok(Coin {
        whole,
        fractional,
        ticker: amount.token_ticker.clone(),
    })
}

/// Decode a wire `Coin` into an amount with 9 fractional digits
pub fn decode_amount(coin: &Coin) -> Result<Amount, WasmBnsError> {
    if coin.whole < 0 {
        return Err(WasmBnsError::InvalidAmount(
            "Component `whole` must not be negative".to_string(),
        ));
    }
    if coin.fractional < 0 {
        return Err(WasmBnsError::InvalidAmount(
            "Component `fractional` must not be negative".to_string(),
        ));
    }

    let divisor = fractional_divisor();
    let fractional = BigUint::from(coin.fractional.unsigned_abs());
    if fractional >= divisor {
        return Err(WasmBnsError::InvalidAmount(format!(
            "Component `fractional` must be below 10^{}, got {}",
            WEAVE_FRACTIONAL_DIGITS, coin.fractional
        )));
    }

    let quantity = BigUint::from(coin.whole.unsigned_abs()) * divisor + fractional;

    Ok(Amount {
        quantity: quantity.to_string(),
        fractional_digits: WEAVE_FRACTIONAL_DIGITS,
        token_ticker: coin.ticker.clone(),
    })
}

/// Decode a coin that must be present in a named wire field
pub(crate) fn decode_amount_field(field: &str, coin: Option<&Coin>) -> Result<Amount, WasmBnsError> {
    decode_amount(coin.ok_or_else(|| WasmBnsError::missing(field))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn coin(whole: i64, fractional: i64, ticker: &str) -> Coin {
        Coin {
            whole,
            fractional,
            ticker: ticker.to_string(),
        }
    }

    #[rstest]
    #[case("3123456789", coin(3, 123456789, "ASH"))]
    #[case("1", coin(0, 1, "ASH"))]
    #[case("1000000000", coin(1, 0, "ASH"))]
    #[case("0", coin(0, 0, "ASH"))]
    #[case("9223372036854775807999999999", coin(i64::MAX, 999999999, "ASH"))]
    fn test_encode_amount(#[case] quantity: &str, #[case] expected: Coin) {
        let encoded = encode_amount(&Amount::new(quantity, "ASH")).unwrap();
        assert_eq!(encoded, expected);
    }

    #[test]
    fn test_small_amount_omits_whole() {
        use prost::Message;

        // only fractional (tag 2) and ticker (tag 3) are written
        let bytes = encode_amount(&Amount::new("1", "ASH"))
            .unwrap()
            .encode_to_vec();
        assert_eq!(hex::encode(bytes), "10011a03415348");
    }

    #[rstest]
    #[case(0)]
    #[case(6)]
    #[case(18)]
    fn test_wrong_fractional_digits(#[case] digits: u32) {
        let amount = Amount {
            quantity: "1".to_string(),
            fractional_digits: digits,
            token_ticker: "ASH".to_string(),
        };
        let err = encode_amount(&amount).unwrap_err();
        assert_eq!(
            err,
            WasmBnsError::InvalidAmount(format!("Fractional digits must be 9 but was {}", digits))
        );
    }

    #[rstest]
    #[case("")]
    #[case("-1")]
    #[case("1.5")]
    #[case("1_000")]
    #[case("12a")]
    fn test_malformed_quantity(#[case] quantity: &str) {
        let err = encode_amount(&Amount::new(quantity, "ASH")).unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAmount(_)));
    }

    #[test]
    fn test_whole_out_of_range() {
        let err = encode_amount(&Amount::new("9223372036854775808000000000", "ASH")).unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAmount(_)));
    }

    #[test]
    fn test_decode_amount() {
        let amount = decode_amount(&coin(3, 123456789, "ASH")).unwrap();
        assert_eq!(amount, Amount::new("3123456789", "ASH"));

        let amount = decode_amount(&coin(0, 0, "")).unwrap();
        assert_eq!(amount.quantity, "0");
        assert_eq!(amount.token_ticker, "");
    }

    #[test]
    fn test_decode_negative_components() {
        let err = decode_amount(&coin(-1, 0, "ASH")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Component `whole` must not be negative"));

        let err = decode_amount(&coin(1, -1, "ASH")).unwrap_err();
        assert!(err
            .to_string()
            .contains("Component `fractional` must not be negative"));
    }

    #[test]
    fn test_decode_missing_amount() {
        assert_eq!(
            decode_amount_field("fee", None).unwrap_err(),
            WasmBnsError::missing("fee")
        );
    }

    #[test]
    fn test_decode_fractional_overflow() {
        let err = decode_amount(&coin(0, 1_000_000_000, "ASH")).unwrap_err();
        assert!(matches!(err, WasmBnsError::InvalidAmount(_)));
    }
}
