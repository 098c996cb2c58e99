use crate::convert::conversion_errors::ConversionError;
use crate::convert::Width;
use crate::utils::digit_char;

/// Renders `value` as uppercase hexadecimal, most significant digit first.
///
/// Digits are produced least significant first by repeated `% 16` and `/ 16`,
/// then reversed. Zero is handled up front so it renders as `"0"` rather than
/// an empty string.
pub fn format_hex(value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut n = value;
    let mut digits = Vec::with_capacity(16);
    while n != 0 {
        // `n % 16` is always a valid digit
        if let Some(c) = digit_char((n % 16) as u8) {
            digits.push(c);
        }
        n /= 16;
    }
    digits.iter().rev().collect()
}

/// Converts a non-negative integer to hexadecimal.
pub fn to_hex(n: i64) -> Result<String, ConversionError> {
    if n < 0 {
        return Err(ConversionError::NegativeInputUnsupported { value: n });
    }
    Ok(format_hex(n as u64))
}

/// Converts `n` to hexadecimal using a two's-complement rendering of `width` bits.
///
/// Accepts anything from the signed minimum to the unsigned maximum of the
/// width, so both `-1` and `255` are valid at 8 bits (and both yield `FF`).
/// Output is not padded to the width.
pub fn to_hex_with_width(n: i64, width: Width) -> Result<String, ConversionError> {
    if n < width.min_value() || n > width.max_value() {
        return Err(ConversionError::Overflow {
            input: n.to_string(),
            bits: width.bits(),
        });
    }
    Ok(format_hex((n as u64) & width.mask()))
}

/// Parses one decimal token, as typed by a user.
pub fn parse_decimal(token: &str) -> Result<i64, ConversionError> {
    let token = token.trim();
    token
        .parse::<i64>()
        .map_err(|_| ConversionError::InvalidNumericInput {
            input: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_hex() {
        assert_eq!(to_hex(2545), Ok("9F1".to_string()));
        assert_eq!(to_hex(255), Ok("FF".to_string()));
        assert_eq!(to_hex(16), Ok("10".to_string()));
        assert_eq!(to_hex(10), Ok("A".to_string()));
        assert_eq!(to_hex(i64::MAX), Ok("7FFFFFFFFFFFFFFF".to_string()));
    }

    #[test]
    fn test_zero_is_a_single_digit() {
        assert_eq!(to_hex(0), Ok("0".to_string()));
        assert_eq!(format_hex(0), "0");
    }

    #[test]
    fn test_negative_without_width_is_rejected() {
        assert_eq!(
            to_hex(-1),
            Err(ConversionError::NegativeInputUnsupported { value: -1 })
        );
        assert_eq!(
            to_hex(i64::MIN),
            Err(ConversionError::NegativeInputUnsupported { value: i64::MIN })
        );
    }

    #[test]
    fn test_twos_complement() {
        assert_eq!(to_hex_with_width(-1, Width::Eight), Ok("FF".to_string()));
        assert_eq!(to_hex_with_width(-128, Width::Eight), Ok("80".to_string()));
        assert_eq!(
            to_hex_with_width(-2545, Width::Sixteen),
            Ok("F60F".to_string())
        );
        assert_eq!(
            to_hex_with_width(-1, Width::SixtyFour),
            Ok("FFFFFFFFFFFFFFFF".to_string())
        );
        assert_eq!(
            to_hex_with_width(i64::MIN, Width::SixtyFour),
            Ok("8000000000000000".to_string())
        );
    }

    #[test]
    fn test_width_does_not_pad_positive_values() {
        assert_eq!(to_hex_with_width(1, Width::ThirtyTwo), Ok("1".to_string()));
        assert_eq!(to_hex_with_width(255, Width::Eight), Ok("FF".to_string()));
    }

    #[test]
    fn test_width_out_of_range() {
        assert_eq!(
            to_hex_with_width(-129, Width::Eight),
            Err(ConversionError::Overflow {
                input: "-129".to_string(),
                bits: 8
            })
        );
        assert_eq!(
            to_hex_with_width(256, Width::Eight),
            Err(ConversionError::Overflow {
                input: "256".to_string(),
                bits: 8
            })
        );
    }

    #[test]
    fn test_repeated_calls_agree() {
        let first = to_hex(123456789).unwrap();
        for _ in 0..10 {
            assert_eq!(to_hex(123456789).unwrap(), first);
        }
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("2545"), Ok(2545));
        assert_eq!(parse_decimal(" -7\n"), Ok(-7));
        assert_eq!(
            parse_decimal("12ab"),
            Err(ConversionError::InvalidNumericInput {
                input: "12ab".to_string()
            })
        );
        assert_eq!(parse_decimal("").is_err(), true);
        assert_eq!(parse_decimal("99999999999999999999").is_err(), true);
    }
}
