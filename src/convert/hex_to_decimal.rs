use crate::convert::conversion_errors::ConversionError;
use crate::utils::digit_value;

/// One digit of a hexadecimal scan, handed to the caller's observer.
#[derive(Debug, PartialEq, Clone)]
pub struct ScanStep {
    /// Index of the digit counting from the left
    pub position: usize,
    pub digit: u8,
    /// `16^k` for this digit, or `None` once that no longer fits in a `u64`
    pub place_value: Option<u64>,
    /// Accumulated value after this digit
    pub total: u64,
}

/// Converts an uppercase hexadecimal digit string to its value.
pub fn to_decimal(digits: &str) -> Result<u64, ConversionError> {
    to_decimal_with(digits, |_| {})
}

/// Same as `to_decimal`, but reports every digit to `observe` in scan order
/// (least significant first).
pub fn to_decimal_with<F>(digits: &str, mut observe: F) -> Result<u64, ConversionError>
where
    F: FnMut(&ScanStep),
{
    let values = validate(digits)?;

    let mut total: u64 = 0;
    let mut base: Option<u64> = Some(1);
    for (offset, &digit) in values.iter().rev().enumerate() {
        if offset > 0 {
            base = base.and_then(|b| b.checked_mul(16));
        }
        if digit != 0 {
            total = base
                .and_then(|b| b.checked_mul(digit as u64))
                .and_then(|term| total.checked_add(term))
                .ok_or_else(|| ConversionError::Overflow {
                    input: digits.to_string(),
                    bits: 64,
                })?;
        }
        observe(&ScanStep {
            position: values.len() - 1 - offset,
            digit,
            place_value: base,
            total,
        });
    }
    Ok(total)
}

fn validate(digits: &str) -> Result<Vec<u8>, ConversionError> {
    digits
        .chars()
        .enumerate()
        .map(|(position, character)| {
            digit_value(character).ok_or(ConversionError::InvalidDigitCharacter {
                character,
                position,
            })
        })
        .collect()
}
