use std::error::Error;
use std::fmt;

#[derive(Debug, PartialEq, Clone)]
pub enum ConversionError {
    InvalidNumericInput { input: String },
    InvalidDigitCharacter { character: char, position: usize },
    Overflow { input: String, bits: u32 },
    NegativeInputUnsupported { value: i64 },
    UnsupportedWidth { input: String },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConversionError::InvalidNumericInput { input } => {
                write!(f, "'{}' is not a decimal integer", input)
            }
            ConversionError::InvalidDigitCharacter {
                character,
                position,
            } => write!(
                f,
                "'{}' at position {} is not a hexadecimal digit (expected 0-9 or A-F)",
                character, position
            ),
            ConversionError::Overflow { input, bits } => {
                write!(f, "'{}' does not fit in {} bits", input, bits)
            }
            ConversionError::NegativeInputUnsupported { value } => write!(
                f,
                "negative value {} needs a two's-complement width",
                value
            ),
            ConversionError::UnsupportedWidth { input } => {
                write!(f, "unsupported width '{}' (expected 8, 16, 32 or 64)", input)
            }
        }
    }
}

impl Error for ConversionError {}
