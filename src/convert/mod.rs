pub mod conversion_errors;
pub mod decimal_to_hex;
pub mod hex_to_decimal;

use std::fmt;
use std::str::FromStr;

pub use crate::convert::conversion_errors::ConversionError;
pub use crate::convert::decimal_to_hex::{format_hex, parse_decimal, to_hex, to_hex_with_width};
pub use crate::convert::hex_to_decimal::{to_decimal, to_decimal_with, ScanStep};

/// Bit width used to render negative values in two's complement.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Width {
    Eight,
    Sixteen,
    ThirtyTwo,
    SixtyFour,
}

impl Width {
    pub fn bits(self) -> u32 {
        match self {
            Width::Eight => 8,
            Width::Sixteen => 16,
            Width::ThirtyTwo => 32,
            Width::SixtyFour => 64,
        }
    }

    /// Smallest value representable as a signed integer of this width.
    pub fn min_value(self) -> i64 {
        match self {
            Width::SixtyFour => i64::MIN,
            w => -(1i64 << (w.bits() - 1)),
        }
    }

    /// Largest value representable as an unsigned integer of this width, clamped to `i64`.
    pub fn max_value(self) -> i64 {
        match self {
            Width::SixtyFour => i64::MAX,
            w => (1i64 << w.bits()) - 1,
        }
    }

    pub fn mask(self) -> u64 {
        match self {
            Width::SixtyFour => u64::MAX,
            w => (1u64 << w.bits()) - 1,
        }
    }
}

impl FromStr for Width {
    type Err = ConversionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "8" => Ok(Width::Eight),
            "16" => Ok(Width::Sixteen),
            "32" => Ok(Width::ThirtyTwo),
            "64" => Ok(Width::SixtyFour),
            other => Err(ConversionError::UnsupportedWidth {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} bits", self.bits())
    }
}
