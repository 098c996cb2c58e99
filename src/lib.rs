//! Conversions between decimal integers and uppercase hexadecimal digit strings.

#[macro_use]
extern crate nom;

#[macro_use]
extern crate log;

pub mod convert;
pub mod repl;
pub mod utils;

pub use crate::convert::{to_decimal, to_hex, ConversionError, Width};
