//! codec/mod.rs
//! Bit Stream Codec: moves raw symbols and packed (code, symbol) pairs between
//! memory and an underlying byte stream.
//!
//! Wire layout of one pair: `bitlen` bits of the code, LSB first, then the 8
//! bits of the symbol, LSB first. Pairs are packed back to back; only the final
//! flush pads the last byte, and it pads with zeros.
//!
//! Every reader/writer counts the bytes it moved so the run loops can report
//! them without shared state.

pub mod io;
pub mod symbols;
pub mod pairs;

pub use io::*;
pub use symbols::*;
pub use pairs::*;

use crate::constants::{Code, Symbol};

/// One (code, symbol) unit of the compressed body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub code: Code,
    pub symbol: Symbol,
}
