//! The order instruction sent to the service.
//!
//! An `Order` is built from one input line, encoded, written to the
//! connection and then dropped. Nothing keeps orders around.

use crate::error::OrderError;
use crate::side::Side;

/// Longest symbol accepted, in bytes. The wire field is 8 bytes and the
/// service expects at least one trailing zero.
pub const MAX_SYMBOL_LEN: usize = 7;

/// Symbol used when an input line leaves it out.
pub const DEFAULT_SYMBOL: &str = "GOOG";

/// A single buy/sell instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub side: Side,
    pub quantity: u32,
    pub price: u32, // raw integer, no currency scaling
    pub symbol: String,
}

impl Order {
    /// Build an order, checking the symbol invariant.
    pub fn new(
        side: Side,
        quantity: u32,
        price: u32,
        symbol: impl Into<String>,
    ) -> Result<Self, OrderError> {
        let symbol = symbol.into();
        validate_symbol(&symbol)?;
        Ok(Order {
            side,
            quantity,
            price,
            symbol,
        })
    }
}

/// Check that `symbol` fits the wire field (strictly fewer than 8 bytes).
pub fn validate_symbol(symbol: &str) -> Result<(), OrderError> {
    if symbol.len() > MAX_SYMBOL_LEN {
        return Err(OrderError::SymbolTooLong {
            symbol: symbol.to_string(),
            len: symbol.len(),
        });
    }
    Ok(())
}
