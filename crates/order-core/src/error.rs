//! Error types for order construction.

use thiserror::Error;

use crate::order::MAX_SYMBOL_LEN;

/// Violations of the order invariants.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderError {
    /// Symbol does not fit the 8-byte field with its trailing zero.
    #[error("symbol {symbol:?} is {len} bytes long, at most {max} allowed", max = MAX_SYMBOL_LEN)]
    SymbolTooLong { symbol: String, len: usize },
}
