//! Errors raised while turning text into orders and orders into bytes.

use order_core::OrderError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// Line did not split into 3 or 4 whitespace-separated tokens.
    #[error("expected 3 or 4 fields (SIDE QTY PRICE [SYMBOL]), got {tokens}")]
    MalformedLine { tokens: usize },

    /// Quantity or price is not a base-10 `u32`.
    #[error("invalid {field}: {token:?} is not a non-negative 32-bit integer")]
    InvalidNumber { field: &'static str, token: String },

    /// The order breaks an invariant of the record layout.
    #[error(transparent)]
    InvariantViolation(#[from] OrderError),
}
