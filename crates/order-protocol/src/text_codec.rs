//! Text order parser.
//!
//! Input format, one order per line, tokens separated by any whitespace:
//!
//! - `SIDE QTY PRICE`         (symbol falls back to the configured default)
//! - `SIDE QTY PRICE SYMBOL`
//!
//! `SIDE` is `B` for buy; every other token is a sell.

use order_core::{validate_symbol, Order, Side};

use crate::error::ProtocolError;

/// Parse a single line into an `Order`.
///
/// Returns `Ok(None)` for blank or whitespace-only lines.
pub fn parse_order_line(line: &str, default_symbol: &str) -> Result<Option<Order>, ProtocolError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(None);
    }

    let symbol = match tokens.len() {
        3 => default_symbol,
        4 => tokens[3],
        n => return Err(ProtocolError::MalformedLine { tokens: n }),
    };

    let side = Side::from_token(tokens[0]);
    let quantity = parse_u32("quantity", tokens[1])?;
    let price = parse_u32("price", tokens[2])?;

    validate_symbol(symbol)?;

    Ok(Some(Order {
        side,
        quantity,
        price,
        symbol: symbol.to_string(),
    }))
}

// -----------------------------------------------------------------------------
// Helpers
// -----------------------------------------------------------------------------

fn parse_u32(field: &'static str, token: &str) -> Result<u32, ProtocolError> {
    // Accepts an optional leading '+'; rejects '-', fractions and overflow.
    token.parse::<u32>().map_err(|_| invalid(field, token))
}

fn invalid(field: &'static str, token: &str) -> ProtocolError {
    ProtocolError::InvalidNumber {
        field,
        token: token.to_string(),
    }
}
