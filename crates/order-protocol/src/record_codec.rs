//! Binary encoding of an order into its fixed-size record.
//!
//! ```text
//! [0]      : message type (WireMessageType::Order = 0)
//! [1..9]   : symbol, ASCII, left-justified, zero-padded
//! [9..13]  : quantity (u32 LE)
//! [13..17] : price (u32 LE)
//! [17]     : side (0=Buy, 1=Sell)
//! [18..34] : external id, zero
//! ```
//!
//! Records are written back to back on the stream with no delimiter.
//! There is no decoder; the service side owns that.

use order_core::{validate_symbol, Order};

use crate::error::ProtocolError;
use crate::le_bytes::put_u32_le;
use crate::wire_types::{
    Record, WireMessageType, MESSAGE_TYPE_OFFSET, PRICE_OFFSET, QUANTITY_OFFSET, RECORD_LEN,
    SIDE_OFFSET, SYMBOL_OFFSET,
};

/// Encode `order` into a new record.
///
/// Fails with [`ProtocolError::InvariantViolation`] when the symbol is
/// 8 bytes or longer. Bytes not covered by a field stay zero.
pub fn encode_order(order: &Order) -> Result<Record, ProtocolError> {
    validate_symbol(&order.symbol)?;

    let mut buf = [0u8; RECORD_LEN];
    buf[MESSAGE_TYPE_OFFSET] = WireMessageType::Order as u8;

    let symbol_bytes = order.symbol.as_bytes();
    buf[SYMBOL_OFFSET..SYMBOL_OFFSET + symbol_bytes.len()].copy_from_slice(symbol_bytes);

    put_u32_le(&mut buf, QUANTITY_OFFSET, order.quantity);
    put_u32_le(&mut buf, PRICE_OFFSET, order.price);
    buf[SIDE_OFFSET] = order.side.wire_byte();

    Ok(buf)
}

/// Render a record as space-separated hex, for debug logging.
pub fn hex_dump(record: &Record) -> String {
    record
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect::<Vec<_>>()
        .join(" ")
}
