//! Test-only inverse of the record encoder.

use order_core::Side;
use order_protocol::le_bytes::get_u32_le;
use order_protocol::wire_types::{
    Record, EXTERNAL_ID_LEN, EXTERNAL_ID_OFFSET, MESSAGE_TYPE_OFFSET, PRICE_OFFSET,
    QUANTITY_OFFSET, SIDE_OFFSET, SYMBOL_FIELD_LEN, SYMBOL_OFFSET,
};

#[derive(Debug, PartialEq, Eq)]
pub struct DecodedRecord {
    pub message_type: u8,
    pub symbol: String,
    pub quantity: u32,
    pub price: u32,
    pub side: Side,
    pub external_id: [u8; EXTERNAL_ID_LEN],
}

pub fn decode_record(buf: &Record) -> DecodedRecord {
    let field = &buf[SYMBOL_OFFSET..SYMBOL_OFFSET + SYMBOL_FIELD_LEN];
    let end = field.iter().position(|&b| b == 0).unwrap_or(SYMBOL_FIELD_LEN);
    let symbol = std::str::from_utf8(&field[..end])
        .expect("symbol is not UTF-8")
        .to_string();

    let side = match buf[SIDE_OFFSET] {
        0 => Side::Buy,
        1 => Side::Sell,
        other => panic!("invalid side byte {}", other),
    };

    let mut external_id = [0u8; EXTERNAL_ID_LEN];
    external_id.copy_from_slice(&buf[EXTERNAL_ID_OFFSET..EXTERNAL_ID_OFFSET + EXTERNAL_ID_LEN]);

    DecodedRecord {
        message_type: buf[MESSAGE_TYPE_OFFSET],
        symbol,
        quantity: get_u32_le(buf, QUANTITY_OFFSET),
        price: get_u32_le(buf, PRICE_OFFSET),
        side,
        external_id,
    }
}
