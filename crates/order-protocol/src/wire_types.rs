//! Low-level wire constants for the order record.
//!
//! This module defines:
//! - The message type tag carried in the first byte.
//! - Offsets and widths of every field in the fixed record.
//!
//! The actual encode logic lives in `record_codec`.

/// Message types understood by the order service.
///
/// Only orders are produced here; the tag occupies byte 0 of a record.
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WireMessageType {
    /// New order.
    Order = 0,
}

impl WireMessageType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(WireMessageType::Order),
            _ => None,
        }
    }
}

/// Total size of one order record. The fixed length is the framing.
pub const RECORD_LEN: usize = 34;

pub const MESSAGE_TYPE_OFFSET: usize = 0;

pub const SYMBOL_OFFSET: usize = 1;
/// Width of the zero-padded symbol field.
pub const SYMBOL_FIELD_LEN: usize = 8;

pub const QUANTITY_OFFSET: usize = 9;
pub const PRICE_OFFSET: usize = 13;
pub const SIDE_OFFSET: usize = 17;

/// Client-assigned external id area. Not used yet, always zero.
pub const EXTERNAL_ID_OFFSET: usize = 18;
pub const EXTERNAL_ID_LEN: usize = 16;

/// A complete encoded order.
pub type Record = [u8; RECORD_LEN];
