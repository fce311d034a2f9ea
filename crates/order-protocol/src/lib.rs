//! order-protocol
//!
//! Turns order text into `order_core::Order` values and orders into
//! fixed-size binary records.
//!
//! - [`record_codec`] : 34-byte binary record (what goes on the wire)
//! - [`text_codec`]   : `SIDE QTY PRICE [SYMBOL]` line parser
//! - [`le_bytes`]     : little-endian integer helpers shared by the codec

pub mod wire_types;
pub mod le_bytes;
pub mod error;
pub mod record_codec;
pub mod text_codec;

pub use error::ProtocolError;
pub use record_codec::{encode_order, hex_dump};
pub use text_codec::parse_order_line;
pub use wire_types::{Record, RECORD_LEN};
