//! order-core
//!
//! Pure order types shared by the codecs and the feeder:
//! - side (with the permissive `B`-or-sell mapping)
//! - order representation and the symbol-length rule
//! - error types

pub mod side;
pub mod order;
pub mod error;

pub use side::Side;
pub use order::{validate_symbol, Order, DEFAULT_SYMBOL, MAX_SYMBOL_LEN};
pub use error::OrderError;
