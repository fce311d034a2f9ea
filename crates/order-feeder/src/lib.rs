//! order-feeder
//!
//! Reads `SIDE QTY PRICE [SYMBOL]` lines and streams each as a fixed-size
//! binary order record over one TCP connection.

pub mod config;
pub mod error;
pub mod source;
pub mod transmitter;
pub mod driver;
pub mod logging;

pub use config::{Config, Endpoint};
pub use driver::{run, Driver, RunStats};
pub use error::FeedError;
pub use source::{InputSource, SourceLine, SourceReader};
pub use transmitter::Transmitter;
