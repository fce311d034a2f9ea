//! Configuration for the order feeder.
//!
//! Everything the run needs is carried in one `Config` value handed to
//! [`crate::driver::run`]. The binary fills it from CLI flags, which fall
//! back to these environment variables:
//!
//! - `ORDER_FEEDER_HOST`   (default: "localhost")
//! - `ORDER_FEEDER_PORT`   (default: "13579")
//! - `ORDER_FEEDER_SYMBOL` (default: "GOOG")

use std::fmt;

use order_core::{validate_symbol, DEFAULT_SYMBOL};

use crate::error::FeedError;
use crate::source::InputSource;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 13579;

/// Host and port of the order service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub host: String,
    pub port: u16,
}

impl Endpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Endpoint {
            host: host.into(),
            port,
        }
    }

    /// Convenience: `host:port` string accepted by `TcpStream::connect`.
    pub fn socket_addr_string(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Endpoint::new(DEFAULT_HOST, DEFAULT_PORT)
    }
}

/// Feeder configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Where records are sent.
    pub endpoint: Endpoint,

    /// Symbol used for lines with only `SIDE QTY PRICE`.
    pub default_symbol: String,

    /// Where order lines come from.
    pub input: InputSource,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: Endpoint::default(),
            default_symbol: DEFAULT_SYMBOL.to_string(),
            input: InputSource::Stdin,
        }
    }
}

impl Config {
    /// Reject settings that would make every run fail later on.
    pub fn validate(&self) -> Result<(), FeedError> {
        if self.endpoint.host.trim().is_empty() {
            return Err(FeedError::Config("endpoint host is empty".to_string()));
        }
        validate_symbol(&self.default_symbol)
            .map_err(|e| FeedError::Config(format!("default symbol: {}", e)))?;
        Ok(())
    }
}
