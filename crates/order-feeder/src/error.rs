//! Fatal errors of a feeder run.
//!
//! None of these are recovered from: the first one ends the run. Records
//! sent before it stay sent.

use std::io;

use order_protocol::ProtocolError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    /// An input line could not be turned into a record.
    #[error("line {line_no} rejected: {line:?}")]
    Line {
        line_no: usize,
        line: String,
        #[source]
        source: ProtocolError,
    },

    /// Connect failed, or a write to the open connection failed.
    #[error("connection to {endpoint} failed")]
    Connection {
        endpoint: String,
        #[source]
        source: io::Error,
    },

    /// The input source could not be opened or read.
    #[error("cannot read input {input}")]
    Source {
        input: String,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),
}
