//! The single outbound connection to the order service.
//!
//! A `Transmitter` is created once per run and owns its stream; nothing
//! else writes to it. Each record is written in full as soon as it is
//! handed over. There is no read path.

use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use order_protocol::{hex_dump, Record};

use crate::config::Endpoint;
use crate::error::FeedError;

pub struct Transmitter<W> {
    writer: W,
    peer: String,
    records_sent: u64,
}

impl Transmitter<TcpStream> {
    /// Resolve `endpoint` and open the connection.
    pub async fn connect(endpoint: &Endpoint) -> Result<Self, FeedError> {
        info!("Connecting to {}...", endpoint);

        let stream = match TcpStream::connect(endpoint.socket_addr_string()).await {
            Ok(stream) => stream,
            Err(e) => {
                debug!("Connection to {} failed: {}", endpoint, e);
                return Err(connection_error(&endpoint.to_string(), e));
            }
        };
        stream
            .set_nodelay(true)
            .map_err(|e| connection_error(&endpoint.to_string(), e))?;

        info!("Connected to {}", endpoint);
        Ok(Transmitter::new(stream, endpoint.to_string()))
    }
}

impl<W: AsyncWrite + Unpin> Transmitter<W> {
    /// Wrap an already-open writer. `peer` is only used in diagnostics.
    pub fn new(writer: W, peer: impl Into<String>) -> Self {
        Transmitter {
            writer,
            peer: peer.into(),
            records_sent: 0,
        }
    }

    /// Write one record to the connection.
    pub async fn send(&mut self, record: &Record) -> Result<(), FeedError> {
        self.writer
            .write_all(record)
            .await
            .map_err(|e| connection_error(&self.peer, e))?;
        self.writer
            .flush()
            .await
            .map_err(|e| connection_error(&self.peer, e))?;

        self.records_sent += 1;
        debug!("Sent record #{}: {}", self.records_sent, hex_dump(record));
        Ok(())
    }

    pub fn records_sent(&self) -> u64 {
        self.records_sent
    }

    /// Shut the write side down and hand the writer back.
    ///
    /// Dropping a `Transmitter` also closes the stream; this is the
    /// orderly path for a run that reached end of input.
    pub async fn close(mut self) -> Result<W, FeedError> {
        self.writer
            .shutdown()
            .await
            .map_err(|e| connection_error(&self.peer, e))?;
        info!(
            "Closed connection to {} after {} record(s)",
            self.peer, self.records_sent
        );
        Ok(self.writer)
    }
}

fn connection_error(peer: &str, source: std::io::Error) -> FeedError {
    FeedError::Connection {
        endpoint: peer.to_string(),
        source,
    }
}
