//! Sequential feed loop and top-level run wiring.
//!
//! This module:
//! - Opens the configured input source.
//! - Connects the single `Transmitter`.
//! - Feeds every line through parse → encode → send, in input order.
//! - Stops at the first error; earlier records are already on the wire.

use tokio::io::{AsyncBufRead, AsyncWrite};
use tracing::{debug, info};

use order_protocol::{encode_order, parse_order_line, ProtocolError, Record};

use crate::config::Config;
use crate::error::FeedError;
use crate::source::{SourceLine, SourceReader};
use crate::transmitter::Transmitter;

/// Counters for one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Non-blank lines taken from the source.
    pub lines_read: u64,
    pub orders_sent: u64,
}

/// Turns lines into records and hands them to a transmitter.
#[derive(Debug, Clone)]
pub struct Driver {
    default_symbol: String,
}

impl Driver {
    pub fn new(default_symbol: impl Into<String>) -> Self {
        Driver {
            default_symbol: default_symbol.into(),
        }
    }

    /// Feed every remaining line of `source` into `transmitter`.
    pub async fn run<R, W>(
        &self,
        source: &mut SourceReader<R>,
        transmitter: &mut Transmitter<W>,
    ) -> Result<RunStats, FeedError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut stats = RunStats::default();

        while let Some(line) = source.next_line().await? {
            stats.lines_read += 1;

            let Some(record) = self.encode_line(&line)? else {
                continue;
            };
            transmitter.send(&record).await?;
            stats.orders_sent += 1;
        }

        Ok(stats)
    }

    /// Parse and encode one line. `None` means the line carries no order.
    pub fn encode_line(&self, line: &SourceLine) -> Result<Option<Record>, FeedError> {
        let reject = |source: ProtocolError| FeedError::Line {
            line_no: line.line_no,
            line: line.text.clone(),
            source,
        };

        let Some(order) = parse_order_line(&line.text, &self.default_symbol).map_err(reject)?
        else {
            return Ok(None);
        };
        debug!(
            "Line {}: {} {} @ {} {}",
            line.line_no,
            order.side.as_char(),
            order.quantity,
            order.price,
            order.symbol
        );

        let record = encode_order(&order).map_err(reject)?;
        Ok(Some(record))
    }
}

/// Run the feeder with the given configuration.
///
/// The connection is opened once, before the first line, and closed on
/// every way out of this function.
pub async fn run(config: Config) -> Result<RunStats, FeedError> {
    config.validate()?;

    let mut source = config.input.open().await?;
    let mut transmitter = Transmitter::connect(&config.endpoint).await?;
    let driver = Driver::new(config.default_symbol.clone());

    let outcome = driver.run(&mut source, &mut transmitter).await;
    match outcome {
        Ok(stats) => {
            transmitter.close().await?;
            info!(
                "Finished {}: {} line(s) read, {} order(s) sent",
                config.input, stats.lines_read, stats.orders_sent
            );
            Ok(stats)
        }
        Err(e) => {
            debug!(
                "Aborting after {} order(s) sent",
                transmitter.records_sent()
            );
            // Dropping the stream closes it.
            drop(transmitter);
            Err(e)
        }
    }
}
