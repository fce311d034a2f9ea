//! Order feeder: sends order lines to the order service as binary records.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use order_feeder::config::{Config, Endpoint, DEFAULT_HOST, DEFAULT_PORT};
use order_feeder::{logging, InputSource};

#[derive(Parser)]
#[clap(name = "order-feeder")]
#[clap(about = "Send order lines to an order service as fixed-size binary records")]
struct Cli {
    /// File with one `SIDE QTY PRICE [SYMBOL]` order per line (default: stdin)
    input: Option<PathBuf>,

    /// Order service host
    #[clap(long, env = "ORDER_FEEDER_HOST", default_value = DEFAULT_HOST)]
    host: String,

    /// Order service port
    #[clap(short, long, env = "ORDER_FEEDER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Symbol used for lines without one
    #[clap(short, long, env = "ORDER_FEEDER_SYMBOL", default_value = order_core::DEFAULT_SYMBOL)]
    symbol: String,

    /// Log filter, e.g. `info` or `order_feeder=debug`
    #[clap(long, env = "ORDER_FEEDER_LOG", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn into_config(self) -> Config {
        Config {
            endpoint: Endpoint::new(self.host, self.port),
            default_symbol: self.symbol,
            input: InputSource::from(self.input),
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level)?;

    let config = cli.into_config();
    info!(
        "Feeding {} to {} (default symbol {})",
        config.input, config.endpoint, config.default_symbol
    );

    order_feeder::run(config).await.context("order feed aborted")?;
    Ok(())
}
