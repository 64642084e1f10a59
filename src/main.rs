use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;

use calculator_api::config::{Cli, Config};
use calculator_api::server::{Server, shutdown_signal};
use calculator_api::{api, logging, open_store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let config = Config::from_cli(Cli::parse())?;
    logging::init(config.log_format);

    let store = open_store(config.database.as_ref())
        .await
        .context("failed to open calculation store")?;

    let addr = config.http.addr()?;
    let server = Server::bind(addr, api::router(store.clone()))
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    let served = server.run(shutdown_signal()).await;

    store.close().await;
    tracing::info!("Calculation store closed");

    served.context("server error")
}
