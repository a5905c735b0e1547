use std::io;

use chat_runner::{run, Config, Error, ProviderFactory};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    // Logs go to stderr; stdout carries only the answer.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::from_env();
    let provider = ProviderFactory::from_env(&config)?;

    let stdout = io::stdout();
    run(&config, provider.as_ref(), &mut stdout.lock()).await
}
