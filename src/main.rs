use std::path::PathBuf;

use clap::Parser;

use duty::config::loader::{load_config, CONFIG_FILE_ENV, DEFAULT_CONFIG_FILE};
use duty::lifecycle::{signals, startup, Shutdown};
use duty::observability::logging;

#[derive(Parser)]
#[command(name = "duty")]
#[command(about = "Configurable HTTP stub server", long_about = None)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(short, long, env = CONFIG_FILE_ENV, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("duty: {e}");
            std::process::exit(1);
        }
    };
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }

    logging::init_logging(&config.observability)?;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config = %cli.config.display(),
        "duty starting"
    );

    let shutdown = Shutdown::new();
    signals::spawn_signal_handler(shutdown.clone());

    startup::run(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
