use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use leoneta::{Commands, Container, ContainerConfig, Router};

#[derive(Parser)]
#[command(name = "leoneta")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend base URL (overrides LEONETA_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Where the session tokens are kept (overrides LEONETA_DATA_DIR)
    #[arg(short, long, global = true)]
    data_dir: Option<String>,

    /// Per-request timeout in seconds (overrides LEONETA_TIMEOUT_SECS)
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    /// Keep tokens for this run only instead of the token file
    #[arg(long, global = true)]
    memory_tokens: bool,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "leoneta=debug"
    } else {
        "leoneta=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let mut config = ContainerConfig::from_env();
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(secs) = cli.timeout_secs.filter(|s| *s > 0) {
        config.timeout = Duration::from_secs(secs);
    }
    if cli.memory_tokens {
        config.memory_tokens = true;
    }

    let container = Container::new(config)?;
    debug!("Using backend {}", container.api_url());

    let router = Router::new(&container);
    let result = router.route(cli.command).await;
    container.ensure_session()?;
    println!("{}", result?);

    Ok(())
}
