mod app;
mod config;
mod report;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::config::SourceCfg;

#[derive(Parser, Debug)]
#[command(version, about = "Register liquidity pools and their gauges in the on-chain pool registry")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// RPC endpoint URL
    #[arg(long)]
    rpc_url: Option<String>,

    /// Registry contract address (overrides config)
    #[arg(long)]
    registry: Option<String>,

    /// Deployer account address (overrides config)
    #[arg(long)]
    deployer: Option<String>,

    /// Gauge controller address (overrides config)
    #[arg(long)]
    gauge_controller: Option<String>,

    /// Read pool data from a local JSON file instead of GitHub
    #[arg(long)]
    pool_data: Option<String>,

    /// Encode and validate without sending transactions
    #[arg(long)]
    dry_run: bool,

    /// Record failed pools and continue with the next one
    #[arg(long)]
    keep_going: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    let args = Args::parse();

    // Priority: CLI args > Config file > Defaults
    let mut app_cfg = match &args.config {
        Some(config_path) => app::AppCfg::from_config(config::Config::from_file(config_path)?)?,
        None => app::AppCfg::default(),
    };

    if let Some(rpc_url) = args.rpc_url {
        app_cfg.rpc_url = rpc_url;
    }
    if let Some(registry) = args.registry {
        app_cfg.registry = app::parse_address("registry", &registry)?;
    }
    if let Some(deployer) = args.deployer {
        app_cfg.deployer = app::parse_address("deployer", &deployer)?;
    }
    if let Some(gauge_controller) = args.gauge_controller {
        app_cfg.gauge_controller = app::parse_address("gauge controller", &gauge_controller)?;
    }
    if let Some(path) = args.pool_data {
        app_cfg.source = SourceCfg::File { path };
    }
    // Flags can only switch these on
    app_cfg.dry_run |= args.dry_run;
    app_cfg.keep_going |= args.keep_going;
    app_cfg.json_report = args.json;

    app::run(app_cfg).await
}
