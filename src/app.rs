// src/app.rs
use anyhow::{anyhow, Context, Result};
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info};

use alloy::primitives::{address, Address};
use pool_registrar::application::{GaugeSynchronizer, RegistrationPipeline, Registrar};
use pool_registrar::domain::{GasPriceOracle, GasStrategy, PoolDataSource, PoolRegistry};
use pool_registrar::infrastructure::chain::{
    signer_from_env, BytecodeProbe, ChainConnection, GaugeControllerClient, NodeGasOracle,
    RegistryClient,
};
use pool_registrar::infrastructure::pool_data::{
    FilePoolDataSource, GithubPoolDataSource, DEFAULT_POOLS_URL, DEFAULT_RAW_BASE_URL,
};

use crate::config::{Config, SourceCfg};
use crate::report::RunReport;

pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8545";
pub const DEFAULT_DEPLOYER: Address = address!("7eeac6cddbd1d0b8af061742d41877d7f707289a");
pub const DEFAULT_REGISTRY: Address = address!("7d86446ddb609ed0f5f8684acf30380a356b2b4c");
pub const DEFAULT_GAUGE_CONTROLLER: Address = address!("2f50d538606fa9edd2b11e2446beb18c9d5846bb");
pub const DEFAULT_PRIVATE_KEY_ENV: &str = "DEPLOYER_PRIVATE_KEY";

#[derive(Debug, Clone)]
pub struct AppCfg {
    pub rpc_url: String,
    pub registry: Address,
    pub deployer: Address,
    pub gauge_controller: Address,
    pub private_key_env: String,
    pub gas: GasStrategy,
    pub source: SourceCfg,
    pub dry_run: bool,
    pub keep_going: bool,
    pub json_report: bool,
}

impl Default for AppCfg {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            registry: DEFAULT_REGISTRY,
            deployer: DEFAULT_DEPLOYER,
            gauge_controller: DEFAULT_GAUGE_CONTROLLER,
            private_key_env: DEFAULT_PRIVATE_KEY_ENV.to_string(),
            gas: GasStrategy::default(),
            source: SourceCfg::default(),
            dry_run: false,
            keep_going: false,
            json_report: false,
        }
    }
}

impl AppCfg {
    pub fn from_config(cfg: Config) -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            rpc_url: cfg.rpc.url.unwrap_or(defaults.rpc_url),
            registry: parse_address_or("contracts.registry", cfg.contracts.registry, defaults.registry)?,
            deployer: parse_address_or("deployer.address", cfg.deployer.address, defaults.deployer)?,
            gauge_controller: parse_address_or(
                "contracts.gauge_controller",
                cfg.contracts.gauge_controller,
                defaults.gauge_controller,
            )?,
            private_key_env: cfg.deployer.private_key_env.unwrap_or(defaults.private_key_env),
            gas: cfg.gas,
            source: cfg.source,
            dry_run: cfg.run.dry_run.unwrap_or(false),
            keep_going: cfg.run.keep_going.unwrap_or(false),
            json_report: false,
        })
    }
}

pub fn parse_address(field: &str, value: &str) -> Result<Address> {
    Address::from_str(value.trim()).map_err(|e| anyhow!("Invalid {} address {}: {}", field, value, e))
}

fn parse_address_or(field: &str, value: Option<String>, default: Address) -> Result<Address> {
    match value {
        Some(value) => parse_address(field, &value),
        None => Ok(default),
    }
}

fn build_source(source: &SourceCfg) -> Result<Arc<dyn PoolDataSource>> {
    Ok(match source {
        SourceCfg::Github {
            pools_url,
            raw_base_url,
        } => Arc::new(GithubPoolDataSource::new(
            pools_url.clone().unwrap_or_else(|| DEFAULT_POOLS_URL.to_string()),
            raw_base_url.clone().unwrap_or_else(|| DEFAULT_RAW_BASE_URL.to_string()),
        )?),
        SourceCfg::File { path } => Arc::new(FilePoolDataSource::new(path)),
    })
}

pub async fn run(app_cfg: AppCfg) -> Result<()> {
    info!("Starting pool registrar");
    info!("Configuration: {:?}", app_cfg);

    let signer = signer_from_env(&app_cfg.private_key_env)?;
    let chain = ChainConnection::connect(&app_cfg.rpc_url, app_cfg.deployer, signer)?;
    let balance = chain
        .deployer_balance()
        .await
        .context("read deployer balance")?;

    let registry: Arc<dyn PoolRegistry> = Arc::new(RegistryClient::new(
        chain.provider.clone(),
        app_cfg.registry,
        chain.deployer,
    ));
    let gas_oracle: Arc<dyn GasPriceOracle> = Arc::new(NodeGasOracle::new(chain.provider.clone()));

    let registrar = Registrar::new(
        registry.clone(),
        Arc::new(BytecodeProbe::new(chain.provider.clone())),
        gas_oracle.clone(),
        app_cfg.gas,
        app_cfg.dry_run,
    );
    let synchronizer = GaugeSynchronizer::new(
        registry,
        Arc::new(GaugeControllerClient::new(
            chain.provider.clone(),
            app_cfg.gauge_controller,
        )),
        gas_oracle,
        app_cfg.gas,
        app_cfg.dry_run,
    );
    let pipeline = RegistrationPipeline::new(
        build_source(&app_cfg.source)?,
        registrar,
        synchronizer,
        app_cfg.keep_going,
    );

    let outcome = pipeline.run().await;

    let remaining = chain
        .deployer_balance()
        .await
        .context("read deployer balance")?;
    let report = RunReport::from_outcome(
        app_cfg.registry,
        chain.deployer,
        app_cfg.dry_run,
        outcome,
        balance.saturating_sub(remaining),
    );

    println!("{}", report.summary());
    if app_cfg.json_report {
        println!("{}", report.to_json()?);
    }

    if let Some(reason) = &report.aborted {
        return Err(anyhow!("Run stopped: {}", reason));
    }

    let failed = report.failed();
    if !failed.is_empty() {
        for pool in &failed {
            error!("❌ {}: {}", pool.name, pool.error.as_deref().unwrap_or_default());
        }
        return Err(anyhow!("{} of {} pools failed", failed.len(), report.pools.len()));
    }

    Ok(())
}
