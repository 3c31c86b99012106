use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

use pool_registrar::domain::GasStrategy;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RpcCfg {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeployerCfg {
    pub address: Option<String>,
    /// Environment variable holding the deployer's private key
    pub private_key_env: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContractsCfg {
    pub registry: Option<String>,
    pub gauge_controller: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SourceCfg {
    Github {
        pools_url: Option<String>,
        raw_base_url: Option<String>,
    },
    File {
        path: String,
    },
}

impl Default for SourceCfg {
    fn default() -> Self {
        SourceCfg::Github {
            pools_url: None,
            raw_base_url: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RunCfg {
    pub dry_run: Option<bool>,
    pub keep_going: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub rpc: RpcCfg,
    #[serde(default)]
    pub deployer: DeployerCfg,
    #[serde(default)]
    pub contracts: ContractsCfg,
    #[serde(default)]
    pub gas: GasStrategy,
    #[serde(default)]
    pub source: SourceCfg,
    #[serde(default)]
    pub run: RunCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        Self::from_toml(&s)
    }

    pub fn from_toml(s: &str) -> Result<Self> {
        let cfg: Self = toml::from_str(s).context("parse Config.toml")?;
        Ok(cfg)
    }
}
