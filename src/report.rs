// src/report.rs
use alloy::primitives::{Address, U256};
use chrono::{DateTime, Utc};
use serde::Serialize;

use pool_registrar::application::PoolReport;
use pool_registrar::shared::errors::AppError;
use pool_registrar::shared::utils::format_eth;

#[derive(Debug, Serialize)]
pub struct RunReport {
    pub registry: Address,
    pub deployer: Address,
    pub dry_run: bool,
    pub pools: Vec<PoolReport>,
    /// Deployer balance spent over the run
    pub gas_spent_wei: U256,
    /// Set when a pool failure stopped the run
    pub aborted: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl RunReport {
    pub fn new(
        registry: Address,
        deployer: Address,
        dry_run: bool,
        pools: Vec<PoolReport>,
        gas_spent_wei: U256,
    ) -> Self {
        Self {
            registry,
            deployer,
            dry_run,
            pools,
            gas_spent_wei,
            aborted: None,
            timestamp: Utc::now(),
        }
    }

    /// Report of a pass that either finished or was stopped by a failing pool
    pub fn from_outcome(
        registry: Address,
        deployer: Address,
        dry_run: bool,
        outcome: Result<Vec<PoolReport>, AppError>,
        gas_spent_wei: U256,
    ) -> Self {
        match outcome {
            Ok(pools) => Self::new(registry, deployer, dry_run, pools, gas_spent_wei),
            Err(e) => Self {
                aborted: Some(e.to_string()),
                ..Self::new(registry, deployer, dry_run, Vec::new(), gas_spent_wei)
            },
        }
    }

    pub fn failed(&self) -> Vec<&PoolReport> {
        self.pools.iter().filter(|pool| pool.is_failed()).collect()
    }

    pub fn summary(&self) -> String {
        format!("Total gas used: {} eth", format_eth(self.gas_spent_wei))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
