//! Keeps the registry's gauge list of each pool in sync with its metadata

use std::fmt;
use std::sync::Arc;

use alloy::primitives::Address;
use tracing::{info, warn};

use crate::domain::gauge::GaugeList;
use crate::domain::pool::PoolTarget;
use crate::domain::{GasPriceOracle, GasStrategy, GaugeOracle, PoolRegistry, SubmittedTx};
use crate::shared::errors::AppError;

/// Outcome of a gauge synchronisation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GaugeSyncStatus {
    UpToDate,
    Updated(SubmittedTx),
    /// Dry run: validated but not submitted
    Planned(GaugeList),
    /// The oracle rejected this gauge; nothing was submitted
    UnknownGauge(Address),
}

impl fmt::Display for GaugeSyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GaugeSyncStatus::UpToDate => write!(f, "gauges up-to-date"),
            GaugeSyncStatus::Updated(tx) => write!(f, "gauges updated in {}", tx.hash),
            GaugeSyncStatus::Planned(_) => write!(f, "would update gauges"),
            GaugeSyncStatus::UnknownGauge(gauge) => write!(f, "unknown gauge {}", gauge),
        }
    }
}

pub struct GaugeSynchronizer {
    registry: Arc<dyn PoolRegistry>,
    oracle: Arc<dyn GaugeOracle>,
    gas_oracle: Arc<dyn GasPriceOracle>,
    gas: GasStrategy,
    dry_run: bool,
}

impl GaugeSynchronizer {
    pub fn new(
        registry: Arc<dyn PoolRegistry>,
        oracle: Arc<dyn GaugeOracle>,
        gas_oracle: Arc<dyn GasPriceOracle>,
        gas: GasStrategy,
        dry_run: bool,
    ) -> Self {
        Self {
            registry,
            oracle,
            gas_oracle,
            gas,
            dry_run,
        }
    }

    /// Update the registry's gauges for `pool` when they differ.
    ///
    /// Every gauge must be known to the oracle; a single unknown gauge skips
    /// the whole update.
    pub async fn sync(&self, pool: &PoolTarget) -> Result<GaugeSyncStatus, AppError> {
        let desired = GaugeList::padded(&pool.gauges);
        let current = self.registry.gauges(pool.swap).await?;

        if current == desired {
            return Ok(GaugeSyncStatus::UpToDate);
        }

        for gauge in &pool.gauges {
            if let Err(e) = self.oracle.gauge_type(*gauge).await {
                warn!(
                    "Gauge {} is not known to the gauge controller, cannot add to registry: {}",
                    gauge, e
                );
                return Ok(GaugeSyncStatus::UnknownGauge(*gauge));
            }
        }

        if self.dry_run {
            info!("Dry run: skipping gauge update for {}", pool.name);
            return Ok(GaugeSyncStatus::Planned(desired));
        }

        let gas_price = self.gas.resolve(self.gas_oracle.as_ref()).await?;
        let tx = self
            .registry
            .set_liquidity_gauges(pool.swap, &desired, gas_price)
            .await?;
        info!("✅ Gauges for {} updated in {}", pool.name, tx.hash);

        Ok(GaugeSyncStatus::Updated(tx))
    }
}
