//! One registration pass over every pool of the metadata source

use std::sync::Arc;

use alloy::primitives::U256;
use serde::Serialize;
use tracing::{error, info};

use super::gauge_sync::{GaugeSyncStatus, GaugeSynchronizer};
use super::registrar::{RegistrationStatus, Registrar};
use crate::domain::pool::{order_for_registration, PoolData, PoolTarget};
use crate::domain::PoolDataSource;
use crate::shared::errors::AppError;

/// What happened to one pool during the pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct PoolReport {
    pub name: String,
    pub swap: String,
    pub variant: Option<String>,
    pub registration: Option<String>,
    pub gauges: Option<String>,
    pub fees_wei: U256,
    pub error: Option<String>,
}

impl PoolReport {
    fn new(name: &str, data: &PoolData) -> Self {
        Self {
            name: name.to_string(),
            swap: data.swap_address.clone(),
            ..Default::default()
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

pub struct RegistrationPipeline {
    source: Arc<dyn PoolDataSource>,
    registrar: Registrar,
    synchronizer: GaugeSynchronizer,
    keep_going: bool,
}

impl RegistrationPipeline {
    pub fn new(
        source: Arc<dyn PoolDataSource>,
        registrar: Registrar,
        synchronizer: GaugeSynchronizer,
        keep_going: bool,
    ) -> Self {
        Self {
            source,
            registrar,
            synchronizer,
            keep_going,
        }
    }

    /// Register and sync every pool, one at a time.
    ///
    /// The first failing pool stops the pass unless `keep_going` is set, in
    /// which case the failure is recorded in that pool's report.
    pub async fn run(&self) -> Result<Vec<PoolReport>, AppError> {
        let pools = self.source.fetch().await?;
        info!("Fetched {} pools from {}", pools.len(), self.source.name());

        println!("Adding pools to registry...");

        let mut reports = Vec::with_capacity(pools.len());
        for (name, data) in order_for_registration(pools) {
            let mut report = PoolReport::new(&name, &data);

            if let Err(e) = self.process(&name, &data, &mut report).await {
                error!("❌ {} failed: {}", name, e);
                if !self.keep_going {
                    return Err(e);
                }
                report.error = Some(e.to_string());
            }
            reports.push(report);
        }

        Ok(reports)
    }

    async fn process(&self, name: &str, data: &PoolData, report: &mut PoolReport) -> Result<(), AppError> {
        let target = PoolTarget::from_pool_data(name, data)?;

        let registration = self.registrar.register(&target, data).await?;
        report.variant = registration.variant().map(|variant| variant.label().to_string());
        match &registration {
            RegistrationStatus::AlreadyRegistered => {
                println!("\n{} has already been added to registry", name)
            }
            RegistrationStatus::Registered(_, tx) => {
                println!("\nAdded {} ({})", name, tx.hash);
                report.fees_wei += tx.fee_wei();
            }
            RegistrationStatus::Planned(_, call) => {
                println!("\nWould add {} via {}", name, call.entry_point())
            }
        }
        report.registration = Some(registration.to_string());

        let gauges = self.synchronizer.sync(&target).await?;
        match &gauges {
            GaugeSyncStatus::UpToDate => println!("{} gauges are up-to-date", name),
            GaugeSyncStatus::Updated(tx) => {
                println!("Updated gauges for {}", name);
                report.fees_wei += tx.fee_wei();
            }
            GaugeSyncStatus::Planned(_) => println!("Would update gauges for {}", name),
            GaugeSyncStatus::UnknownGauge(gauge) => println!(
                "Gauge {} is not known to GaugeController, cannot add to registry",
                gauge
            ),
        }
        report.gauges = Some(gauges.to_string());

        Ok(())
    }
}
