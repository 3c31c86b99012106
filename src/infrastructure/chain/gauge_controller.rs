use alloy::primitives::Address;
use alloy::providers::DynProvider;
use async_trait::async_trait;

use super::contracts::GaugeController;
use crate::domain::GaugeOracle;
use crate::shared::errors::ChainError;

/// Gauge controller used as the gauge-type oracle
pub struct GaugeControllerClient {
    provider: DynProvider,
    controller: Address,
}

impl GaugeControllerClient {
    pub fn new(provider: DynProvider, controller: Address) -> Self {
        Self {
            provider,
            controller,
        }
    }
}

#[async_trait]
impl GaugeOracle for GaugeControllerClient {
    async fn gauge_type(&self, gauge: Address) -> Result<i128, ChainError> {
        GaugeController::new(self.controller, self.provider.clone())
            .gauge_types(gauge)
            .call()
            .await
            .map_err(|e| ChainError::CallReverted {
                contract: self.controller,
                reason: e.to_string(),
            })
    }
}
