use alloy::providers::{DynProvider, Provider};
use async_trait::async_trait;

use crate::domain::GasPriceOracle;
use crate::shared::errors::ChainError;

/// `eth_gasPrice` of the connected node
pub struct NodeGasOracle {
    provider: DynProvider,
}

impl NodeGasOracle {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl GasPriceOracle for NodeGasOracle {
    async fn gas_price(&self) -> Result<u128, ChainError> {
        self.provider
            .get_gas_price()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))
    }
}
