use std::collections::BTreeMap;

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;
use serde::Serialize;

use crate::domain::encoding::RegistrationCall;
use crate::domain::gauge::GaugeList;
use crate::domain::pool::{PoolData, SwapCapabilities};
use crate::shared::errors::{ChainError, SourceError};

/// Receipt summary of a confirmed transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubmittedTx {
    pub hash: B256,
    pub gas_used: u64,
    pub effective_gas_price: u128,
}

impl SubmittedTx {
    pub fn fee_wei(&self) -> U256 {
        U256::from(self.gas_used) * U256::from(self.effective_gas_price)
    }
}

/// On-chain pool registry
#[async_trait]
pub trait PoolRegistry: Send + Sync {
    /// Coin count recorded for `pool`, zero when unregistered
    async fn n_coins(&self, pool: Address) -> Result<U256, ChainError>;

    /// Gauge list recorded for `pool`
    async fn gauges(&self, pool: Address) -> Result<GaugeList, ChainError>;

    /// Submit a registration and wait for its receipt
    async fn register(&self, call: &RegistrationCall, gas_price: u128) -> Result<SubmittedTx, ChainError>;

    /// Replace the gauge list of `pool` and wait for the receipt
    async fn set_liquidity_gauges(
        &self,
        pool: Address,
        gauges: &GaugeList,
        gas_price: u128,
    ) -> Result<SubmittedTx, ChainError>;
}

/// Gauge-type oracle; fails for gauges it does not know
#[async_trait]
pub trait GaugeOracle: Send + Sync {
    async fn gauge_type(&self, gauge: Address) -> Result<i128, ChainError>;
}

/// Detects which methods a swap contract exposes
#[async_trait]
pub trait CapabilityProbe: Send + Sync {
    async fn capabilities(&self, swap: Address) -> Result<SwapCapabilities, ChainError>;
}

/// Current network gas price in wei
#[async_trait]
pub trait GasPriceOracle: Send + Sync {
    async fn gas_price(&self) -> Result<u128, ChainError>;
}

/// Source of pool metadata, keyed by pool name
#[async_trait]
pub trait PoolDataSource: Send + Sync {
    fn name(&self) -> &str;

    async fn fetch(&self) -> Result<BTreeMap<String, PoolData>, SourceError>;
}
