//! In-memory collaborators for service tests

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use alloy::primitives::{Address, B256, U256};
use async_trait::async_trait;

use crate::domain::encoding::RegistrationCall;
use crate::domain::gauge::GaugeList;
use crate::domain::pool::{PoolData, SwapCapabilities};
use crate::domain::{
    CapabilityProbe, GasPriceOracle, GaugeOracle, PoolDataSource, PoolRegistry, SubmittedTx,
};
use crate::shared::errors::{ChainError, SourceError};

#[derive(Default)]
struct RegistryState {
    n_coins: HashMap<Address, U256>,
    gauges: HashMap<Address, GaugeList>,
    registrations: Vec<(RegistrationCall, u128)>,
    gauge_updates: Vec<(Address, GaugeList, u128)>,
    revert_registrations: bool,
    revert_gauge_updates: bool,
    tx_count: u8,
}

impl RegistryState {
    fn next_tx(&mut self, gas_price: u128) -> SubmittedTx {
        self.tx_count += 1;
        SubmittedTx {
            hash: B256::with_last_byte(self.tx_count),
            gas_used: 100_000,
            effective_gas_price: gas_price,
        }
    }
}

/// Registry that records submissions and applies them to its own state
#[derive(Default)]
pub struct MockRegistry {
    state: Mutex<RegistryState>,
}

impl MockRegistry {
    pub fn set_n_coins(&self, pool: Address, n_coins: U256) {
        self.state.lock().unwrap().n_coins.insert(pool, n_coins);
    }

    pub fn set_gauges(&self, pool: Address, gauges: GaugeList) {
        self.state.lock().unwrap().gauges.insert(pool, gauges);
    }

    pub fn revert_registrations(&self) {
        self.state.lock().unwrap().revert_registrations = true;
    }

    pub fn revert_gauge_updates(&self) {
        self.state.lock().unwrap().revert_gauge_updates = true;
    }

    pub fn registrations(&self) -> Vec<(RegistrationCall, u128)> {
        self.state.lock().unwrap().registrations.clone()
    }

    pub fn gauge_updates(&self) -> Vec<(Address, GaugeList, u128)> {
        self.state.lock().unwrap().gauge_updates.clone()
    }
}

#[async_trait]
impl PoolRegistry for MockRegistry {
    async fn n_coins(&self, pool: Address) -> Result<U256, ChainError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .n_coins
            .get(&pool)
            .copied()
            .unwrap_or_default())
    }

    async fn gauges(&self, pool: Address) -> Result<GaugeList, ChainError> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .gauges
            .get(&pool)
            .copied()
            .unwrap_or_default())
    }

    async fn register(&self, call: &RegistrationCall, gas_price: u128) -> Result<SubmittedTx, ChainError> {
        let mut state = self.state.lock().unwrap();
        if state.revert_registrations {
            return Err(ChainError::Reverted(format!("{} for {}", call.entry_point(), call.pool())));
        }
        let n_coins = match call {
            RegistrationCall::MetaPool { n_coins, .. }
            | RegistrationCall::WithUnderlying { n_coins, .. }
            | RegistrationCall::WithoutUnderlying { n_coins, .. } => *n_coins,
        };
        state.n_coins.insert(call.pool(), n_coins);
        state.registrations.push((call.clone(), gas_price));
        Ok(state.next_tx(gas_price))
    }

    async fn set_liquidity_gauges(
        &self,
        pool: Address,
        gauges: &GaugeList,
        gas_price: u128,
    ) -> Result<SubmittedTx, ChainError> {
        let mut state = self.state.lock().unwrap();
        if state.revert_gauge_updates {
            return Err(ChainError::Reverted(format!("set_liquidity_gauges for {}", pool)));
        }
        state.gauges.insert(pool, *gauges);
        state.gauge_updates.push((pool, *gauges, gas_price));
        Ok(state.next_tx(gas_price))
    }
}

/// Gauge oracle that knows a fixed set of gauges
pub struct MockGaugeOracle {
    known: HashSet<Address>,
}

impl MockGaugeOracle {
    pub fn knowing(gauges: &[Address]) -> Self {
        Self {
            known: gauges.iter().copied().collect(),
        }
    }
}

#[async_trait]
impl GaugeOracle for MockGaugeOracle {
    async fn gauge_type(&self, gauge: Address) -> Result<i128, ChainError> {
        if self.known.contains(&gauge) {
            Ok(0)
        } else {
            Err(ChainError::CallReverted {
                contract: Address::ZERO,
                reason: format!("unknown gauge {}", gauge),
            })
        }
    }
}

pub struct StaticGasOracle(pub u128);

#[async_trait]
impl GasPriceOracle for StaticGasOracle {
    async fn gas_price(&self) -> Result<u128, ChainError> {
        Ok(self.0)
    }
}

/// Probe answering the same capabilities for every swap
pub struct StaticProbe {
    capabilities: SwapCapabilities,
    calls: AtomicUsize,
}

impl StaticProbe {
    pub fn new(capabilities: SwapCapabilities) -> Self {
        Self {
            capabilities,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CapabilityProbe for StaticProbe {
    async fn capabilities(&self, _swap: Address) -> Result<SwapCapabilities, ChainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.capabilities)
    }
}

pub struct StaticSource(pub BTreeMap<String, PoolData>);

#[async_trait]
impl PoolDataSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self) -> Result<BTreeMap<String, PoolData>, SourceError> {
        Ok(self.0.clone())
    }
}
