use alloy::network::{ReceiptResponse, TransactionBuilder};
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tracing::{debug, info};

use super::contracts::Registry;
use crate::domain::encoding::RegistrationCall;
use crate::domain::gauge::GaugeList;
use crate::domain::{PoolRegistry, SubmittedTx};
use crate::shared::errors::ChainError;

/// Pool registry reached over JSON-RPC, writing as the deployer
pub struct RegistryClient {
    provider: DynProvider,
    registry: Address,
    deployer: Address,
}

impl RegistryClient {
    pub fn new(provider: DynProvider, registry: Address, deployer: Address) -> Self {
        Self {
            provider,
            registry,
            deployer,
        }
    }

    fn calldata(call: &RegistrationCall) -> Vec<u8> {
        match call.clone() {
            RegistrationCall::MetaPool {
                pool,
                n_coins,
                lp_token,
                decimals,
                name,
            } => Registry::add_metapoolCall {
                pool,
                n_coins,
                lp_token,
                decimals,
                name,
            }
            .abi_encode(),
            RegistrationCall::WithUnderlying {
                pool,
                n_coins,
                lp_token,
                rate_info,
                wrapped_decimals,
                decimals,
                is_legacy_a,
                is_legacy_lp,
                name,
            } => Registry::add_poolCall {
                pool,
                n_coins,
                lp_token,
                rate_info: rate_info.to_bytes32(),
                decimals: wrapped_decimals,
                underlying_decimals: decimals,
                is_legacy_a,
                is_v1: is_legacy_lp,
                name,
            }
            .abi_encode(),
            RegistrationCall::WithoutUnderlying {
                pool,
                n_coins,
                lp_token,
                rate_info,
                decimals,
                use_lending_rates,
                is_legacy_a,
                is_legacy_lp,
                name,
            } => Registry::add_pool_without_underlyingCall {
                pool,
                n_coins,
                lp_token,
                rate_info: rate_info.to_bytes32(),
                decimals,
                use_rates: use_lending_rates,
                is_legacy_a,
                is_v1: is_legacy_lp,
                name,
            }
            .abi_encode(),
        }
    }

    /// Send a registry transaction from the deployer and wait for its receipt
    async fn submit(&self, input: Vec<u8>, gas_price: u128) -> Result<SubmittedTx, ChainError> {
        let tx = TransactionRequest::default()
            .with_from(self.deployer)
            .with_to(self.registry)
            .with_input(input)
            .with_gas_price(gas_price);

        let pending = self
            .provider
            .send_transaction(tx)
            .await
            .map_err(|e| ChainError::Transaction(e.to_string()))?;
        debug!("Sent transaction {}", pending.tx_hash());

        let receipt = pending
            .get_receipt()
            .await
            .map_err(|e| ChainError::Transaction(e.to_string()))?;

        let hash = ReceiptResponse::transaction_hash(&receipt);
        if !ReceiptResponse::status(&receipt) {
            return Err(ChainError::Reverted(hash.to_string()));
        }

        Ok(SubmittedTx {
            hash,
            gas_used: ReceiptResponse::gas_used(&receipt),
            effective_gas_price: ReceiptResponse::effective_gas_price(&receipt),
        })
    }
}

#[async_trait]
impl PoolRegistry for RegistryClient {
    async fn n_coins(&self, pool: Address) -> Result<U256, ChainError> {
        let registry = Registry::new(self.registry, self.provider.clone());
        let counts = registry
            .get_n_coins(pool)
            .call()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;
        Ok(counts[0])
    }

    async fn gauges(&self, pool: Address) -> Result<GaugeList, ChainError> {
        let registry = Registry::new(self.registry, self.provider.clone());
        let recorded = registry
            .get_gauges(pool)
            .call()
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;
        Ok(GaugeList::from(recorded.gauges))
    }

    async fn register(&self, call: &RegistrationCall, gas_price: u128) -> Result<SubmittedTx, ChainError> {
        info!("📝 {} {} on registry {}", call.entry_point(), call.pool(), self.registry);
        self.submit(Self::calldata(call), gas_price).await
    }

    async fn set_liquidity_gauges(
        &self,
        pool: Address,
        gauges: &GaugeList,
        gas_price: u128,
    ) -> Result<SubmittedTx, ChainError> {
        info!("📝 set_liquidity_gauges {} on registry {}", pool, self.registry);
        let input = Registry::set_liquidity_gaugesCall {
            pool,
            liquidity_gauges: gauges.into_array(),
        }
        .abi_encode();
        self.submit(input, gas_price).await
    }
}
