//! Registers pools the registry does not know yet

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::encoding::{encode_registration, RegistrationCall};
use crate::domain::pool::{resolve_pool, PoolData, PoolTarget, PoolVariant};
use crate::domain::{CapabilityProbe, GasPriceOracle, GasStrategy, PoolRegistry, SubmittedTx};
use crate::shared::errors::AppError;

/// Outcome of a registration attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationStatus {
    AlreadyRegistered,
    Registered(PoolVariant, SubmittedTx),
    /// Dry run: encoded but not submitted
    Planned(PoolVariant, RegistrationCall),
}

impl RegistrationStatus {
    /// Variant the pool was resolved to; registered pools are never resolved
    pub fn variant(&self) -> Option<PoolVariant> {
        match self {
            RegistrationStatus::AlreadyRegistered => None,
            RegistrationStatus::Registered(variant, _) | RegistrationStatus::Planned(variant, _) => {
                Some(*variant)
            }
        }
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistrationStatus::AlreadyRegistered => write!(f, "already registered"),
            RegistrationStatus::Registered(_, tx) => write!(f, "registered in {}", tx.hash),
            RegistrationStatus::Planned(_, call) => write!(f, "would call {}", call.entry_point()),
        }
    }
}

pub struct Registrar {
    registry: Arc<dyn PoolRegistry>,
    probe: Arc<dyn CapabilityProbe>,
    gas_oracle: Arc<dyn GasPriceOracle>,
    gas: GasStrategy,
    dry_run: bool,
}

impl Registrar {
    pub fn new(
        registry: Arc<dyn PoolRegistry>,
        probe: Arc<dyn CapabilityProbe>,
        gas_oracle: Arc<dyn GasPriceOracle>,
        gas: GasStrategy,
        dry_run: bool,
    ) -> Self {
        Self {
            registry,
            probe,
            gas_oracle,
            gas,
            dry_run,
        }
    }

    /// Register `target` unless the registry already records coins for it.
    ///
    /// Coins are validated and the swap probed only for unregistered pools.
    /// Load and encoding failures and reverted transactions are returned as
    /// errors; nothing is retried.
    pub async fn register(&self, target: &PoolTarget, data: &PoolData) -> Result<RegistrationStatus, AppError> {
        let n_coins = self.registry.n_coins(target.swap).await?;
        if !n_coins.is_zero() {
            debug!("{} already registered with {} coins", target.name, n_coins);
            return Ok(RegistrationStatus::AlreadyRegistered);
        }

        let pool = resolve_pool(&target.name, data, self.probe.as_ref()).await?;
        let call = encode_registration(&pool)?;
        debug!("Encoded {}: {:?}", target.name, call);

        if self.dry_run {
            info!("Dry run: skipping {} for {}", call.entry_point(), target.name);
            return Ok(RegistrationStatus::Planned(pool.variant, call));
        }

        let gas_price = self.gas.resolve(self.gas_oracle.as_ref()).await?;
        info!(
            "Submitting {} for {} at {} wei",
            call.entry_point(),
            target.name,
            gas_price
        );
        let tx = self.registry.register(&call, gas_price).await?;
        info!("✅ {} registered in {} (gas used {})", target.name, tx.hash, tx.gas_used);

        Ok(RegistrationStatus::Registered(pool.variant, tx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::testing::{MockRegistry, StaticGasOracle, StaticProbe};
    use crate::domain::pool::{CoinData, SwapCapabilities};
    use crate::shared::errors::{ChainError, EncodeError, LoadError};
    use alloy::primitives::{Address, U256};

    const SWAP: &str = "0x00000000000000000000000000000000000000aa";

    fn coin(decimals: Option<u8>) -> CoinData {
        CoinData {
            name: None,
            decimals,
            wrapped_decimals: None,
        }
    }

    fn data() -> PoolData {
        PoolData {
            swap_address: SWAP.to_string(),
            lp_token_address: "0x00000000000000000000000000000000000000bb".to_string(),
            coins: vec![coin(Some(18)), coin(Some(6))],
            ..Default::default()
        }
    }

    fn target(data: &PoolData) -> PoolTarget {
        PoolTarget::from_pool_data("usd", data).unwrap()
    }

    fn probe() -> Arc<StaticProbe> {
        Arc::new(StaticProbe::new(SwapCapabilities {
            exchange_underlying: false,
            initial_a: true,
        }))
    }

    fn registrar(registry: Arc<MockRegistry>, probe: Arc<StaticProbe>, dry_run: bool) -> Registrar {
        Registrar::new(
            registry,
            probe,
            Arc::new(StaticGasOracle(7_000_000_000)),
            GasStrategy::Node,
            dry_run,
        )
    }

    #[tokio::test]
    async fn test_registered_pool_is_skipped_without_probing() {
        let registry = Arc::new(MockRegistry::default());
        registry.set_n_coins(SWAP.parse().unwrap(), U256::from(2));
        let probe = probe();
        let data = data();

        let status = registrar(registry.clone(), probe.clone(), false)
            .register(&target(&data), &data)
            .await
            .unwrap();

        assert_eq!(status, RegistrationStatus::AlreadyRegistered);
        assert_eq!(status.variant(), None);
        assert!(registry.registrations().is_empty());
        assert_eq!(probe.calls(), 0);
    }

    #[tokio::test]
    async fn test_registered_pool_with_incomplete_coin_is_skipped() {
        let registry = Arc::new(MockRegistry::default());
        registry.set_n_coins(SWAP.parse().unwrap(), U256::from(2));
        let mut data = data();
        data.coins.push(coin(None));

        let status = registrar(registry, probe(), false)
            .register(&target(&data), &data)
            .await
            .unwrap();

        assert_eq!(status, RegistrationStatus::AlreadyRegistered);
    }

    #[tokio::test]
    async fn test_new_pool_is_registered_with_resolved_gas_price() {
        let registry = Arc::new(MockRegistry::default());
        let probe = probe();
        let data = data();

        let status = registrar(registry.clone(), probe.clone(), false)
            .register(&target(&data), &data)
            .await
            .unwrap();

        assert!(matches!(status, RegistrationStatus::Registered(PoolVariant::StandardPool, _)));
        assert_eq!(probe.calls(), 1);
        let submitted = registry.registrations();
        assert_eq!(submitted.len(), 1);
        assert_eq!(submitted[0].0.entry_point(), "add_pool_without_underlying");
        assert_eq!(submitted[0].0.pool(), Address::with_last_byte(0xaa));
        assert_eq!(submitted[0].1, 7_000_000_000);
    }

    #[tokio::test]
    async fn test_new_pool_with_incomplete_coin_fails() {
        let registry = Arc::new(MockRegistry::default());
        let mut data = data();
        data.coins.push(coin(None));

        let err = registrar(registry.clone(), probe(), false)
            .register(&target(&data), &data)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Load(LoadError::MissingDecimals { index: 2, .. })
        ));
        assert!(registry.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_does_not_submit() {
        let registry = Arc::new(MockRegistry::default());
        let data = data();

        let status = registrar(registry.clone(), probe(), true)
            .register(&target(&data), &data)
            .await
            .unwrap();

        assert!(matches!(status, RegistrationStatus::Planned(_, _)));
        assert_eq!(status.variant(), Some(PoolVariant::StandardPool));
        assert!(registry.registrations().is_empty());
    }

    #[tokio::test]
    async fn test_revert_propagates() {
        let registry = Arc::new(MockRegistry::default());
        registry.revert_registrations();
        let data = data();

        let err = registrar(registry, probe(), false)
            .register(&target(&data), &data)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Chain(ChainError::Reverted(_))));
    }

    #[tokio::test]
    async fn test_unknown_wrapped_contract_aborts_registration() {
        let registry = Arc::new(MockRegistry::default());
        let mut data = data();
        data.wrapped_contract = Some("cToken2".to_string());

        let err = registrar(registry.clone(), probe(), false)
            .register(&target(&data), &data)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::Encode(EncodeError::UnknownWrappedContract(_))
        ));
        assert!(registry.registrations().is_empty());
    }
}
