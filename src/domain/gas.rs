//! Gas pricing strategy for submitted transactions

use serde::{Deserialize, Serialize};

use crate::domain::traits::GasPriceOracle;
use crate::shared::errors::ChainError;
use crate::shared::utils::gwei_to_wei;

/// How the gas price of each transaction is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum GasStrategy {
    /// The node's `eth_gasPrice`
    #[default]
    Node,
    /// A constant price
    Fixed { gwei: u64 },
    /// The node's price scaled by `percent`, optionally capped
    Scaled { percent: u32, max_gwei: Option<u64> },
}

impl GasStrategy {
    pub async fn resolve(&self, oracle: &dyn GasPriceOracle) -> Result<u128, ChainError> {
        match *self {
            GasStrategy::Node => oracle.gas_price().await,
            GasStrategy::Fixed { gwei } => Ok(gwei_to_wei(gwei)),
            GasStrategy::Scaled { percent, max_gwei } => {
                let scaled = oracle.gas_price().await?.saturating_mul(percent as u128) / 100;
                Ok(match max_gwei {
                    Some(cap) => scaled.min(gwei_to_wei(cap)),
                    None => scaled,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    struct StaticOracle(u128);

    #[async_trait]
    impl GasPriceOracle for StaticOracle {
        async fn gas_price(&self) -> Result<u128, ChainError> {
            Ok(self.0)
        }
    }

    #[tokio::test]
    async fn test_resolve_strategies() {
        let oracle = StaticOracle(20_000_000_000);

        assert_eq!(GasStrategy::Node.resolve(&oracle).await.unwrap(), 20_000_000_000);
        assert_eq!(
            GasStrategy::Fixed { gwei: 55 }.resolve(&oracle).await.unwrap(),
            55_000_000_000
        );
        assert_eq!(
            GasStrategy::Scaled { percent: 125, max_gwei: None }
                .resolve(&oracle)
                .await
                .unwrap(),
            25_000_000_000
        );
        assert_eq!(
            GasStrategy::Scaled { percent: 200, max_gwei: Some(30) }
                .resolve(&oracle)
                .await
                .unwrap(),
            30_000_000_000
        );
    }

    #[test]
    fn test_deserialize_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            gas: GasStrategy,
        }

        let parsed: Wrapper = toml::from_str("[gas]\nstrategy = \"scaled\"\npercent = 110\n").unwrap();
        assert_eq!(parsed.gas, GasStrategy::Scaled { percent: 110, max_gwei: None });

        let parsed: Wrapper = toml::from_str("[gas]\nstrategy = \"fixed\"\ngwei = 40\n").unwrap();
        assert_eq!(parsed.gas, GasStrategy::Fixed { gwei: 40 });
    }
}
