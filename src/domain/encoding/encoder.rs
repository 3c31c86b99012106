use alloy::primitives::{Address, U256};

use super::packing::{pack_flags, pack_values};
use super::rate_info::RateInfo;
use crate::domain::pool::{PoolVariant, ResolvedPool};
use crate::shared::errors::EncodeError;

/// Arguments of one of the registry's registration entry points
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationCall {
    /// `add_metapool`
    MetaPool {
        pool: Address,
        n_coins: U256,
        lp_token: Address,
        decimals: U256,
        name: String,
    },
    /// `add_pool`
    WithUnderlying {
        pool: Address,
        n_coins: U256,
        lp_token: Address,
        rate_info: RateInfo,
        wrapped_decimals: U256,
        decimals: U256,
        is_legacy_a: bool,
        is_legacy_lp: bool,
        name: String,
    },
    /// `add_pool_without_underlying`
    WithoutUnderlying {
        pool: Address,
        n_coins: U256,
        lp_token: Address,
        rate_info: RateInfo,
        decimals: U256,
        use_lending_rates: U256,
        is_legacy_a: bool,
        is_legacy_lp: bool,
        name: String,
    },
}

impl RegistrationCall {
    pub fn entry_point(&self) -> &'static str {
        match self {
            RegistrationCall::MetaPool { .. } => "add_metapool",
            RegistrationCall::WithUnderlying { .. } => "add_pool",
            RegistrationCall::WithoutUnderlying { .. } => "add_pool_without_underlying",
        }
    }

    pub fn pool(&self) -> Address {
        match self {
            RegistrationCall::MetaPool { pool, .. }
            | RegistrationCall::WithUnderlying { pool, .. }
            | RegistrationCall::WithoutUnderlying { pool, .. } => *pool,
        }
    }
}

/// Encode the registration arguments of a resolved pool
pub fn encode_registration(pool: &ResolvedPool) -> Result<RegistrationCall, EncodeError> {
    let descriptor = &pool.descriptor;
    let decimals: Vec<u8> = descriptor.coins.iter().map(|coin| coin.decimals).collect();
    let n_coins = U256::from(descriptor.n_coins());

    // A base pool reference always wins, whatever the probe said
    if descriptor.is_metapool() || pool.variant == PoolVariant::MetaPool {
        return Ok(RegistrationCall::MetaPool {
            pool: descriptor.swap,
            n_coins,
            lp_token: descriptor.lp_token,
            decimals: pack_values(&decimals)?,
            name: descriptor.name.clone(),
        });
    }

    let rate_info = RateInfo::resolve(
        descriptor.wrapped_contract.as_deref(),
        descriptor.rate_calculator,
    )?;
    let is_legacy_a = pool.variant.is_legacy_a();
    let is_legacy_lp = descriptor.is_legacy_lp();

    if pool.variant.has_underlying() {
        let wrapped: Vec<u8> = descriptor.coins.iter().map(|coin| coin.held_decimals()).collect();
        Ok(RegistrationCall::WithUnderlying {
            pool: descriptor.swap,
            n_coins,
            lp_token: descriptor.lp_token,
            rate_info,
            wrapped_decimals: pack_values(&wrapped)?,
            decimals: pack_values(&decimals)?,
            is_legacy_a,
            is_legacy_lp,
            name: descriptor.name.clone(),
        })
    } else {
        Ok(RegistrationCall::WithoutUnderlying {
            pool: descriptor.swap,
            n_coins,
            lp_token: descriptor.lp_token,
            rate_info,
            decimals: pack_values(&decimals)?,
            use_lending_rates: pack_flags(descriptor.coins.iter().map(|coin| coin.is_wrapped()))?,
            is_legacy_a,
            is_legacy_lp,
            name: descriptor.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::encoding::unpack_values;
    use crate::domain::pool::{Coin, PoolDescriptor, LEGACY_LP_CONTRACT};

    fn descriptor(coins: Vec<Coin>) -> PoolDescriptor {
        PoolDescriptor {
            name: "test".to_string(),
            swap: Address::with_last_byte(0xaa),
            lp_token: Address::with_last_byte(0xbb),
            lp_contract: Some("CurveTokenV2".to_string()),
            coins,
            base_pool: None,
            wrapped_contract: None,
            rate_calculator: None,
            gauges: vec![],
            exchange_underlying: None,
            initial_a: None,
        }
    }

    #[test]
    fn test_plain_pool_uses_reduced_path() {
        let pool = ResolvedPool::new(
            descriptor(vec![Coin::new(18), Coin::new(6)]),
            PoolVariant::StandardPool,
        );

        match encode_registration(&pool).unwrap() {
            RegistrationCall::WithoutUnderlying {
                pool,
                n_coins,
                rate_info,
                decimals,
                use_lending_rates,
                is_legacy_a,
                is_legacy_lp,
                ..
            } => {
                assert_eq!(pool, Address::with_last_byte(0xaa));
                assert_eq!(n_coins, U256::from(2));
                assert_eq!(unpack_values(use_lending_rates, 2), vec![0, 0]);
                assert_eq!(unpack_values(decimals, 2), vec![18, 6]);
                assert_eq!(rate_info.to_string(), "0x00000000");
                assert!(!is_legacy_a);
                assert!(!is_legacy_lp);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_metapool_path_wins_over_other_fields() {
        let mut meta = descriptor(vec![Coin::new(2), Coin::new(18)]);
        meta.base_pool = Some("3pool".to_string());
        meta.wrapped_contract = Some("unknown-type".to_string());
        meta.lp_contract = Some(LEGACY_LP_CONTRACT.to_string());

        for variant in [
            PoolVariant::MetaPool,
            PoolVariant::UnderlyingPool,
            PoolVariant::LegacyPool { underlying: false },
        ] {
            let call = encode_registration(&ResolvedPool::new(meta.clone(), variant)).unwrap();
            assert_eq!(call.entry_point(), "add_metapool");
            match call {
                RegistrationCall::MetaPool { decimals, name, .. } => {
                    assert_eq!(unpack_values(decimals, 2), vec![2, 18]);
                    assert_eq!(name, "test");
                }
                other => panic!("unexpected call: {:?}", other),
            }
        }
    }

    #[test]
    fn test_underlying_pool_packs_wrapped_decimals() {
        let mut lending = descriptor(vec![Coin::wrapped(18, 8), Coin::wrapped(6, 8), Coin::new(6)]);
        lending.wrapped_contract = Some("cERC20".to_string());
        lending.lp_contract = Some(LEGACY_LP_CONTRACT.to_string());

        let pool = ResolvedPool::new(lending, PoolVariant::LegacyPool { underlying: true });
        match encode_registration(&pool).unwrap() {
            RegistrationCall::WithUnderlying {
                rate_info,
                wrapped_decimals,
                decimals,
                is_legacy_a,
                is_legacy_lp,
                ..
            } => {
                assert_eq!(unpack_values(wrapped_decimals, 3), vec![8, 8, 6]);
                assert_eq!(unpack_values(decimals, 3), vec![18, 6, 6]);
                assert_eq!(rate_info.to_string(), "0x182df0f5");
                assert!(is_legacy_a);
                assert!(is_legacy_lp);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_reduced_path_sets_lending_bitmap() {
        let mut pool = descriptor(vec![Coin::wrapped(18, 18), Coin::new(18)]);
        pool.wrapped_contract = Some("yERC20".to_string());

        let call = encode_registration(&ResolvedPool::new(pool, PoolVariant::StandardPool)).unwrap();
        match call {
            RegistrationCall::WithoutUnderlying { use_lending_rates, rate_info, .. } => {
                assert_eq!(unpack_values(use_lending_rates, 2), vec![1, 0]);
                assert_eq!(rate_info.to_string(), "0x77c7b8fc");
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_wrapped_contract_fails() {
        let mut pool = descriptor(vec![Coin::wrapped(18, 18)]);
        pool.wrapped_contract = Some("NotARealToken".to_string());

        let err = encode_registration(&ResolvedPool::new(pool, PoolVariant::UnderlyingPool)).unwrap_err();
        assert_eq!(err, EncodeError::UnknownWrappedContract("NotARealToken".to_string()));
    }

    #[test]
    fn test_rate_calculator_prefixes_selector() {
        let mut pool = descriptor(vec![Coin::new(18), Coin::wrapped(18, 18)]);
        pool.wrapped_contract = Some("aETH".to_string());
        pool.rate_calculator = Some(Address::repeat_byte(0x42));

        let call = encode_registration(&ResolvedPool::new(pool, PoolVariant::StandardPool)).unwrap();
        match call {
            RegistrationCall::WithoutUnderlying { rate_info, .. } => {
                assert_eq!(rate_info.calculator, Some(Address::repeat_byte(0x42)));
                assert_eq!(rate_info.selector.as_slice(), &[0x71, 0xca, 0x33, 0x7d]);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }
}
