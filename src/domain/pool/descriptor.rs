use std::str::FromStr;

use alloy::primitives::Address;

use super::pool_data::PoolData;
use crate::domain::gauge::GAUGE_SLOTS;
use crate::shared::errors::LoadError;

/// LP token implementation of the first pool generation
pub const LEGACY_LP_CONTRACT: &str = "CurveTokenV1";

/// Coin decimals as seen by the registry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coin {
    pub decimals: u8,
    /// Present for lending/wrapped assets
    pub wrapped_decimals: Option<u8>,
}

impl Coin {
    pub fn new(decimals: u8) -> Self {
        Self {
            decimals,
            wrapped_decimals: None,
        }
    }

    pub fn wrapped(decimals: u8, wrapped_decimals: u8) -> Self {
        Self {
            decimals,
            wrapped_decimals: Some(wrapped_decimals),
        }
    }

    pub fn is_wrapped(&self) -> bool {
        self.wrapped_decimals.is_some()
    }

    /// Decimals of the token actually held by the swap
    pub fn held_decimals(&self) -> u8 {
        self.wrapped_decimals.unwrap_or(self.decimals)
    }
}

/// Validated pool metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolDescriptor {
    pub name: String,
    pub swap: Address,
    pub lp_token: Address,
    pub lp_contract: Option<String>,
    pub coins: Vec<Coin>,
    pub base_pool: Option<String>,
    pub wrapped_contract: Option<String>,
    pub rate_calculator: Option<Address>,
    pub gauges: Vec<Address>,
    pub exchange_underlying: Option<bool>,
    pub initial_a: Option<bool>,
}

/// The part of a pool's metadata the registry is keyed and synced by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolTarget {
    pub name: String,
    pub swap: Address,
    pub gauges: Vec<Address>,
}

impl PoolTarget {
    /// Parse only the swap and gauge addresses; coins are left unchecked
    pub fn from_pool_data(name: &str, data: &PoolData) -> Result<Self, LoadError> {
        if data.gauge_addresses.len() > GAUGE_SLOTS {
            return Err(LoadError::TooManyGauges {
                pool: name.to_string(),
                count: data.gauge_addresses.len(),
                max: GAUGE_SLOTS,
            });
        }

        let gauges = data
            .gauge_addresses
            .iter()
            .map(|gauge| parse_address(name, "gauge", gauge))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            name: name.to_string(),
            swap: parse_address(name, "swap", &data.swap_address)?,
            gauges,
        })
    }
}

impl PoolDescriptor {
    /// Build a descriptor from the metadata source's wire form
    pub fn from_pool_data(name: &str, data: &PoolData) -> Result<Self, LoadError> {
        let target = PoolTarget::from_pool_data(name, data)?;
        if data.coins.is_empty() {
            return Err(LoadError::NoCoins(name.to_string()));
        }

        let coins = data
            .coins
            .iter()
            .enumerate()
            .map(|(index, coin)| {
                let decimals = coin
                    .decimals
                    .or(coin.wrapped_decimals)
                    .ok_or_else(|| LoadError::MissingDecimals {
                        pool: name.to_string(),
                        index,
                    })?;
                Ok(Coin {
                    decimals,
                    wrapped_decimals: coin.wrapped_decimals,
                })
            })
            .collect::<Result<Vec<_>, LoadError>>()?;

        let rate_calculator = data
            .rate_calculator_address
            .as_deref()
            .map(|addr| parse_address(name, "rate_calculator", addr))
            .transpose()?;

        Ok(Self {
            name: target.name,
            swap: target.swap,
            lp_token: parse_address(name, "lp_token", &data.lp_token_address)?,
            lp_contract: data.lp_contract.clone(),
            coins,
            base_pool: data.base_pool.clone(),
            wrapped_contract: data.wrapped_contract.clone(),
            rate_calculator,
            gauges: target.gauges,
            exchange_underlying: data.exchange_underlying,
            initial_a: data.initial_a,
        })
    }

    pub fn n_coins(&self) -> usize {
        self.coins.len()
    }

    pub fn is_metapool(&self) -> bool {
        self.base_pool.is_some()
    }

    /// True when the LP token is the first-generation implementation
    pub fn is_legacy_lp(&self) -> bool {
        self.lp_contract.as_deref() == Some(LEGACY_LP_CONTRACT)
    }
}

fn parse_address(pool: &str, field: &'static str, value: &str) -> Result<Address, LoadError> {
    Address::from_str(value.trim()).map_err(|_| LoadError::InvalidAddress {
        pool: pool.to_string(),
        field,
        value: value.to_string(),
    })
}
