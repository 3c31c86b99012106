//! Wire form of pool metadata as published by the metadata source

use serde::{Deserialize, Serialize};

/// Raw `pooldata.json` entry for one pool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolData {
    pub swap_address: String,
    pub lp_token_address: String,
    pub lp_contract: Option<String>,
    pub coins: Vec<CoinData>,
    pub base_pool: Option<String>,
    pub wrapped_contract: Option<String>,
    pub rate_calculator_address: Option<String>,
    #[serde(default)]
    pub gauge_addresses: Vec<String>,

    // Capability overrides, used instead of probing the swap bytecode
    pub exchange_underlying: Option<bool>,
    #[serde(rename = "initial_A")]
    pub initial_a: Option<bool>,
}

/// Raw coin entry
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoinData {
    pub name: Option<String>,
    pub decimals: Option<u8>,
    pub wrapped_decimals: Option<u8>,
}
