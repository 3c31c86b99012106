//! Error handling for the application

use alloy::primitives::Address;
use thiserror::Error;

/// Errors raised while turning raw pool metadata into descriptors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    #[error("Invalid {field} address for pool {pool}: {value}")]
    InvalidAddress {
        pool: String,
        field: &'static str,
        value: String,
    },

    #[error("Pool {pool} coin {index} declares neither decimals nor wrapped_decimals")]
    MissingDecimals { pool: String, index: usize },

    #[error("Pool {pool} lists {count} gauges, registry holds at most {max}")]
    TooManyGauges { pool: String, count: usize, max: usize },

    #[error("Pool {0} has no coins")]
    NoCoins(String),
}

/// Errors raised while encoding registration arguments
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("Unknown wrapped contract type: {0}")]
    UnknownWrappedContract(String),

    #[error("Cannot pack {0} values, registry supports at most {1} coins")]
    TooManyCoins(usize, usize),
}

/// Chain-related errors
#[derive(Error, Debug, Clone)]
pub enum ChainError {
    #[error("RPC error: {0}")]
    Rpc(String),

    #[error("Transaction {0} reverted")]
    Reverted(String),

    #[error("Transaction failed: {0}")]
    Transaction(String),

    #[error("Call to {contract} reverted: {reason}")]
    CallReverted { contract: Address, reason: String },
}

/// Metadata source errors
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Pool data request failed: {0}")]
    Request(String),

    #[error("Pool data for {pool} is malformed: {reason}")]
    Malformed { pool: String, reason: String },

    #[error("Failed to read pool data file: {0}")]
    Io(#[from] std::io::Error),
}

/// General application error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Source(#[from] SourceError),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Request(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed {
            pool: "<file>".to_string(),
            reason: err.to_string(),
        }
    }
}
