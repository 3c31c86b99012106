//! EVM chain access through alloy

pub mod contracts;
pub mod gas_oracle;
pub mod gauge_controller;
pub mod probe;
pub mod registry_client;

pub use gas_oracle::NodeGasOracle;
pub use gauge_controller::GaugeControllerClient;
pub use probe::BytecodeProbe;
pub use registry_client::RegistryClient;

use std::str::FromStr;

use alloy::network::EthereumWallet;
use alloy::primitives::{Address, U256};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use tracing::{info, warn};

use crate::shared::errors::{AppError, ChainError};

/// Connected provider and the account transactions are sent from
#[derive(Clone)]
pub struct ChainConnection {
    pub provider: DynProvider,
    pub deployer: Address,
}

impl ChainConnection {
    /// Connect to `rpc_url`.
    ///
    /// With a signer, transactions are signed locally and the deployer is the
    /// signer's address. Without one, the node must manage `deployer` (an
    /// unlocked or impersonated account).
    pub fn connect(
        rpc_url: &str,
        deployer: Address,
        signer: Option<PrivateKeySigner>,
    ) -> Result<Self, ChainError> {
        let url = rpc_url
            .parse()
            .map_err(|e| ChainError::Rpc(format!("invalid RPC url {}: {}", rpc_url, e)))?;

        match signer {
            Some(signer) => {
                let address = signer.address();
                if address != deployer {
                    warn!(
                        "Deployer {} overridden by signing key address {}",
                        deployer, address
                    );
                }
                let provider = ProviderBuilder::new()
                    .wallet(EthereumWallet::from(signer))
                    .connect_http(url)
                    .erased();
                info!("Signing locally as {}", address);
                Ok(Self {
                    provider,
                    deployer: address,
                })
            }
            None => {
                let provider = ProviderBuilder::new().connect_http(url).erased();
                info!("Sending as node-managed account {}", deployer);
                Ok(Self { provider, deployer })
            }
        }
    }

    pub async fn deployer_balance(&self) -> Result<U256, ChainError> {
        self.provider
            .get_balance(self.deployer)
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))
    }
}

/// Read a hex private key from `env_var`, if set
pub fn signer_from_env(env_var: &str) -> Result<Option<PrivateKeySigner>, AppError> {
    match std::env::var(env_var) {
        Ok(key) if !key.trim().is_empty() => PrivateKeySigner::from_str(key.trim())
            .map(Some)
            .map_err(|e| AppError::ConfigError(format!("invalid private key in {}: {}", env_var, e))),
        _ => Ok(None),
    }
}
