use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider};
use alloy::sol_types::SolCall;
use async_trait::async_trait;
use tracing::debug;

use super::contracts::{exchange_underlyingCall, initial_ACall};
use crate::domain::pool::SwapCapabilities;
use crate::domain::CapabilityProbe;
use crate::shared::errors::ChainError;

const PUSH4: u8 = 0x63;

/// True when the dispatcher in `code` compares against `selector`
pub fn exposes_selector(code: &[u8], selector: [u8; 4]) -> bool {
    code.windows(5)
        .any(|window| window[0] == PUSH4 && window[1..] == selector)
}

pub fn capabilities_from_code(code: &[u8]) -> SwapCapabilities {
    SwapCapabilities {
        exchange_underlying: exposes_selector(code, exchange_underlyingCall::SELECTOR),
        initial_a: exposes_selector(code, initial_ACall::SELECTOR),
    }
}

/// Reads swap capabilities from deployed bytecode
pub struct BytecodeProbe {
    provider: DynProvider,
}

impl BytecodeProbe {
    pub fn new(provider: DynProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl CapabilityProbe for BytecodeProbe {
    async fn capabilities(&self, swap: Address) -> Result<SwapCapabilities, ChainError> {
        let code = self
            .provider
            .get_code_at(swap)
            .await
            .map_err(|e| ChainError::Rpc(e.to_string()))?;

        if code.is_empty() {
            return Err(ChainError::Rpc(format!("no contract deployed at {}", swap)));
        }

        let capabilities = capabilities_from_code(&code);
        debug!("Probed {} ({} bytes): {:?}", swap, code.len(), capabilities);
        Ok(capabilities)
    }
}
